/// A violated precondition of a set or cursor operation.
///
/// The panicking operations (`Set::erase`, `Cursor::item`, `Cursor::move_next`,
/// `Cursor::move_prev`) report these through their panic message; the `try_` variants return
/// them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The end position was passed to `erase`.
    #[error("cannot erase the end position of a set")]
    EraseEnd,
    /// The cursor passed to `erase` points at an item the set does not contain.
    #[error("cannot erase an item that is not a member of the set")]
    NotMember,
    /// The end position was dereferenced.
    #[error("cannot dereference the end position of a set")]
    DerefEnd,
    /// A cursor at the end position was advanced.
    #[error("cannot move past the end of a set")]
    PastEnd,
    /// A cursor at the first position was moved backwards.
    #[error("cannot move before the first item of a set")]
    BeforeBegin,
}
