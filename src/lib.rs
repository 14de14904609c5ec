//! A persistent ordered set based on a binary search tree.
//!
//! Every mutation of a [`Set`](struct.Set.html) publishes a new version of the tree by copying
//! only the nodes on the path from the root to the change; everything else is shared with the
//! previous version. Cloning a set is therefore O(1), and a [`Cursor`](struct.Cursor.html)
//! obtained from one version keeps observing that version no matter what happens to the set it
//! came from.
//!
//! ```
//! let mut s = persistent_tree::Set::new();
//!
//! for item in [5, 3, 8, 1] { s.insert(item); }
//!
//! let t = s.clone();
//! let c = s.find(&3);
//! s.erase(c);
//!
//! assert!(!s.contains(&3));
//! assert!(t.contains(&3));
//! assert_eq!(t.iter().collect::<Vec<_>>(), [&1, &3, &5, &8]);
//! ```
//!
//! The tree is not rebalanced. Operations cost O(depth), which is O(log n) for random insertion
//! orders and O(n) for sorted ones.

#![deny(missing_docs)]

mod cursor;
mod error;
mod node;
#[cfg(feature = "quickcheck")]
mod quickcheck;
pub mod set;

pub use cursor::Cursor;
pub use error::Error;
pub use set::Set;

/// Shared ownership of tree nodes.
///
/// This is `std::rc::Rc` by default and `std::sync::Arc` with the `arc` feature.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;
