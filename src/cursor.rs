use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use super::error::Error;
use super::node::{self, Dir, Left, Link, Right};
use super::ReferenceCounter;

/// A position in one version of a [`Set`](struct.Set.html).
///
/// A cursor owns a reference to the root of the version it was obtained from, so it stays valid
/// and keeps observing that version's items after the set is mutated, cloned, or dropped.
/// Stepping to a neighbor that is not in the current node's subtree searches down from that
/// root.
///
/// A cursor either points at an item or is the end position, which follows the last item.
/// Cursors compare equal when they point at the same node; all end positions are equal.
///
/// # Examples
///
/// ```
/// let mut set = persistent_tree::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// let mut c = set.find(&2);
/// assert_eq!(c.get(), Some(&2));
///
/// set.insert(4);
/// c.move_next();
/// assert_eq!(c.get(), Some(&3));
///
/// // `c` still belongs to the version without 4
/// c.move_next();
/// assert!(c.is_end());
/// assert!(set.find(&3).succ().get() == Some(&4));
/// ```
pub struct Cursor<T, C = Natural<T>> {
    node: Link<T>,
    root: Link<T>,
    cmp: C,
}

impl<T, C> Cursor<T, C> {
    pub(crate) fn new(node: Link<T>, root: Link<T>, cmp: C) -> Self {
        Cursor { node: node, root: root, cmp: cmp }
    }

    /// Returns a reference to the item at this position, or `None` at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    ///
    /// assert_eq!(set.begin().get(), Some(&1));
    /// assert_eq!(set.end().get(), None);
    /// ```
    pub fn get(&self) -> Option<&T> { self.node.as_ref().map(|node| node.item()) }

    /// Returns a reference to the item at this position.
    ///
    /// # Panics
    ///
    /// Panics if this is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// let (c, _) = set.insert(1);
    /// assert_eq!(*c.item(), 1);
    /// ```
    pub fn item(&self) -> &T {
        match self.get() {
            Some(item) => item,
            None => panic!("{}", Error::DerefEnd),
        }
    }

    /// Checks if this is the end position.
    pub fn is_end(&self) -> bool { self.node.is_none() }
}

impl<T, C> Cursor<T, C> where C: Compare<T> {
    /// Moves to the next item in ascending order, or to the end position after the last item.
    ///
    /// Returns an error, leaving the cursor unchanged, if this is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_tree::Error;
    ///
    /// let mut set = persistent_tree::Set::new();
    /// let (mut c, _) = set.insert(1);
    ///
    /// assert!(c.try_move_next().unwrap().is_end());
    /// assert_eq!(c.try_move_next().err(), Some(Error::PastEnd));
    /// ```
    pub fn try_move_next(&mut self) -> Result<&mut Self, Error> {
        let next = match self.node {
            None => return Err(Error::PastEnd),
            Some(ref node) => Right::neighbor(&self.root, &self.cmp, node).cloned(),
        };

        self.node = next;
        Ok(self)
    }

    /// Moves to the previous item in ascending order. From the end position this is the last
    /// item.
    ///
    /// Returns an error, leaving the cursor unchanged, if there is no previous item.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_tree::Error;
    ///
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    ///
    /// let mut c = set.end();
    /// assert_eq!(c.try_move_prev().unwrap().get(), Some(&1));
    /// assert_eq!(c.try_move_prev().err(), Some(Error::BeforeBegin));
    /// assert_eq!(c.get(), Some(&1));
    /// ```
    pub fn try_move_prev(&mut self) -> Result<&mut Self, Error> {
        let prev = match self.node {
            None => Right::extremum(&self.root),
            Some(ref node) => Left::neighbor(&self.root, &self.cmp, node),
        }.cloned();

        match prev {
            None => Err(Error::BeforeBegin),
            Some(prev) => {
                self.node = Some(prev);
                Ok(self)
            }
        }
    }

    /// Moves to the next item in ascending order, or to the end position after the last item.
    ///
    /// # Panics
    ///
    /// Panics if this is the end position.
    pub fn move_next(&mut self) -> &mut Self {
        match self.try_move_next() {
            Ok(cursor) => cursor,
            Err(err) => panic!("{}", err),
        }
    }

    /// Moves to the previous item in ascending order. From the end position this is the last
    /// item.
    ///
    /// # Panics
    ///
    /// Panics if this is the first position, including the end position of an empty set.
    pub fn move_prev(&mut self) -> &mut Self {
        match self.try_move_prev() {
            Ok(cursor) => cursor,
            Err(err) => panic!("{}", err),
        }
    }

    /// Moves to the next position and returns a cursor at the position this one had before.
    ///
    /// # Panics
    ///
    /// Panics if this is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut c = set.begin();
    /// let old = c.post_next();
    /// assert_eq!(old.get(), Some(&1));
    /// assert_eq!(c.get(), Some(&2));
    /// ```
    pub fn post_next(&mut self) -> Self where C: Clone {
        let old = self.clone();
        self.move_next();
        old
    }

    /// Moves to the previous position and returns a cursor at the position this one had before.
    ///
    /// # Panics
    ///
    /// Panics if this is the first position, including the end position of an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    ///
    /// let mut c = set.end();
    /// assert!(c.post_prev().is_end());
    /// assert_eq!(c.get(), Some(&1));
    /// ```
    pub fn post_prev(&mut self) -> Self where C: Clone {
        let old = self.clone();
        self.move_prev();
        old
    }

    /// Returns a cursor at the next position, leaving this one where it is.
    ///
    /// # Panics
    ///
    /// Panics if this is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let c = set.begin();
    /// assert_eq!(c.succ().get(), Some(&2));
    /// assert_eq!(c.get(), Some(&1));
    /// ```
    pub fn succ(&self) -> Self where C: Clone {
        let mut cursor = self.clone();
        cursor.move_next();
        cursor
    }

    /// Returns a cursor at the previous position, leaving this one where it is.
    ///
    /// # Panics
    ///
    /// Panics if this is the first position, including the end position of an empty set.
    pub fn pred(&self) -> Self where C: Clone {
        let mut cursor = self.clone();
        cursor.move_prev();
        cursor
    }
}

impl<T, C> Clone for Cursor<T, C> where C: Clone {
    fn clone(&self) -> Self {
        Cursor { node: self.node.clone(), root: self.root.clone(), cmp: self.cmp.clone() }
    }
}

impl<T, C> Drop for Cursor<T, C> {
    fn drop(&mut self) {
        node::release(self.node.take());
        node::release(self.root.take());
    }
}

impl<T, C> Debug for Cursor<T, C> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(item) => write!(f, "Cursor({:?})", item),
            None => write!(f, "Cursor(end)"),
        }
    }
}

impl<T, C> PartialEq for Cursor<T, C> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (&Some(ref l), &Some(ref r)) => ReferenceCounter::ptr_eq(l, r),
            (&None, &None) => true,
            _ => false,
        }
    }
}

impl<T, C> Eq for Cursor<T, C> {}
