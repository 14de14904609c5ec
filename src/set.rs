//! A persistent ordered set based on a binary search tree.

use compare::{Compare, Natural};
use log::{debug, trace};
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::mem;
use std::ops::Bound;
use super::cursor::Cursor;
use super::error::Error;
use super::node::{self, Dir, Left, Link, Node, Right, Shared};
use super::ReferenceCounter;

/// A persistent ordered set based on a binary search tree.
///
/// Cloning a set is O(1): the clone shares every node with the original. A mutation copies the
/// nodes on the path from the root to the change and leaves all other nodes shared, so neither
/// the original nor any [`Cursor`](struct.Cursor.html) obtained before the mutation observes it.
///
/// The tree is not rebalanced; operations take time proportional to the depth of the tree.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item changes
/// while the item is in the set. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
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
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = persistent_tree::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { root: None, len: 0, cmp: cmp } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set: persistent_tree::Set<i32> = persistent_tree::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: persistent_tree::Set<i32, _> = persistent_tree::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Checks if both sets hold the same version of the tree.
    ///
    /// A set and its clones hold the same version until one of them is mutated. All empty sets
    /// hold the same version.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    ///
    /// let mut copy = set.clone();
    /// assert!(copy.ptr_eq(&set));
    ///
    /// copy.insert(1);
    /// assert!(copy.ptr_eq(&set));
    ///
    /// copy.insert(2);
    /// assert!(!copy.ptr_eq(&set));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (&Some(ref l), &Some(ref r)) => ReferenceCounter::ptr_eq(l, r),
            (&None, &None) => true,
            _ => false,
        }
    }

    /// Removes all items from the set.
    ///
    /// Cursors and clones obtained before the call are unaffected.
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
    /// let c = set.begin();
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// assert_eq!(c.get(), Some(&1));
    /// ```
    pub fn clear(&mut self) {
        node::release(self.root.take());
        self.len = 0;
    }

    /// Returns a cursor at the given item, or the end position if the set does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    ///
    /// set.insert(5);
    /// set.insert(3);
    /// set.insert(8);
    ///
    /// assert_eq!(set.find(&3).get(), Some(&3));
    /// assert_eq!(set.find(&3).succ().get(), Some(&5));
    /// assert!(set.find(&4) == set.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor<T, C> where C: Compare<Q, T> + Clone {
        self.cursor(node::get(&self.root, &self.cmp, item).cloned())
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item).is_some()
    }

    /// Inserts an item into the set.
    ///
    /// Returns a cursor at the item and `true` if the set did not already contain it. If it did,
    /// the set is left unchanged and the cursor points at the item already present.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    ///
    /// let (c, inserted) = set.insert(1);
    /// assert!(inserted);
    /// assert_eq!(c.get(), Some(&1));
    ///
    /// let (d, inserted) = set.insert(1);
    /// assert!(!inserted);
    /// assert!(c == d);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Cursor<T, C>, bool) where T: Clone, C: Clone {
        match node::insert(&self.root, &self.cmp, item) {
            Ok((root, node)) => {
                node::release(self.root.replace(root));
                self.len += 1;
                trace!("insert published a version of length {}", self.len);
                (self.cursor(Some(node)), true)
            }
            Err(node) => (self.cursor(Some(node)), false),
        }
    }

    /// Removes the item at the given cursor from the set.
    ///
    /// The cursor may come from any version of the set, but its item must be contained in the
    /// current one. Other cursors and clones are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the end position or its item is not in the set. See
    /// [`try_erase`](#method.try_erase) for a non-panicking version.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut s = persistent_tree::Set::new();
    ///
    /// s.insert(5);
    /// s.insert(3);
    /// s.insert(8);
    /// s.insert(1);
    ///
    /// let mut t = s.clone();
    /// let c = t.find(&3);
    /// t.erase(c);
    ///
    /// assert!(t.find(&3) == t.end());
    /// assert_eq!(s.find(&3).get(), Some(&3));
    /// ```
    pub fn erase(&mut self, cursor: Cursor<T, C>) where T: Clone {
        if let Err(err) = self.try_erase(cursor) {
            panic!("{}", err);
        }
    }

    /// Removes the item at the given cursor from the set, or returns an error without modifying
    /// the set if `cursor` is the end position or its item is not in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_tree::Error;
    ///
    /// let mut set = persistent_tree::Set::new();
    /// set.insert(1);
    ///
    /// let c = set.find(&1);
    /// assert_eq!(set.try_erase(c.clone()), Ok(()));
    /// assert_eq!(set.try_erase(c), Err(Error::NotMember));
    ///
    /// let end = set.end();
    /// assert_eq!(set.try_erase(end), Err(Error::EraseEnd));
    /// ```
    pub fn try_erase(&mut self, cursor: Cursor<T, C>) -> Result<(), Error> where T: Clone {
        let result = match cursor.get() {
            None => Err(Error::EraseEnd),
            Some(item) => if self.remove(item) { Ok(()) } else { Err(Error::NotMember) },
        };

        if let Err(ref err) = result { debug!("rejected erase: {}", err); }
        result
    }

    /// Removes the given item from the set, returning `true` if the set contained the item.
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
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&1));
    /// assert!(set.remove(&1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where T: Clone, C: Compare<Q, T> {
        match node::remove(&self.root, &self.cmp, item) {
            None => false,
            Some(root) => {
                node::release(mem::replace(&mut self.root, root));
                self.len -= 1;
                trace!("remove published a version of length {}", self.len);
                true
            }
        }
    }

    /// Returns a cursor at the set's minimum item, or the end position if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert!(set.begin() == set.end());
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert_eq!(set.begin().get(), Some(&1));
    /// ```
    pub fn begin(&self) -> Cursor<T, C> where C: Clone {
        self.cursor(Left::extremum(&self.root).cloned())
    }

    /// Returns the end position, which follows the set's maximum item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut c = set.end();
    /// assert_eq!(c.get(), None);
    /// assert_eq!(c.move_prev().get(), Some(&2));
    /// ```
    pub fn end(&self) -> Cursor<T, C> where C: Clone { self.cursor(None) }

    /// Returns a cursor at the smallest item that is greater than or equal to the given item, or
    /// the end position if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    ///
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.lower_bound(&1).get(), Some(&1));
    /// assert_eq!(set.lower_bound(&2).get(), Some(&3));
    /// assert!(set.lower_bound(&4).is_end());
    /// ```
    pub fn lower_bound<Q: ?Sized>(&self, item: &Q) -> Cursor<T, C>
        where C: Compare<Q, T> + Clone {

        self.cursor(Right::closest(&self.root, &self.cmp, item, true).cloned())
    }

    /// Returns a cursor at the smallest item that is strictly greater than the given item, or the
    /// end position if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    ///
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.upper_bound(&0).get(), Some(&1));
    /// assert_eq!(set.upper_bound(&1).get(), Some(&3));
    /// assert!(set.upper_bound(&3).is_end());
    /// ```
    pub fn upper_bound<Q: ?Sized>(&self, item: &Q) -> Cursor<T, C>
        where C: Compare<Q, T> + Clone {

        self.cursor(Right::closest(&self.root, &self.cmp, item, false).cloned())
    }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert_eq!(set.last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> { Right::extremum(&self.root).map(|node| node.item()) }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = persistent_tree::Set::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { Left::extremum(&self.root).map(|node| node.item()) }

    /// Returns a reference to the predecessor of the given item, or
    /// `None` if no such item is present in the set.
    ///
    /// If `inclusive` is `false`, this method finds the greatest item that is strictly less than
    /// the given item. If `inclusive` is `true`, this method finds the greatest item that is less
    /// than or equal to the given item.
    ///
    /// The given item need not itself be present in the set.
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
    /// assert_eq!(set.pred(&0, false), None);
    /// assert_eq!(set.pred(&1, false), None);
    /// assert_eq!(set.pred(&2, false), Some(&1));
    /// assert_eq!(set.pred(&3, false), Some(&2));
    /// assert_eq!(set.pred(&4, false), Some(&3));
    ///
    /// assert_eq!(set.pred(&0, true), None);
    /// assert_eq!(set.pred(&1, true), Some(&1));
    /// assert_eq!(set.pred(&2, true), Some(&2));
    /// assert_eq!(set.pred(&3, true), Some(&3));
    /// assert_eq!(set.pred(&4, true), Some(&3));
    /// ```
    pub fn pred<Q: ?Sized>(&self, item: &Q, inclusive: bool) -> Option<&T> where C: Compare<Q, T> {
        Left::closest(&self.root, &self.cmp, item, inclusive).map(|node| node.item())
    }

    /// Returns a reference to the successor of the given item, or
    /// `None` if no such item is present in the set.
    ///
    /// If `inclusive` is `false`, this method finds the smallest item that is strictly greater
    /// than the given item. If `inclusive` is `true`, this method finds the smallest item that is
    /// greater than or equal to the given item.
    ///
    /// The given item need not itself be present in the set.
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
    /// assert_eq!(set.succ(&0, false), Some(&1));
    /// assert_eq!(set.succ(&1, false), Some(&2));
    /// assert_eq!(set.succ(&2, false), Some(&3));
    /// assert_eq!(set.succ(&3, false), None);
    /// assert_eq!(set.succ(&4, false), None);
    ///
    /// assert_eq!(set.succ(&0, true), Some(&1));
    /// assert_eq!(set.succ(&1, true), Some(&1));
    /// assert_eq!(set.succ(&2, true), Some(&2));
    /// assert_eq!(set.succ(&3, true), Some(&3));
    /// assert_eq!(set.succ(&4, true), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, item: &Q, inclusive: bool) -> Option<&T> where C: Compare<Q, T> {
        Right::closest(&self.root, &self.cmp, item, inclusive).map(|node| node.item())
    }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
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
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(node::Iter::new(self.root.as_deref(), self.len)) }

    /// Returns an iterator over the set's items that lie in the given range.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Included, Excluded, Unbounded};
    ///
    /// let mut set = persistent_tree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.range(Unbounded, Unbounded).collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(set.range(Excluded(&1), Included(&5)).collect::<Vec<_>>(), [&2, &3]);
    /// assert_eq!(set.range(Included(&1), Excluded(&2)).collect::<Vec<_>>(), [&1]);
    /// ```
    pub fn range<Min: ?Sized, Max: ?Sized>(&self, min: Bound<&Min>, max: Bound<&Max>) -> Range<T>
        where C: Compare<Min, T> + Compare<Max, T> {

        Range(node::Iter::range(self.root.as_deref(), self.len, &self.cmp, min, max))
    }

    fn cursor(&self, node: Link<T>) -> Cursor<T, C> where C: Clone {
        Cursor::new(node, self.root.clone(), self.cmp.clone())
    }
}

impl<T, C> Clone for Set<T, C> where C: Compare<T> + Clone {
    fn clone(&self) -> Self {
        Set { root: self.root.clone(), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<T, C> Drop for Set<T, C> where C: Compare<T> {
    fn drop(&mut self) { node::release(self.root.take()); }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it { write!(f, ", {:?}", item)?; }
        }

        write!(f, "}}")
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for Set<T, C> where T: Clone, C: Compare<T> + Clone {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where T: Clone, C: Compare<T> + Clone + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where T: Clone, C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator. Items
    /// no other version shares are moved out; the rest are cloned.
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
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> { IntoIter(node::Iter::new(self.root.take(), self.len)) }
}

impl<T, C> PartialEq for Set<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp.compares_eq(l, r))
    }
}

impl<T, C> Eq for Set<T, C> where C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(Ord::cmp(self, other)) }
}

impl<T, C> Ord for Set<T, C> where C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(l, r) {
                    Equal => {}
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = persistent_tree::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(node::Iter<Shared<T>>);

impl<T> Iterator for IntoIter<T> where T: Clone {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> where T: Clone {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Clone {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.0.drain() { node::release(Some(node)); }
    }
}

/// An iterator over the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = persistent_tree::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a>(node::Iter<&'a Node<T>>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator over the set's items that lie in a given range.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// Acquire through [`Set::range`](struct.Set.html#method.range).
pub struct Range<'a, T: 'a>(node::Iter<&'a Node<T>>);

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Self { Range(self.0.clone()) }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.range_size_hint() }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}
