use compare::Compare;
use std::cmp::Ordering::{self, *};
use std::collections::VecDeque;
use std::ops::Bound;
use super::{Link, Node, Shared};
use crate::ReferenceCounter;

/// A handle to a node that an in-order traversal can take apart.
pub trait NodeRef: Sized {
    type Key;
    type Item;
    fn key(&self) -> &Self::Key;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Key = T;
    type Item = &'a T;
    fn key(&self) -> &T { &self.item }
    fn item(self) -> &'a T { &self.item }
    fn left(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.right.as_deref() }
}

// Owned traversal moves items and children out of nodes no other version shares, and clones
// them out of the rest.
impl<T> NodeRef for Shared<T> where T: Clone {
    type Key = T;
    type Item = T;

    fn key(&self) -> &T { &self.item }

    fn item(self) -> T {
        match ReferenceCounter::try_unwrap(self) {
            Ok(node) => node.item,
            Err(node) => node.item.clone(),
        }
    }

    fn left(&mut self) -> Link<T> {
        match ReferenceCounter::get_mut(self) {
            Some(node) => node.left.take(),
            None => self.left.clone(),
        }
    }

    fn right(&mut self) -> Link<T> {
        match ReferenceCounter::get_mut(self) {
            Some(node) => node.right.take(),
            None => self.right.clone(),
        }
    }
}

/// A node waiting on the traversal stack, with the children already handed out.
#[derive(Clone)]
struct Visit<N> {
    node: N,
    left_taken: bool,
    right_taken: bool,
}

impl<N> Visit<N> where N: NodeRef {
    fn new(node: N) -> Self { Visit { node: node, left_taken: false, right_taken: false } }

    fn left(&mut self) -> Option<N> {
        if self.left_taken { return None; }
        self.left_taken = true;
        self.node.left()
    }

    fn right(&mut self) -> Option<N> {
        if self.right_taken { return None; }
        self.right_taken = true;
        self.node.right()
    }

    fn key(&self) -> &N::Key { self.node.key() }
}

/// One end of the traversal stack.
///
/// The back yields items in ascending order and descends left first; the front yields them in
/// descending order and descends right first.
trait End {
    fn peek<N>(visits: &mut VecDeque<Visit<N>>) -> Option<&mut Visit<N>>;
    fn pop<N>(visits: &mut VecDeque<Visit<N>>) -> Option<Visit<N>>;
    fn push<N>(visits: &mut VecDeque<Visit<N>>, visit: Visit<N>);

    /// The child whose items come before the node's own from this end.
    fn near<N: NodeRef>(visit: &mut Visit<N>) -> Option<N>;

    /// The child whose items come after the node's own from this end.
    fn far<N: NodeRef>(visit: &mut Visit<N>) -> Option<N>;
}

enum Back {}

impl End for Back {
    fn peek<N>(visits: &mut VecDeque<Visit<N>>) -> Option<&mut Visit<N>> { visits.back_mut() }
    fn pop<N>(visits: &mut VecDeque<Visit<N>>) -> Option<Visit<N>> { visits.pop_back() }
    fn push<N>(visits: &mut VecDeque<Visit<N>>, visit: Visit<N>) { visits.push_back(visit) }
    fn near<N: NodeRef>(visit: &mut Visit<N>) -> Option<N> { visit.left() }
    fn far<N: NodeRef>(visit: &mut Visit<N>) -> Option<N> { visit.right() }
}

enum Front {}

impl End for Front {
    fn peek<N>(visits: &mut VecDeque<Visit<N>>) -> Option<&mut Visit<N>> { visits.front_mut() }
    fn pop<N>(visits: &mut VecDeque<Visit<N>>) -> Option<Visit<N>> { visits.pop_front() }
    fn push<N>(visits: &mut VecDeque<Visit<N>>, visit: Visit<N>) { visits.push_front(visit) }
    fn near<N: NodeRef>(visit: &mut Visit<N>) -> Option<N> { visit.right() }
    fn far<N: NodeRef>(visit: &mut Visit<N>) -> Option<N> { visit.left() }
}

/// A double-ended in-order traversal of one version.
///
/// `size` is the exact number of items left for a full traversal and an upper bound for a range.
#[derive(Clone)]
pub struct Iter<N> {
    visits: VecDeque<Visit<N>>,
    size: usize,
}

impl<N> Iter<N> {
    /// Hands out the nodes still on the stack, leaving the traversal empty.
    pub fn drain(&mut self) -> impl Iterator<Item=N> + '_ {
        self.size = 0;
        self.visits.drain(..).map(|visit| visit.node)
    }
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        Iter { visits: root.into_iter().map(Visit::new).collect(), size: size }
    }

    pub fn range<C, Min: ?Sized, Max: ?Sized>(root: Option<N>, size: usize, cmp: &C,
                                              min: Bound<&Min>, max: Bound<&Max>)
        -> Iter<N> where C: Compare<Min, N::Key> + Compare<Max, N::Key> {

        let mut it = Iter::new(root, size);
        it.trim::<Back, _, _>(cmp, min, Greater);
        it.trim::<Front, _, _>(cmp, max, Less);
        it
    }

    pub fn range_size_hint(&self) -> (usize, Option<usize>) {
        (self.visits.len(), Some(self.size))
    }

    // Discards the items on `E`'s side of `bound`. `beyond` is how `bound` compares to an item
    // that must be discarded.
    fn trim<E, C, Q: ?Sized>(&mut self, cmp: &C, bound: Bound<&Q>, beyond: Ordering)
        where E: End, C: Compare<Q, N::Key> {

        let (bound, inclusive) = match bound {
            Bound::Unbounded => return,
            Bound::Included(bound) => (bound, true),
            Bound::Excluded(bound) => (bound, false),
        };

        while let Some(visit) = E::peek(&mut self.visits) {
            let order = cmp.compare(bound, visit.key());

            if order == Equal && inclusive {
                if E::near(visit).is_some() { self.size -= 1; }
                return;
            }

            if order == Equal || order == beyond {
                let far = E::pop(&mut self.visits).and_then(|mut visit| E::far(&mut visit));
                self.size -= 1;
                if let Some(node) = far { E::push(&mut self.visits, Visit::new(node)); }
                if order == Equal { return; }
            } else {
                match E::near(visit) {
                    None => return,
                    Some(node) => E::push(&mut self.visits, Visit::new(node)),
                }
            }
        }
    }

    fn step<E>(&mut self) -> Option<N::Item> where E: End {
        loop {
            let visit = E::peek(&mut self.visits)?;

            match E::near(visit) {
                Some(node) => E::push(&mut self.visits, Visit::new(node)),
                None => {
                    let mut visit = E::pop(&mut self.visits)?;
                    if let Some(node) = E::far(&mut visit) {
                        E::push(&mut self.visits, Visit::new(node));
                    }
                    self.size -= 1;
                    return Some(visit.node.item());
                }
            }
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;
    fn next(&mut self) -> Option<N::Item> { self.step::<Back>() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> DoubleEndedIterator for Iter<N> where N: NodeRef {
    fn next_back(&mut self) -> Option<N::Item> { self.step::<Front>() }
}
