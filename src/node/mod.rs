mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use super::ReferenceCounter;

pub use self::iter::Iter;

pub type Shared<T> = ReferenceCounter<Node<T>>;

pub type Link<T> = Option<Shared<T>>;

/// A tree node.
///
/// Once a node is reachable from a published version it is never mutated again. Mutations copy
/// the node and relink the copy before it is published.
#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    item: T,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node { left: None, right: None, item: item }
    }

    pub fn item(&self) -> &T { &self.item }
}

/// The result of a path-copying insertion.
///
/// `Ok` holds the new root and the new node; `Err` holds the node that already contains the
/// item, in which case nothing was copied.
pub type Insertion<T> = Result<(Shared<T>, Shared<T>), Shared<T>>;

pub fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a Shared<T>>
    where C: Compare<Q, T> {

    while let Some(node) = link {
        match cmp.compare(key, &node.item) {
            Equal => return Some(node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// A node on a search path, with the `relink` of the direction the search took from it.
type Step<'a, T> = (&'a Node<T>, fn(&Node<T>, Link<T>) -> Shared<T>);

// Walks down from `link` towards `key`, returning the nodes passed on the way and the node equal
// to `key`, if any.
fn search<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q)
    -> (Vec<Step<'a, T>>, Option<&'a Shared<T>>) where T: Clone, C: Compare<Q, T> {

    let mut path = vec![];

    while let Some(node) = link {
        let relink: fn(&Node<T>, Link<T>) -> Shared<T> = match cmp.compare(key, &node.item) {
            Equal => return (path, Some(node)),
            Less => { link = &node.left; Left::relink }
            Greater => { link = &node.right; Right::relink }
        };

        path.push((&**node, relink));
    }

    (path, None)
}

// Copies every node on `path` bottom-up, hanging `link` off the last one.
fn rebuild<T>(path: Vec<Step<T>>, link: Link<T>) -> Link<T> {
    path.into_iter().rev().fold(link, |child, (node, relink)| Some(relink(node, child)))
}

pub fn insert<T, C>(link: &Link<T>, cmp: &C, item: T) -> Insertion<T>
    where T: Clone, C: Compare<T> {

    let (path, found) = search(link, cmp, &item);
    if let Some(node) = found { return Err(node.clone()); }

    let leaf = ReferenceCounter::new(Node::new(item));
    let root = path.into_iter().rev()
        .fold(leaf.clone(), |child, (node, relink)| relink(node, Some(child)));

    Ok((root, leaf))
}

/// Removes the item equal to `key`, returning the new root, or `None` if there is no such item.
pub fn remove<T, C, Q: ?Sized>(link: &Link<T>, cmp: &C, key: &Q) -> Option<Link<T>>
    where T: Clone, C: Compare<Q, T> {

    let (path, found) = search(link, cmp, key);
    Some(rebuild(path, splice(found?)))
}

// The replacement for a removed node: its left subtree with its right subtree hung off the left
// subtree's rightmost node, or just its right subtree.
fn splice<T>(node: &Node<T>) -> Link<T> where T: Clone {
    let mut spine: Vec<Step<T>> = vec![];
    let mut link = &node.left;

    while let Some(left) = link {
        spine.push((&**left, Right::relink));
        link = &left.right;
    }

    rebuild(spine, node.right.clone())
}

/// Drops a version without recursing once per level.
///
/// Nodes still shared with another version or cursor are only released, not taken apart.
pub fn release<T>(link: Link<T>) {
    let mut stack: Vec<Shared<T>> = link.into_iter().collect();

    while let Some(node) = stack.pop() {
        if let Ok(mut node) = ReferenceCounter::try_unwrap(node) {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward<T>(node: &Node<T>) -> &Link<T>;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    fn extremum<T>(mut link: &Link<T>) -> Option<&Shared<T>> {
        let mut extremum = None;

        while let Some(node) = link {
            extremum = Some(node);
            link = Self::forward(node);
        }

        extremum
    }

    /// Returns the node closest to `key` in this direction, or `key`'s own node if `inclusive`
    /// is `true` and it is present.
    ///
    /// The search descends from `link` remembering the last ancestor it turned away from, so it
    /// needs no parent links. `key` need not be present.
    fn closest<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q, inclusive: bool)
        -> Option<&'a Shared<T>> where C: Compare<Q, T> {

        let mut closest = None;

        while let Some(node) = link {
            match cmp.compare(key, &node.item) {
                Equal => return
                    if inclusive {
                        Some(node)
                    } else {
                        Self::Opposite::extremum(Self::forward(node)).or(closest)
                    },
                order => link =
                    if Self::left() == (order == Less) {
                        Self::forward(node)
                    } else {
                        closest = Some(node);
                        Self::Opposite::forward(node)
                    },
            }
        }

        closest
    }

    /// Returns the in-order neighbor of `node` in this direction within the version rooted at
    /// `root`.
    fn neighbor<'a, T, C>(root: &'a Link<T>, cmp: &C, node: &'a Node<T>) -> Option<&'a Shared<T>>
        where C: Compare<T> {

        match *Self::forward(node) {
            Some(_) => Self::Opposite::extremum(Self::forward(node)),
            None => Self::closest(root, cmp, &node.item, false),
        }
    }

    /// Copies `node`, replacing the copy's child in this direction.
    fn relink<T>(node: &Node<T>, child: Link<T>) -> Shared<T> where T: Clone {
        let mut copy = node.clone();
        *Self::forward_mut(&mut copy) = child;
        ReferenceCounter::new(copy)
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}
