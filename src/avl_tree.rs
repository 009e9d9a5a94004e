// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A generic self-balancing binary search tree keyed by a caller-supplied
//! comparator. This is the sweep status structure: it keeps the currently
//! active segments ordered and answers predecessor/successor queries.
//!
//! Nodes own their children through `Box` links and hold no parent
//! pointers; in-order neighbors are located by re-descending from the
//! root, which costs O(height) per query.

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    /// Height of the subtree rooted here; a leaf has height 1.
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Node<T> {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`. The AVL invariant keeps this in
    /// `{-1, 0, 1}` between operations.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Right rotation around `node`; the left child becomes the local root.
fn rotate_right<T>(node: &mut Box<Node<T>>) {
    let mut left = node
        .left
        .take()
        .expect("right rotation requires a left child");
    node.left = left.right.take();
    node.update_height();
    std::mem::swap(node, &mut left);
    node.right = Some(left);
    node.update_height();
}

/// Left rotation around `node`; the right child becomes the local root.
fn rotate_left<T>(node: &mut Box<Node<T>>) {
    let mut right = node
        .right
        .take()
        .expect("left rotation requires a right child");
    node.right = right.left.take();
    node.update_height();
    std::mem::swap(node, &mut right);
    node.left = Some(right);
    node.update_height();
}

/// Restore the AVL invariant at `node` after an insertion or removal in
/// one of its subtrees.
///
/// The four rotation cases (left-left, right-right, left-right,
/// right-left) are selected from the node's balance factor and the
/// balance factor of its heavier child.
fn rebalance<T>(node: &mut Box<Node<T>>) {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        let left = node
            .left
            .as_mut()
            .expect("positive balance factor implies a left child");
        if left.balance_factor() < 0 {
            // Left-right case: reduce to left-left first.
            rotate_left(left);
        }
        rotate_right(node);
    } else if balance < -1 {
        let right = node
            .right
            .as_mut()
            .expect("negative balance factor implies a right child");
        if right.balance_factor() > 0 {
            // Right-left case: reduce to right-right first.
            rotate_right(right);
        }
        rotate_left(node);
    }
}

fn insert_link<T, C>(link: &mut Link<T>, value: T, compare: &C) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(node) => {
            let inserted = match compare(&value, &node.value) {
                Ordering::Less => insert_link(&mut node.left, value, compare),
                Ordering::Greater => insert_link(&mut node.right, value, compare),
                // Duplicates are rejected, not merged.
                Ordering::Equal => false,
            };
            if inserted {
                rebalance(node);
            }
            inserted
        }
    }
}

fn remove_link<T, C>(link: &mut Link<T>, value: &T, compare: &C) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    let ordering = match link.as_ref() {
        None => return false,
        Some(node) => compare(value, &node.value),
    };

    let removed = match ordering {
        Ordering::Less => {
            let node = link.as_mut().expect("link checked to be non-empty");
            remove_link(&mut node.left, value, compare)
        }
        Ordering::Greater => {
            let node = link.as_mut().expect("link checked to be non-empty");
            remove_link(&mut node.right, value, compare)
        }
        Ordering::Equal => {
            detach(link);
            true
        }
    };

    if removed {
        if let Some(node) = link.as_mut() {
            rebalance(node);
        }
    }
    removed
}

/// Remove the node at `link`.
///
/// A leaf is detached directly. An inner node has its value replaced by
/// the in-order predecessor (when a left subtree exists) or the in-order
/// successor (when only a right subtree exists); the replacement is then
/// unlinked from its original position, rebalancing that path. The caller
/// rebalances `link` itself.
fn detach<T>(link: &mut Link<T>) {
    {
        let node = link.as_mut().expect("detach on an empty link");
        if node.left.is_some() {
            let predecessor = take_rightmost(&mut node.left);
            node.value = predecessor;
            return;
        }
        if node.right.is_some() {
            let successor = take_leftmost(&mut node.right);
            node.value = successor;
            return;
        }
    }
    *link = None;
}

/// Unlink and return the largest value of a non-empty subtree, rebalancing
/// the descent path.
fn take_rightmost<T>(link: &mut Link<T>) -> T {
    let has_right = link
        .as_ref()
        .map_or(false, |node| node.right.is_some());
    if has_right {
        let node = link.as_mut().expect("link checked to be non-empty");
        let value = take_rightmost(&mut node.right);
        rebalance(node);
        value
    } else {
        let node = link.take().expect("take_rightmost on an empty subtree");
        *link = node.left;
        node.value
    }
}

/// Unlink and return the smallest value of a non-empty subtree, rebalancing
/// the descent path.
fn take_leftmost<T>(link: &mut Link<T>) -> T {
    let has_left = link.as_ref().map_or(false, |node| node.left.is_some());
    if has_left {
        let node = link.as_mut().expect("link checked to be non-empty");
        let value = take_leftmost(&mut node.left);
        rebalance(node);
        value
    } else {
        let node = link.take().expect("take_leftmost on an empty subtree");
        *link = node.right;
        node.value
    }
}

/// An AVL tree holding values ordered by the comparator `C`.
///
/// Values that compare `Equal` are treated as duplicates and rejected on
/// insertion. All navigation queries on an empty tree return `None`
/// rather than signaling an error.
pub struct AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Link<T>,
    size: usize,
    compare: C,
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty tree ordered by `compare`.
    pub fn new(compare: C) -> AvlTree<T, C> {
        AvlTree {
            root: None,
            size: 0,
            compare,
        }
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Is the tree empty?
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Insert `value`. Returns `false` and leaves the tree unchanged if a
    /// comparator-equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert_link(&mut self.root, value, &self.compare);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Remove the value comparing equal to `value`. Returns `false` if no
    /// such value is present.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = remove_link(&mut self.root, value, &self.compare);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// The stored value comparing equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match (self.compare)(value, &node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Is a value comparing equal to `value` present?
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The in-order successor of `value`: the smallest stored value that
    /// compares strictly greater. `value` itself need not be present.
    ///
    /// Located by re-descending from the root, O(height).
    pub fn next(&self, value: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if (self.compare)(&node.value, value) == Ordering::Greater {
                candidate = Some(&node.value);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }
        candidate
    }

    /// The in-order predecessor of `value`: the largest stored value that
    /// compares strictly less. `value` itself need not be present.
    ///
    /// Located by re-descending from the root, O(height).
    pub fn prev(&self, value: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if (self.compare)(&node.value, value) == Ordering::Less {
                candidate = Some(&node.value);
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }
        candidate
    }

    /// The smallest stored value that is greater than or equal to `key`.
    pub fn greater_or_equal(&self, key: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match (self.compare)(&node.value, key) {
                Ordering::Less => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => {
                    candidate = Some(&node.value);
                    current = node.left.as_deref();
                }
            }
        }
        candidate
    }

    /// The largest stored value that is less than or equal to `key`.
    pub fn less_or_equal(&self, key: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match (self.compare)(&node.value, key) {
                Ordering::Less => {
                    candidate = Some(&node.value);
                    current = node.right.as_deref();
                }
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.left.as_deref(),
            }
        }
        candidate
    }

    /// The smallest stored value.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// The largest stored value.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// In-order iterator over the stored values.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::new();
        push_left_spine(&self.root, &mut stack);
        Iter { stack }
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        push_left_spine(&node.right, &mut self.stack);
        Some(&node.value)
    }
}

fn push_left_spine<'a, T>(mut link: &'a Link<T>, stack: &mut Vec<&'a Node<T>>) {
    while let Some(node) = link {
        stack.push(node);
        link = &node.left;
    }
}
