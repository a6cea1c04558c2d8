//! An unbalanced Binary Search Tree that stores each value once. Nodes own
//! their children through [`Box`] so the whole structure is freed exactly
//! once, and a worklist-based [`Drop`] keeps teardown of degenerate trees
//! off the call stack.
//!
//! # Examples
//!
//! ```
//! use bintree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.find(&1).is_some());
//!
//! // Inserting an existing value changes nothing.
//! tree.insert(2);
//!
//! tree.remove(&2);
//! assert!(tree.find(&2).is_none());
//! ```

use std::cmp::Ordering;

/// A child slot: either empty or the exclusive owner of a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree. Values double as their own keys, so the
/// tree behaves like a set: inserting a value that is already present and
/// removing a value that is absent are both silent no-ops.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping a deep chain of boxes recurses once per level, which can
        // blow the stack on a degenerate tree. Detach children onto a
        // worklist so every box is dropped childless.
        let mut worklist = Vec::new();
        worklist.extend(self.root.take());
        while let Some(mut node) = worklist.pop() {
            worklist.extend(node.left.take());
            worklist.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. If the value is already
    /// present, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert!(tree.find(&1).is_some());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return,
            }
        }
        *link = Some(Box::new(Node::new(value)));
    }

    /// Potentially finds the node holding the given value. If no node holds
    /// it, `None` is returned. The returned [`Node`] handle is read-only, so
    /// it can be inspected (or passed to [`draw`][Self::draw] as the
    /// selection) without endangering the search order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|node| node.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.find_with_parent(value).map(|(node, _parent)| node)
    }

    /// Removes the given value from the tree. If the value is absent,
    /// nothing happens.
    ///
    /// A node with two children is not unlinked itself: its value is
    /// replaced with its in-order successor (the leftmost value of its right
    /// subtree) and the successor's old node is spliced out instead, with
    /// the successor's right child - if any - taking its slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [50, 30, 70, 20, 40, 60, 80] {
    ///     tree.insert(value);
    /// }
    ///
    /// // 70 has two children; its successor 80 takes over its slot.
    /// tree.remove(&70);
    ///
    /// assert!(tree.find(&70).is_none());
    /// assert!(tree.find(&60).is_some());
    /// assert!(tree.find(&80).is_some());
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Node::remove_from(root, value);
    }

    /// Same descent as [`find`][Self::find], but also reports the found
    /// node's immediate parent. The root never has a parent.
    fn find_with_parent(&self, value: &T) -> Option<(&Node<T>, Option<&Node<T>>)>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => {
                    parent = Some(node);
                    current = node.left.as_deref();
                }
                Ordering::Greater => {
                    parent = Some(node);
                    current = node.right.as_deref();
                }
                Ordering::Equal => return Some((node, parent)),
            }
        }
        None
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// A single tree node: one value plus exclusive ownership of its left and
/// right subtrees. Handles to nodes are only ever handed out as shared
/// references, so the search order cannot be broken from outside.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, holding every smaller value in its subtree.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, holding every larger value in its subtree.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Removes `value` from the subtree hanging off `link` and returns the
    /// subtree that takes its place.
    fn remove_from(link: Link<T>, value: &T) -> Link<T>
    where
        T: Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => return None,
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_from(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_from(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => Self::splice_out(node),
        }
    }

    /// Unlinks this node, returning whatever takes over its slot. With zero
    /// or one child this is the surviving child (if any). With two children
    /// the node itself stays put holding its in-order successor's value, and
    /// the successor is unlinked from the right subtree instead.
    fn splice_out(mut node: Box<Self>) -> Link<T> {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (successor, right) = Self::detach_min(right);
                node.value = successor;
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        }
    }

    /// Unlinks the smallest value of the subtree rooted at `node`, returning
    /// it along with the remaining subtree. The minimum has no left child,
    /// so its right child - if any - takes its slot.
    fn detach_min(mut node: Box<Self>) -> (T, Link<T>) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (value, right)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }
}

#[cfg(test)]
impl<T> Tree<T> {
    /// The stored values in ascending order, for checking the search
    /// invariant and the reachable-node count in tests.
    fn in_order(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(node) = node {
                walk(node.left(), out);
                out.push(node.value());
                walk(node.right(), out);
            }
        }
        let mut values = Vec::new();
        walk(self.root(), &mut values);
        values
    }

    fn assert_search_invariant(&self)
    where
        T: Ord,
    {
        let values = self.in_order();
        assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "in-order walk is not strictly increasing",
        );
    }
}
