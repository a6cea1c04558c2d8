//! Renders the shape of a [`Tree`] onto a 2D drawing surface.
//!
//! The layout is the classic recursive one: the root sits at a fixed anchor,
//! each level drops a fixed number of pixels, and the horizontal distance
//! between a parent and its children halves at every level so sibling
//! subtrees never overlap. The actual line and shape calls go through the
//! [`Canvas`] trait, so any immediate-mode 2D backend (or a recording stub
//! in tests) can be plugged in.
//!
//! # Examples
//!
//! ```
//! use bintree::draw::Canvas;
//! use bintree::tree::Tree;
//!
//! struct Logger;
//!
//! impl Canvas<i32> for Logger {
//!     fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) {
//!         println!("line {:?} -> {:?}", from, to);
//!     }
//!
//!     fn draw_node(&mut self, at: (i32, i32), value: &i32, selected: bool) {
//!         println!("node {} at {:?} (selected: {})", value, at, selected);
//!     }
//! }
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! let selected = tree.find(&1);
//! tree.draw(&mut Logger, selected);
//! ```

use std::ptr;

use crate::tree::{Node, Tree};

/// Where the root node is anchored on the canvas.
const ROOT_ANCHOR: (i32, i32) = (400, 40);

/// Vertical distance between a parent and its children.
const LEVEL_HEIGHT: i32 = 80;

/// Horizontal spacing handed to the root. It is halved once per level,
/// starting with the root itself, so the root's children sit 200 pixels out.
const ROOT_SPACING: i32 = 400;

/// An immediate-mode 2D drawing surface. The tree layout only ever emits
/// straight lines between parents and children, and one shape per node.
pub trait Canvas<T> {
    /// Draws a line between the two endpoints.
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32));

    /// Draws the shape for one node at the given position. `selected` is
    /// `true` for at most one node per [`Tree::draw`] call.
    fn draw_node(&mut self, at: (i32, i32), value: &T, selected: bool);
}

impl<T> Tree<T> {
    /// Draws the whole tree onto `canvas`, highlighting `selected` if it is
    /// given. The selection is matched by node identity, so a handle from
    /// [`find`][Self::find] on the same tree is the expected input.
    pub fn draw<C: Canvas<T>>(&self, canvas: &mut C, selected: Option<&Node<T>>) {
        if let Some(root) = self.root() {
            draw_subtree(root, ROOT_ANCHOR, ROOT_SPACING, canvas, selected);
        }
    }
}

/// Draws `node` at `(x, y)` after its connecting lines and subtrees, the
/// same bottom-up order the original renderer used so parent shapes paint
/// over the line ends.
fn draw_subtree<T, C: Canvas<T>>(
    node: &Node<T>,
    (x, y): (i32, i32),
    spacing: i32,
    canvas: &mut C,
    selected: Option<&Node<T>>,
) {
    let spacing = spacing / 2;

    if let Some(left) = node.left() {
        let at = (x - spacing, y + LEVEL_HEIGHT);
        canvas.draw_line((x, y), at);
        draw_subtree(left, at, spacing, canvas, selected);
    }

    if let Some(right) = node.right() {
        let at = (x + spacing, y + LEVEL_HEIGHT);
        canvas.draw_line((x, y), at);
        draw_subtree(right, at, spacing, canvas, selected);
    }

    let is_selected = selected.map_or(false, |s| ptr::eq(s, node));
    canvas.draw_node((x, y), node.value(), is_selected);
}
