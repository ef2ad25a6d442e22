//! Lazy Flattening of Nested Sequences
//!
//! [`flatten`] walks an arbitrarily nested structure depth-first, left to
//! right, and yields every leaf in pre-order. Nothing is buffered: each call to
//! `next()` advances the traversal just far enough to produce one leaf, so a
//! consumer that stops early never pays for the rest of the structure.
//!
//! Structures plug in through the [`Node`] trait, which classifies a value as
//! either a leaf or a container of further nodes. Text is always a leaf.
//!
//! The traversal keeps its own stack of child iterators instead of recursing,
//! so nesting depth is limited by heap memory rather than the call stack.

use std::iter::FusedIterator;
use std::slice;

use log::trace;

use crate::error::FlattenError;

/// Classification of a single node.
pub enum Shape<'a, N: Node> {
    /// An atomic value, yielded as-is.
    Leaf(&'a N::Leaf),
    /// A sequence of child nodes, flattened in order.
    Container(&'a [N]),
}

/// A value that is either a leaf or a sequence of nodes of the same type.
pub trait Node: Sized {
    /// Type yielded for leaves.
    type Leaf: ?Sized;

    /// Classify this node.
    fn shape(&self) -> Shape<'_, Self>;

    /// Name of the node's type, used in [`FlattenError::NotIterable`].
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Iterator over the leaves of a nested structure, in pre-order.
///
/// Created by [`flatten`] or [`flatten_lenient`].
pub struct Flatten<'a, N: Node> {
    stack: Vec<slice::Iter<'a, N>>,
    pending: Option<&'a N::Leaf>,
}

impl<'a, N: Node> Flatten<'a, N> {
    fn over(children: &'a [N]) -> Self {
        Flatten {
            stack: vec![children.iter()],
            pending: None,
        }
    }

    fn singleton(leaf: &'a N::Leaf) -> Self {
        Flatten {
            stack: Vec::new(),
            pending: Some(leaf),
        }
    }

    /// Number of containers currently open, including the top level.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, N: Node> Iterator for Flatten<'a, N> {
    type Item = &'a N::Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(leaf) = self.pending.take() {
            return Some(leaf);
        }

        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(node) => match node.shape() {
                    Shape::Leaf(leaf) => return Some(leaf),
                    Shape::Container(children) => self.stack.push(children.iter()),
                },
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<N: Node> FusedIterator for Flatten<'_, N> {}

/// Flatten `value` into a lazy sequence of its leaves.
///
/// Fails with [`FlattenError::NotIterable`] if `value` itself is a leaf.
///
/// # Example
///
/// ```
/// use seqkit::flatten::flatten;
/// use seqkit::nested;
///
/// let value = nested!([1, [2, 3], [4, [5, 6]], 7]);
/// let leaves: Vec<i32> = flatten(&value).unwrap().copied().collect();
/// assert_eq!(leaves, vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn flatten<N: Node>(value: &N) -> Result<Flatten<'_, N>, FlattenError> {
    match value.shape() {
        Shape::Container(children) => {
            trace!("flattening container of {} items", children.len());
            Ok(Flatten::over(children))
        }
        Shape::Leaf(_) => Err(FlattenError::NotIterable {
            type_name: value.type_name(),
        }),
    }
}

/// Like [`flatten`], but a top-level leaf is yielded as a one-element sequence.
pub fn flatten_lenient<N: Node>(value: &N) -> Flatten<'_, N> {
    match value.shape() {
        Shape::Container(children) => Flatten::over(children),
        Shape::Leaf(leaf) => Flatten::singleton(leaf),
    }
}
