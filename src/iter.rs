//! Iteration over the points stored in a [`KdTree`](crate::KdTree).

use crate::kdtree::Node;
use crate::point::Point;

/// Depth-first, pre-order iterator over the points of a [`KdTree`](crate::KdTree).
///
/// Created by [`KdTree::iter`](crate::KdTree::iter).
pub struct TreeIter<'a, A> {
    stack: Vec<&'a Node<A>>,
}

impl<'a, A> TreeIter<'a, A> {
    pub(crate) fn new(root: Option<&'a Node<A>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, A> Iterator for TreeIter<'a, A> {
    type Item = &'a Point<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // right goes on first so the left subtree is visited first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());

        Some(&node.point)
    }
}
