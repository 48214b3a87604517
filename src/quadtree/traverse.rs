use super::Node;
use crate::{Point, Rect};

/// One node as seen by [`Traverse`].
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a, T> {
    pub boundary: Rect<T>,
    /// Points stored directly in this node, in insertion order.
    pub points: &'a [Point<T>],
    pub depth: usize,
    pub is_leaf: bool,
}

/// Depth-first, pre-order iterator over the nodes of a [`Quadtree`](crate::Quadtree).
///
/// Children are visited north-west, north-east, south-west, south-east.
#[derive(Debug, Clone)]
pub struct Traverse<'a, T> {
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a, T: Copy> Iterator for Traverse<'a, T> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;

        if let Some(ref children) = node.children {
            // reversed so that the north-west child is popped first
            for child in children.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }

        Some(NodeView {
            boundary: node.boundary,
            points: node.points.as_slice(),
            depth,
            is_leaf: node.children.is_none(),
        })
    }
}
