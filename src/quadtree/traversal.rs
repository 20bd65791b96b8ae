//! Utilities to traverse the QuadTree structure.

use std::iter::FusedIterator;

use crate::geometry::Rect;
use crate::quadtree::node::QuadNode;
use crate::r#type::IndexableNum;

/// A pre-order iterator over the nodes of a tree.
///
/// Every node is yielded before its children, and children are yielded in
/// [`Quadrant::ALL`][crate::quadtree::Quadrant::ALL] order.
#[derive(Debug, Clone)]
pub struct Nodes<'a, N: IndexableNum> {
    stack: Vec<&'a QuadNode<N>>,
}

impl<'a, N: IndexableNum> Nodes<'a, N> {
    pub(crate) fn new(root: &'a QuadNode<N>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, N: IndexableNum> Iterator for Nodes<'a, N> {
    type Item = &'a QuadNode<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            // Note: these are pushed in reverse so they get popped in quadrant order
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<N: IndexableNum> FusedIterator for Nodes<'_, N> {}

/// A pre-order iterator over the bounds of every node in a tree.
///
/// Created by [`QuadTree::boundaries`][crate::QuadTree::boundaries]. A parent's outline always
/// comes before the outlines of its children.
#[derive(Debug, Clone)]
pub struct Boundaries<'a, N: IndexableNum> {
    nodes: Nodes<'a, N>,
}

impl<'a, N: IndexableNum> Boundaries<'a, N> {
    pub(crate) fn new(root: &'a QuadNode<N>) -> Self {
        Self {
            nodes: Nodes::new(root),
        }
    }
}

impl<N: IndexableNum> Iterator for Boundaries<'_, N> {
    type Item = Rect<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| *node.bounds())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<N: IndexableNum> FusedIterator for Boundaries<'_, N> {}
