use geo_traits::{CoordTrait, RectTrait};

use crate::error::{QuadTreeError, Result};
use crate::geometry::{Point, Rect};
use crate::quadtree::builder::QuadTreeBuilder;
use crate::quadtree::node::QuadNode;
use crate::quadtree::traversal::{Boundaries, Nodes};
use crate::r#type::IndexableNum;

/// A point quadtree over fixed bounds.
///
/// Each leaf holds at most one point. A leaf that already holds a point subdivides into four
/// quadrants when a second point arrives, so the tree only grows where points are dense.
///
/// ```
/// use quad_index::{Point, QuadTree, Rect};
///
/// let mut tree = QuadTree::new(Rect::new(0., 0., 100., 100.)).unwrap();
/// assert!(tree.insert(Point::new(10., 10.)));
/// assert!(tree.insert(Point::new(90., 90.)));
/// assert!(!tree.insert(Point::new(10., 10.)));
///
/// assert!(tree.contains(&Point::new(90., 90.)));
/// assert_eq!(tree.query(&Rect::new(0., 0., 50., 50.)), vec![Point::new(10., 10.)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTree<N: IndexableNum> {
    pub(crate) root: QuadNode<N>,
    pub(crate) num_items: usize,
    pub(crate) num_nodes: usize,
    pub(crate) max_depth: Option<usize>,
}

impl<N: IndexableNum> QuadTree<N> {
    /// Create a new, empty tree over `bounds` with the default configuration.
    ///
    /// Use [`QuadTreeBuilder`] to configure the tree.
    pub fn new(bounds: Rect<N>) -> Result<Self> {
        QuadTreeBuilder::new(bounds).finish()
    }

    /// The number of points stored in this tree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if this tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// The total number of nodes in this tree, including both leaf and internal nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// The outer bounds of this tree. Only points inside these bounds can be inserted.
    pub fn bounds(&self) -> &Rect<N> {
        self.root.bounds()
    }

    /// The maximum depth this tree may subdivide to, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// The number of levels below the root. A tree that never subdivided has depth `0`.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, level)) = stack.pop() {
            depth = depth.max(level);
            if let Some(children) = node.children() {
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        depth
    }

    /// Insert a point, reporting why it was rejected on failure.
    ///
    /// On error the tree is left unchanged.
    pub fn try_insert(&mut self, point: Point<N>) -> Result<()> {
        let result = self.insert_inner(point);
        if let Err(err) = &result {
            log::trace!("Rejected point {}: {}", point, err);
        }
        result
    }

    fn insert_inner(&mut self, point: Point<N>) -> Result<()> {
        if !point.is_valid() {
            return Err(QuadTreeError::InvalidInput(format!(
                "Point {} has a NaN coordinate.",
                point
            )));
        }

        if !self.root.bounds().contains(&point) {
            return Err(QuadTreeError::OutOfBounds {
                x: point.x().as_f64(),
                y: point.y().as_f64(),
            });
        }

        let created = self.root.insert(point, 0, self.max_depth)?;
        self.num_items += 1;
        self.num_nodes += created;
        Ok(())
    }

    /// Insert a point.
    ///
    /// Returns `false` without changing the tree if the point is invalid, lies outside the bounds
    /// of the tree, or is already stored. Use [`try_insert`][Self::try_insert] to learn which.
    pub fn insert(&mut self, point: Point<N>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert a point given as any [`CoordTrait`].
    pub fn insert_coord(&mut self, coord: &impl CoordTrait<T = N>) -> bool {
        self.insert(Point::from_coord(coord))
    }

    /// Returns `true` if `point` is stored in this tree.
    pub fn contains(&self, point: &Point<N>) -> bool {
        if self.is_empty() || !self.root.bounds().contains(point) {
            return false;
        }

        self.root.leaf_for(point).point() == Some(point)
    }

    /// Returns `true` if the point given as any [`CoordTrait`] is stored in this tree.
    pub fn contains_coord(&self, coord: &impl CoordTrait<T = N>) -> bool {
        self.contains(&Point::from_coord(coord))
    }

    /// Search the tree for all points within the closed rectangle `rect`.
    ///
    /// Points are returned in traversal order.
    pub fn query(&self, rect: &Rect<N>) -> Vec<Point<N>> {
        let mut results = vec![];
        if self.is_empty() || !self.root.bounds().intersects(rect) {
            return results;
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                QuadNode::Leaf {
                    point: Some(point), ..
                } => {
                    if rect.contains(point) {
                        results.push(*point);
                    }
                }
                QuadNode::Leaf { point: None, .. } => {}
                QuadNode::Internal { children, .. } => {
                    // Note: these are pushed in reverse so they get popped in quadrant order
                    stack.extend(
                        children
                            .iter()
                            .rev()
                            .filter(|child| child.bounds().intersects(rect)),
                    );
                }
            }
        }

        results
    }

    /// Search the tree for all points within any [`RectTrait`].
    pub fn query_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<Point<N>> {
        self.query(&Rect::from_rect(rect))
    }

    /// An iterator over the bounds of every node, parents before their children.
    ///
    /// This reflects how the tree has subdivided space, e.g. for drawing it.
    pub fn boundaries(&self) -> Boundaries<'_, N> {
        Boundaries::new(&self.root)
    }

    /// An iterator over every node, parents before their children.
    pub fn nodes(&self) -> Nodes<'_, N> {
        Nodes::new(&self.root)
    }

    /// An iterator over every stored point, in traversal order.
    pub fn points(&self) -> impl Iterator<Item = &Point<N>> + '_ {
        self.nodes().filter_map(QuadNode::point)
    }

    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> &QuadNode<N> {
        &self.root
    }
}
