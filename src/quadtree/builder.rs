use crate::error::{QuadTreeError, Result};
use crate::geometry::Rect;
use crate::quadtree::node::QuadNode;
use crate::quadtree::QuadTree;
use crate::r#type::IndexableNum;

/// The default maximum depth used by [`QuadTreeBuilder::new`].
///
/// `None` leaves depth unbounded. Subdivision still stops once a node can no longer be split in
/// floating point, which bounds the tree for any finite index bounds.
pub const DEFAULT_MAX_DEPTH: Option<usize> = None;

/// A builder to create a [`QuadTree`].
///
/// ```
/// use quad_index::quadtree::QuadTreeBuilder;
/// use quad_index::{Point, Rect};
///
/// let mut tree = QuadTreeBuilder::new_with_max_depth(Rect::new(0., 0., 100., 100.), Some(8))
///     .finish()
///     .unwrap();
/// assert!(tree.insert(Point::new(10., 10.)));
/// assert_eq!(tree.max_depth(), Some(8));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTreeBuilder<N: IndexableNum> {
    bounds: Rect<N>,
    max_depth: Option<usize>,
}

impl<N: IndexableNum> QuadTreeBuilder<N> {
    /// Create a new builder over `bounds` with the default maximum depth.
    pub fn new(bounds: Rect<N>) -> Self {
        Self::new_with_max_depth(bounds, DEFAULT_MAX_DEPTH)
    }

    /// Create a new builder over `bounds` with the provided maximum depth.
    ///
    /// With `Some(0)` the root can never subdivide, so the tree holds at most one point.
    pub fn new_with_max_depth(bounds: Rect<N>, max_depth: Option<usize>) -> Self {
        Self { bounds, max_depth }
    }

    /// The outer bounds the tree will index.
    pub fn bounds(&self) -> &Rect<N> {
        &self.bounds
    }

    /// The maximum depth the tree will subdivide to.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Consume this builder, creating an empty [`QuadTree`].
    ///
    /// Fails if any coordinate of the bounds is infinite or NaN.
    pub fn finish(self) -> Result<QuadTree<N>> {
        if !self.bounds.is_valid() {
            return Err(QuadTreeError::InvalidInput(format!(
                "Index bounds must be finite, got {}.",
                self.bounds
            )));
        }

        log::debug!(
            "Creating quadtree over {} with max depth {:?}",
            self.bounds,
            self.max_depth
        );

        Ok(QuadTree {
            root: QuadNode::empty(self.bounds),
            num_items: 0,
            num_nodes: 1,
            max_depth: self.max_depth,
        })
    }
}
