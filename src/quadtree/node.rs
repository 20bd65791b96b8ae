//! Region nodes of the quadtree and the insertion algorithm that subdivides them.

use geo_traits::RectTrait;

use crate::error::{QuadTreeError, Result};
use crate::geometry::{impl_rect_geometry, Point, Rect};
use crate::r#type::IndexableNum;

/// One of the four quadrants of a node, in the order children are stored.
///
/// The `y` axis grows northward, so the north quadrants hold the larger `y` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Larger `x`, larger `y`.
    NorthEast = 0,
    /// Smaller `x`, larger `y`.
    NorthWest = 1,
    /// Smaller `x`, smaller `y`.
    SouthWest = 2,
    /// Larger `x`, smaller `y`.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child storage order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// The quadrant of `bounds` that owns `point`.
    ///
    /// Points on a shared edge go east and north, so every point of `bounds` has exactly one
    /// owner even though the child rectangles are closed.
    pub fn of<N: IndexableNum>(bounds: &Rect<N>, point: &Point<N>) -> Self {
        let center = bounds.center();
        let east = point.x() >= center.x();
        let north = point.y() >= center.y();
        match (east, north) {
            (true, true) => Quadrant::NorthEast,
            (false, true) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (true, false) => Quadrant::SouthEast,
        }
    }

    /// The sub-rectangle of `bounds` covered by this quadrant.
    pub fn bounds<N: IndexableNum>(self, bounds: &Rect<N>) -> Rect<N> {
        let center = bounds.center();
        let (cx, cy) = (center.x(), center.y());
        match self {
            Quadrant::NorthEast => Rect::new(cx, cy, bounds.max_x(), bounds.max_y()),
            Quadrant::NorthWest => Rect::new(bounds.min_x(), cy, cx, bounds.max_y()),
            Quadrant::SouthWest => Rect::new(bounds.min_x(), bounds.min_y(), cx, cy),
            Quadrant::SouthEast => Rect::new(cx, bounds.min_y(), bounds.max_x(), cy),
        }
    }
}

/// A node in the quadtree.
///
/// A node is a leaf holding at most one point, or an internal node owning exactly four children
/// that partition its bounds. Internal nodes never hold points of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadNode<N: IndexableNum> {
    /// A node without children.
    Leaf {
        /// The region this node is responsible for.
        bounds: Rect<N>,
        /// The stored point, if any. Always within `bounds`.
        point: Option<Point<N>>,
    },
    /// A subdivided node.
    Internal {
        /// The region this node is responsible for.
        bounds: Rect<N>,
        /// One child per quadrant of `bounds`, in [`Quadrant::ALL`] order.
        children: Box<[QuadNode<N>; 4]>,
    },
}

impl<N: IndexableNum> QuadNode<N> {
    pub(crate) fn empty(bounds: Rect<N>) -> Self {
        QuadNode::Leaf {
            bounds,
            point: None,
        }
    }

    /// The region this node is responsible for.
    #[inline]
    pub fn bounds(&self) -> &Rect<N> {
        match self {
            QuadNode::Leaf { bounds, .. } | QuadNode::Internal { bounds, .. } => bounds,
        }
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, QuadNode::Leaf { .. })
    }

    /// Returns `true` if this is an internal node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The point stored in this node. Always `None` for internal nodes.
    #[inline]
    pub fn point(&self) -> Option<&Point<N>> {
        match self {
            QuadNode::Leaf { point, .. } => point.as_ref(),
            QuadNode::Internal { .. } => None,
        }
    }

    /// The four children of this node in [`Quadrant::ALL`] order, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[QuadNode<N>; 4]> {
        match self {
            QuadNode::Leaf { .. } => None,
            QuadNode::Internal { children, .. } => Some(children),
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode<N>> {
        self.children().map(|children| &children[quadrant as usize])
    }

    /// Walk down to the leaf whose region owns `point`. `point` must lie within this node.
    pub(crate) fn leaf_for(&self, point: &Point<N>) -> &QuadNode<N> {
        let mut node = self;
        while let QuadNode::Internal { bounds, children } = node {
            node = &children[Quadrant::of(bounds, point) as usize];
        }
        node
    }

    /// Place `point` in the leaf owning it, subdividing as needed.
    ///
    /// `point` must lie within this node's bounds, and `depth` is the depth of this node. Returns
    /// the number of nodes created. On error the subtree is left untouched.
    pub(crate) fn insert(
        &mut self,
        point: Point<N>,
        depth: usize,
        max_depth: Option<usize>,
    ) -> Result<usize> {
        let mut node = self;
        let mut depth = depth;
        let mut created = 0;
        loop {
            let existing = match node {
                QuadNode::Internal { bounds, children } => {
                    let quadrant = Quadrant::of(bounds, &point);
                    node = &mut children[quadrant as usize];
                    depth += 1;
                    continue;
                }
                QuadNode::Leaf { point: slot, .. } => match slot {
                    None => {
                        *slot = Some(point);
                        return Ok(created);
                    }
                    Some(existing) if *existing == point => {
                        return Err(QuadTreeError::Duplicate {
                            x: point.x().as_f64(),
                            y: point.y().as_f64(),
                        });
                    }
                    Some(existing) => *existing,
                },
            };

            // The leaf is occupied by a different point and has to make room. Check the whole
            // cascade before the first split so a failure further down can't leave behind an empty
            // subdivision.
            if created == 0 {
                check_split(node.bounds(), &existing, &point, depth, max_depth)?;
            }

            node.subdivide(existing);
            created += 4;
        }
    }

    /// Turn this leaf into an internal node with four empty children, re-homing `existing`.
    fn subdivide(&mut self, existing: Point<N>) {
        let bounds = *self.bounds();
        log::debug!("Subdividing node {} to make room next to {}", bounds, existing);

        let mut children = Box::new(
            Quadrant::ALL.map(|quadrant| QuadNode::empty(quadrant.bounds(&bounds))),
        );
        let home = Quadrant::of(&bounds, &existing);
        if let QuadNode::Leaf { point, .. } = &mut children[home as usize] {
            *point = Some(existing);
        }

        *self = QuadNode::Internal { bounds, children };
    }
}

/// Verify that `existing` and `point` can be separated by repeatedly splitting `bounds`, starting
/// from a leaf at `depth`.
fn check_split<N: IndexableNum>(
    bounds: &Rect<N>,
    existing: &Point<N>,
    point: &Point<N>,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<()> {
    let mut bounds = *bounds;
    let mut depth = depth;
    loop {
        if let Some(max_depth) = max_depth.filter(|max_depth| depth >= *max_depth) {
            return Err(QuadTreeError::DepthLimit(max_depth));
        }

        let quadrant = Quadrant::of(&bounds, point);
        if quadrant != Quadrant::of(&bounds, existing) {
            return Ok(());
        }

        // Both points share a quadrant; splitting only helps if that quadrant is smaller
        let child = quadrant.bounds(&bounds);
        if child == bounds {
            return Err(QuadTreeError::Indivisible {
                x: point.x().as_f64(),
                y: point.y().as_f64(),
            });
        }

        bounds = child;
        depth += 1;
    }
}

impl_rect_geometry!(QuadNode<N>);

impl<N: IndexableNum> RectTrait for QuadNode<N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.bounds().min_x(), self.bounds().min_y())
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.bounds().max_x(), self.bounds().max_y())
    }
}
