//! Points and axis-aligned rectangles in the coordinate space of an index.

use std::fmt;

use geo_traits::{CoordTrait, RectTrait};

use crate::error::{QuadTreeError, Result};
use crate::r#type::IndexableNum;

/// A single two-dimensional point.
///
/// Equality is exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: IndexableNum> {
    x: N,
    y: N,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The `x` coordinate of this point.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The `y` coordinate of this point.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Returns `true` if neither coordinate is NaN.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    pub(crate) fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(coord.x(), coord.y())
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// An axis-aligned rectangle, stored by its minimum and maximum corners.
///
/// Both [`contains`][Rect::contains] and [`intersects`][Rect::intersects] treat the rectangle as
/// closed, so points and rectangles touching an edge count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<N: IndexableNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: IndexableNum> Rect<N> {
    /// Create a new rectangle from two opposite corners.
    ///
    /// The corners may be given in any order; they are normalized so that the first pair becomes
    /// the minimum corner.
    ///
    /// ```
    /// use quad_index::Rect;
    ///
    /// let rect = Rect::new(10., 0., 0., 10.);
    /// assert_eq!(rect.min_x(), 0.);
    /// assert_eq!(rect.max_x(), 10.);
    /// ```
    pub fn new(x0: N, y0: N, x1: N, y1: N) -> Self {
        let (min_x, max_x) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
        let (min_y, max_y) = if y1 < y0 { (y1, y0) } else { (y0, y1) };
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a new rectangle from its minimum corner and its size.
    ///
    /// Fails if either `width` or `height` is negative or NaN.
    pub fn from_origin_size(x: N, y: N, width: N, height: N) -> Result<Self> {
        if !(width >= N::zero() && height >= N::zero()) {
            return Err(QuadTreeError::InvalidInput(format!(
                "Rectangle size must be non-negative, got {}x{}.",
                width, height
            )));
        }
        Ok(Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        })
    }

    /// Get the minimum `x` value of this rectangle.
    #[inline]
    pub fn min_x(&self) -> N {
        self.min_x
    }

    /// Get the minimum `y` value of this rectangle.
    #[inline]
    pub fn min_y(&self) -> N {
        self.min_y
    }

    /// Get the maximum `x` value of this rectangle.
    #[inline]
    pub fn max_x(&self) -> N {
        self.max_x
    }

    /// Get the maximum `y` value of this rectangle.
    #[inline]
    pub fn max_y(&self) -> N {
        self.max_y
    }

    /// The extent of this rectangle along the `x` axis.
    pub fn width(&self) -> N {
        self.max_x - self.min_x
    }

    /// The extent of this rectangle along the `y` axis.
    pub fn height(&self) -> N {
        self.max_y - self.min_y
    }

    /// The midpoint of this rectangle, which is also the corner its four quadrants share.
    ///
    /// Computed as `min / 2 + max / 2` so it can't overflow. Halving subnormals rounds, so the
    /// result is clamped back into the rectangle.
    pub fn center(&self) -> Point<N> {
        Point::new(
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
        )
    }

    /// Returns `true` if all four coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Returns `true` if `point` lies within this closed rectangle.
    #[inline]
    pub fn contains(&self, point: &Point<N>) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns `true` if this rectangle overlaps `other`, including when they only share an edge.
    #[inline]
    pub fn intersects(&self, other: &Rect<N>) -> bool {
        // Written as negated comparisons so that NaN never intersects anything
        if !(self.max_x >= other.min_x) {
            return false;
        }

        if !(self.max_y >= other.min_y) {
            return false;
        }

        if !(self.min_x <= other.max_x) {
            return false;
        }

        if !(self.min_y <= other.max_y) {
            return false;
        }

        true
    }

    pub(crate) fn from_rect(rect: &impl RectTrait<T = N>) -> Self {
        Self::new(rect.min().x(), rect.min().y(), rect.max().x(), rect.max().y())
    }
}

#[inline]
fn midpoint<N: IndexableNum>(min: N, max: N) -> N {
    (min * N::HALF + max * N::HALF).max(min).min(max)
}

impl<N: IndexableNum> fmt::Display for Rect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Implement [`GeometryTrait`][geo_traits::GeometryTrait] for a type that is only ever a
/// rectangle. The type must also implement [`RectTrait`].
macro_rules! impl_rect_geometry {
    ($ty:ty) => {
        impl<N: $crate::r#type::IndexableNum> geo_traits::GeometryTrait for $ty {
            type T = N;
            type PointType<'b>
                = geo_traits::UnimplementedPoint<N>
            where
                Self: 'b;
            type LineStringType<'b>
                = geo_traits::UnimplementedLineString<N>
            where
                Self: 'b;
            type PolygonType<'b>
                = geo_traits::UnimplementedPolygon<N>
            where
                Self: 'b;
            type MultiPointType<'b>
                = geo_traits::UnimplementedMultiPoint<N>
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = geo_traits::UnimplementedMultiLineString<N>
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = geo_traits::UnimplementedMultiPolygon<N>
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = geo_traits::UnimplementedGeometryCollection<N>
            where
                Self: 'b;
            type RectType<'b>
                = $ty
            where
                Self: 'b;
            type TriangleType<'b>
                = geo_traits::UnimplementedTriangle<N>
            where
                Self: 'b;
            type LineType<'b>
                = geo_traits::UnimplementedLine<N>
            where
                Self: 'b;

            fn dim(&self) -> geo_traits::Dimensions {
                geo_traits::Dimensions::Xy
            }

            fn as_type(
                &self,
            ) -> geo_traits::GeometryType<
                '_,
                Self::PointType<'_>,
                Self::LineStringType<'_>,
                Self::PolygonType<'_>,
                Self::MultiPointType<'_>,
                Self::MultiLineStringType<'_>,
                Self::MultiPolygonType<'_>,
                Self::GeometryCollectionType<'_>,
                Self::RectType<'_>,
                Self::TriangleType<'_>,
                Self::LineType<'_>,
            > {
                geo_traits::GeometryType::Rect(self)
            }
        }
    };
}

pub(crate) use impl_rect_geometry;

impl_rect_geometry!(Rect<N>);

impl<N: IndexableNum> RectTrait for Rect<N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.max_x, self.max_y)
    }
}

#[cfg(test)]
mod test {
    use geo_traits::GeometryTrait;

    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = Rect::new(0., 0., 10., 5.);
        assert!(rect.contains(&Point::new(0., 0.)));
        assert!(rect.contains(&Point::new(10., 5.)));
        assert!(rect.contains(&Point::new(10., 2.5)));
        assert!(!rect.contains(&Point::new(10.000001, 2.5)));
        assert!(!rect.contains(&Point::new(f64::NAN, 2.5)));
    }

    #[test]
    fn intersects_touching_edges() {
        let rect = Rect::new(0., 0., 10., 10.);
        assert!(rect.intersects(&Rect::new(10., 10., 20., 20.)));
        assert!(rect.intersects(&Rect::new(2., 2., 3., 3.)));
        assert!(Rect::new(2., 2., 3., 3.).intersects(&rect));
        assert!(!rect.intersects(&Rect::new(10.5, 0., 20., 10.)));
        assert!(!rect.intersects(&Rect::new(0., -5., 10., -0.5)));
        assert!(!rect.intersects(&Rect::new(f64::NAN, 0., 10., 10.)));
    }

    #[test]
    fn normalizes_corners() {
        let rect = Rect::new(10., 20., 0., 5.);
        assert_eq!(rect, Rect::new(0., 5., 10., 20.));
        assert_eq!(rect.width(), 10.);
        assert_eq!(rect.height(), 15.);
    }

    #[test]
    fn from_origin_size() {
        let rect = Rect::from_origin_size(1., 2., 3., 4.).unwrap();
        assert_eq!(rect, Rect::new(1., 2., 4., 6.));

        assert!(Rect::from_origin_size(0., 0., 0., 0.).is_ok());
        assert!(matches!(
            Rect::from_origin_size(0., 0., -1., 4.),
            Err(QuadTreeError::InvalidInput(_))
        ));
        assert!(matches!(
            Rect::from_origin_size(0., 0., 1., f64::NAN),
            Err(QuadTreeError::InvalidInput(_))
        ));
    }

    #[test]
    fn center_stays_inside_huge_rect() {
        let rect = Rect::new(-f64::MAX, -f64::MAX, f64::MAX, f64::MAX);
        let center = rect.center();
        assert_eq!(center, Point::new(0., 0.));
        assert!(rect.is_valid());
        assert!(!Rect::new(0., 0., f64::INFINITY, 1.).is_valid());
    }

    #[test]
    fn center_of_subnormal_rect() {
        // 3 ulps above zero; each half rounds up to 2 ulps
        let x = f64::from_bits(3);
        let rect = Rect::new(x, 0., x, f64::from_bits(1));
        let center = rect.center();
        assert_eq!(center.x(), x);
        assert!(rect.contains(&center));
    }

    #[test]
    fn geo_traits_roundtrip() {
        let geo_rect = geo_0_31::Rect::new(
            geo_0_31::coord! { x: 4., y: 1. },
            geo_0_31::coord! { x: 0., y: 3. },
        );
        let rect = Rect::from_rect(&geo_rect);
        assert_eq!(rect, Rect::new(0., 1., 4., 3.));
        assert_eq!(rect.min().x(), 0.);
        assert_eq!(rect.max().y(), 3.);

        assert_eq!(rect.dim(), geo_traits::Dimensions::Xy);
        assert!(matches!(rect.as_type(), geo_traits::GeometryType::Rect(r) if r == &rect));

        let point = Point::from_coord(&geo_0_31::coord! { x: 1.5, y: -2. });
        assert_eq!(point, Point::new(1.5, -2.));
        assert_eq!(point.nth_or_panic(1), -2.);
    }
}
