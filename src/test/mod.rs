use rand::rngs::StdRng;
use rand::Rng;

use crate::geometry::{Point, Rect};
use crate::quadtree::{QuadNode, QuadTree, Quadrant};


/// Random points on an integer grid within `bounds`, so that duplicates are likely.
pub(crate) fn random_grid_points(
    rng: &mut StdRng,
    n: usize,
    bounds: &Rect<f64>,
) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| {
            let x = rng.gen_range(bounds.min_x() as i64..=bounds.max_x() as i64);
            let y = rng.gen_range(bounds.min_y() as i64..=bounds.max_y() as i64);
            Point::new(x as f64, y as f64)
        })
        .collect()
}

/// A random rectangle that may stick out of, or lie entirely outside of, `bounds`.
pub(crate) fn random_rect(rng: &mut StdRng, bounds: &Rect<f64>) -> Rect<f64> {
    let pad_x = bounds.width() * 0.25;
    let pad_y = bounds.height() * 0.25;
    let mut coord = |min: f64, max: f64, pad: f64| rng.gen_range(min - pad..=max + pad);
    Rect::new(
        coord(bounds.min_x(), bounds.max_x(), pad_x),
        coord(bounds.min_y(), bounds.max_y(), pad_y),
        coord(bounds.min_x(), bounds.max_x(), pad_x),
        coord(bounds.min_y(), bounds.max_y(), pad_y),
    )
}

/// Linear scan reference for range queries.
pub(crate) fn brute_force_query(points: &[Point<f64>], rect: &Rect<f64>) -> Vec<Point<f64>> {
    points.iter().filter(|p| rect.contains(p)).copied().collect()
}

/// Sort points lexicographically so results can be compared as sets.
pub(crate) fn sorted(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
    points.sort_by(|a, b| {
        a.x()
            .partial_cmp(&b.x())
            .unwrap()
            .then(a.y().partial_cmp(&b.y()).unwrap())
    });
    points
}

/// Walk the whole tree and assert its structural invariants.
pub(crate) fn check_invariants(tree: &QuadTree<f64>) {
    let mut num_points = 0;
    for node in tree.nodes() {
        match node {
            QuadNode::Leaf { bounds, point } => {
                if let Some(point) = point {
                    assert!(bounds.contains(point), "{} outside its leaf {}", point, bounds);
                    num_points += 1;
                }
            }
            QuadNode::Internal { bounds, children } => {
                for (quadrant, child) in Quadrant::ALL.iter().zip(children.iter()) {
                    let child_bounds = child.bounds();
                    assert_eq!(child_bounds, &quadrant.bounds(bounds));
                    let (lo, hi) = (
                        Point::new(child_bounds.min_x(), child_bounds.min_y()),
                        Point::new(child_bounds.max_x(), child_bounds.max_y()),
                    );
                    assert!(
                        bounds.contains(&lo) && bounds.contains(&hi),
                        "{} extends past its parent {}",
                        child_bounds,
                        bounds
                    );
                }
            }
        }
    }

    assert_eq!(num_points, tree.len(), "reachable points match len");
    assert_eq!(tree.boundaries().count(), tree.num_nodes());
    assert_eq!((tree.num_nodes() - 1) % 4, 0);
}
