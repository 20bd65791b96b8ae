//! Console version of a point-selection canvas.
//!
//! Scatters random points over a canvas, indexes them, then "drags" a selection rectangle and
//! prints the selected points alongside the node outlines a renderer would draw.

use quad_index::{Point, QuadTree, Rect};
use rand::Rng;

const CANVAS_WIDTH: f64 = 800.;
const CANVAS_HEIGHT: f64 = 600.;
const NUM_POINTS: usize = 200;

fn main() {
    env_logger::init();

    let canvas = Rect::new(0., 0., CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut tree = QuadTree::new(canvas).expect("canvas bounds are finite");

    let mut rng = rand::thread_rng();
    let mut rejected = 0;
    for _ in 0..NUM_POINTS {
        let point = Point::new(
            rng.gen_range(0.0..=CANVAS_WIDTH),
            rng.gen_range(0.0..=CANVAS_HEIGHT),
        );
        if !tree.insert(point) {
            rejected += 1;
        }
    }

    println!("=== Quadtree selection demo ===\n");
    println!("Indexed {} points ({} rejected)", tree.len(), rejected);
    println!(
        "Tree has {} nodes and is {} levels deep\n",
        tree.num_nodes(),
        tree.depth()
    );

    // Drag from one corner to the other; corners may come in any order
    let selection = Rect::new(500., 150., 200., 400.);
    let selected = tree.query(&selection);
    println!("Selection {} contains {} points:", selection, selected.len());
    for point in &selected {
        println!("  {}", point);
    }

    println!("\nFirst node outlines to draw:");
    for rect in tree.boundaries().take(9) {
        println!("  {}", rect);
    }
}
