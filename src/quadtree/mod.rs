//! An implementation of a region-subdividing point quadtree.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod traversal;

pub use builder::{QuadTreeBuilder, DEFAULT_MAX_DEPTH};
pub use index::QuadTree;
pub use node::{QuadNode, Quadrant};
pub use traversal::{Boundaries, Nodes};
