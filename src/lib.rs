#![doc = include_str!("../README.md")]

mod error;
mod geometry;
pub mod quadtree;
mod r#type;

pub use error::{QuadTreeError, Result};
pub use geometry::{Point, Rect};
pub use quadtree::QuadTree;
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
