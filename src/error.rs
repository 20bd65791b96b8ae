use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadTreeError {
    /// A point or rectangle that can't be indexed, e.g. one with a NaN coordinate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The point lies outside the bounds of the index.
    #[error("Point ({x}, {y}) lies outside the index bounds.")]
    OutOfBounds { x: f64, y: f64 },

    /// The point is already stored in the index.
    #[error("Point ({x}, {y}) is already stored in the index.")]
    Duplicate { x: f64, y: f64 },

    /// The leaf holding a point too close to this one can't be split any further.
    #[error("Point ({x}, {y}) can't be separated from its neighbor in a node this small.")]
    Indivisible { x: f64, y: f64 },

    /// Subdividing would grow the tree past its configured maximum depth.
    #[error("Subdivision would exceed the maximum depth of {0}.")]
    DepthLimit(usize),
}

pub type Result<T> = std::result::Result<T, QuadTreeError>;
