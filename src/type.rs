use std::fmt::{Debug, Display};

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Quadrant bisection relies on
/// real-valued halving, so only the floating point types `f32` and `f64` are supported.
pub trait IndexableNum:
    private::Sealed + Float + Debug + Display + Send + Sync + 'static
{
    /// One half, the factor used to find the midpoint of a range.
    const HALF: Self;

    /// Lossy conversion used when reporting coordinates in errors.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl IndexableNum for f32 {
    const HALF: Self = 0.5;
}

impl IndexableNum for f64 {
    const HALF: Self = 0.5;
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
