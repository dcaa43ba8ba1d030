//! Float trait

use cast::From;
use num_traits::float;

/// `num_traits::float::Float` extended with infallible casts from the
/// integer and literal types the percentile arithmetic needs (`usize` for
/// ranks, `f32` for the fence multiplier).
pub trait Float: float::Float + From<usize, Output = Self> + From<f32, Output = Self> {}

impl Float for f32 {}
impl Float for f64 {}
