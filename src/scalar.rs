use std::fmt::Debug;

/// Floating point type the orbit math is generic over.
///
/// Mirrors the split between the single and double precision math types:
/// one implementation for `f32`, one for `f64`.
pub trait Scalar:
    num_traits::Float
    + num_traits::FloatConst
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + Default
    + Debug
    + Send
    + Sync
    + 'static
{
    /// Magnitudes at or below this are treated as zero by `normalized`.
    const EPSILON: Self;

    /// Relative threshold below which orbital geometry is considered degenerate
    /// (zero angular momentum, equatorial node, circular eccentricity vector).
    const DEGENERATE_TOLERANCE: Self;

    fn from_f64(v: f64) -> Self;

    fn as_f64(self) -> f64;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::from_f64(0.5)
    }
}

impl Scalar for f64 {
    const EPSILON: Self = 1.11e-16;
    const DEGENERATE_TOLERANCE: Self = 1e-10;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON / 2.0;
    const DEGENERATE_TOLERANCE: Self = 1e-5;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// Clamps `v` into `[-1, 1]` before an inverse trig call.
#[inline]
pub fn clamp_unit<T: Scalar>(v: T) -> T {
    v.max(-T::one()).min(T::one())
}
