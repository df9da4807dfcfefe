use az::Cast;

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// 108 integer bits, 20 fractional: sub-micrometer resolution out to ~1e32 m,
/// far beyond where `f64` positions lose meter precision.
pub type UniversalScalar = fixed::types::I108F20;

/// Absolute position in the root frame of an [`crate::OrbitSystem`].
///
/// Global positions are sums of local offsets of very different scales
/// (planet around star, moon around planet); summing in fixed point keeps the
/// small offsets intact.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct UniversalPos {
    pub x: UniversalScalar,
    pub y: UniversalScalar,
    pub z: UniversalScalar,
}

impl UniversalPos {
    pub fn new(x: UniversalScalar, y: UniversalScalar, z: UniversalScalar) -> Self {
        Self { x, y, z }
    }

    /// Position at `offset` from the origin, or `None` if it is not finite or
    /// out of range.
    pub fn from_vector<T: Scalar>(offset: Vector3<T>) -> Option<Self> {
        Self::default().checked_add(offset)
    }

    /// `self + offset`, or `None` if the offset is not finite or the sum
    /// leaves the representable range.
    pub fn checked_add<T: Scalar>(self, offset: Vector3<T>) -> Option<Self> {
        let offset_x = UniversalScalar::checked_from_num(offset.x.as_f64())?;
        let offset_y = UniversalScalar::checked_from_num(offset.y.as_f64())?;
        let offset_z = UniversalScalar::checked_from_num(offset.z.as_f64())?;
        Some(Self::new(
            self.x.checked_add(offset_x)?,
            self.y.checked_add(offset_y)?,
            self.z.checked_add(offset_z)?,
        ))
    }

    /// Offset from `origin`, small enough again to be handled in `f64`.
    #[inline]
    pub fn relative_to(self, origin: Self) -> Vector3<f64> {
        self - origin
    }

    /// Nearest `f64` vector; loses precision far from the origin.
    #[inline]
    pub fn as_vector(self) -> Vector3<f64> {
        self - Self::default()
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).sqr_magnitude()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }
}

impl std::ops::Sub<UniversalPos> for UniversalPos {
    type Output = Vector3<f64>;

    fn sub(self, other: Self) -> Vector3<f64> {
        Vector3 {
            x: (self.x - other.x).cast(),
            y: (self.y - other.y).cast(),
            z: (self.z - other.z).cast(),
        }
    }
}
