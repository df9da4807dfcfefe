use serde::{Deserialize, Serialize};

use crate::scalar::{clamp_unit, Scalar};
use crate::vector::Vector3;

/// Quaternion `w + xi + yj + zk`.
///
/// Represents a rotation only when unit-norm. The type does not enforce the
/// norm: constructors that build rotations normalize, raw values built with
/// [`Quaternion::new`] must be normalized by the caller before rotating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T = f64> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Quaternion<T> {
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }
}

impl<T: Scalar> Quaternion<T> {
    #[inline]
    pub fn from_scalar_vector(w: T, v: Vector3<T>) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Imaginary part.
    #[inline]
    pub fn vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn sqr_magnitude(&self) -> T {
        self.w * self.w + self.vector().sqr_magnitude()
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.w.hypot(self.vector().magnitude())
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_scalar_vector(self.w, -self.vector())
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    ///
    /// Takes the conjugate directly when the squared magnitude is within
    /// epsilon of one. The zero quaternion has no inverse and maps to itself.
    pub fn inverse(&self) -> Self {
        let sqr_magnitude = self.sqr_magnitude();
        if (sqr_magnitude - T::one()).abs() <= T::EPSILON {
            return self.conjugate();
        }
        if sqr_magnitude == T::zero() {
            return *self;
        }
        self.conjugate() / sqr_magnitude
    }

    /// Unit quaternion with the same direction; identity for the zero quaternion.
    #[inline]
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= T::EPSILON {
            return Self::identity();
        }
        *self / magnitude
    }

    #[inline]
    pub fn dot(q1: Self, q2: Self) -> T {
        q1.w * q2.w + q1.x * q2.x + q1.y * q2.y + q1.z * q2.z
    }

    /// Angle in radians of the rotation taking `q1` to `q2`.
    #[inline]
    pub fn angle(q1: Self, q2: Self) -> T {
        T::two() * clamp_unit(Self::dot(q1, q2)).acos()
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// With `normalize_axis` the axis is normalized and so is the result, a
    /// zero axis then yields the identity. Without it the quaternion is built
    /// from the raw axis as given.
    pub fn angle_axis(angle: T, axis: Vector3<T>, normalize_axis: bool) -> Self {
        let half = angle * T::half();
        let (sin, cos) = half.sin_cos();
        if normalize_axis {
            Self::from_scalar_vector(cos, axis.normalized() * sin).normalized()
        } else {
            Self::from_scalar_vector(cos, axis * sin)
        }
    }

    /// Rotation from roll (`x`), pitch (`y`) and yaw (`z`) in radians,
    /// applied yaw first.
    pub fn from_euler_angles(x: T, y: T, z: T) -> Self {
        let (sr, cr) = (x * T::half()).sin_cos();
        let (sp, cp) = (y * T::half()).sin_cos();
        let (sy, cy) = (z * T::half()).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
        .normalized()
    }

    #[inline]
    pub fn from_euler_vector(euler_angles: Vector3<T>) -> Self {
        Self::from_euler_angles(euler_angles.x, euler_angles.y, euler_angles.z)
    }

    /// `q1 * q2`, renormalized when `correct_magnitude` is set.
    #[inline]
    pub fn compose(q1: Self, q2: Self, correct_magnitude: bool) -> Self {
        if correct_magnitude {
            (q1 * q2).normalized()
        } else {
            q1 * q2
        }
    }

    /// Rotates `vector` by `rotation`.
    ///
    /// With `correct_magnitude` the output is rescaled to the input length,
    /// which absorbs the drift of a rotation that is not exactly unit.
    pub fn rotate(vector: Vector3<T>, rotation: Self, correct_magnitude: bool) -> Vector3<T> {
        let output = rotation * vector;
        if correct_magnitude {
            return output.normalized() * vector.magnitude();
        }
        output
    }

    #[inline]
    pub fn rotate_normalized_vector(vector: Vector3<T>, rotation: Self) -> Vector3<T> {
        (rotation * vector).normalized()
    }

    /// Shortest rotation taking the direction of `a` onto the direction of `b`.
    ///
    /// Parallel inputs give the identity. Anti-parallel inputs give a half
    /// turn about an axis perpendicular to `a`.
    /// A zero input gives the identity.
    pub fn from_to(a: Vector3<T>, b: Vector3<T>) -> Self {
        let a = a.normalized();
        let b = b.normalized();
        if a == Vector3::zero() || b == Vector3::zero() {
            return Self::identity();
        }

        let dot = Vector3::dot(a, b);
        if T::one() - dot.abs() <= T::EPSILON {
            if dot >= T::zero() {
                return Self::identity();
            }
            let mut axis = Vector3::cross(a, Vector3::right());
            if axis.sqr_magnitude() <= T::DEGENERATE_TOLERANCE {
                axis = Vector3::cross(a, Vector3::forward());
            }
            return Self::angle_axis(T::PI(), axis, true);
        }

        Self::from_scalar_vector(T::one() + dot, Vector3::cross(a, b)).normalized()
    }
}

// Hamilton product.
impl<T: Scalar> std::ops::Mul<Self> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, q: Self) -> Self {
        let v1 = self.vector();
        let v2 = q.vector();
        let cross = Vector3::cross(v1, v2);
        Self::new(
            self.w * q.w - Vector3::dot(v1, v2),
            self.w * q.x + q.w * self.x + cross.x,
            self.w * q.y + q.w * self.y + cross.y,
            self.w * q.z + q.w * self.z + cross.z,
        )
    }
}

// Sandwich product q v q*, expanded.
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let q = self.vector();
        let two = T::two();
        let w_sqr_minus_q_sqr = self.w * self.w - q.sqr_magnitude();

        q * (two * Vector3::dot(q, v)) + v * w_sqr_minus_q_sqr + Vector3::cross(q, v) * (two * self.w)
    }
}

impl<T: Scalar> std::ops::Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.w / scalar, self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
