use serde::{Deserialize, Serialize};

use crate::scalar::{clamp_unit, Scalar};

/// Three component vector with value semantics.
///
/// Every operator returns a new value; only the `*Assign` operators and the
/// `*_in_place` helpers mutate the receiver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    /// Vector in the reference plane, `z` is zero.
    #[inline]
    pub fn new_2d(x: T, y: T) -> Self {
        Self::new(x, y, T::zero())
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// +x, the reference direction of the parent frame.
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn left() -> Self {
        -Self::right()
    }

    /// +y
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn backward() -> Self {
        -Self::forward()
    }

    /// +z, the pole of the reference plane.
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn down() -> Self {
        -Self::up()
    }

    #[inline]
    pub fn sqr_magnitude(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length, without overflow in the intermediate squares.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is at or below [`Scalar::EPSILON`].
    #[inline]
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= T::EPSILON {
            return Self::zero();
        }
        *self / magnitude
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component by index, `None` past `z`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    #[inline]
    pub fn add_scalar(self, d: T) -> Self {
        Self::new(self.x + d, self.y + d, self.z + d)
    }

    #[inline]
    pub fn sub_scalar(self, d: T) -> Self {
        Self::new(self.x - d, self.y - d, self.z - d)
    }

    #[inline]
    pub fn add_scalar_in_place(&mut self, d: T) {
        *self = self.add_scalar(d);
    }

    #[inline]
    pub fn sub_scalar_in_place(&mut self, d: T) {
        *self = self.sub_scalar(d);
    }

    #[inline]
    pub fn dot(a: Self, b: Self) -> T {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    #[inline]
    pub fn cross(a: Self, b: Self) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// Returns zero if either vector has zero magnitude.
    pub fn angle(from: Self, to: Self) -> T {
        let from = from.normalized();
        let to = to.normalized();
        if from == Self::zero() || to == Self::zero() {
            return T::zero();
        }
        clamp_unit(Self::dot(from, to)).acos()
    }

    /// Linear interpolation, `t` is not clamped.
    #[inline]
    pub fn lerp(from: Self, to: Self, t: T) -> Self {
        from * (T::one() - t) + to * t
    }

    /// Spherical interpolation, `t` is not clamped.
    ///
    /// Falls back to [`Vector3::lerp`] when the vectors are parallel or
    /// anti-parallel and `sin(angle)` vanishes.
    pub fn slerp(from: Self, to: Self, t: T) -> Self {
        let angle = Self::angle(from, to);
        let sin_angle = angle.sin();
        if sin_angle.abs() <= T::EPSILON {
            return Self::lerp(from, to, t);
        }
        from * (((T::one() - t) * angle).sin() / sin_angle) + to * ((t * angle).sin() / sin_angle)
    }

    /// Unit direction pointing from `from` to `to`.
    #[inline]
    pub fn point(from: Self, to: Self) -> Self {
        (to - from).normalized()
    }

    #[inline]
    pub fn sqr_distance(from: Self, to: Self) -> T {
        (to - from).sqr_magnitude()
    }

    #[inline]
    pub fn distance(from: Self, to: Self) -> T {
        (to - from).magnitude()
    }

    /// Projection of `from` onto the line spanned by `onto`.
    ///
    /// Projecting onto a zero-magnitude vector yields the zero vector.
    pub fn project(from: Self, onto: Self) -> Self {
        let sqr_magnitude = onto.sqr_magnitude();
        if sqr_magnitude <= T::EPSILON * T::EPSILON {
            return Self::zero();
        }
        onto * (Self::dot(from, onto) / sqr_magnitude)
    }

    #[inline]
    pub fn project_onto_plane(from: Self, normal: Self) -> Self {
        from - Self::project(from, normal)
    }

    /// Mirror image of `vector` across the plane with the given normal.
    #[inline]
    pub fn reflect(vector: Self, normal: Self) -> Self {
        vector - Self::project(vector, normal) * T::two()
    }
}

impl<T: Scalar> std::ops::Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl<T: std::ops::Add<Output = T>> std::ops::Add<Self> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: std::ops::Sub<Output = T>> std::ops::Sub<Self> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: std::ops::Mul<Output = T> + Copy> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<T: std::ops::Div<Output = T> + Copy> std::ops::Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<T: std::ops::Neg<Output = T>> std::ops::Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: std::ops::AddAssign> std::ops::AddAssign<Self> for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T: std::ops::SubAssign> std::ops::SubAssign<Self> for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T: std::ops::MulAssign + Copy> std::ops::MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl<T: std::ops::DivAssign + Copy> std::ops::DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl<T: Scalar> std::iter::Sum for Vector3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}
