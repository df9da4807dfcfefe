use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::scalar::Scalar;

/// Iteration count used by the demo and the benches; about twice what an
/// eccentricity of 0.9 needs to reach double precision.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 10;

/// μ = G·M of the parent body.
#[inline]
pub fn calculate_gravitational_parameter<T: Scalar>(parent_mass: T) -> T {
    T::from_f64(GRAVITATIONAL_CONSTANT) * parent_mass
}

/// Kepler's third law.
#[inline]
pub fn calculate_period<T: Scalar>(semi_major_axis: T, parent_mass: T) -> T {
    T::TAU() * (semi_major_axis.powi(3) / calculate_gravitational_parameter(parent_mass)).sqrt()
}

#[inline]
pub fn calculate_mean_motion<T: Scalar>(period: T) -> T {
    T::TAU() / period
}

/// Mean anomaly `time` seconds after periapsis passage, not wrapped.
#[inline]
pub fn calculate_mean_anomaly<T: Scalar>(period: T, time: T) -> T {
    time * T::TAU() / period
}

/// Wraps an angle into `[0, 2π)`, negative inputs included.
#[inline]
pub fn wrap_angle<T: Scalar>(angle: T) -> T {
    let tau = T::TAU();
    let wrapped = angle - (angle / tau).floor() * tau;
    // -ε rounds up to exactly 2π
    if wrapped >= tau {
        T::zero()
    } else {
        wrapped
    }
}

/// Solves `E - e·sin(E) = M` for the eccentric anomaly.
///
/// Newton's method seeded at `E = M`, run for exactly `iterations` steps with
/// no convergence check, then wrapped into `[0, 2π)`. Non-convergence is not
/// detected; eccentricities at or above one are outside the supported range.
#[inline]
pub fn calculate_eccentric_anomaly<T: Scalar>(eccentricity: T, mean_anomaly: T, iterations: u32) -> T {
    let e = eccentricity;
    let ma = mean_anomaly;
    let mut ea = ma;
    for _ in 0..iterations {
        let (sin, cos) = ea.sin_cos();
        ea = ea - (ea - e * sin - ma) / (T::one() - e * cos);
    }
    wrap_angle(ea)
}

/// Half-angle conversion from eccentric to true anomaly, wrapped into `[0, 2π)`.
#[inline]
pub fn calculate_true_anomaly<T: Scalar>(eccentricity: T, eccentric_anomaly: T) -> T {
    let e = eccentricity;
    let beta = e / (T::one() + (T::one() - e * e).sqrt());
    let (sin, cos) = eccentric_anomaly.sin_cos();
    wrap_angle(eccentric_anomaly + T::two() * (beta * sin / (T::one() - beta * cos)).atan())
}

/// `a(1 - e²)`
#[inline]
pub fn calculate_semi_latus_rectum<T: Scalar>(semi_major_axis: T, eccentricity: T) -> T {
    semi_major_axis * (T::one() - eccentricity * eccentricity)
}

/// Distance from the parent at the given true anomaly.
#[inline]
pub fn calculate_heliocentric_distance<T: Scalar>(semi_major_axis: T, eccentricity: T, true_anomaly: T) -> T {
    calculate_semi_latus_rectum(semi_major_axis, eccentricity) / (T::one() + eccentricity * true_anomaly.cos())
}

/// `|E - e·sin(E) - M|` with `M` reduced into `[0, 2π)` first and the
/// difference taken on the circle.
pub fn kepler_residual<T: Scalar>(eccentricity: T, eccentric_anomaly: T, mean_anomaly: T) -> T {
    let difference = eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - wrap_angle(mean_anomaly);
    let wrapped = wrap_angle(difference);
    wrapped.min(T::TAU() - wrapped)
}
