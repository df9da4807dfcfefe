// all units in meters, kilograms and seconds

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
pub const EULER: f64 = std::f64::consts::E;

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// https://en.wikipedia.org/wiki/Gravitational_constant
// in m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Default semi-major axis of an orbit built with [`crate::Orbit::with_parent_mass`].
pub const ASTRONOMICAL_UNIT: f64 = 149_597_871.0;

pub const EARTH_MASS: f64 = 5.9722e24;
