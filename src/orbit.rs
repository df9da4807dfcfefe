use std::cmp::Ordering;

use crate::constants::ASTRONOMICAL_UNIT;
use crate::error::OrbitError;
use crate::kepler::{
    calculate_eccentric_anomaly, calculate_gravitational_parameter, calculate_mean_anomaly,
    calculate_mean_motion, calculate_period, calculate_semi_latus_rectum, calculate_true_anomaly,
    wrap_angle,
};
use crate::quaternion::Quaternion;
use crate::scalar::{clamp_unit, Scalar};
use crate::vector::Vector3;

/// Keplerian orbit of a body around a parent of fixed mass.
///
/// The six classical elements are public. Only `true_anomaly` changes over
/// the life of an orbit, through [`Orbit::evaluate_true_anomaly`]; the other
/// elements are constants (no precession, no perturbation).
///
/// An orbit may borrow a parent orbit, which puts its elements in the
/// parent's orbital frame (moon around planet around star). The borrow keeps
/// the parent alive and frozen for as long as the child refers to it, and
/// rules out cycles. Use [`crate::OrbitSystem`] to advance a whole hierarchy
/// through time.
#[derive(Debug, Clone, Copy)]
pub struct Orbit<'p, T = f64> {
    pub semi_major_axis: T,
    pub eccentricity: T,
    pub inclination: T,
    pub longitude_of_ascending_node: T,
    pub argument_of_periapsis: T,
    pub true_anomaly: T,
    parent_mass: T,
    parent: Option<&'p Orbit<'p, T>>,
}

impl<'p, T: Scalar> Orbit<'p, T> {
    /// Circular, equatorial orbit one [`ASTRONOMICAL_UNIT`] out.
    pub fn with_parent_mass(parent_mass: T) -> Self {
        Self::new(
            parent_mass,
            T::from_f64(ASTRONOMICAL_UNIT),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }

    /// Orbit from elements; angles in radians.
    pub fn new(
        parent_mass: T,
        semi_major_axis: T,
        eccentricity: T,
        inclination: T,
        longitude_of_ascending_node: T,
        argument_of_periapsis: T,
        true_anomaly: T,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            parent_mass,
            parent: None,
        }
    }

    #[inline]
    pub fn parent_mass(&self) -> T {
        self.parent_mass
    }

    #[inline]
    pub fn parent(&self) -> Option<&'p Orbit<'p, T>> {
        self.parent
    }

    #[inline]
    pub fn set_parent(&mut self, parent: &'p Orbit<'p, T>) {
        self.parent = Some(parent);
    }

    #[inline]
    pub fn clear_parent(&mut self) {
        self.parent = None;
    }

    /// Copy of the elements with no parent reference.
    pub fn detached<'q>(&self) -> Orbit<'q, T> {
        Orbit::new(
            self.parent_mass,
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.longitude_of_ascending_node,
            self.argument_of_periapsis,
            self.true_anomaly,
        )
    }

    /// Number of orbits above this one in the reference chain.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    fn ancestors(&self) -> impl Iterator<Item = &'p Orbit<'p, T>> {
        std::iter::successors(self.parent, |orbit| orbit.parent)
    }

    #[inline]
    pub fn gravitational_parameter(&self) -> T {
        calculate_gravitational_parameter(self.parent_mass)
    }

    #[inline]
    pub fn period(&self) -> T {
        calculate_period(self.semi_major_axis, self.parent_mass)
    }

    #[inline]
    pub fn mean_motion(&self) -> T {
        calculate_mean_motion(self.period())
    }

    /// Mean anomaly `time` seconds after periapsis passage.
    #[inline]
    pub fn mean_anomaly(&self, time: T) -> T {
        calculate_mean_anomaly(self.period(), time)
    }

    /// Eccentric anomaly at `time`, from exactly `solver_iterations` Newton steps.
    #[inline]
    pub fn approximate_eccentric_anomaly(&self, time: T, solver_iterations: u32) -> T {
        calculate_eccentric_anomaly(self.eccentricity, self.mean_anomaly(time), solver_iterations)
    }

    /// Moves the body to where it is `time` seconds after periapsis passage.
    ///
    /// The result depends only on `time`, not on earlier evaluations.
    pub fn evaluate_true_anomaly(&mut self, time: T, solver_iterations: u32) {
        let eccentric_anomaly = self.approximate_eccentric_anomaly(time, solver_iterations);
        self.true_anomaly = calculate_true_anomaly(self.eccentricity, eccentric_anomaly);
        log::trace!(
            "t={:?} E={:?} true anomaly={:?}",
            time,
            eccentric_anomaly,
            self.true_anomaly
        );
    }

    /// Rotation from the perifocal frame into the parent's frame, i.e.
    /// `Rz(Ω) · Rx(i) · Rz(ω)` written out in half angles.
    pub fn local_rotation(&self) -> Quaternion<T> {
        let half = T::half();
        let (sin_i, cos_i) = (half * self.inclination).sin_cos();
        let (sin_sum, cos_sum) =
            (half * (self.longitude_of_ascending_node + self.argument_of_periapsis)).sin_cos();
        let (sin_difference, cos_difference) =
            (half * (self.longitude_of_ascending_node - self.argument_of_periapsis)).sin_cos();

        Quaternion::new(
            cos_i * cos_sum,
            sin_i * cos_difference,
            sin_i * sin_difference,
            cos_i * sin_sum,
        )
        .normalized()
    }

    /// Rotation from the perifocal frame into the root frame: the local
    /// rotations of the chain multiplied outermost first.
    pub fn global_rotation(&self) -> Quaternion<T> {
        self.ancestors()
            .fold(self.local_rotation(), |rotation, ancestor| {
                ancestor.local_rotation() * rotation
            })
    }

    /// Derives the orbit a body with the given position and velocity relative
    /// to its parent is on, at the current instant.
    ///
    /// Degenerate geometry is resolved rather than reported:
    /// * zero angular momentum: inclination is zero
    /// * equatorial orbit (no ascending node): the node longitude is zero and
    ///   periapsis is measured from +x. The argument of periapsis is not
    ///   zeroed here: leaving the angle between the eccentricity vector and +x
    ///   in it is what lets `to_local_state_vectors` reproduce the inputs
    /// * circular orbit (no periapsis): the argument of periapsis is zero and
    ///   the true anomaly is measured from the node, or from +x when also
    ///   equatorial
    pub fn from_state_vectors(parent_mass: T, position: Vector3<T>, velocity: Vector3<T>) -> Self {
        let mu = calculate_gravitational_parameter(parent_mass);
        let tolerance = T::DEGENERATE_TOLERANCE;
        let tau = T::TAU();

        let angular_momentum = Vector3::cross(position, velocity);
        let angular_momentum_magnitude = angular_momentum.magnitude();

        let radial = angular_momentum_magnitude <= tolerance * position.magnitude() * velocity.magnitude();
        let inclination = if radial {
            log::warn!("state vectors carry no angular momentum, inclination set to zero");
            T::zero()
        } else {
            clamp_unit(angular_momentum.z / angular_momentum_magnitude).acos()
        };

        let node_vector = Vector3::cross(Vector3::up(), angular_momentum);
        let node_magnitude = node_vector.magnitude();
        let equatorial = node_magnitude <= tolerance * angular_momentum_magnitude;
        let longitude_of_ascending_node = if equatorial {
            T::zero()
        } else {
            let longitude = clamp_unit(node_vector.x / node_magnitude).acos();
            if node_vector.y < T::zero() {
                tau - longitude
            } else {
                longitude
            }
        };

        let eccentricity_vector =
            Vector3::cross(velocity, angular_momentum) / mu - position.normalized();
        let eccentricity = eccentricity_vector.magnitude();
        let circular = eccentricity <= tolerance;

        // +1 for prograde, -1 for retrograde equatorial orbits, where the
        // inclination of π flips the y axis of the perifocal frame.
        let handedness = if angular_momentum.z < T::zero() {
            -T::one()
        } else {
            T::one()
        };

        let argument_of_periapsis = if circular {
            T::zero()
        } else if equatorial {
            wrap_angle((handedness * eccentricity_vector.y).atan2(eccentricity_vector.x))
        } else {
            let argument = clamp_unit(
                Vector3::dot(eccentricity_vector, node_vector) / (eccentricity * node_magnitude),
            )
            .acos();
            if eccentricity_vector.z < T::zero() {
                tau - argument
            } else {
                argument
            }
        };

        let true_anomaly = if circular {
            let reference = if equatorial {
                Vector3::right()
            } else {
                node_vector / node_magnitude
            };
            let normal = if radial {
                Vector3::up()
            } else {
                angular_momentum / angular_momentum_magnitude
            };
            wrap_angle(
                Vector3::dot(normal, Vector3::cross(reference, position))
                    .atan2(Vector3::dot(reference, position)),
            )
        } else {
            let anomaly = clamp_unit(
                Vector3::dot(eccentricity_vector, position) / (eccentricity * position.magnitude()),
            )
            .acos();
            if Vector3::dot(position, velocity) < T::zero() {
                tau - anomaly
            } else {
                anomaly
            }
        };

        let semi_major_axis =
            angular_momentum.sqr_magnitude() / (mu * (T::one() - eccentricity * eccentricity));

        log::debug!(
            "orbit from state vectors: a={:?} e={:?} i={:?} equatorial={} circular={}",
            semi_major_axis,
            eccentricity,
            inclination,
            equatorial,
            circular
        );

        Self::new(
            parent_mass,
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            true_anomaly,
        )
    }

    /// Position and velocity relative to the parent body, in the parent's frame.
    pub fn to_local_state_vectors(&self) -> (Vector3<T>, Vector3<T>) {
        let rotation = self.local_rotation();
        let (sin, cos) = self.true_anomaly.sin_cos();
        let e = self.eccentricity;
        let semi_latus_rectum = self.semi_latus_rectum();

        let position = rotation * Vector3::new_2d(cos, sin) * (semi_latus_rectum / (T::one() + e * cos));
        let velocity = rotation
            * Vector3::new_2d(-sin, e + cos)
            * (self.gravitational_parameter() / semi_latus_rectum).sqrt();

        (position, velocity)
    }

    /// Position and velocity in the root frame, relative to the body the
    /// outermost orbit of the chain revolves around.
    pub fn to_global_state_vectors(&self) -> (Vector3<T>, Vector3<T>) {
        let (position, velocity) = self.to_local_state_vectors();
        match self.parent {
            None => (position, velocity),
            Some(parent) => {
                let (parent_position, parent_velocity) = parent.to_global_state_vectors();
                let rotation = parent.global_rotation();
                (
                    parent_position + rotation * position,
                    parent_velocity + rotation * velocity,
                )
            }
        }
    }

    /// `a(1 - e²)`
    #[inline]
    pub fn semi_latus_rectum(&self) -> T {
        calculate_semi_latus_rectum(self.semi_major_axis, self.eccentricity)
    }

    #[inline]
    pub fn periapsis(&self) -> T {
        self.semi_major_axis * (T::one() - self.eccentricity)
    }

    /// Meaningless for open orbits (`e >= 1`).
    #[inline]
    pub fn apoapsis(&self) -> T {
        self.semi_major_axis * (T::one() + self.eccentricity)
    }

    /// Checks that the orbit is a closed ellipse around a massive parent.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let invalid = |name: &'static str, value: T| OrbitError::InvalidElement {
            name,
            value: value.as_f64(),
        };

        if !(self.parent_mass.is_finite() && self.parent_mass > T::zero()) {
            return Err(invalid("parent mass", self.parent_mass));
        }
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > T::zero()) {
            return Err(invalid("semi-major axis", self.semi_major_axis));
        }
        if !(self.eccentricity >= T::zero() && self.eccentricity < T::one()) {
            return Err(invalid("eccentricity", self.eccentricity));
        }
        for (name, angle) in [
            ("inclination", self.inclination),
            ("longitude of the ascending node", self.longitude_of_ascending_node),
            ("argument of periapsis", self.argument_of_periapsis),
            ("true anomaly", self.true_anomaly),
        ] {
            if !angle.is_finite() {
                return Err(invalid(name, angle));
            }
        }
        Ok(())
    }
}

// Orbits compare by size only.
impl<T: Scalar> PartialEq for Orbit<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.semi_major_axis == other.semi_major_axis
    }
}

impl<T: Scalar> PartialOrd for Orbit<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.semi_major_axis.partial_cmp(&other.semi_major_axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_MASS, PI};
    use approx::assert_relative_eq;

    type V = Vector3<f64>;
    type Q = Quaternion<f64>;

    fn assert_vec_eq(a: V, b: V, max_relative: f64) {
        let scale = a.magnitude().max(b.magnitude());
        assert!(
            V::distance(a, b) <= max_relative * scale,
            "{a:?} != {b:?}"
        );
    }

    fn assert_round_trip(parent_mass: f64, position: V, velocity: V) {
        let orbit = Orbit::from_state_vectors(parent_mass, position, velocity);
        let (p, v) = orbit.to_local_state_vectors();
        assert_vec_eq(p, position, 1e-9);
        assert_vec_eq(v, velocity, 1e-9);
    }

    #[test]
    fn default_orbit() {
        let orbit = Orbit::with_parent_mass(EARTH_MASS);
        assert_eq!(orbit.semi_major_axis, ASTRONOMICAL_UNIT);
        assert_eq!(orbit.eccentricity, 0.0);
        assert_eq!(orbit.true_anomaly, 0.0);
        assert_eq!(orbit.parent_mass(), EARTH_MASS);
        assert!(orbit.parent().is_none());
        assert_eq!(orbit.local_rotation(), Q::identity());
    }

    #[test]
    fn apsides() {
        let orbit = Orbit::new(1e20, 1000.0, 0.25, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(orbit.periapsis(), 750.0);
        assert_eq!(orbit.apoapsis(), 1250.0);
        assert_eq!(orbit.semi_latus_rectum(), 937.5);
    }

    #[test]
    fn local_rotation_is_node_inclination_periapsis() {
        let orbit = Orbit::new(1e20, 1000.0, 0.1, 0.4, 1.1, -0.7, 0.0);
        let expected = Q::angle_axis(1.1, V::up(), true)
            * Q::angle_axis(0.4, V::right(), true)
            * Q::angle_axis(-0.7, V::up(), true);
        assert_relative_eq!(Q::dot(orbit.local_rotation(), expected), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn periapsis_lies_along_rotated_x_axis() {
        let mut orbit = Orbit::new(3e13, 800.0, 0.3, 0.5, 2.0, 1.0, 0.0);
        orbit.evaluate_true_anomaly(0.0, 10);
        let (position, _) = orbit.to_local_state_vectors();
        assert_relative_eq!(position.magnitude(), orbit.periapsis(), max_relative = 1e-12);
        assert_vec_eq(
            position.normalized(),
            orbit.local_rotation() * V::right(),
            1e-12,
        );
    }

    #[test]
    fn state_vector_round_trips() {
        assert_round_trip(3e13, V::new(500.0, 0.0, 0.0), V::new(0.0, 2.0, 1.0));
        assert_round_trip(2e13, V::new(1000.0, 0.0, 0.0), V::new(0.0, 1.0, 0.5));
        assert_round_trip(3e13, V::new(-320.0, 410.0, 75.0), V::new(-1.1, -1.4, 0.6));
        assert_round_trip(3e13, V::new(120.0, -640.0, -300.0), V::new(1.5, 0.2, -0.3));
        assert_round_trip(EARTH_MASS, V::new(7.0e6, 1.0e5, -2.0e5), V::new(100.0, 7.4e3, 1.2e3));
    }

    #[test]
    fn equatorial_orbit_measures_periapsis_from_x() {
        let position = V::new(0.0, 600.0, 0.0);
        let velocity = V::new(-2.1, 0.0, 0.0);
        let orbit = Orbit::from_state_vectors(3e13, position, velocity);
        assert_eq!(orbit.inclination, 0.0);
        assert_eq!(orbit.longitude_of_ascending_node, 0.0);
        assert_relative_eq!(orbit.argument_of_periapsis, PI / 2.0, epsilon = 1e-9);
        assert_round_trip(3e13, position, velocity);
    }

    #[test]
    fn retrograde_equatorial_orbit_round_trips() {
        let position = V::new(300.0, 400.0, 0.0);
        let velocity = V::new(2.0, -1.0, 0.0);
        let orbit = Orbit::from_state_vectors(3e13, position, velocity);
        assert_relative_eq!(orbit.inclination, PI, epsilon = 1e-12);
        assert_round_trip(3e13, position, velocity);
    }

    #[test]
    fn circular_orbit_measures_anomaly_from_node() {
        let parent_mass: f64 = 3e13;
        let radius = 500.0;
        let speed = (calculate_gravitational_parameter(parent_mass) / radius).sqrt();
        // ascending node on +x, body a quarter turn past it
        let position = V::new(0.0, 0.0, radius);
        let velocity = V::new(-speed, 0.0, 0.0);
        let orbit = Orbit::from_state_vectors(parent_mass, position, velocity);

        assert!(orbit.eccentricity < 1e-12);
        assert_eq!(orbit.argument_of_periapsis, 0.0);
        assert_relative_eq!(orbit.inclination, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.true_anomaly, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.periapsis(), orbit.apoapsis(), max_relative = 1e-9);
        assert_relative_eq!(orbit.semi_major_axis, radius, max_relative = 1e-9);
        assert_round_trip(parent_mass, position, velocity);
    }

    #[test]
    fn circular_equatorial_orbit_measures_anomaly_from_x() {
        let parent_mass: f64 = 3e13;
        let radius = 500.0;
        let speed = (calculate_gravitational_parameter(parent_mass) / radius).sqrt();
        let position = V::new(-radius, 0.0, 0.0);
        let velocity = V::new(0.0, -speed, 0.0);
        let orbit = Orbit::from_state_vectors(parent_mass, position, velocity);

        assert_eq!(orbit.longitude_of_ascending_node, 0.0);
        assert_eq!(orbit.argument_of_periapsis, 0.0);
        assert_relative_eq!(orbit.true_anomaly, PI, epsilon = 1e-12);
        assert_round_trip(parent_mass, position, velocity);
    }

    #[test]
    fn zero_angular_momentum_defaults_inclination() {
        let orbit = Orbit::from_state_vectors(3e13, V::new(500.0, 0.0, 0.0), V::new(1.0, 0.0, 0.0));
        assert_eq!(orbit.inclination, 0.0);
        assert_eq!(orbit.longitude_of_ascending_node, 0.0);
        assert!(orbit.argument_of_periapsis.is_finite());
        assert!(orbit.true_anomaly.is_finite());
    }

    #[test]
    fn inverse_trig_arguments_are_clamped() {
        // periapsis sits on the node line: both cosines land on the edge of acos' domain
        let orbit = Orbit::from_state_vectors(3e13, V::new(500.0, 0.0, 0.0), V::new(0.0, 2.0, 1.0));
        assert_eq!(orbit.longitude_of_ascending_node, 0.0);
        assert!(orbit.argument_of_periapsis.is_finite());
        assert!(orbit.true_anomaly.is_finite());
        assert!(orbit.validate().is_ok());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut orbit = Orbit::new(3e13, 700.0, 0.4, 0.2, 0.3, 0.4, 0.0);
        orbit.evaluate_true_anomaly(123.0, 20);
        let first = orbit.true_anomaly;
        orbit.evaluate_true_anomaly(9999.0, 20);
        orbit.evaluate_true_anomaly(123.0, 20);
        assert_eq!(orbit.true_anomaly, first);
    }

    #[test]
    fn half_period_reaches_apoapsis() {
        let mut orbit = Orbit::new(3e13, 700.0, 0.4, 0.0, 0.0, 0.0, 0.0);
        orbit.evaluate_true_anomaly(orbit.period() / 2.0, 20);
        assert_relative_eq!(orbit.true_anomaly, PI, epsilon = 1e-9);
        let (position, _) = orbit.to_local_state_vectors();
        assert_relative_eq!(position.magnitude(), orbit.apoapsis(), max_relative = 1e-9);
    }

    #[test]
    fn global_rotation_composes_outermost_first() {
        let star = Orbit::new(1e30, 1e11, 0.1, 0.3, 0.5, 0.7, 0.0);
        let mut planet = Orbit::new(1e24, 4e8, 0.05, 0.2, 1.3, 2.1, 0.0);
        planet.set_parent(&star);
        let mut moon = Orbit::new(1e20, 1e6, 0.01, 0.9, 4.0, 0.4, 0.0);
        moon.set_parent(&planet);

        let expected = star.local_rotation() * planet.local_rotation() * moon.local_rotation();
        let actual = moon.global_rotation();
        assert_relative_eq!(actual.w, expected.w, epsilon = 1e-12);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
        assert_eq!(moon.depth(), 2);
        assert_eq!(star.global_rotation(), star.local_rotation());
    }

    #[test]
    fn copies_keep_their_parent() {
        let star = Orbit::with_parent_mass(1e30);
        let mut planet = Orbit::with_parent_mass(1e24);
        planet.set_parent(&star);
        let copy = planet;
        assert!(copy.parent().is_some());

        let mut cleared = copy;
        cleared.clear_parent();
        assert!(cleared.parent().is_none());
        assert!(copy.detached().parent().is_none());
        assert_eq!(copy.detached().semi_major_axis, copy.semi_major_axis);
    }

    #[test]
    fn global_state_vectors_add_parent_motion() {
        let star = Orbit::new(1e30, 1e11, 0.0, 0.0, 0.0, 0.0, 0.0);
        let mut planet = Orbit::new(1e24, 4e8, 0.0, 0.0, 0.0, 0.0, PI / 2.0);
        planet.set_parent(&star);

        let (star_position, star_velocity) = star.to_local_state_vectors();
        let (planet_position, planet_velocity) = planet.to_local_state_vectors();
        let (position, velocity) = planet.to_global_state_vectors();

        assert_vec_eq(position, star_position + planet_position, 1e-12);
        assert_vec_eq(velocity, star_velocity + planet_velocity, 1e-12);
        assert_relative_eq!(position.x, 1e11, max_relative = 1e-12);
        assert_relative_eq!(position.y, 4e8, max_relative = 1e-9);
    }

    #[test]
    fn ordering_uses_semi_major_axis() {
        let small = Orbit::new(1.0, 10.0, 0.9, 0.0, 0.0, 0.0, 0.0);
        let large = Orbit::new(1.0, 20.0, 0.0, 1.0, 0.0, 0.0, 0.0);
        assert!(small < large);
        assert!(large >= small);
        assert!(small <= Orbit::new(5.0, 10.0, 0.1, 0.0, 0.0, 0.0, 0.0));
        assert!(small == Orbit::new(5.0, 10.0, 0.1, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn validate_rejects_unsupported_regimes() {
        assert!(Orbit::new(1.0, 10.0, 0.5, 0.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert_eq!(
            Orbit::new(1.0, 10.0, 1.0, 0.0, 0.0, 0.0, 0.0).validate(),
            Err(OrbitError::InvalidElement {
                name: "eccentricity",
                value: 1.0
            })
        );
        assert!(Orbit::new(0.0, 10.0, 0.5, 0.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(Orbit::new(1.0, -10.0, 0.5, 0.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(Orbit::new(1.0, 10.0, 0.5, f64::NAN, 0.0, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn single_precision_orbit() {
        let position = Vector3::<f32>::new(500.0, 0.0, 0.0);
        let velocity = Vector3::<f32>::new(0.0, 2.0, 1.0);
        let mut orbit = Orbit::from_state_vectors(3e13_f32, position, velocity);
        orbit.evaluate_true_anomaly(0.0, 10);
        let (p, v) = orbit.to_local_state_vectors();
        assert!(Vector3::distance(p, position) < 1e-2);
        assert!(Vector3::distance(v, velocity) < 1e-4);
    }
}
