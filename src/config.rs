use std::path::Path;

use crate::error::ConfigError;
use crate::kepler::DEFAULT_SOLVER_ITERATIONS;
use crate::vector::Vector3;

/// Initial state and sampling of a single orbit, as read from a TOML file.
///
/// ```toml
/// parent_mass = 2e13
/// position = { x = 1000.0, y = 0.0, z = 0.0 }
/// velocity = { x = 0.0, y = 1.0, z = 0.5 }
/// time_step = 5.0
/// steps = 1000
/// ```
///
/// Missing keys take their [`Default`] values.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// kg
    pub parent_mass: f64,
    /// s
    pub time_step: f64,
    pub steps: u32,
    pub solver_iterations: u32,
    /// m, relative to the parent
    pub position: Vector3<f64>,
    /// m/s, relative to the parent
    pub velocity: Vector3<f64>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            parent_mass: 2e13,
            time_step: 5.0,
            steps: 1000,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            position: Vector3::new(1000.0, 0.0, 0.0),
            velocity: Vector3::new(0.0, 1.0, 0.5),
        }
    }
}

impl Scenario {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let scenario: Self = toml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("loading scenario from {}", path.display());
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.parent_mass.is_finite() && self.parent_mass > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "parent_mass must be positive, got {}",
                self.parent_mass
            )));
        }
        if !(self.position.is_finite() && self.velocity.is_finite()) {
            return Err(ConfigError::Invalid("state vectors must be finite".to_string()));
        }
        if self.position.sqr_magnitude() == 0.0 {
            return Err(ConfigError::Invalid("position must not be the origin".to_string()));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}
