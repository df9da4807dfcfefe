//! Two-body orbital mechanics: vectors, rotation quaternions and Keplerian
//! orbits that convert to and from state vectors.

pub mod config;
pub mod constants;
pub mod error;
pub mod kepler;
pub mod orbit;
pub mod quaternion;
pub mod scalar;
pub mod system;
pub mod universal;
pub mod vector;

pub use config::Scenario;
pub use error::{ConfigError, OrbitError};
pub use orbit::Orbit;
pub use quaternion::Quaternion;
pub use scalar::Scalar;
pub use system::{OrbitId, OrbitSystem};
pub use universal::{UniversalPos, UniversalScalar};
pub use vector::Vector3;
