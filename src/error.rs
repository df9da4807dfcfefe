use thiserror::Error;

use crate::system::OrbitId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("no orbit with id {0:?}")]
    UnknownOrbit(OrbitId),

    #[error("making {parent:?} the parent of {child:?} would create a cycle")]
    Cycle { child: OrbitId, parent: OrbitId },

    #[error("global position of {0:?} does not fit a universal position")]
    Unrepresentable(OrbitId),

    #[error("invalid {name}: {value}")]
    InvalidElement { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}
