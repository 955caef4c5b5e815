//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors: rejected building input and unsupported tree operations.
///
/// Degenerate geometry is never an error; it normalizes to an empty building.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid building: blank input can not be parsed to a building")]
    BlankInput,

    #[error("invalid building: values must not be negative: '{0}'")]
    NegativeValues(String),

    #[error("invalid building: '{0}' does not match [start,end,height]")]
    Unparseable(String),

    #[error("invalid building: height {height} is flat or below ground")]
    FlatBuilding { height: f64 },

    #[error("invalid building: start {start} must be at most end {end}")]
    StartAfterEnd { start: f64, end: f64 },

    #[error("skyline balancing is not implemented")]
    BalancingNotImplemented,
}

impl DomainError {
    /// True for every variant produced by the building parser.
    pub fn is_invalid_building(&self) -> bool {
        !matches!(self, DomainError::BalancingNotImplemented)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
