use std::error::Error;
use std::fmt;

use crate::BodyId;

/// Errors raised by sandbox operations. None of them are fatal: callers log
/// the error and keep the frame loop running.
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// A mass or radius that is not a finite positive number.
    InvalidValue {
        field: &'static str,
        input: String,
    },
    /// The id does not name a live body.
    NotFound(BodyId),
    /// Two bodies at zero separation, so the pair force is undefined.
    DegenerateGeometry(BodyId, BodyId),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SandboxError::InvalidValue { field, input } => {
                write!(f, "Invalid {} value: {:?}", field, input)
            }
            SandboxError::NotFound(id) => write!(f, "No body with id {}", id),
            SandboxError::DegenerateGeometry(a, b) => {
                write!(f, "Bodies {} and {} are at the same position", a, b)
            }
        }
    }
}

impl Error for SandboxError {}

/// Checks that `value` can be used as a mass or radius.
pub fn validate_positive(field: &'static str, value: f64) -> Result<f64, SandboxError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SandboxError::InvalidValue {
            field,
            input: value.to_string(),
        })
    }
}

/// Parses user text as a mass or radius.
pub fn parse_positive(field: &'static str, input: &str) -> Result<f64, SandboxError> {
    let invalid = || SandboxError::InvalidValue {
        field,
        input: input.to_string(),
    };
    let value: f64 = input.trim().parse().map_err(|_| invalid())?;
    validate_positive(field, value).map_err(|_| invalid())
}
