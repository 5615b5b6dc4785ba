//! Error types with diagnostics using miette
//!
//! Geometry and layout never fail at call time; the only fallible surface is
//! building a configuration from host-supplied values.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building a configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    #[diagnostic(code(relgraph::config::non_finite))]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    #[diagnostic(code(relgraph::config::negative))]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    #[diagnostic(code(relgraph::config::not_positive))]
    NotPositive { field: &'static str, value: f64 },

    #[error("arrow overlap {overlap} does not fit inside arrow length {length}")]
    #[diagnostic(
        code(relgraph::config::arrow_too_short),
        help("the overlap must be smaller than the arrowhead length")
    )]
    ArrowTooShort { length: f64, overlap: f64 },

    #[error("invalid {field}: {source}")]
    #[diagnostic(code(relgraph::config::invalid_rect))]
    InvalidRect {
        field: &'static str,
        #[source]
        source: NumericError,
    },
}

impl ConfigError {
    /// Accept finite values that are zero or greater.
    pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
        if !value.is_finite() {
            Err(ConfigError::NonFinite { field, value })
        } else if value < 0.0 {
            Err(ConfigError::Negative { field, value })
        } else {
            Ok(value)
        }
    }

    /// Accept finite values strictly greater than zero.
    pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
        let value = Self::non_negative(field, value)?;
        if value == 0.0 {
            Err(ConfigError::NotPositive { field, value })
        } else {
            Ok(value)
        }
    }
}
