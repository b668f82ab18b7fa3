//! Crate-level error types.

use std::fmt;

/// Errors produced by the cubeview crate.
///
/// Construction and metric errors signal broken invariants or collaborator
/// contract violations and are never recovered from. Preference errors are
/// reported by stores but swallowed by [`AppView`](crate::view::AppView).
#[derive(Debug)]
pub enum ViewError {
    /// A layout state field was missing or carried the wrong primitive type.
    InvalidFieldType {
        /// Field name as it appears in serialized form.
        field: &'static str,
        /// Expected primitive type (`"bool"` or `"number"`).
        expected: &'static str,
    },
    /// A layout state violated a visibility implication.
    InconsistentState(&'static str),
    /// A computed height or size was NaN, infinite or negative.
    InvalidMetric {
        /// Which metric failed validation.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A preference could not be read or written.
    Preferences(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldType { field, expected } => {
                write!(f, "invalid type for {field}: expected {expected}")
            }
            Self::InconsistentState(msg) => {
                write!(f, "inconsistent layout state: {msg}")
            }
            Self::InvalidMetric { name, value } => {
                write!(f, "invalid {name}: {value}")
            }
            Self::Preferences(msg) => write!(f, "preference error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reject NaN, infinite and negative values for a named metric.
pub(crate) fn check_metric(name: &'static str, value: f64) -> Result<f64, ViewError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ViewError::InvalidMetric { name, value })
    }
}

/// Reject NaN and infinite values for a named metric. Offsets may be negative.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, ViewError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewError::InvalidMetric { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = ViewError::InvalidFieldType {
            field: "footerOpen",
            expected: "bool",
        };
        assert_eq!(err.to_string(), "invalid type for footerOpen: expected bool");
    }

    #[test]
    fn check_metric_rejects_nan_and_negatives() {
        assert!(check_metric("footerHeight", 12.0).is_ok());
        assert!(check_metric("footerHeight", 0.0).is_ok());
        assert!(matches!(
            check_metric("footerHeight", f64::NAN),
            Err(ViewError::InvalidMetric { name: "footerHeight", .. })
        ));
        assert!(check_metric("footerHeight", f64::INFINITY).is_err());
        assert!(check_metric("footerHeight", -1.0).is_err());
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err = ViewError::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
    }
}
