//! Variant engine error types.

use std::fmt;

use thiserror::Error;

/// Why an attribute could not be applied to a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No variant carries this dimension.
    UnknownDimension,
    /// The dimension exists but no variant carries this value for it.
    UnknownValue,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::UnknownDimension => "unknown dimension",
            InvalidReason::UnknownValue => "unknown value",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while loading a product or driving a selection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariantError {
    /// Caller tried to select a dimension or value the index does not know.
    ///
    /// The selection is left unchanged.
    #[error("Invalid attribute {dimension}={value}: {reason}")]
    InvalidAttribute {
        dimension: String,
        value: String,
        reason: InvalidReason,
    },

    /// Product record rejected during ingestion.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Product record could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VariantError {
    pub(crate) fn invalid_attribute(
        dimension: impl Into<String>,
        value: impl Into<String>,
        reason: InvalidReason,
    ) -> Self {
        VariantError::InvalidAttribute {
            dimension: dimension.into(),
            value: value.into(),
            reason,
        }
    }

    /// Check if this error came from an invalid selection attempt.
    pub fn is_invalid_attribute(&self) -> bool {
        matches!(self, VariantError::InvalidAttribute { .. })
    }
}

impl From<serde_json::Error> for VariantError {
    fn from(e: serde_json::Error) -> Self {
        VariantError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_attribute_message() {
        let err = VariantError::invalid_attribute("size", "XXL", InvalidReason::UnknownValue);
        assert_eq!(err.to_string(), "Invalid attribute size=XXL: unknown value");
        assert!(err.is_invalid_attribute());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: VariantError = json_err.into();
        assert!(matches!(err, VariantError::Serialization(_)));
        assert!(!err.is_invalid_attribute());
    }
}
