//! Unified error types for the domain layer
//!
//! Extraction and codec operations are total and never produce these errors.
//! They exist for the explicit, opt-in checks: strict hierarchy validation,
//! bounds construction, and parsing of configuration strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a location path with a gap in its hierarchy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects built from configuration strings)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for violated invariants.
    ///
    /// # Example
    /// ```ignore
    /// if min > max {
    ///     return Err(DomainError::validation("map bounds min exceeds max"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("planet set without system");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: planet set without system");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("expected 'min,max'");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: expected 'min,max'");
    }
}
