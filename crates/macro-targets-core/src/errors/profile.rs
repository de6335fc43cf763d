// ABOUTME: Field-level validation errors for biometric profile input
// ABOUTME: Converts into AppError with the offending field recorded in context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Error Types
//!
//! Structured errors raised by the strict profile parser. Each variant names
//! the field that failed so UI callers can highlight it.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while validating a raw biometric profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Field was absent or blank
    #[error("Field '{field}' is required")]
    Missing {
        /// Name of the field
        field: &'static str,
    },
    /// Numeric field could not be parsed
    #[error("Field '{field}' must be a number, got '{value}'")]
    InvalidNumber {
        /// Name of the field
        field: &'static str,
        /// Raw value supplied by the caller
        value: String,
    },
    /// Numeric field parsed but is not a finite positive value
    #[error("Field '{field}' must be a finite positive number, got '{value}'")]
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// Raw value supplied by the caller
        value: String,
    },
    /// Categorical field holds an unknown key
    #[error("Field '{field}' has unrecognised value '{value}'")]
    UnknownCategory {
        /// Name of the field
        field: &'static str,
        /// Raw value supplied by the caller
        value: String,
    },
}

impl ProfileError {
    /// Create a "missing" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    /// Create an "invalid number" error
    #[must_use]
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Create an "out of range" error
    #[must_use]
    pub fn out_of_range(field: &'static str, value: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
        }
    }

    /// Create an "unknown category" error
    #[must_use]
    pub fn unknown_category(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            field,
            value: value.into(),
        }
    }

    /// Get the field associated with this error
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match *self {
            Self::Missing { field }
            | Self::InvalidNumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::UnknownCategory { field, .. } => field,
        }
    }

    /// Error code this variant maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Missing { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidNumber { .. } => ErrorCode::InvalidFormat,
            Self::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            Self::UnknownCategory { .. } => ErrorCode::UnknownCategory,
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        let details = match &error {
            ProfileError::Missing { .. } => serde_json::Value::Null,
            ProfileError::InvalidNumber { value, .. }
            | ProfileError::OutOfRange { value, .. }
            | ProfileError::UnknownCategory { value, .. } => serde_json::json!({ "value": value }),
        };
        Self::new(error.code(), error.to_string())
            .with_field(error.field())
            .with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_records_field_and_code() {
        let app: AppError = ProfileError::invalid_number("weight", "abc").into();
        assert_eq!(app.code, ErrorCode::InvalidFormat);
        assert_eq!(app.context.field.as_deref(), Some("weight"));
        assert_eq!(app.context.details["value"], "abc");
    }

    #[test]
    fn test_unknown_category_message() {
        let err = ProfileError::unknown_category("goal", "bulk");
        assert_eq!(err.field(), "goal");
        assert_eq!(err.to_string(), "Field 'goal' has unrecognised value 'bulk'");
    }

    #[test]
    fn test_messages_name_field_and_value() {
        assert_eq!(
            ProfileError::missing("height").to_string(),
            "Field 'height' is required"
        );
        assert_eq!(
            ProfileError::out_of_range("age", "0").to_string(),
            "Field 'age' must be a finite positive number, got '0'"
        );
        let source: &dyn std::error::Error = &ProfileError::invalid_number("age", "x");
        assert!(source.source().is_none());
    }
}
