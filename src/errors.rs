// ABOUTME: Unified error handling system for the intake engine
// ABOUTME: Defines error codes, categories, and constructor helpers used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! # Unified Error Handling System
//!
//! Centralized error types for the metabolic analysis and diet-planning
//! engine. Every fallible entry point returns [`EngineError`], which carries
//! a machine-readable [`ErrorCode`] and a human-readable message. Codes fall
//! into two categories mirroring the engine's failure taxonomy: validation
//! failures (bad subject data) and configuration failures (bad engine
//! configuration). Both are fatal to the call that raised them; the engine
//! never returns a partial result.
//!
//! Safety concerns about an otherwise valid plan are *not* errors: they are
//! [`crate::models::SafetyFlag`] values attached to the plan itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3002,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
}

/// Failure class an [`ErrorCode`] belongs to
///
/// Collaborators branch on the category rather than individual codes: a
/// validation failure means the subject data needs correcting, a
/// configuration failure means the deployment is misconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Subject or goal input is out of domain
    Validation,
    /// The supplied engine configuration is unusable
    Configuration,
}

impl ErrorCode {
    /// Get the failure category for this error code
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => {
                ErrorCategory::Validation
            }
            Self::ConfigInvalid | Self::ConfigMissing => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Engine configuration is invalid",
            Self::ConfigMissing => "Required engine configuration is missing",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct EngineError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EngineError {
    /// Create a new `EngineError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the failure category for this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a missing required field error
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Create a value out of range error
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Create an invalid configuration error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Create a missing configuration error
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias using the unified error
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map_to_categories() {
        assert_eq!(
            ErrorCode::InvalidInput.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::ValueOutOfRange.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::ConfigInvalid.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let err = EngineError::invalid_input("weight must be positive");
        let rendered = err.to_string();
        assert!(rendered.contains("invalid"));
        assert!(rendered.contains("weight must be positive"));
    }

    #[test]
    fn test_error_code_serializes_to_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }
}
