// ABOUTME: Unified error types for the meal insight engine
// ABOUTME: Error codes, AppError constructors, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Meal Insights Project

//! # Unified Error Handling
//!
//! Centralized error types for the crate. Note that the user-facing pipeline
//! (profile resolution and report composition) is total by design and never
//! surfaces these errors to a caller; they exist for configuration validation,
//! algorithm-name parsing, and the composer's internal degradation path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    /// Numeric input outside its valid domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,

    /// Configuration contains invalid values
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,

    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a human-readable description of the error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input provided",
            Self::ValueOutOfRange => "Value is outside acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "Internal error",
        }
    }
}

/// Application error with a stable code and human-readable message
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its valid domain
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
