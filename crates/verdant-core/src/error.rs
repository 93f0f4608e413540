//! # Error Types
//!
//! Boundary error types for verdant-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  verdant-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → Frontend                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the cart itself has NO error type: its four transitions are
//! total functions. Absent ids degrade to no-ops and non-positive target
//! quantities degrade to removal. Anything that can actually go wrong
//! (malformed price strings, missing catalog fields, bad form input)
//! is rejected here, at the boundary, before it reaches the cart.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, reason)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input or a raw catalog record doesn't
/// meet requirements. Used for early validation before state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed price string, bad email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not (e.g., password confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::Mismatch {
            field: "confirm password".to_string(),
            other: "password".to_string(),
        };
        assert_eq!(err.to_string(), "confirm password does not match password");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a non-negative decimal amount".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price has invalid format: must be a non-negative decimal amount"
        );
    }
}
