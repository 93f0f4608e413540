//! # Validation Module
//!
//! Input validation at the command boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field validation                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The cart itself needs NO validation layer - its four        │
//! │  transitions are total. Everything that can go wrong is caught here.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Monetary strings are the most important case: [`crate::money::Money::parse`]
//! is called once per catalog record and never at summation time.

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Catalog Field Validators
// =============================================================================

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most 64 characters
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a catalog item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a menu search query.
///
/// ## Rules
/// - Can be empty (returns all/default results)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Account Field Validators
// =============================================================================

/// Validates an email address shape.
///
/// Not RFC 5322 - the auth flow performs no real credential checks, so a
/// cheap "looks like user@host.tld" gate is all the boundary needs.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let looks_like_email = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if !looks_like_email {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates a password field.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least 8 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < 8 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        });
    }

    Ok(())
}

/// Validates that the confirmation field matches the password.
pub fn validate_password_confirmation(password: &str, confirm: &str) -> ValidationResult<()> {
    if password != confirm {
        return Err(ValidationError::Mismatch {
            field: "confirm password".to_string(),
            other: "password".to_string(),
        });
    }

    Ok(())
}

/// Validates a user display name.
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("1").is_ok());
        assert!(validate_item_id("salmon-4").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Caesar Salad").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  salmon ").unwrap(), "salmon");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john.doe@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("john@nodot").is_err());
        assert!(validate_email("john@.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_password_confirmation() {
        assert!(validate_password_confirmation("secret-123", "secret-123").is_ok());
        assert!(validate_password_confirmation("secret-123", "secret-124").is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("John Doe").is_ok());
        assert!(validate_display_name("  ").is_err());
        assert!(validate_display_name(&"n".repeat(101)).is_err());
    }
}
