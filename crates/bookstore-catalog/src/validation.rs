//! # Validation Module
//!
//! Field validators shared by the catalog value objects.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Record boundary (record.rs)                                           │
//! │  └── require(): absent field → NullArgument                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Constructors and setters                                              │
//! │  ├── THIS MODULE: names, currencies, amounts                           │
//! │  └── isni.rs / isbn.rs: code format and checksum                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator takes the parameter name so the error identifies it.

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

/// Length of an ISO-4217 style currency code.
pub const CURRENCY_CODE_LENGTH: usize = 3;

// =============================================================================
// Presence
// =============================================================================

/// Unwraps a required value, failing with `NullArgument` when absent.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::validation::require;
///
/// assert_eq!(require(Some("Doubleday"), "publisher").unwrap(), "Doubleday");
/// assert!(require::<&str>(None, "publisher").is_err());
/// ```
pub fn require<T>(value: Option<T>, param: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::null_argument(param))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a string is neither empty nor whitespace only.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::validation::validate_not_blank;
///
/// assert!(validate_not_blank("Edgar Allan Poe", "author_name").is_ok());
/// assert!(validate_not_blank("   ", "author_name").is_err());
/// ```
pub fn validate_not_blank(value: &str, param: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::invalid_argument(
            param,
            "must not be empty or consist of white-space only",
        ));
    }

    Ok(())
}

/// Validates a currency code.
///
/// ## Rules
/// - Exactly 3 characters
/// - Every character is alphabetic
///
/// ## Example
/// ```rust
/// use bookstore_catalog::validation::validate_currency;
///
/// assert!(validate_currency("USD", "currency").is_ok());
/// assert!(validate_currency("123", "currency").is_err());
/// assert!(validate_currency("ABCD", "currency").is_err());
/// ```
pub fn validate_currency(currency: &str, param: &str) -> ValidationResult<()> {
    if currency.chars().count() != CURRENCY_CODE_LENGTH {
        return Err(ValidationError::invalid_argument(
            param,
            format!("must be exactly {CURRENCY_CODE_LENGTH} letters"),
        ));
    }

    if !currency.chars().all(char::is_alphabetic) {
        return Err(ValidationError::invalid_argument(
            param,
            "must contain only letters",
        ));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free books)
pub fn validate_price_amount(amount: Decimal, param: &str) -> ValidationResult<()> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::invalid_argument(
            param,
            "amount cannot be less than 0",
        ));
    }

    Ok(())
}

/// Validates a stock amount (number of copies on hand).
///
/// ## Example
/// ```rust
/// use bookstore_catalog::validation::validate_stock_amount;
///
/// assert!(validate_stock_amount(0, "amount").is_ok());
/// assert!(validate_stock_amount(-1, "amount").is_err());
/// ```
pub fn validate_stock_amount(amount: i32, param: &str) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value: i64::from(amount),
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
    fn test_require() {
        assert_eq!(require(Some(3), "amount").unwrap(), 3);

        let err = require::<String>(None, "title").unwrap_err();
        assert_eq!(err, ValidationError::null_argument("title"));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Doubleday", "publisher").is_ok());
        assert!(validate_not_blank(" x ", "publisher").is_ok());

        for blank in ["", " ", "\t\n"] {
            let err = validate_not_blank(blank, "author_name").unwrap_err();
            assert!(matches!(err, ValidationError::InvalidArgument { .. }));
            assert_eq!(err.param(), "author_name");
        }
    }

    #[test]
    fn test_validate_currency() {
        assert!(validate_currency("USD", "currency").is_ok());
        assert!(validate_currency("eur", "currency").is_ok());

        for invalid in ["", "   ", "123", "AB", "ABCD", "U1D"] {
            let err = validate_currency(invalid, "currency").unwrap_err();
            assert!(matches!(err, ValidationError::InvalidArgument { .. }));
            assert_eq!(err.param(), "currency");
        }
    }

    #[test]
    fn test_validate_price_amount() {
        assert!(validate_price_amount(Decimal::ZERO, "amount").is_ok());
        assert!(validate_price_amount(Decimal::new(1011, 2), "amount").is_ok());
        assert!(validate_price_amount(Decimal::new(-1, 0), "amount").is_err());
        assert!(validate_price_amount(Decimal::new(-1, 2), "amount").is_err());
    }

    #[test]
    fn test_validate_stock_amount() {
        assert!(validate_stock_amount(0, "amount").is_ok());
        assert!(validate_stock_amount(3, "amount").is_ok());

        let err = validate_stock_amount(-100_000, "amount").unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                param: "amount".to_string(),
                value: -100_000,
            }
        );
    }
}
