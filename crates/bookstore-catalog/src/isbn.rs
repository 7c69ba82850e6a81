//! # International Standard Book Number
//!
//! `BookNumber` wraps a validated 10-character ISBN code.
//!
//! ## Checksum
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ISBN-10 weighted checksum                                              │
//! │                                                                         │
//! │   code     1   6   1   7   2   9   4   5   3   5                        │
//! │   weight  10   9   8   7   6   5   4   3   2   1                        │
//! │   product 10  54   8  49  12  45  16  15   6   5   = 220                │
//! │                                                                         │
//! │   220 mod 11 == 0  → valid                                              │
//! │                                                                         │
//! │   `X` contributes 10 wherever it appears, not only in the last place.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{CatalogResult, ValidationError, ValidationResult};
use crate::links;

/// Number of characters in an ISBN-10 code.
pub const ISBN_CODE_LENGTH: usize = 10;

const PARAM: &str = "isbn_code";

/// Character standing for the value 10.
const TEN: char = 'X';

/// A validated ISBN-10 code.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::BookNumber;
///
/// let isbn = BookNumber::new("1617294535").unwrap();
/// assert_eq!(
///     isbn.search_uri().unwrap().as_str(),
///     "https://isbnsearch.org/isbn/1617294535"
/// );
///
/// // Same digits, wrong check digit
/// assert!(BookNumber::new("1617294534").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookNumber {
    code: String,
}

impl BookNumber {
    /// Parses and validates an ISBN-10 code.
    ///
    /// ## Errors
    /// - `InvalidFormat` when the code is blank, not 10 characters long, or
    ///   contains anything other than digits and `X`
    /// - `InvalidChecksum` when the format is valid but the weighted sum is
    ///   not divisible by 11
    pub fn new(code: impl Into<String>) -> ValidationResult<Self> {
        let code = code.into();

        Self::validate_code(&code)?;

        if !Self::validate_checksum(&code) {
            return Err(ValidationError::InvalidChecksum {
                param: PARAM.to_string(),
                code,
            });
        }

        Ok(BookNumber { code })
    }

    /// Returns the 10-character code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the publication page on isbnsearch.org.
    pub fn search_uri(&self) -> CatalogResult<Url> {
        links::compose(links::ISBN_SEARCH_BASE_URL, &self.code)
    }

    fn validate_code(code: &str) -> ValidationResult<()> {
        if code.trim().is_empty() {
            return Err(ValidationError::invalid_format(PARAM, "must not be empty"));
        }

        if code.chars().count() != ISBN_CODE_LENGTH {
            return Err(ValidationError::invalid_format(
                PARAM,
                format!("must be exactly {ISBN_CODE_LENGTH} characters"),
            ));
        }

        if !code.chars().all(|c| c.is_ascii_digit() || c == TEN) {
            return Err(ValidationError::invalid_format(
                PARAM,
                "must contain only digits and 'X'",
            ));
        }

        Ok(())
    }

    /// Expects a code that already passed `validate_code`.
    fn validate_checksum(code: &str) -> bool {
        let sum: u32 = code
            .chars()
            .zip((1..=ISBN_CODE_LENGTH as u32).rev())
            .map(|(c, weight)| weight * c.to_digit(10).unwrap_or(10))
            .sum();

        sum % 11 == 0
    }
}

impl fmt::Display for BookNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for BookNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BookNumber {
    type Error = ValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<BookNumber> for String {
    fn from(isbn: BookNumber) -> String {
        isbn.code
    }
}

impl AsRef<str> for BookNumber {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_codes() {
        for code in ["1617294535", "0385074077", "080442957X"] {
            let isbn = BookNumber::new(code).unwrap();
            assert_eq!(isbn.code(), code);
            assert_eq!(isbn.to_string(), code);
        }
    }

    #[test]
    fn test_wrong_checksum() {
        let err = BookNumber::new("1617294534").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidChecksum {
                param: "isbn_code".to_string(),
                code: "1617294534".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_format() {
        for code in ["", "   ", "161729453", "16172945345", "16172945x5", "161-729453"] {
            let err = BookNumber::new(code).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "expected InvalidFormat for {code:?}"
            );
            assert_eq!(err.param(), "isbn_code");
        }
    }

    /// `X` counts as 10 in any position.
    #[test]
    fn test_x_accepted_outside_last_position() {
        // 10*10 + 10*1 = 110
        let isbn = BookNumber::new("X00000000X").unwrap();
        assert_eq!(isbn.code(), "X00000000X");

        // 10*10 + 1*1 = 101
        assert!(matches!(
            BookNumber::new("X000000001"),
            Err(ValidationError::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn test_search_uri() {
        let isbn = BookNumber::new("1617294535").unwrap();
        assert_eq!(
            isbn.search_uri().unwrap().as_str(),
            "https://isbnsearch.org/isbn/1617294535"
        );
    }

    #[test]
    fn test_serde_rejects_invalid_code() {
        let isbn: BookNumber = serde_json::from_str("\"0385074077\"").unwrap();
        assert_eq!(isbn.code(), "0385074077");
        assert!(serde_json::from_str::<BookNumber>("\"0385074078\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_wrong_length_is_rejected(code in "[0-9]{0,9}|[0-9]{11,20}") {
            let result = BookNumber::new(code);
            let is_invalid_format = matches!(result, Err(ValidationError::InvalidFormat { .. }));
            prop_assert!(is_invalid_format);
        }

        /// Appending the correct check digit to any nine digits yields a valid code.
        #[test]
        fn prop_computed_check_digit_is_accepted(body in "[0-9]{9}") {
            let partial: u32 = body
                .chars()
                .zip((2..=10u32).rev())
                .map(|(c, weight)| weight * c.to_digit(10).unwrap())
                .sum();
            let check = (11 - partial % 11) % 11;
            let check = if check == 10 { 'X' } else { char::from_digit(check, 10).unwrap() };

            let code = format!("{body}{check}");
            prop_assert!(BookNumber::new(code).is_ok());
        }
    }
}
