//! # International Standard Name Identifier
//!
//! `NameIdentifier` wraps a validated 16-character ISNI code.
//!
//! ## Format
//! ```text
//!   0000 0001 2135 4025      printed form (with spaces)
//!   0000000121354025         stored form: exactly 16 characters
//!
//!   Each character is an ASCII letter or digit; the final check character
//!   may be X.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{CatalogResult, ValidationError, ValidationResult};
use crate::links;

/// Number of characters in an ISNI code.
pub const ISNI_CODE_LENGTH: usize = 16;

const PARAM: &str = "isni_code";

/// A validated ISNI code identifying a book contributor.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::NameIdentifier;
///
/// let isni = NameIdentifier::new("0000000121354025").unwrap();
/// assert_eq!(isni.code(), "0000000121354025");
/// assert_eq!(
///     isni.uri().unwrap().as_str(),
///     "http://www.isni.org/isni/0000000121354025"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameIdentifier {
    code: String,
}

impl NameIdentifier {
    /// Parses and validates an ISNI code.
    ///
    /// ## Errors
    /// `InvalidFormat` when the code is not 16 characters long or contains a
    /// character that is neither a letter nor a digit.
    pub fn new(code: impl Into<String>) -> ValidationResult<Self> {
        let code = code.into();
        Self::validate_code(&code)?;
        Ok(NameIdentifier { code })
    }

    /// Returns the 16-character code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the contributor page on isni.org.
    pub fn uri(&self) -> CatalogResult<Url> {
        links::compose(links::ISNI_BASE_URL, &self.code)
    }

    fn validate_code(code: &str) -> ValidationResult<()> {
        if code.chars().count() != ISNI_CODE_LENGTH {
            return Err(ValidationError::invalid_format(
                PARAM,
                format!("must be exactly {ISNI_CODE_LENGTH} characters"),
            ));
        }

        // `X` is a letter, so the check character needs no special case.
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_format(
                PARAM,
                "must contain only letters and digits",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for NameIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for NameIdentifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NameIdentifier {
    type Error = ValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<NameIdentifier> for String {
    fn from(isni: NameIdentifier) -> String {
        isni.code
    }
}

impl AsRef<str> for NameIdentifier {
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
    fn test_valid_code() {
        let isni = NameIdentifier::new("0000000121354025").unwrap();
        assert_eq!(isni.code(), "0000000121354025");
        assert_eq!(isni.to_string(), "0000000121354025");
    }

    #[test]
    fn test_check_character_x() {
        let isni = NameIdentifier::new("000000012146438X").unwrap();
        assert_eq!(isni.code(), "000000012146438X");
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "   ", "000000012135402", "00000001213540256", "0000-00121354025"] {
            let err = NameIdentifier::new(code).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "expected InvalidFormat for {code:?}"
            );
            assert_eq!(err.param(), "isni_code");
        }
    }

    #[test]
    fn test_non_ascii_number_characters_are_rejected() {
        for code in ["000000012135402½", "000000012135402²", "000000012135402٣"] {
            let err = NameIdentifier::new(code).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "expected InvalidFormat for {code:?}"
            );
        }
    }

    #[test]
    fn test_uri() {
        let isni = NameIdentifier::new("0000000121354025").unwrap();
        assert_eq!(
            isni.uri().unwrap().as_str(),
            "http://www.isni.org/isni/0000000121354025"
        );
    }

    #[test]
    fn test_from_str_and_serde() {
        let isni: NameIdentifier = "0000000121354025".parse().unwrap();

        let json = serde_json::to_string(&isni).unwrap();
        assert_eq!(json, "\"0000000121354025\"");

        let back: NameIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, isni);

        assert!(serde_json::from_str::<NameIdentifier>("\"12345\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_wrong_length_is_rejected(code in "[0-9A-Z]{0,15}|[0-9A-Z]{17,40}") {
            let result = NameIdentifier::new(code);
            let is_invalid_format = matches!(result, Err(ValidationError::InvalidFormat { .. }));
            prop_assert!(is_invalid_format);
        }

        #[test]
        fn prop_sixteen_alphanumerics_are_accepted(code in "[A-Za-z0-9]{16}") {
            let isni = NameIdentifier::new(code.clone()).unwrap();
            prop_assert_eq!(isni.code(), code.as_str());
        }
    }
}
