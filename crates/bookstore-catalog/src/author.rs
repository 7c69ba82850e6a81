//! Book authors.

use serde::Serialize;
use std::fmt;

use crate::error::ValidationResult;
use crate::isni::NameIdentifier;
use crate::validation::validate_not_blank;

const PARAM: &str = "author_name";

/// A book author, optionally identified by an ISNI.
///
/// Whether the author has an ISNI is derived from the identifier itself, so
/// the two can never disagree. Deserialize through [`crate::record`], which
/// validates the name.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::BookAuthor;
///
/// let poe = BookAuthor::with_isni_code("Edgar Allan Poe", "0000000121354025").unwrap();
/// assert!(poe.has_isni());
/// assert_eq!(poe.to_string(), "Edgar Allan Poe (ISNI:0000000121354025)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookAuthor {
    author_name: String,
    isni: Option<NameIdentifier>,
}

impl BookAuthor {
    /// Creates an author without an ISNI.
    ///
    /// ## Errors
    /// `InvalidArgument` when the name is empty or white-space only.
    pub fn new(author_name: impl Into<String>) -> ValidationResult<Self> {
        Self::build(author_name.into(), None)
    }

    /// Creates an author from a raw 16-character ISNI code.
    ///
    /// ## Errors
    /// Name failures as in [`BookAuthor::new`], then any `NameIdentifier`
    /// failure for the code.
    pub fn with_isni_code(
        author_name: impl Into<String>,
        isni_code: impl Into<String>,
    ) -> ValidationResult<Self> {
        let author_name = author_name.into();
        validate_not_blank(&author_name, PARAM)?;
        let isni = NameIdentifier::new(isni_code)?;
        Self::build(author_name, Some(isni))
    }

    /// Creates an author from an already validated identifier.
    pub fn with_isni(
        author_name: impl Into<String>,
        isni: NameIdentifier,
    ) -> ValidationResult<Self> {
        Self::build(author_name.into(), Some(isni))
    }

    fn build(author_name: String, isni: Option<NameIdentifier>) -> ValidationResult<Self> {
        validate_not_blank(&author_name, PARAM)?;
        Ok(BookAuthor { author_name, isni })
    }

    /// Returns the author's name.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns true if the author has an ISNI.
    pub fn has_isni(&self) -> bool {
        self.isni.is_some()
    }

    /// Returns the author's ISNI, if any.
    pub fn isni(&self) -> Option<&NameIdentifier> {
        self.isni.as_ref()
    }
}

impl fmt::Display for BookAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.isni {
            Some(isni) => write!(f, "{} (ISNI:{})", self.author_name, isni),
            None => f.write_str(&self.author_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const NAME: &str = "Edgar Allan Poe";
    const ISNI: &str = "0000000121354025";

    #[test]
    fn test_name_only() {
        let author = BookAuthor::new(NAME).unwrap();
        assert_eq!(author.author_name(), NAME);
        assert!(!author.has_isni());
        assert!(author.isni().is_none());
        assert_eq!(author.to_string(), NAME);
    }

    #[test]
    fn test_with_isni_code() {
        let author = BookAuthor::with_isni_code(NAME, ISNI).unwrap();
        assert_eq!(author.author_name(), NAME);
        assert!(author.has_isni());
        assert_eq!(author.isni().map(NameIdentifier::code), Some(ISNI));
        assert_eq!(author.to_string(), "Edgar Allan Poe (ISNI:0000000121354025)");
    }

    #[test]
    fn test_with_isni() {
        let isni = NameIdentifier::new(ISNI).unwrap();
        let author = BookAuthor::with_isni(NAME, isni).unwrap();
        assert!(author.has_isni());
        assert_eq!(author.to_string(), "Edgar Allan Poe (ISNI:0000000121354025)");
        assert_eq!(author, BookAuthor::with_isni_code(NAME, ISNI).unwrap());
    }

    #[test]
    fn test_blank_name_is_rejected_on_every_path() {
        let isni = NameIdentifier::new(ISNI).unwrap();
        let results = [
            BookAuthor::new("  "),
            BookAuthor::with_isni_code("", ISNI),
            BookAuthor::with_isni("\t", isni),
        ];

        for result in results {
            let err = result.unwrap_err();
            assert!(matches!(err, ValidationError::InvalidArgument { .. }));
            assert_eq!(err.param(), "author_name");
        }
    }

    #[test]
    fn test_invalid_isni_code_propagates() {
        let err = BookAuthor::with_isni_code(NAME, "000000012135402").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.param(), "isni_code");
    }

    #[test]
    fn test_blank_name_reported_before_isni() {
        let err = BookAuthor::with_isni_code(" ", "bad").unwrap_err();
        assert_eq!(err.param(), "author_name");
    }
}
