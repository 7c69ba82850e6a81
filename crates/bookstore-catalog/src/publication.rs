//! # Book Publications
//!
//! A `BookPublication` ties an author and an ISBN to a title, publisher,
//! publication date and binding kind.
//!
//! ## Construction Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  from_codes(author_name, ..., isbn_code)                                │
//! │       │  BookAuthor::new + BookNumber::new                              │
//! │       ▼                                                                 │
//! │  from_codes_with_isni(author_name, isni_code, ..., isbn_code)  ──►  new │
//! │       │  BookAuthor::with_isni_code + BookNumber::new                   │
//! │       ▼                                                                 │
//! │  new(author, title, publisher, published, binding, isbn)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Title and publisher are stored as given; only their presence is checked,
//! and that check happens at the record boundary.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::author::BookAuthor;
use crate::binding::BookBindingKind;
use crate::error::ValidationResult;
use crate::isbn::BookNumber;

/// A published edition of a book.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::{BookBindingKind, BookPublication};
/// use chrono::NaiveDate;
///
/// let publication = BookPublication::from_codes(
///     "Edgar Allan Poe",
///     "Complete Stories and Poems of Edgar Allan Poe",
///     "Doubleday",
///     NaiveDate::from_ymd_opt(1966, 11, 18).unwrap(),
///     BookBindingKind::Hardcover,
///     "0385074077",
/// )
/// .unwrap();
///
/// assert_eq!(publication.publication_date_string(), "November, 1966");
/// assert_eq!(
///     publication.to_string(),
///     "Complete Stories and Poems of Edgar Allan Poe by Edgar Allan Poe"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookPublication {
    author: BookAuthor,
    title: String,
    publisher: String,
    published: NaiveDate,
    book_binding: BookBindingKind,
    isbn: BookNumber,
}

impl BookPublication {
    /// Creates a publication from validated parts.
    pub fn new(
        author: BookAuthor,
        title: impl Into<String>,
        publisher: impl Into<String>,
        published: NaiveDate,
        book_binding: BookBindingKind,
        isbn: BookNumber,
    ) -> Self {
        BookPublication {
            author,
            title: title.into(),
            publisher: publisher.into(),
            published,
            book_binding,
            isbn,
        }
    }

    /// Creates a publication whose author has no ISNI.
    pub fn from_codes(
        author_name: &str,
        title: &str,
        publisher: &str,
        published: NaiveDate,
        book_binding: BookBindingKind,
        isbn_code: &str,
    ) -> ValidationResult<Self> {
        let author = BookAuthor::new(author_name)?;
        let isbn = BookNumber::new(isbn_code)?;
        Ok(Self::new(author, title, publisher, published, book_binding, isbn))
    }

    /// Creates a publication whose author is identified by an ISNI code.
    pub fn from_codes_with_isni(
        author_name: &str,
        isni_code: &str,
        title: &str,
        publisher: &str,
        published: NaiveDate,
        book_binding: BookBindingKind,
        isbn_code: &str,
    ) -> ValidationResult<Self> {
        let author = BookAuthor::with_isni_code(author_name, isni_code)?;
        let isbn = BookNumber::new(isbn_code)?;
        Ok(Self::new(author, title, publisher, published, book_binding, isbn))
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn published(&self) -> NaiveDate {
        self.published
    }

    pub fn book_binding(&self) -> BookBindingKind {
        self.book_binding
    }

    pub fn isbn(&self) -> &BookNumber {
        &self.isbn
    }

    /// Returns the publication month and year, e.g. `"November, 1966"`.
    pub fn publication_date_string(&self) -> String {
        self.published.format("%B, %Y").to_string()
    }
}

impl fmt::Display for BookPublication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::isni::NameIdentifier;

    const AUTHOR: &str = "Edgar Allan Poe";
    const ISNI: &str = "0000000121354025";
    const TITLE: &str = "Complete Stories and Poems of Edgar Allan Poe";
    const PUBLISHER: &str = "Doubleday";
    const ISBN: &str = "0385074077";

    fn published() -> NaiveDate {
        NaiveDate::from_ymd_opt(1966, 11, 18).unwrap()
    }

    #[test]
    fn test_from_codes() {
        let publication = BookPublication::from_codes(
            AUTHOR,
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Hardcover,
            ISBN,
        )
        .unwrap();

        assert_eq!(publication.author().author_name(), AUTHOR);
        assert!(!publication.author().has_isni());
        assert_eq!(publication.title(), TITLE);
        assert_eq!(publication.publisher(), PUBLISHER);
        assert_eq!(publication.published(), published());
        assert_eq!(publication.book_binding(), BookBindingKind::Hardcover);
        assert_eq!(publication.isbn().code(), ISBN);
    }

    #[test]
    fn test_from_codes_with_isni() {
        let publication = BookPublication::from_codes_with_isni(
            AUTHOR,
            ISNI,
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Hardcover,
            ISBN,
        )
        .unwrap();

        assert!(publication.author().has_isni());
        assert_eq!(publication.author().isni().map(NameIdentifier::code), Some(ISNI));
        assert_eq!(
            publication.to_string(),
            "Complete Stories and Poems of Edgar Allan Poe by Edgar Allan Poe (ISNI:0000000121354025)"
        );
    }

    #[test]
    fn test_raw_and_prebuilt_paths_agree() {
        let from_codes = BookPublication::from_codes_with_isni(
            AUTHOR,
            ISNI,
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Paperback,
            ISBN,
        )
        .unwrap();

        let prebuilt = BookPublication::new(
            BookAuthor::with_isni_code(AUTHOR, ISNI).unwrap(),
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Paperback,
            BookNumber::new(ISBN).unwrap(),
        );

        assert_eq!(from_codes, prebuilt);
    }

    #[test]
    fn test_title_and_publisher_may_be_empty() {
        let publication = BookPublication::from_codes(
            AUTHOR,
            "",
            "",
            published(),
            BookBindingKind::Unknown,
            ISBN,
        )
        .unwrap();

        assert_eq!(publication.title(), "");
        assert_eq!(publication.to_string(), " by Edgar Allan Poe");
    }

    #[test]
    fn test_invalid_parts_propagate() {
        let err = BookPublication::from_codes(
            " ",
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Hardcover,
            ISBN,
        )
        .unwrap_err();
        assert_eq!(err.param(), "author_name");

        let err = BookPublication::from_codes(
            AUTHOR,
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Hardcover,
            "0385074078",
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidChecksum { .. }));
    }

    #[test]
    fn test_publication_date_string() {
        let publication = BookPublication::from_codes(
            AUTHOR,
            TITLE,
            PUBLISHER,
            published(),
            BookBindingKind::Hardcover,
            ISBN,
        )
        .unwrap();

        assert_eq!(publication.publication_date_string(), "November, 1966");
        assert_eq!(
            publication.to_string(),
            "Complete Stories and Poems of Edgar Allan Poe by Edgar Allan Poe"
        );
    }
}
