//! # Raw Records
//!
//! Flat, serde-friendly shapes for catalog data arriving from outside
//! (JSON files, form posts, TOML fixtures).
//!
//! ## Boundary Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON ──serde──► StoreItemRecord ──TryFrom──► BookStoreItem             │
//! │                   (Option fields)   │                                   │
//! │                                     ├── absent field → NullArgument     │
//! │                                     └── present field → full validation │
//! │                                                                         │
//! │  BookStoreItem ──From──► StoreItemRecord ──serde──► JSON                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are the only place a required value can be missing, so this is
//! where `NullArgument` is raised.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::author::BookAuthor;
use crate::binding::BookBindingKind;
use crate::error::{CatalogResult, ValidationError, ValidationResult};
use crate::isbn::BookNumber;
use crate::price::BookPrice;
use crate::publication::BookPublication;
use crate::store_item::BookStoreItem;
use crate::validation::require;

// =============================================================================
// Publication Record
// =============================================================================

/// Raw publication fields. An absent `isni_code` means the author has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PublicationRecord {
    pub author_name: Option<String>,
    #[serde(default)]
    pub isni_code: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    #[ts(as = "String")]
    pub published: NaiveDate,
    #[serde(default)]
    pub book_binding: BookBindingKind,
    pub isbn_code: Option<String>,
}

impl TryFrom<PublicationRecord> for BookPublication {
    type Error = ValidationError;

    fn try_from(record: PublicationRecord) -> ValidationResult<Self> {
        let author_name = require(record.author_name, "author_name")?;
        let title = require(record.title, "title")?;
        let publisher = require(record.publisher, "publisher")?;
        let isbn_code = require(record.isbn_code, "isbn_code")?;

        let author = match record.isni_code {
            Some(isni_code) => BookAuthor::with_isni_code(author_name, isni_code)?,
            None => BookAuthor::new(author_name)?,
        };
        let isbn = BookNumber::new(isbn_code)?;

        Ok(BookPublication::new(
            author,
            title,
            publisher,
            record.published,
            record.book_binding,
            isbn,
        ))
    }
}

impl From<&BookPublication> for PublicationRecord {
    fn from(publication: &BookPublication) -> Self {
        PublicationRecord {
            author_name: Some(publication.author().author_name().to_string()),
            isni_code: publication.author().isni().map(|isni| isni.code().to_string()),
            title: Some(publication.title().to_string()),
            publisher: Some(publication.publisher().to_string()),
            published: publication.published(),
            book_binding: publication.book_binding(),
            isbn_code: Some(publication.isbn().code().to_string()),
        }
    }
}

// =============================================================================
// Store Item Record
// =============================================================================

/// Raw store item fields.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::record::parse_store_item;
///
/// let item = parse_store_item(r#"{
///     "publication": {
///         "author_name": "Edgar Allan Poe",
///         "isni_code": "0000000121354025",
///         "title": "Complete Stories and Poems of Edgar Allan Poe",
///         "publisher": "Doubleday",
///         "published": "1966-11-18",
///         "book_binding": "hardcover",
///         "isbn_code": "0385074077"
///     },
///     "price_amount": "10.11",
///     "price_currency": "USD",
///     "amount": 3
/// }"#).unwrap();
///
/// assert_eq!(item.amount(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreItemRecord {
    pub publication: PublicationRecord,
    #[serde(with = "rust_decimal::serde::str")]
    #[ts(as = "String")]
    pub price_amount: Decimal,
    pub price_currency: Option<String>,
    pub amount: i32,
}

impl TryFrom<StoreItemRecord> for BookStoreItem {
    type Error = ValidationError;

    fn try_from(record: StoreItemRecord) -> ValidationResult<Self> {
        let publication = BookPublication::try_from(record.publication)?;
        let currency = require(record.price_currency, "currency")?;
        let price = BookPrice::new(record.price_amount, currency)?;
        BookStoreItem::new(publication, price, record.amount)
    }
}

impl From<&BookStoreItem> for StoreItemRecord {
    fn from(item: &BookStoreItem) -> Self {
        StoreItemRecord {
            publication: PublicationRecord::from(item.publication()),
            price_amount: item.price().amount(),
            price_currency: Some(item.price().currency().to_string()),
            amount: item.amount(),
        }
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Parses and validates a store item from JSON.
pub fn parse_store_item(json: &str) -> CatalogResult<BookStoreItem> {
    let record: StoreItemRecord = serde_json::from_str(json)?;
    BookStoreItem::try_from(record).map_err(|err| {
        debug!(param = err.param(), error = %err, "Rejected store item record");
        err.into()
    })
}

/// Renders a store item as a JSON record.
pub fn store_item_to_json(item: &BookStoreItem) -> CatalogResult<String> {
    Ok(serde_json::to_string(&StoreItemRecord::from(item))?)
}

// =============================================================================
// Unit Tests
// =============================================================================
