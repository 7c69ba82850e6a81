//! # bookstore-catalog: Validated Catalog Values for a Book Store
//!
//! This crate models the items a book store sells. Every value is validated
//! when it is built, so a value that exists is a valid one.
//!
//! ## Value Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       bookstore-catalog                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      BookStoreItem                              │   │
//! │  │        publication ─┐        price ─┐        amount (>= 0)      │   │
//! │  └─────────────────────┼───────────────┼───────────────────────────┘   │
//! │                        ▼               ▼                                │
//! │  ┌──────────────────────────────┐  ┌──────────────────┐                │
//! │  │       BookPublication        │  │    BookPrice     │                │
//! │  │  author ─┐  title, publisher │  │ Decimal + "USD"  │                │
//! │  │  published, binding, isbn ─┐ │  └──────────────────┘                │
//! │  └──────────┼─────────────────┼─┘                                      │
//! │             ▼                 ▼                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐                            │
//! │  │    BookAuthor    │  │    BookNumber    │                            │
//! │  │ name + ISNI?  ─┐ │  │  ISBN-10, mod 11 │                            │
//! │  └────────────────┼─┘  └──────────────────┘                            │
//! │                   ▼                                                     │
//! │  ┌──────────────────┐                                                   │
//! │  │  NameIdentifier  │   16-character ISNI                              │
//! │  └──────────────────┘                                                   │
//! │                                                                         │
//! │  Boundary: record (serde input) • config (TOML + environment)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`isni`] / [`isbn`] - Identifier codes
//! - [`author`], [`publication`], [`store_item`] - Catalog composites
//! - [`price`] - Decimal price with invariant display
//! - [`binding`] - Book binding kinds
//! - [`record`] - Raw serde records converted into validated values
//! - [`config`] - Pricing and link configuration
//! - [`error`] / [`validation`] - Error taxonomy and shared validators
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_catalog::{BookBindingKind, BookStoreItem, StoreItemFields};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let item = BookStoreItem::from_fields(StoreItemFields {
//!     author_name: "Edgar Allan Poe",
//!     isni_code: "0000000121354025",
//!     title: "Complete Stories and Poems of Edgar Allan Poe",
//!     publisher: "Doubleday",
//!     published: NaiveDate::from_ymd_opt(1966, 11, 18).unwrap(),
//!     book_binding: BookBindingKind::Hardcover,
//!     isbn_code: "0385074077",
//!     price_amount: Decimal::new(1011, 2),
//!     price_currency: "USD",
//!     amount: 3,
//! })
//! .unwrap();
//!
//! assert_eq!(item.price().to_string(), "10.11 USD");
//! assert_eq!(item.publication().publication_date_string(), "November, 1966");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod author;
pub mod binding;
pub mod config;
pub mod error;
pub mod isbn;
pub mod isni;
pub mod links;
pub mod price;
pub mod publication;
pub mod record;
pub mod store_item;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use author::BookAuthor;
pub use binding::BookBindingKind;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult, ValidationError, ValidationResult};
pub use isbn::BookNumber;
pub use isni::NameIdentifier;
pub use price::BookPrice;
pub use publication::BookPublication;
pub use record::{PublicationRecord, StoreItemRecord};
pub use store_item::{BookStoreItem, StoreItemFields};
