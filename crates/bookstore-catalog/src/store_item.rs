//! # Store Items
//!
//! A `BookStoreItem` is one inventory line: a publication, its price, and
//! the number of copies in stock.
//!
//! ## Display Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "{publication}, {price}, {amount}"                                     │
//! │                                                                         │
//! │  Tales by Edgar Allan Poe, 10.11 USD, 3                                 │
//! │  Tales by Edgar Allan Poe, "1,234.57 USD", 3   ← price has a comma,     │
//! │                                                  so it is quoted        │
//! │                                                                         │
//! │  Only a comma inside the rendered price triggers quoting; commas in    │
//! │  the title or author are left alone.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::binding::BookBindingKind;
use crate::error::ValidationResult;
use crate::price::BookPrice;
use crate::publication::BookPublication;
use crate::validation::validate_stock_amount;

/// Raw fields for [`BookStoreItem::from_fields`].
///
/// The author is always identified by an ISNI code on this path.
#[derive(Debug, Clone, Copy)]
pub struct StoreItemFields<'a> {
    pub author_name: &'a str,
    pub isni_code: &'a str,
    pub title: &'a str,
    pub publisher: &'a str,
    pub published: NaiveDate,
    pub book_binding: BookBindingKind,
    pub isbn_code: &'a str,
    pub price_amount: Decimal,
    pub price_currency: &'a str,
    pub amount: i32,
}

/// A book on the store's shelves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookStoreItem {
    publication: BookPublication,
    price: BookPrice,
    amount: i32,
}

impl BookStoreItem {
    /// Creates an item from a publication and a price.
    ///
    /// ## Errors
    /// `OutOfRange` on `amount` when it is negative.
    pub fn new(publication: BookPublication, price: BookPrice, amount: i32) -> ValidationResult<Self> {
        validate_stock_amount(amount, "amount")?;
        Ok(BookStoreItem {
            publication,
            price,
            amount,
        })
    }

    /// Creates an item from raw fields, building its own publication and price.
    ///
    /// ## Errors
    /// Any author, ISNI, ISBN, price or stock amount validation failure.
    pub fn from_fields(fields: StoreItemFields<'_>) -> ValidationResult<Self> {
        let publication = BookPublication::from_codes_with_isni(
            fields.author_name,
            fields.isni_code,
            fields.title,
            fields.publisher,
            fields.published,
            fields.book_binding,
            fields.isbn_code,
        )?;
        let price = BookPrice::new(fields.price_amount, fields.price_currency)?;
        Self::new(publication, price, fields.amount)
    }

    pub fn publication(&self) -> &BookPublication {
        &self.publication
    }

    pub fn price(&self) -> &BookPrice {
        &self.price
    }

    /// Returns the number of copies in stock.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn set_publication(&mut self, publication: BookPublication) {
        debug!(isbn = %publication.isbn(), "Replacing store item publication");
        self.publication = publication;
    }

    pub fn set_price(&mut self, price: BookPrice) {
        debug!(isbn = %self.publication.isbn(), price = %price, "Replacing store item price");
        self.price = price;
    }

    /// Replaces the stock amount.
    ///
    /// ## Errors
    /// `OutOfRange` on `amount` when it is negative; the item is unchanged.
    pub fn set_amount(&mut self, amount: i32) -> ValidationResult<()> {
        validate_stock_amount(amount, "amount")?;
        debug!(
            isbn = %self.publication.isbn(),
            from = self.amount,
            to = amount,
            "Updating stock amount"
        );
        self.amount = amount;
        Ok(())
    }
}

impl fmt::Display for BookStoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = self.price.to_string();
        if price.contains(',') {
            write!(f, "{}, \"{}\", {}", self.publication, price, self.amount)
        } else {
            write!(f, "{}, {}, {}", self.publication, price, self.amount)
        }
    }
}
