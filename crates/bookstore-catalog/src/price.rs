//! # Price Module
//!
//! Provides the `BookPrice` type: a non-negative decimal amount plus a
//! three-letter currency code.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    1234.565 as f64 is 1234.5649999...  → rounds to 1234.56  ❌          │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    1234.565 is stored exactly          → rounds to 1234.57  ✅          │
//! │    Midpoints round AWAY FROM ZERO, matching invariant formatting        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_catalog::BookPrice;
//! use rust_decimal::Decimal;
//!
//! let price = BookPrice::new(Decimal::new(1_234_567, 3), "USD").unwrap();
//! assert_eq!(price.to_string(), "1,234.57 USD");
//!
//! let free = BookPrice::default();
//! assert_eq!(free.to_string(), "0.00 USD");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use crate::error::ValidationResult;
use crate::validation::{validate_currency, validate_price_amount};

/// Currency used by [`BookPrice::default`].
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal places shown when a price is displayed.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Book Price
// =============================================================================

/// The price of a book.
///
/// Both fields can be replaced after construction; every replacement runs
/// the same validation as the constructor, and a rejected value leaves the
/// price unchanged.
///
/// ## Where BookPrice is Used
/// ```text
/// BookPrice ──► BookStoreItem.price ──► "Title by Author, 10.11 USD, 3"
///                                       "Title by Author, \"1,234.57 USD\", 3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookPrice {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
}

impl BookPrice {
    /// Creates a price from an amount and a currency code.
    ///
    /// ## Errors
    /// - `InvalidArgument` on `amount` when it is negative
    /// - `InvalidArgument` on `currency` unless it is exactly 3 letters
    pub fn new(amount: Decimal, currency: impl Into<String>) -> ValidationResult<Self> {
        let currency = currency.into();
        validate_price_amount(amount, "amount")?;
        validate_currency(&currency, "currency")?;
        Ok(BookPrice { amount, currency })
    }

    /// Returns the amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Replaces the amount.
    pub fn set_amount(&mut self, amount: Decimal) -> ValidationResult<()> {
        validate_price_amount(amount, "amount")?;
        self.amount = amount;
        Ok(())
    }

    /// Replaces the currency code.
    pub fn set_currency(&mut self, currency: impl Into<String>) -> ValidationResult<()> {
        let currency = currency.into();
        validate_currency(&currency, "currency")?;
        self.currency = currency;
        Ok(())
    }

    /// Formats the amount with two decimals and `,` thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_catalog::BookPrice;
    /// use rust_decimal::Decimal;
    ///
    /// let price = BookPrice::new(Decimal::new(123_456_789_345, 3), "USD").unwrap();
    /// assert_eq!(price.formatted_amount(), "123,456,789.35");
    /// ```
    pub fn formatted_amount(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        // Full-precision amounts cannot gain decimal places, so pad.
        let plain = rounded.to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        format!(
            "{}.{:0<width$}",
            group_thousands(integer),
            fraction,
            width = DISPLAY_DECIMAL_PLACES as usize
        )
    }
}

/// Inserts `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default price is zero US dollars.
impl Default for BookPrice {
    fn default() -> Self {
        BookPrice {
            amount: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Invariant-culture display: `1,234.57 USD`.
impl fmt::Display for BookPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted_amount(), self.currency)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
