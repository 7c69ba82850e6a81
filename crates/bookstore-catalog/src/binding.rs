//! Book binding kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

/// The physical format of a book.
///
/// Discriminants are stable: `Unknown = 0`, `Paperback = 1`, `Hardcover = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum BookBindingKind {
    /// Binding is not known.
    #[default]
    Unknown = 0,
    /// Soft cover.
    Paperback = 1,
    /// Hard cover.
    Hardcover = 2,
}

impl BookBindingKind {
    /// Returns the stable numeric value.
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for BookBindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookBindingKind::Unknown => write!(f, "unknown"),
            BookBindingKind::Paperback => write!(f, "paperback"),
            BookBindingKind::Hardcover => write!(f, "hardcover"),
        }
    }
}

impl FromStr for BookBindingKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(BookBindingKind::Unknown),
            "paperback" | "softcover" => Ok(BookBindingKind::Paperback),
            "hardcover" | "hardback" => Ok(BookBindingKind::Hardcover),
            other => Err(ValidationError::invalid_argument(
                "book_binding",
                format!("unknown binding kind '{other}'"),
            )),
        }
    }
}

impl TryFrom<i32> for BookBindingKind {
    type Error = ValidationError;

    fn try_from(value: i32) -> ValidationResult<Self> {
        match value {
            0 => Ok(BookBindingKind::Unknown),
            1 => Ok(BookBindingKind::Paperback),
            2 => Ok(BookBindingKind::Hardcover),
            other => Err(ValidationError::invalid_argument(
                "book_binding",
                format!("no binding kind has value {other}"),
            )),
        }
    }
}
