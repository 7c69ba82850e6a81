//! # Error Types
//!
//! Error types for bookstore-catalog.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - a constructor or setter rejected its input         │
//! │  ├── NullArgument     required value absent                            │
//! │  ├── InvalidArgument  blank name, negative price, bad currency         │
//! │  ├── InvalidFormat    ISNI / ISBN length or characters                 │
//! │  ├── InvalidChecksum  ISBN-10 weighted sum not divisible by 11         │
//! │  └── OutOfRange       negative stock amount                            │
//! │                                                                         │
//! │  CatalogError     - everything else (URIs, configuration)              │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant of `ValidationError` names the parameter that failed.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously by constructors and setters. A value that fails
/// validation is never constructed, and a setter that fails leaves the
/// target unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value was absent.
    #[error("{param} is required")]
    NullArgument { param: String },

    /// A present value failed a structural or semantic rule.
    #[error("{param} is invalid: {reason}")]
    InvalidArgument { param: String, reason: String },

    /// A code has the wrong length or contains disallowed characters.
    #[error("{param} has invalid format: {reason}")]
    InvalidFormat { param: String, reason: String },

    /// An ISBN-10 code is well formed but its checksum does not hold.
    #[error("{param} '{code}' has an invalid checksum")]
    InvalidChecksum { param: String, code: String },

    /// A numeric value violated a non-negativity constraint.
    #[error("{param} cannot be negative, got {value}")]
    OutOfRange { param: String, value: i64 },
}

impl ValidationError {
    pub(crate) fn null_argument(param: &str) -> Self {
        ValidationError::NullArgument {
            param: param.to_string(),
        }
    }

    pub(crate) fn invalid_argument(param: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_format(param: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the parameter that failed validation.
    pub fn param(&self) -> &str {
        match self {
            ValidationError::NullArgument { param }
            | ValidationError::InvalidArgument { param, .. }
            | ValidationError::InvalidFormat { param, .. }
            | ValidationError::InvalidChecksum { param, .. }
            | ValidationError::OutOfRange { param, .. } => param,
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog errors outside plain input validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A URI could not be composed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A record could not be serialized or deserialized.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Configuration values are inconsistent.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUri(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationFailed(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}

impl CatalogError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_)
                | CatalogError::ConfigLoadFailed(_)
                | CatalogError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for constructors and setters.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for URI composition, record conversion and configuration.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
