//! # Catalog Configuration
//!
//! Configuration for pricing defaults and external link bases.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOOKSTORE_DEFAULT_CURRENCY=EUR                                     │
//! │     BOOKSTORE_ISNI_BASE_URL=https://isni.example/                      │
//! │     BOOKSTORE_ISBN_SEARCH_URL=https://search.example/isbn/             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/bookstore-catalog/catalog.toml (Linux)                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, isni.org, isbnsearch.org                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [pricing]
//! default_currency = "USD"
//!
//! [links]
//! isni_base_url = "http://www.isni.org/isni/"
//! isbn_search_base_url = "https://isbnsearch.org/isbn/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::isbn::BookNumber;
use crate::isni::NameIdentifier;
use crate::links::{self, ISBN_SEARCH_BASE_URL, ISNI_BASE_URL};
use crate::price::{BookPrice, DEFAULT_CURRENCY};
use crate::validation::validate_currency;

const ENV_DEFAULT_CURRENCY: &str = "BOOKSTORE_DEFAULT_CURRENCY";
const ENV_ISNI_BASE_URL: &str = "BOOKSTORE_ISNI_BASE_URL";
const ENV_ISBN_SEARCH_URL: &str = "BOOKSTORE_ISBN_SEARCH_URL";

// =============================================================================
// Pricing Settings
// =============================================================================

/// Pricing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Currency for prices created without an explicit one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            default_currency: default_currency(),
        }
    }
}

// =============================================================================
// Link Settings
// =============================================================================

/// Base URLs used to build identifier links. Each must end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSettings {
    #[serde(default = "default_isni_base_url")]
    pub isni_base_url: String,

    #[serde(default = "default_isbn_search_base_url")]
    pub isbn_search_base_url: String,
}

fn default_isni_base_url() -> String {
    ISNI_BASE_URL.to_string()
}

fn default_isbn_search_base_url() -> String {
    ISBN_SEARCH_BASE_URL.to_string()
}

impl Default for LinkSettings {
    fn default() -> Self {
        LinkSettings {
            isni_base_url: default_isni_base_url(),
            isbn_search_base_url: default_isbn_search_base_url(),
        }
    }
}

// =============================================================================
// Main Catalog Configuration
// =============================================================================

/// Complete catalog configuration.
///
/// ## Example
/// ```rust
/// use bookstore_catalog::CatalogConfig;
///
/// let config = CatalogConfig::from_toml_str(r#"
///     [pricing]
///     default_currency = "EUR"
/// "#).unwrap();
///
/// assert_eq!(config.default_price().to_string(), "0.00 EUR");
/// assert_eq!(config.links.isni_base_url, "http://www.isni.org/isni/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub links: LinkSettings,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. `BOOKSTORE_*` environment variables
    ///
    /// Each override is checked when applied, so a bad variable is reported
    /// by name rather than as the field it replaced.
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::read_file(&path)?,
            Some(path) => {
                debug!(?path, "Catalog config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        info!(
            default_currency = %config.pricing.default_currency,
            isni_base_url = %config.links.isni_base_url,
            isbn_search_base_url = %config.links.isbn_search_base_url,
            "Catalog config loaded"
        );
        Ok(config)
    }

    /// Loads config, falling back to defaults when the file or an override
    /// is invalid.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Invalid catalog config, using defaults");
                Self::default()
            }
        }
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// Environment overrides are not applied.
    pub fn from_toml_str(contents: &str) -> CatalogResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file.
    ///
    /// An invalid configuration is rejected before anything is written.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        self.validate()?;

        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        let contents = toml::to_string_pretty(self)?;
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, contents.as_bytes())
        };
        write(path.as_path())
            .map_err(|e| CatalogError::ConfigSaveFailed(format!("{}: {e}", path.display())))?;

        info!(?path, "Catalog config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_currency(&self.pricing.default_currency, "default_currency").map_err(|e| {
            CatalogError::InvalidConfig(format!("pricing.default_currency: {e}"))
        })?;

        validate_base_url("links.isni_base_url", &self.links.isni_base_url)?;
        validate_base_url("links.isbn_search_base_url", &self.links.isbn_search_base_url)?;

        Ok(())
    }

    fn read_file(path: &Path) -> CatalogResult<Self> {
        info!(?path, "Loading catalog config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ConfigLoadFailed(format!("{}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| CatalogError::ConfigLoadFailed(format!("{}: {e}", path.display())))
    }

    /// Applies `BOOKSTORE_*` overrides looked up through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F) -> CatalogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup(ENV_DEFAULT_CURRENCY) {
            validate_currency(&currency, "default_currency")
                .map_err(|e| CatalogError::InvalidConfig(format!("{ENV_DEFAULT_CURRENCY}: {e}")))?;
            debug!(currency = %currency, "Overriding default currency from environment");
            self.pricing.default_currency = currency;
        }

        if let Some(url) = lookup(ENV_ISNI_BASE_URL) {
            validate_base_url(ENV_ISNI_BASE_URL, &url)?;
            debug!(url = %url, "Overriding ISNI base URL from environment");
            self.links.isni_base_url = url;
        }

        if let Some(url) = lookup(ENV_ISBN_SEARCH_URL) {
            validate_base_url(ENV_ISBN_SEARCH_URL, &url)?;
            debug!(url = %url, "Overriding ISBN search URL from environment");
            self.links.isbn_search_base_url = url;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "bookstore", "bookstore-catalog")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns a zero price in the configured default currency.
    pub fn default_price(&self) -> BookPrice {
        BookPrice::new(rust_decimal::Decimal::ZERO, self.pricing.default_currency.as_str())
            .unwrap_or_default()
    }

    /// Builds the contributor link for an ISNI against the configured base.
    pub fn isni_uri(&self, isni: &NameIdentifier) -> CatalogResult<Url> {
        links::compose(&self.links.isni_base_url, isni.code())
    }

    /// Builds the search link for an ISBN against the configured base.
    pub fn isbn_search_uri(&self, isbn: &BookNumber) -> CatalogResult<Url> {
        links::compose(&self.links.isbn_search_base_url, isbn.code())
    }
}

fn validate_base_url(field: &str, value: &str) -> CatalogResult<()> {
    Url::parse(value).map_err(|e| CatalogError::InvalidConfig(format!("{field}: {e}")))?;

    if !value.ends_with('/') {
        return Err(CatalogError::InvalidConfig(format!(
            "{field} must end with '/', got: {value}"
        )));
    }

    Ok(())
}
