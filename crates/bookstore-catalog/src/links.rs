//! External links for catalog identifiers.
//!
//! Links are composed from a base URL and a validated code. No request is
//! ever made; the result is only a `Url` value.

use url::Url;

use crate::error::CatalogResult;

/// Contributor page base on isni.org.
pub const ISNI_BASE_URL: &str = "http://www.isni.org/isni/";

/// Publication search base on isbnsearch.org.
pub const ISBN_SEARCH_BASE_URL: &str = "https://isbnsearch.org/isbn/";

/// Appends `code` to `base` and parses the result.
///
/// `base` is expected to end with `/`; config validation enforces this for
/// configured bases.
pub fn compose(base: &str, code: &str) -> CatalogResult<Url> {
    Ok(Url::parse(&format!("{base}{code}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_compose() {
        let uri = compose(ISNI_BASE_URL, "0000000121354025").unwrap();
        assert_eq!(uri.as_str(), "http://www.isni.org/isni/0000000121354025");

        let uri = compose(ISBN_SEARCH_BASE_URL, "1617294535").unwrap();
        assert_eq!(uri.as_str(), "https://isbnsearch.org/isbn/1617294535");
    }

    #[test]
    fn test_compose_rejects_relative_base() {
        let err = compose("isni/", "0000000121354025").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidUri(_)));
    }
}
