//! URL handling module for Gleaner
//!
//! Validates scrape targets and derives the robots.txt location for an origin.

use crate::UrlError;
use url::Url;

/// Parses and validates a scrape target
///
/// Only `http` and `https` URLs with a host are accepted.
///
/// # Examples
///
/// ```
/// use gleaner::url::parse_target;
///
/// let url = parse_target("https://en.wikipedia.org/wiki/Rust").unwrap();
/// assert_eq!(url.host_str(), Some("en.wikipedia.org"));
///
/// assert!(parse_target("ftp://example.com/file").is_err());
/// ```
pub fn parse_target(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Returns the robots.txt URL for the origin of `url`
///
/// The origin is scheme, host and (non-default) port; path, query and
/// fragment are discarded.
///
/// # Examples
///
/// ```
/// use gleaner::url::{parse_target, robots_url};
///
/// let url = parse_target("http://localhost:8080/wiki/Page?x=1").unwrap();
/// assert_eq!(robots_url(&url), "http://localhost:8080/robots.txt");
/// ```
pub fn robots_url(url: &Url) -> String {
    format!("{}/robots.txt", url.origin().ascii_serialization())
}
