//! Gleaner: a polite single-page scraper
//!
//! This crate checks robots.txt before every fetch, retrieves a page with
//! bounded retry, parses it, and exposes a handful of extraction views
//! (headlines, links, images, keyword search, CSS selection, tag counting and
//! shallow wiki-link following). Results can be rendered or exported as CSV
//! or JSON.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Gleaner operations
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to {url} failed after {attempts} attempt(s): {source}")]
    Network {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("URL disallowed by robots.txt: {url}")]
    RobotsDenied { url: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Errors raised while building or querying a parsed document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content is not text: found NUL in the first {0} characters")]
    Binary(usize),

    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Result type alias for Gleaner operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Fetcher, FetchResult, ParsedDocument, Pipeline};
pub use extract::{ExtractionResult, Image, Link, PageSummary};
pub use robots::{RobotsDecision, RobotsGate};
