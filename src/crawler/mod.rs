//! Crawler module for page fetching and parsing
//!
//! This module contains the fetch side of the scraper, including:
//! - HTTP fetching with retry logic
//! - HTML parsing into a queryable document
//! - The robots-gated pipeline that ties them to the extractors

mod document;
mod fetcher;
mod pipeline;

pub use document::{compile_selector, decode_body, ParsedDocument};
pub use fetcher::{build_http_client, Fetcher, FetchResult};
pub use pipeline::Pipeline;
