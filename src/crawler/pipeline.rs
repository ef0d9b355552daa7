//! Permission-checked fetch-and-extract pipeline
//!
//! Each entry point handles one user action end to end:
//! 1. Validates the target URL
//! 2. Checks robots.txt (re-fetched every time)
//! 3. Fetches the page with bounded retry
//! 4. Parses it and runs one extraction
//!
//! Nothing survives between calls; the parsed document is dropped when the
//! entry point returns.

use crate::config::Config;
use crate::crawler::document::{compile_selector, ParsedDocument};
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::extract::{self, ExtractionResult, PageSummary};
use crate::robots::{RobotsDecision, RobotsGate};
use crate::url::parse_target;
use crate::GleanError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One entry point per scraping feature, all gated on robots.txt
#[derive(Debug, Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    robots: RobotsGate,
    robots_agent: String,
    max_retries: u32,
}

impl Pipeline {
    /// Creates a pipeline with an HTTP client built from `config`
    pub fn new(config: &Config) -> Result<Self, GleanError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a pipeline around an existing client
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            fetcher: Fetcher::new(
                client.clone(),
                Duration::from_millis(config.fetch.retry_delay_ms),
            ),
            robots: RobotsGate::new(client),
            robots_agent: config.robots.user_agent.clone(),
            max_retries: config.fetch.max_retries,
        }
    }

    /// Reports whether robots.txt lets the configured agent fetch `url`
    pub async fn check(&self, url: &str) -> Result<RobotsDecision, GleanError> {
        let target = parse_target(url)?;
        Ok(self.robots.check(&target, &self.robots_agent).await)
    }

    /// Headlines, links and images of the page
    pub async fn extract_all(&self, url: &str) -> Result<PageSummary, GleanError> {
        tracing::info!("Extracting headlines, links and images from {}", url);
        let doc = self.fetch_document(url).await?;
        Ok(extract::extract_all(&doc))
    }

    /// Links of the page
    pub async fn extract_links(&self, url: &str) -> Result<ExtractionResult, GleanError> {
        tracing::info!("Extracting links from {}", url);
        let doc = self.fetch_document(url).await?;
        Ok(extract::links(&doc))
    }

    /// Body text nodes containing `keyword`, ignoring case
    pub async fn search_text(
        &self,
        url: &str,
        keyword: &str,
    ) -> Result<ExtractionResult, GleanError> {
        tracing::info!("Searching {} for '{}'", url, keyword);
        let doc = self.fetch_document(url).await?;
        Ok(extract::search_text(&doc, keyword))
    }

    /// Elements matching a CSS selector
    ///
    /// The selector is compiled before any request is made, so a malformed
    /// selector fails without touching the network.
    pub async fn select(&self, url: &str, css: &str) -> Result<ExtractionResult, GleanError> {
        let selector = compile_selector(css)?;
        tracing::info!("Selecting '{}' on {}", css, url);
        let doc = self.fetch_document(url).await?;
        Ok(ExtractionResult::Selection(doc.select_compiled(&selector)))
    }

    /// Number of `tag` elements on the page
    pub async fn count_elements(&self, url: &str, tag: &str) -> Result<ExtractionResult, GleanError> {
        tracing::info!("Counting <{}> elements on {}", tag, url);
        let doc = self.fetch_document(url).await?;
        Ok(extract::count_elements(&doc, tag))
    }

    /// Wiki-style links of the page
    ///
    /// A negative depth returns nothing without any request, robots.txt
    /// included. Any other depth fetches the page once; links are never
    /// followed past that first hop.
    pub async fn follow_links(&self, url: &str, depth: i64) -> Result<ExtractionResult, GleanError> {
        if depth < 0 {
            tracing::debug!("Negative depth {}, not following links from {}", depth, url);
            return Ok(ExtractionResult::FollowedLinks(Vec::new()));
        }

        tracing::info!("Following wiki links from {} (depth {})", url, depth);
        let doc = self.fetch_document(url).await?;
        Ok(extract::wiki_links(&doc))
    }

    /// Validates `url` and fails with `RobotsDenied` when robots.txt forbids it
    async fn ensure_allowed(&self, url: &str) -> Result<Url, GleanError> {
        let target = parse_target(url)?;

        if !self.robots.can_fetch(&target, &self.robots_agent).await {
            tracing::info!("URL {} disallowed by robots.txt", target);
            return Err(GleanError::RobotsDenied {
                url: target.to_string(),
            });
        }

        Ok(target)
    }

    /// Gate, fetch and parse
    ///
    /// Only a 200 response is parsed.
    async fn fetch_document(&self, url: &str) -> Result<ParsedDocument, GleanError> {
        let target = self.ensure_allowed(url).await?;
        let fetched = self.fetcher.get(&target, self.max_retries).await?;

        if fetched.status_code != 200 {
            return Err(GleanError::UnexpectedStatus {
                url: fetched.final_url,
                status: fetched.status_code,
            });
        }

        tracing::debug!(
            "Fetched {} bytes from {}",
            fetched.body.len(),
            fetched.final_url
        );

        ParsedDocument::parse(&fetched.body, fetched.content_type.as_deref()).map_err(|e| {
            GleanError::HtmlParse {
                url: fetched.final_url,
                message: e.to_string(),
            }
        })
    }
}
