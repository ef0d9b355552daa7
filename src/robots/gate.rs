//! Robots.txt permission gate
//!
//! Fetches the origin's robots.txt on every check. Nothing is cached, so two
//! checks against the same origin issue two requests.

use crate::robots::ParsedRobots;
use crate::url::robots_url;
use reqwest::{Client, StatusCode};
use url::Url;

/// Outcome of a robots.txt permission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsDecision {
    /// Whether the URL may be fetched
    pub allowed: bool,
    /// The robots.txt location that was consulted
    pub robots_url: String,
}

/// Answers whether a URL may be fetched according to its origin's robots.txt
#[derive(Debug, Clone)]
pub struct RobotsGate {
    client: Client,
}

impl RobotsGate {
    /// Creates a gate that fetches robots.txt with the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and parses robots.txt for the origin of `url`
    ///
    /// | Response | Result |
    /// |----------|--------|
    /// | 2xx | Parsed body |
    /// | 401, 403 | Disallow all |
    /// | Other 4xx | Allow all |
    /// | 5xx, network error, unreadable body | Allow all |
    pub async fn fetch(&self, url: &Url) -> ParsedRobots {
        let location = robots_url(url);
        tracing::debug!("Fetching robots.txt from: {}", location);

        let response = match self.client.get(&location).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("robots.txt unreachable at {}: {}; assuming allowed", location, e);
                return ParsedRobots::allow_all();
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!("robots.txt returned {}, assuming everything disallowed", status);
            return ParsedRobots::disallow_all();
        }

        if status.is_client_error() {
            tracing::debug!("robots.txt returned {}, assuming allowed", status);
            return ParsedRobots::allow_all();
        }

        if !status.is_success() {
            tracing::warn!("robots.txt returned {}, assuming allowed", status);
            return ParsedRobots::allow_all();
        }

        match response.text().await {
            Ok(body) => ParsedRobots::from_content(&body),
            Err(e) => {
                tracing::warn!("Failed to read robots.txt body from {}: {}", location, e);
                ParsedRobots::allow_all()
            }
        }
    }

    /// Checks `url` against its origin's robots.txt for `user_agent`
    pub async fn check(&self, url: &Url, user_agent: &str) -> RobotsDecision {
        let robots = self.fetch(url).await;
        let allowed = robots.is_allowed(url.as_str(), user_agent);

        tracing::debug!(
            "robots.txt {} {} for agent '{}'",
            if allowed { "allows" } else { "disallows" },
            url,
            user_agent
        );

        RobotsDecision {
            allowed,
            robots_url: robots_url(url),
        }
    }

    /// Returns whether `user_agent` may fetch `url`
    pub async fn can_fetch(&self, url: &Url, user_agent: &str) -> bool {
        self.check(url, user_agent).await.allowed
    }
}
