//! Robots.txt parser implementation
//!
//! This module provides functionality for evaluating robots.txt content using the robotstxt crate.

use robotstxt::DefaultMatcher;

/// Blanket policy applied when no robots.txt body is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    AllowAll,
    DisallowAll,
}

/// Parsed robots.txt data
///
/// This is a wrapper around the robotstxt crate's matcher, providing a simplified
/// interface for checking if URLs are allowed.
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content (empty string means allow all)
    content: String,
    /// Policy that overrides the content when set
    fallback: Option<Fallback>,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            fallback: None,
        }
    }

    /// Creates a permissive ParsedRobots that allows everything
    ///
    /// This is used when robots.txt is missing, unreachable or returns a server error.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            fallback: Some(Fallback::AllowAll),
        }
    }

    /// Creates a ParsedRobots that denies everything
    ///
    /// This is used when robots.txt access itself is refused (401/403).
    pub fn disallow_all() -> Self {
        Self {
            content: String::new(),
            fallback: Some(Fallback::DisallowAll),
        }
    }

    /// Returns the raw robots.txt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// The longest matching rule wins; a URL no rule matches is allowed.
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to check (e.g., "https://example.com/page.html")
    /// * `user_agent` - The user agent token; `*` only matches the wildcard group
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        match self.fallback {
            Some(Fallback::AllowAll) => return true,
            Some(Fallback::DisallowAll) => return false,
            None => {}
        }

        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
