use serde::Deserialize;

/// Main configuration structure for Gleaner
///
/// Every section is optional; missing sections and keys fall back to the
/// defaults below, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper, sent in the User-Agent header
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "Gleaner".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// `Name/Version`, or `Name/Version (+ContactURL)` when a contact URL is set.
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Retries after the first failed attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Fixed delay between attempts (milliseconds)
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 2000,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Robots.txt evaluation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Agent token matched against robots.txt groups
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            user_agent: "*".to_string(),
        }
    }
}
