//! Configuration types for fetching and crawling.

use chrono::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Date formats tried, in order, for each token of a date range.
///
/// chrono accepts full or abbreviated month names for `%B`.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B, %Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
];

/// CSS selector for event headings on the listing page.
pub const DEFAULT_NODE_SELECTOR: &str = "h4.event-name";

/// What to do with an end date that does not parse or precedes the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndDatePolicy {
    /// Leave the end date unset and log a warning
    #[default]
    Lenient,
    /// Fail the node
    Strict,
}

impl FromStr for EndDatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown end date policy '{}' (expected 'lenient' or 'strict')",
                other
            )),
        }
    }
}

/// Configuration for turning heading nodes into event records.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Locale used to render month names in month labels.
    ///
    /// Default: `en_US`.
    pub locale: Locale,

    /// Date formats tried for each date token.
    pub date_formats: Vec<String>,

    /// Handling of bad end dates.
    pub end_date_policy: EndDatePolicy,

    /// Fail nodes whose location carries no flag indicator.
    ///
    /// When false, such nodes produce a record without a country code.
    /// Default: true.
    pub require_country: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            end_date_policy: EndDatePolicy::default(),
            require_country: true,
        }
    }
}

impl CrawlConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the month-name locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the date formats.
    pub fn with_date_formats(mut self, formats: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.date_formats = formats.into_iter().map(|f| f.into()).collect();
        self
    }

    /// Set the end date policy.
    pub fn with_end_date_policy(mut self, policy: EndDatePolicy) -> Self {
        self.end_date_policy = policy;
        self
    }

    /// Set whether a flag indicator is required.
    pub fn with_require_country(mut self, require: bool) -> Self {
        self.require_country = require;
        self
    }
}

/// Configuration for fetching the listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// CSS selector matching event headings
    pub node_selector: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent sent with requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            node_selector: DEFAULT_NODE_SELECTOR.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("event-crawler/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_selector(mut self, selector: impl Into<String>) -> Self {
        self.node_selector = selector.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_date_policy_from_str() {
        assert_eq!("strict".parse::<EndDatePolicy>(), Ok(EndDatePolicy::Strict));
        assert_eq!(" Lenient ".parse::<EndDatePolicy>(), Ok(EndDatePolicy::Lenient));
        assert!("sloppy".parse::<EndDatePolicy>().is_err());
    }

    #[test]
    fn test_crawl_config_builder() {
        let config = CrawlConfig::new()
            .with_locale(Locale::fr_FR)
            .with_date_formats(["%Y/%m/%d"])
            .with_end_date_policy(EndDatePolicy::Strict)
            .with_require_country(false);

        assert_eq!(config.locale, Locale::fr_FR);
        assert_eq!(config.date_formats, vec!["%Y/%m/%d".to_string()]);
        assert_eq!(config.end_date_policy, EndDatePolicy::Strict);
        assert!(!config.require_country);
    }

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.node_selector, "h4.event-name");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("event-crawler/"));
    }
}
