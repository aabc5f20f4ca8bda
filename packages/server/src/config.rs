use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use event_crawler::{CrawlConfig, EndDatePolicy, FetchConfig, Locale};
use std::env;
use std::time::Duration;

const DEFAULT_SOURCE_URL: &str = "https://ultimatecentral.com/";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Listing page crawled on every request
    pub source_url: String,
    pub node_selector: String,
    pub month_locale: Locale,
    pub end_date_policy: EndDatePolicy,
    pub fetch_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (used by `from_env` and tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let month_locale = lookup("MONTH_LOCALE").unwrap_or_else(|| "en_US".to_string());

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            source_url: lookup("EVENTS_SOURCE_URL")
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            node_selector: lookup("EVENT_NODE_SELECTOR")
                .unwrap_or_else(|| event_crawler::DEFAULT_NODE_SELECTOR.to_string()),
            month_locale: Locale::try_from(month_locale.as_str())
                .map_err(|_| anyhow!("MONTH_LOCALE '{}' is not a known locale", month_locale))?,
            end_date_policy: lookup("END_DATE_POLICY")
                .map(|v| v.parse::<EndDatePolicy>())
                .transpose()
                .map_err(|e| anyhow!(e))
                .context("END_DATE_POLICY must be 'lenient' or 'strict'")?
                .unwrap_or_default(),
            fetch_timeout: Duration::from_secs(
                lookup("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a valid number")?,
            ),
            user_agent: lookup("FETCH_USER_AGENT"),
        })
    }

    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::default()
            .with_locale(self.month_locale)
            .with_end_date_policy(self.end_date_policy)
    }

    pub fn fetch_config(&self) -> FetchConfig {
        let config = FetchConfig::default()
            .with_node_selector(self.node_selector.clone())
            .with_timeout(self.fetch_timeout);
        match &self.user_agent {
            Some(agent) => config.with_user_agent(agent.clone()),
            None => config,
        }
    }
}
