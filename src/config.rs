use std::{env, time::Duration};

use anyhow::Result;

pub const HACKER_NEWS_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Backoff policy applied to every item and comment fetch. The remote API is
/// rate-limited, so transient failures at fan-out scale are expected.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts per fetch unit, including the first one.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// How many top-ranked stories to process.
    pub top_items: usize,
    /// In-flight request bound for the story detail stage.
    pub item_permits: usize,
    /// How many stories have their comments resolved at once.
    pub comment_item_permits: usize,
    /// In-flight request bound within one story's children.
    pub comment_child_permits: usize,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
    pub base_url: String,
    pub items_path: String,
    pub statistics_path: String,
    pub averages_chart_path: String,
    pub hours_chart_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_items: 10,
            item_permits: 8,
            comment_item_permits: 4,
            comment_child_permits: 8,
            request_timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
            base_url: HACKER_NEWS_BASE_URL.to_string(),
            items_path: "top_stories.csv".to_string(),
            statistics_path: "statistics.csv".to_string(),
            averages_chart_path: "average_metrics.png".to_string(),
            hours_chart_path: "comment_hours.png".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let retry = RetryConfig {
            max_attempts: env::var("NEWSGLANCE_RETRY_MAX_ATTEMPTS")
                .unwrap_or("3".to_string())
                .parse()?,
            ..RetryConfig::default()
        };
        Ok(Self {
            top_items: env::var("NEWSGLANCE_TOP_ITEMS").unwrap_or("10".to_string()).parse()?,
            item_permits: env::var("NEWSGLANCE_ITEM_PERMITS").unwrap_or("8".to_string()).parse()?,
            comment_item_permits: env::var("NEWSGLANCE_COMMENT_ITEM_PERMITS")
                .unwrap_or("4".to_string())
                .parse()?,
            comment_child_permits: env::var("NEWSGLANCE_COMMENT_CHILD_PERMITS")
                .unwrap_or("8".to_string())
                .parse()?,
            request_timeout: Duration::from_secs(
                env::var("NEWSGLANCE_REQUEST_TIMEOUT_SECS")
                    .unwrap_or("10".to_string())
                    .parse()?,
            ),
            retry,
            base_url: env::var("NEWSGLANCE_BASE_URL").unwrap_or(HACKER_NEWS_BASE_URL.to_string()),
            ..Self::default()
        })
    }
}
