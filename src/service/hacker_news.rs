use anyhow::Result;
use serde::de::DeserializeOwned;

use super::ItemRecord;
use crate::{
    config::{Config, RetryConfig},
    error::FetchError,
    retry,
};

/// Client for the Hacker News Firebase API. Cheap to clone; every clone
/// shares the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry.clone(),
        })
    }

    /// Ranked identifier list, in API order.
    /// See: https://github.com/HackerNews/API#new-top-and-best-stories
    pub async fn top_story_ids(&self) -> Result<Vec<i64>, FetchError> {
        retry::with_retry(&self.retry, || self.get_json::<Vec<i64>>("/topstories.json")).await
    }

    /// One detail record. A `null` body means the item does not exist or was
    /// deleted; that is an expected outcome, not an error.
    pub async fn item(&self, id: i64) -> Result<Option<ItemRecord>, FetchError> {
        let path = format!("/item/{id}.json");
        retry::with_retry(&self.retry, || self.get_json::<Option<ItemRecord>>(&path)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let endpoint = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| FetchError::from_reqwest(&endpoint, source))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status: status.as_u16() });
        }
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::from_reqwest(&endpoint, source))?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}
