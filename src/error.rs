use thiserror::Error;

use crate::retry::IsRetryable;

/// Failure of a single fetch unit. A `null` detail body is not an error and
/// surfaces as `Ok(None)` from the client instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error fetching {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn from_reqwest(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { endpoint: endpoint.to_string() }
        } else {
            Self::Network { endpoint: endpoint.to_string(), source }
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Timeout { endpoint }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

impl IsRetryable for FetchError {
    fn is_retryable(&self) -> bool {
        // A malformed body will not fix itself on a retry; everything else is
        // a transient transport or rate-limit condition.
        !matches!(self, Self::Decode { .. })
    }
}
