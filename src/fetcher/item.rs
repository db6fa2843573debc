use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::{error::FetchError, model::Item, service::hacker_news::Client};

/// Fetches the ranked identifier list and truncates it to `limit`, keeping
/// API rank order. A failure here aborts the whole run.
pub async fn list_top_ids(client: &Client, limit: usize) -> Result<Vec<i64>, FetchError> {
    let mut ids = client.top_story_ids().await?;
    ids.truncate(limit);
    Ok(ids)
}

/// Resolves each id into an `Item` with at most `permits` requests in flight.
/// Output order always matches `ids`, not completion order: handles are
/// joined in spawn order. A failed or missing unit is dropped and logged
/// without disturbing its siblings.
pub async fn fetch_all(client: &Client, ids: &[i64], permits: usize) -> Result<Vec<Item>> {
    let semaphore = Arc::new(Semaphore::new(permits));
    let mut handles = Vec::with_capacity(ids.len());
    for &id in ids {
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let record = client.item(id).await;
            drop(permit);
            record
        }));
    }
    let mut items = Vec::with_capacity(ids.len());
    let mut dropped = 0usize;
    for (&id, handle) in ids.iter().zip(handles) {
        match handle.await? {
            Ok(Some(record)) if !record.is_tombstone() => items.push(Item::from(record)),
            Ok(_) => {
                debug!(id, "skipping missing or deleted item");
                dropped += 1;
            }
            Err(e) => {
                warn!(id, error = %e, "dropping item after failed fetch");
                dropped += 1;
            }
        }
    }
    info!(fetched = items.len(), dropped, "item stage finished");
    Ok(items)
}
