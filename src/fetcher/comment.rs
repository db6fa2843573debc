use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::{
    model::{Comment, Item},
    service::hacker_news::Client,
};

/// Resolves the direct children of every item: at most `item_permits` items
/// are processed at once, each with at most `child_permits` requests in
/// flight. The flat output is ordered by item order, then child order within
/// an item. One item's failure never blocks another's.
pub async fn fetch_all(
    client: &Client,
    items: &[Item],
    item_permits: usize,
    child_permits: usize,
) -> Result<Vec<Comment>> {
    let semaphore = Arc::new(Semaphore::new(item_permits));
    let mut handles = Vec::with_capacity(items.len());
    for item in items {
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        let item_id = item.id;
        let kids = item.direct_children().to_vec();
        handles.push(tokio::spawn(async move {
            let comments = fetch_children(&client, item_id, &kids, child_permits).await;
            drop(permit);
            comments
        }));
    }
    let mut comments = Vec::new();
    for (item, handle) in items.iter().zip(handles) {
        match handle.await? {
            Ok(mut fetched) => comments.append(&mut fetched),
            Err(e) => warn!(item_id = item.id, error = %e, "dropping comments for item"),
        }
    }
    info!(comments = comments.len(), "comment stage finished");
    Ok(comments)
}

/// Direct (depth-1) replies of a single item, in child order. An item with no
/// `kids` yields an empty list, which is a valid outcome.
pub async fn fetch_for_item(client: &Client, item: &Item, permits: usize) -> Result<Vec<Comment>> {
    fetch_children(client, item.id, item.direct_children(), permits).await
}

async fn fetch_children(
    client: &Client,
    item_id: i64,
    kids: &[i64],
    permits: usize,
) -> Result<Vec<Comment>> {
    if kids.is_empty() {
        return Ok(Vec::new());
    }
    let semaphore = Arc::new(Semaphore::new(permits));
    let mut handles = Vec::with_capacity(kids.len());
    for &kid in kids {
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let record = client.item(kid).await;
            drop(permit);
            record
        }));
    }
    let mut comments = Vec::with_capacity(kids.len());
    for (&kid, handle) in kids.iter().zip(handles) {
        match handle.await? {
            // A null, deleted, or dead child is an expected hole in the tree.
            Ok(Some(record)) if !record.is_tombstone() => {
                comments.push(Comment::from_record(item_id, record));
            }
            Ok(_) => debug!(id = kid, "skipping missing or deleted comment"),
            Err(e) => warn!(id = kid, error = %e, "dropping comment after failed fetch"),
        }
    }
    Ok(comments)
}
