use chrono::{LocalResult, TimeZone, Timelike, Utc};

use crate::model::{Comment, Item, Statistics};

/// Computes the per-run aggregate from the finalized item set.
///
/// The average score divides by every fetched item, scored or not, while the
/// average comment count divides only by items that report a descendant
/// count. The asymmetry is the upstream contract and is kept as-is.
pub fn compute_statistics(items: &[Item]) -> Statistics {
    let score_sum: i64 = items.iter().filter_map(|item| item.score).sum();
    let average_score = if items.is_empty() {
        0.0
    } else {
        score_sum as f64 / items.len() as f64
    };
    let counts: Vec<i64> = items.iter().filter_map(|item| item.descendants).collect();
    let average_comments = if counts.is_empty() {
        0.0
    } else {
        counts.iter().sum::<i64>() as f64 / counts.len() as f64
    };
    let max_direct_children = items.iter().map(|item| item.direct_children().len()).max().unwrap_or(0);
    Statistics { average_score, average_comments, max_direct_children }
}

/// Buckets comment creation times by hour of day, fixed to UTC. Comments
/// without a timestamp are excluded; all 24 buckets are always present.
pub fn hour_histogram(comments: &[Comment]) -> [u64; 24] {
    let mut buckets = [0u64; 24];
    for comment in comments {
        let Some(time) = comment.time else { continue };
        if let LocalResult::Single(datetime) = Utc.timestamp_opt(time, 0) {
            buckets[datetime.hour() as usize] += 1;
        }
    }
    buckets
}
