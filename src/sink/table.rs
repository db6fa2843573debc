use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Item, Statistics};

/// Column order of the items table.
pub const ITEM_FIELDS: [&str; 7] = ["id", "title", "url", "score", "author", "time", "num_comments"];

/// Writes one header row plus one row per item in rank order. Absent fields
/// become the empty string.
pub fn write_items(path: impl AsRef<Path>, items: &[Item]) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(ITEM_FIELDS)?;
    for item in items {
        writer.write_record([
            item.id.to_string(),
            item.title.clone().unwrap_or_default(),
            item.url.clone().unwrap_or_default(),
            item.score.map(|v| v.to_string()).unwrap_or_default(),
            item.by.clone().unwrap_or_default(),
            item.time.map(|v| v.to_string()).unwrap_or_default(),
            item.descendants.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the aggregate as a fixed two-column `metric,value` table.
pub fn write_statistics(path: impl AsRef<Path>, statistics: &Statistics) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["metric", "value"])?;
    let rows = [
        ("average_score", statistics.average_score.to_string()),
        ("average_comments", statistics.average_comments.to_string()),
        ("max_direct_children", statistics.max_direct_children.to_string()),
    ];
    for (metric, value) in rows {
        writer.write_record([metric, value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
