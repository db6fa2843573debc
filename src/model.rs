use crate::service::ItemRecord;

/// Sentinel author for comments whose `by` field is absent.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// One ranked entry from the front page. Built in a single conversion from a
/// raw record and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub score: Option<i64>,
    pub by: Option<String>,
    /// Unix seconds.
    pub time: Option<i64>,
    /// Total descendant comment count as reported by the API.
    pub descendants: Option<i64>,
    pub kind: Option<String>,
    /// Ordered depth-1 child ids; an absent list normalizes to empty.
    pub kids: Vec<i64>,
}

impl Item {
    pub fn direct_children(&self) -> &[i64] {
        &self.kids
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            url: record.url,
            score: record.score,
            by: record.by,
            time: record.time,
            descendants: record.descendants,
            kind: record.type_,
            kids: record.kids.unwrap_or_default(),
        }
    }
}

/// One direct reply to an item. Only depth-1 replies are fetched.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Id of the owning item, always one fetched in the same run.
    pub item_id: i64,
    pub by: String,
    pub text: String,
    /// Unix seconds; absent timestamps are excluded from the hour histogram.
    pub time: Option<i64>,
}

impl Comment {
    pub fn from_record(item_id: i64, record: ItemRecord) -> Self {
        Self {
            item_id,
            by: record.by.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            text: record.text.unwrap_or_default(),
            time: record.time,
        }
    }
}

/// Aggregate metrics, recomputed from scratch every run.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub average_score: f64,
    pub average_comments: f64,
    pub max_direct_children: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> ItemRecord {
        ItemRecord {
            id,
            deleted: None,
            type_: None,
            by: None,
            time: None,
            text: None,
            dead: None,
            parent: None,
            kids: None,
            url: None,
            score: None,
            title: None,
            descendants: None,
        }
    }

    #[test]
    fn absent_kids_normalize_to_empty() {
        let item = Item::from(record(7));
        assert_eq!(item.id, 7);
        assert!(item.direct_children().is_empty());
        assert!(item.score.is_none());
    }

    #[test]
    fn comment_fields_default_when_absent() {
        let comment = Comment::from_record(7, record(8));
        assert_eq!(comment.item_id, 7);
        assert_eq!(comment.by, UNKNOWN_AUTHOR);
        assert_eq!(comment.text, "");
        assert!(comment.time.is_none());
    }

    #[test]
    fn present_comment_fields_are_kept() {
        let mut raw = record(8);
        raw.by = Some("pg".to_string());
        raw.text = Some("hello".to_string());
        raw.time = Some(1_700_000_000);
        let comment = Comment::from_record(7, raw);
        assert_eq!(comment.by, "pg");
        assert_eq!(comment.text, "hello");
        assert_eq!(comment.time, Some(1_700_000_000));
    }
}
