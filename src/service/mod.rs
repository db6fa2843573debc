pub mod hacker_news;

use serde::Deserialize;

/// Raw item record as returned by the detail endpoint. Every field except the
/// id may be absent; a deleted or dead record often carries nothing else.
/// See: https://github.com/HackerNews/API#items
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub deleted: Option<bool>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub by: Option<String>,
    pub time: Option<i64>,
    pub text: Option<String>,
    pub dead: Option<bool>,
    pub parent: Option<i64>,
    pub kids: Option<Vec<i64>>,
    pub url: Option<String>,
    pub score: Option<i64>,
    pub title: Option<String>,
    pub descendants: Option<i64>,
}

impl ItemRecord {
    /// Deleted and dead records are treated the same as a `null` body:
    /// skipped, not failed.
    pub fn is_tombstone(&self) -> bool {
        self.deleted.unwrap_or(false) || self.dead.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_decodes_with_defaults() {
        let record: ItemRecord = serde_json::from_str(r#"{"id": 1, "type": "comment"}"#).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.type_.as_deref(), Some("comment"));
        assert!(record.kids.is_none());
        assert!(!record.is_tombstone());
    }

    #[test]
    fn deleted_record_is_a_tombstone() {
        let record: ItemRecord = serde_json::from_str(r#"{"id": 1, "deleted": true}"#).unwrap();
        assert!(record.is_tombstone());
    }

    #[test]
    fn null_body_decodes_to_none() {
        let record: Option<ItemRecord> = serde_json::from_str("null").unwrap();
        assert!(record.is_none());
    }
}
