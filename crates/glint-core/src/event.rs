//! The event data model.
//!
//! Events are immutable external records owned by whatever resolved them
//! (relay client, database, test fixture). This crate only reads them.

use serde::{Deserialize, Serialize};

/// An event tag: an ordered sequence of strings where position 0 is the
/// discriminator ("e", "a", "p", ...) and later positions are value,
/// relay hint, and marker. Positions are optional and may be empty.
pub type Tag = Vec<String>;

/// A signed, timestamped content record per NIP-01.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID (hex).
    pub id: String,
    /// Author public key (hex).
    pub pubkey: String,
    /// Unix timestamp of event creation.
    pub created_at: i64,
    /// Event kind number.
    pub kind: u16,
    /// Event tags as nested arrays.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Event content (text, JSON, etc.).
    #[serde(default)]
    pub content: String,
    /// Schnorr signature (hex).
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// First tag with the given discriminator and at least a value
    /// position. Tags shorter than 2 positions are treated as absent.
    pub fn first_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.len() >= 2 && t[0] == name)
    }

    /// Value (position 1) of the first tag with the given discriminator.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.first_tag(name).map(|t| t[1].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_tags(tags: Vec<Tag>) -> Event {
        Event {
            id: String::new(),
            pubkey: String::new(),
            created_at: 0,
            kind: 1,
            tags,
            content: String::new(),
            sig: String::new(),
        }
    }

    #[test]
    fn test_event_json_roundtrip() {
        let json = r#"{"id":"abc","pubkey":"def","created_at":1700000000,"kind":1,"tags":[["e","123","","reply"]],"content":"hello","sig":"00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, 1);
        assert_eq!(event.created_at, 1700000000);
        assert_eq!(event.tags.len(), 1);
        assert_eq!(event.tags[0][3], "reply");

        let back = serde_json::to_string(&event).unwrap();
        let again: Event = serde_json::from_str(&back).unwrap();
        assert_eq!(event, again);
    }

    #[test]
    fn test_event_json_missing_optional_fields() {
        let json = r#"{"id":"abc","pubkey":"def","created_at":0,"kind":7}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.tags.is_empty());
        assert!(event.content.is_empty());
        assert!(event.sig.is_empty());
    }

    #[test]
    fn test_first_tag_finds_match() {
        let event = event_with_tags(vec![
            vec!["p".to_string(), "aa".to_string()],
            vec!["a".to_string(), "34550:pk:community".to_string()],
        ]);
        assert_eq!(event.first_tag("a").unwrap()[1], "34550:pk:community");
        assert_eq!(event.tag_value("p"), Some("aa"));
    }

    #[test]
    fn test_first_tag_skips_short_tags() {
        // A bare ["a"] tag has no value position and must be invisible.
        let event = event_with_tags(vec![vec!["a".to_string()]]);
        assert!(event.first_tag("a").is_none());
        assert!(event.tag_value("a").is_none());
    }

    #[test]
    fn test_first_tag_none_when_absent() {
        let event = event_with_tags(vec![]);
        assert!(event.first_tag("e").is_none());
    }
}
