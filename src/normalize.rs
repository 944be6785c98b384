use serde::{Deserialize, Serialize};

/// A crawled social-network event record, as handed to us by the
/// ingestion pipeline. Either field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        EventRecord {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

/// The searchable text extracted from a record, or the degraded marker
/// for a record with no name at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchText {
    /// Lowercased `name + " " + description`.
    Text(String),
    /// The record had no name; classification short-circuits to a
    /// negative verdict with the `no-name` reason.
    NoName,
}

pub struct TextNormalizer;

impl TextNormalizer {
    /// Extract and lowercase the searchable text. Never fails: a missing
    /// description is treated as empty, a missing name yields the
    /// explicit degraded marker.
    pub fn normalize(record: &EventRecord) -> SearchText {
        match &record.name {
            None => {
                log::debug!("record has no name, degrading to no-name verdict");
                SearchText::NoName
            }
            Some(name) => {
                let description = record.description.as_deref().unwrap_or("");
                SearchText::Text(format!("{name} {description}").to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_joins_and_lowercases() {
        let record = EventRecord::new("Breaking Battle", "Judges ANNOUNCED");
        assert_eq!(
            TextNormalizer::normalize(&record),
            SearchText::Text("breaking battle judges announced".to_string())
        );
    }

    #[test]
    fn test_missing_description_is_empty() {
        let record = EventRecord {
            name: Some("Jam Session".to_string()),
            description: None,
        };
        assert_eq!(
            TextNormalizer::normalize(&record),
            SearchText::Text("jam session ".to_string())
        );
    }

    #[test]
    fn test_missing_name_degrades() {
        let record = EventRecord {
            name: None,
            description: Some("some event".to_string()),
        };
        assert_eq!(TextNormalizer::normalize(&record), SearchText::NoName);
    }

    #[test]
    fn test_record_deserializes_with_absent_fields() {
        let record: EventRecord = serde_json::from_str("{}").unwrap();
        assert!(record.name.is_none());
        assert!(record.description.is_none());

        let record: EventRecord =
            serde_json::from_str(r#"{"name": "Cypher Night"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Cypher Night"));
    }
}
