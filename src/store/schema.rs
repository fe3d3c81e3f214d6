use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One lesson record. `extra` round-trips any fields the schema does not
/// interpret so a load-edit-save cycle never drops data written by other
/// tools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub group: String,
    pub title: String,
    pub words: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Entry {
    pub fn new(group: &str, title: &str, words: &[&str]) -> Self {
        Self {
            group: group.to_string(),
            title: title.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            extra: serde_json::Map::new(),
        }
    }

    /// List label: status icon, three spaces, `group → title`.
    pub fn label(&self) -> String {
        let icon = crate::words::Status::classify(&self.words).icon();
        format!("{icon}   {} \u{2192} {}", self.group, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_status_icon() {
        let empty = Entry::new("A", "T1", &[]);
        assert_eq!(empty.label(), "⚪   A → T1");

        let partial = Entry::new("B", "T2", &["x"]);
        assert_eq!(partial.label(), "🟡   B → T2");

        let complete = Entry::new("C", "T3", &["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(complete.label(), "🟢   C → T3");
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"group":"A","title":"T","words":["cat"],"notes":"keep me","level":3}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.words, vec!["cat".to_string()]);
        assert_eq!(entry.extra["notes"], "keep me");

        let out = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&out).unwrap();
        assert_eq!(back.extra["notes"], "keep me");
        assert_eq!(back.extra["level"], 3);
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        let json = r#"{"group":"A","words":[]}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
