/// Word count at which an entry counts as complete. Also the trigger
/// for auto-advancing to the next entry after a save.
pub const TARGET_WORD_COUNT: usize = 8;

/// Derived completion state of an entry's word list. Never stored;
/// recomputed from the word count on every render and after every save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Empty,
    Partial,
    Complete,
}

impl Status {
    pub fn classify(words: &[String]) -> Self {
        match words.len() {
            0 => Status::Empty,
            n if n < TARGET_WORD_COUNT => Status::Partial,
            _ => Status::Complete,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Status::Empty => "\u{26aa}",    // ⚪
            Status::Partial => "\u{1f7e1}", // 🟡
            Status::Complete => "\u{1f7e2}", // 🟢
        }
    }
}

/// Split a comma-separated line into words: trim each piece, drop
/// pieces that trim to empty, keep order. Duplicates are allowed.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display form of a word list for the editor line.
pub fn join_list(words: &[String]) -> String {
    words.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_empty() {
        assert_eq!(Status::classify(&[]), Status::Empty);
    }

    #[test]
    fn classify_partial_bounds() {
        assert_eq!(Status::classify(&words(&["a"])), Status::Partial);
        let seven = words(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(Status::classify(&seven), Status::Partial);
    }

    #[test]
    fn classify_complete_at_and_past_target() {
        let eight = words(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(Status::classify(&eight), Status::Complete);
        let nine = words(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        assert_eq!(Status::classify(&nine), Status::Complete);
    }

    #[test]
    fn status_icons() {
        assert_eq!(Status::Empty.icon(), "⚪");
        assert_eq!(Status::Partial.icon(), "🟡");
        assert_eq!(Status::Complete.icon(), "🟢");
    }

    #[test]
    fn parse_trims_and_drops_empties() {
        assert_eq!(parse_list("cat, , hat,  "), words(&["cat", "hat"]));
    }

    #[test]
    fn parse_preserves_order_and_duplicates() {
        assert_eq!(
            parse_list("mat, cat, mat"),
            words(&["mat", "cat", "mat"])
        );
    }

    #[test]
    fn parse_empty_and_whitespace_only() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("  ,  , ").is_empty());
    }

    #[test]
    fn join_then_parse_round_trips() {
        let list = words(&["cat", "hat", "mat"]);
        assert_eq!(parse_list(&join_list(&list)), list);
    }

    #[test]
    fn join_empty_is_empty_string() {
        assert_eq!(join_list(&[]), "");
    }
}
