//! Utterance segmentation into word tokens.
//!
//! The lip-sync pipeline needs only whitespace/punctuation tokenization:
//! each whitespace-delimited piece is stripped to its letters and
//! uppercased so it can be matched against dictionary keys.

/// Tokenize an utterance into uppercase, letters-only word tokens.
///
/// Pieces that contain no letters at all ("--", "123", lone punctuation)
/// are dropped. Order is preserved and duplicates are kept, since each
/// token becomes one timed word during playback.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|piece| {
            let cleaned: String = piece
                .chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_uppercase)
                .collect();
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_uppercases_and_strips_punctuation() {
        assert_eq!(tokenize("Hello, world!"), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn test_interior_punctuation_is_stripped() {
        assert_eq!(tokenize("don't it's"), vec!["DONT", "ITS"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_pieces_are_dropped() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t\n "), Vec::<String>::new());
        assert_eq!(tokenize("!!! -- ... 123"), Vec::<String>::new());
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        assert_eq!(tokenize("no no NO"), vec!["NO", "NO", "NO"]);
    }

    #[test]
    fn test_digits_are_not_letters() {
        assert_eq!(tokenize("route 66 ok"), vec!["ROUTE", "OK"]);
    }
}
