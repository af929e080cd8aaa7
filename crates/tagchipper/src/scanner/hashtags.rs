//! # Hashtag Scanner

use crate::{
    entities::{EntityKind, Subgroup},
    patterns::PatternLibrary,
    scanner::{
        Candidate,
        boundaries::{
            char_before,
            hashtag_invalid_end,
            hashtag_invalid_initial,
            hashtag_preceding_ok,
            next_char_boundary,
        },
    },
};

/// Scan `text` for hashtags.
///
/// ## Returns
/// Non-overlapping candidates, in text order.
pub fn scan_hashtags(
    library: &PatternLibrary,
    text: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(m) = library.hashtag().match_at(text, pos) else {
            break;
        };

        if !hashtag_preceding_ok(char_before(text, m.range.start)) {
            log::trace!("hashtag at {}: invalid preceding character", m.range.start);
            pos = next_char_boundary(text, m.range.start);
            continue;
        }
        pos = m.range.end;

        if m
            .group(Subgroup::Tag)
            .is_some_and(|tag| hashtag_invalid_initial(&text[tag]))
        {
            log::trace!("hashtag at {}: invalid initial character", m.range.start);
            continue;
        }
        if hashtag_invalid_end(&text[m.range.end..]) {
            log::trace!("hashtag at {}: invalid trailing text", m.range.start);
            continue;
        }

        candidates.push(Candidate::new(EntityKind::Hashtag, m));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<&str> {
        scan_hashtags(PatternLibrary::global(), text)
            .iter()
            .map(|c| &text[c.display_range()])
            .collect()
    }

    #[test]
    fn test_basic() {
        assert_eq!(tags("Hello #world"), vec!["world"]);
        assert_eq!(tags("#a #b,#c"), vec!["a", "b", "c"]);
        assert_eq!(tags("(#paren)"), vec!["paren"]);
        assert_eq!(tags("#under_score #mix3d"), vec!["under_score", "mix3d"]);
    }

    #[test]
    fn test_digits_only() {
        assert!(tags("#123").is_empty());
        assert_eq!(tags("#123 #1a"), vec!["1a"]);
    }

    #[test]
    fn test_preceding() {
        assert!(tags("a#b").is_empty());
        assert!(tags("&#39;").is_empty());
        assert!(tags("日本#語").is_empty());
        assert_eq!(tags("x.#tag"), vec!["tag"]);
    }

    #[test]
    fn test_invalid_end() {
        assert!(tags("#foo#bar").is_empty());
        assert!(tags("#http://example.com").is_empty());
        assert_eq!(tags("#foo #bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_scripts() {
        assert_eq!(
            tags("#日本語 #русский #한국어 #ภาษาไทย #עברית #عربي ＃ｆｕｌｌ"),
            vec!["日本語", "русский", "한국어", "ภาษาไทย", "עברית", "عربي", "ｆｕｌｌ"]
        );
    }
}
