//! # Boundary Checks
//!
//! The look-behind and look-ahead halves of the entity rules, as plain
//! predicates over the characters adjacent to a candidate.

use crate::{
    chars::{is_hashtag_alphanumeric, is_invalid_control, is_latin_accent, is_unicode_space},
    patterns::PatternLibrary,
};

/// The character ending immediately before byte offset `pos`.
pub fn char_before(
    text: &str,
    pos: usize,
) -> Option<char> {
    text[..pos].chars().next_back()
}

/// The byte offset one character past `pos`; clamped to the text length.
pub fn next_char_boundary(
    text: &str,
    pos: usize,
) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |ch| pos + ch.len_utf8())
}

/// May a hashtag sign follow `prev`?
///
/// Anything except `&` and hashtag letters or digits.
pub fn hashtag_preceding_ok(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(ch) => ch != '&' && !is_hashtag_alphanumeric(ch),
    }
}

/// Does a hashtag body start with a keycap or emoji variation selector?
pub fn hashtag_invalid_initial(body: &str) -> bool {
    body.starts_with(['\u{FE0F}', '\u{20E3}'])
}

/// Is the text after a hashtag one which invalidates it?
pub fn hashtag_invalid_end(rest: &str) -> bool {
    rest.starts_with(['#', '\u{FF03}']) || rest.starts_with("://")
}

/// May an at-sign at byte offset `at` start a mention?
///
/// The preceding character must not be a letter, digit, or one of
/// `_!#$%&*@＠`; unless the at-sign directly follows an `RT` or `RT:`
/// retweet marker which itself starts a word.
pub fn mention_preceding_ok(
    text: &str,
    at: usize,
) -> bool {
    match char_before(text, at) {
        None => true,
        Some(ch) if !is_mention_preceding_invalid(ch) => true,
        Some(_) => follows_retweet_marker(&text[..at]),
    }
}

fn is_mention_preceding_invalid(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '!' | '#' | '$' | '%' | '&' | '*' | '@' | '\u{FF20}')
}

/// Does `before` end with a word-initial `RT` or `RT:`, case-insensitively?
fn follows_retweet_marker(before: &str) -> bool {
    let before = before.strip_suffix(':').unwrap_or(before);
    let bytes = before.as_bytes();
    if bytes.len() < 2 || !bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"rt") {
        return false;
    }
    match char_before(before, before.len() - 2) {
        None => true,
        Some(ch) => !(ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '~' | '.' | '-')),
    }
}

/// Is the text after a mention one which invalidates it?
///
/// Another at-sign, an accented Latin letter, or `://`.
pub fn mention_invalid_end(rest: &str) -> bool {
    match rest.chars().next() {
        None => false,
        Some('@' | '\u{FF20}') => true,
        Some(ch) if is_latin_accent(ch) => true,
        Some(_) => rest.starts_with("://"),
    }
}

/// May a URL follow `prev`?
///
/// Not after an ASCII letter or digit, an at-sign, `$`, a hash sign,
/// or an invalid control character.
pub fn url_preceding_ok(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(ch) => {
            !(ch.is_ascii_alphanumeric()
                || matches!(ch, '@' | '\u{FF20}' | '$' | '#' | '\u{FF03}')
                || is_invalid_control(ch))
        }
    }
}

/// May a URL without a protocol follow `prev`?
///
/// Rejects `-`, `_`, `.`, and `/`; such a domain is likely a fragment of
/// a longer token.
pub fn url_without_protocol_preceding_ok(prev: Option<char>) -> bool {
    !matches!(prev, Some('-' | '_' | '.' | '/'))
}

/// Is `ch` permitted in a protocol-less (ASCII) domain?
pub fn is_ascii_domain_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') || is_latin_accent(ch)
}

/// May a cashtag follow `prev`? Only at the start of text or after a space.
pub fn cashtag_preceding_ok(prev: Option<char>) -> bool {
    prev.is_none_or(is_unicode_space)
}

/// May a cashtag be followed by `rest`?
///
/// The end of text, whitespace, or punctuation in any script (`\p{P}`);
/// symbols such as `$` or `+` are not punctuation.
pub fn cashtag_valid_end(
    library: &PatternLibrary,
    rest: &str,
) -> bool {
    rest.is_empty() || library.cashtag_end().is_match(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_helpers() {
        let text = "a中b";
        assert_eq!(char_before(text, 0), None);
        assert_eq!(char_before(text, 4), Some('中'));
        assert_eq!(next_char_boundary(text, 1), 4);
        assert_eq!(next_char_boundary(text, 5), 5);
    }

    #[test]
    fn test_hashtag_boundaries() {
        assert!(hashtag_preceding_ok(None));
        assert!(hashtag_preceding_ok(Some(' ')));
        assert!(hashtag_preceding_ok(Some('(')));
        assert!(!hashtag_preceding_ok(Some('&')));
        assert!(!hashtag_preceding_ok(Some('a')));
        assert!(!hashtag_preceding_ok(Some('日')));
        assert!(!hashtag_preceding_ok(Some('_')));

        assert!(hashtag_invalid_initial("\u{20E3}x"));
        assert!(!hashtag_invalid_initial("x"));

        assert!(hashtag_invalid_end("#more"));
        assert!(hashtag_invalid_end("＃more"));
        assert!(hashtag_invalid_end("://x"));
        assert!(!hashtag_invalid_end(" next"));
        assert!(!hashtag_invalid_end(""));
    }

    #[test]
    fn test_mention_preceding() {
        assert!(mention_preceding_ok("@a", 0));
        assert!(mention_preceding_ok("hi @a", 3));
        assert!(mention_preceding_ok("(@a", 1));
        assert!(!mention_preceding_ok("user@a", 4));
        assert!(!mention_preceding_ok("!@a", 1));
        assert!(!mention_preceding_ok("*@a", 1));

        assert!(mention_preceding_ok("RT@a", 2));
        assert!(mention_preceding_ok("rt:@a", 3));
        assert!(mention_preceding_ok("x RT@a", 4));
        assert!(!mention_preceding_ok("ART@a", 3));
        assert!(!mention_preceding_ok("x.RT@a", 4));
        assert!(!mention_preceding_ok("R@a", 1));
    }

    #[test]
    fn test_mention_end() {
        assert!(mention_invalid_end("@b"));
        assert!(mention_invalid_end("＠b"));
        assert!(mention_invalid_end("é"));
        assert!(mention_invalid_end("://x"));
        assert!(!mention_invalid_end(":x"));
        assert!(!mention_invalid_end(""));
    }

    #[test]
    fn test_url_preceding() {
        assert!(url_preceding_ok(None));
        assert!(url_preceding_ok(Some(' ')));
        assert!(url_preceding_ok(Some('日')));
        assert!(!url_preceding_ok(Some('a')));
        assert!(!url_preceding_ok(Some('@')));
        assert!(!url_preceding_ok(Some('$')));
        assert!(!url_preceding_ok(Some('\u{202E}')));

        assert!(url_without_protocol_preceding_ok(Some(' ')));
        assert!(!url_without_protocol_preceding_ok(Some('.')));
        assert!(!url_without_protocol_preceding_ok(Some('/')));
    }

    #[test]
    fn test_cashtag_boundaries() {
        assert!(cashtag_preceding_ok(None));
        assert!(cashtag_preceding_ok(Some('\u{3000}')));
        assert!(!cashtag_preceding_ok(Some('a')));
        assert!(!cashtag_preceding_ok(Some('(')));

        let library = PatternLibrary::global();
        assert!(cashtag_valid_end(library, ""));
        assert!(cashtag_valid_end(library, " is up"));
        assert!(cashtag_valid_end(library, ", x"));
        assert!(cashtag_valid_end(library, "、株価"));
        assert!(cashtag_valid_end(library, "。"));
        assert!(cashtag_valid_end(library, "！"));
        assert!(!cashtag_valid_end(library, "1"));
        assert!(!cashtag_valid_end(library, "é"));
        assert!(!cashtag_valid_end(library, "$"));
        assert!(!cashtag_valid_end(library, "+1"));
    }
}
