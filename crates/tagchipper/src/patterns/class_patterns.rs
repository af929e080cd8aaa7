//! # Bracket Expression Composition
//!
//! The pattern library is assembled from rendered [`CharClass`] bodies
//! plus a few literal bodies. Everything here returns regex source text.

use crate::chars::{CharClass, CharClassName};

/// ASCII control characters.
pub const CTRL_BODY: &str = r"\x00-\x1F\x7F";

/// The half- and full-width at-signs.
pub const AT_SIGNS: &str = "[@\u{FF20}]";

/// The half- and full-width hash signs.
pub const HASH_SIGNS: &str = "[#\u{FF03}]";

/// A `http://` or `https://` scheme, case-insensitive without Unicode case folding.
pub const PROTOCOL: &str = "[hH][tT][tT][pP][sS]?://";

/// Characters which may appear anywhere in a URL path.
pub const URL_PATH_CHARS_BODY: &str = r"\-a-zA-Z\p{Cyrillic}0-9!*';:=+,.$/%#\[\]_~&|@";

/// Characters which may end a URL path (in addition to a balanced parenthetical).
pub const URL_PATH_ENDING_BODY: &str = r"\-a-zA-Z\p{Cyrillic}0-9=_#/+";

/// Characters which may appear in a URL query.
pub const URL_QUERY_CHARS: &str = r"[\-a-zA-Z0-9!?*'();:&=+$/%#\[\]_.,~|@]";

/// Characters which may end a URL query.
pub const URL_QUERY_ENDING: &str = "[a-zA-Z0-9_&=#/]";

/// Concatenate the rendered bodies of several classes.
pub fn union_body(names: &[CharClassName]) -> String {
    names
        .iter()
        .map(|name| name.class().regex_body())
        .collect::<Vec<_>>()
        .concat()
}

/// A bracket expression matching any member of the named classes,
/// plus the literal `extra` body.
///
/// ## Arguments
/// * `names` - the classes to union.
/// * `extra` - additional bracket-expression body text; may be empty.
pub fn class_pattern(
    names: &[CharClassName],
    extra: &str,
) -> String {
    format!("[{}{}]", union_body(names), extra)
}

/// A bracket expression matching anything *except* members of the named
/// classes and the literal `extra` body.
pub fn negated_class_pattern(
    names: &[CharClassName],
    extra: &str,
) -> String {
    format!("[^{}{}]", union_body(names), extra)
}

/// Render a single class as a bracket expression.
pub fn single_class_pattern(class: &CharClass) -> String {
    format!("[{}]", class.regex_body())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_patterns_compile() {
        for pattern in [
            class_pattern(&[CharClassName::Alpha], "_"),
            negated_class_pattern(
                &[CharClassName::Punctuation, CharClassName::UnicodeSpace],
                CTRL_BODY,
            ),
            format!("[{URL_PATH_CHARS_BODY}]"),
            format!("[{URL_PATH_ENDING_BODY}]"),
            URL_QUERY_CHARS.to_string(),
            URL_QUERY_ENDING.to_string(),
            AT_SIGNS.to_string(),
            HASH_SIGNS.to_string(),
            PROTOCOL.to_string(),
        ] {
            assert!(regex::Regex::new(&pattern).is_ok(), "{pattern}");
        }
    }

    #[test]
    fn test_negated_class() {
        let re = regex::Regex::new(&negated_class_pattern(&[CharClassName::Digit], "_")).unwrap();
        assert!(re.is_match("a"));
        assert!(!re.is_match("7"));
        assert!(!re.is_match("_"));
    }

    #[test]
    fn test_single_class() {
        let re = regex::Regex::new(&format!(
            "^{}+$",
            single_class_pattern(&CharClassName::LatinAccents.class())
        ))
        .unwrap();
        assert!(re.is_match("éàü"));
        assert!(!re.is_match("e"));
    }
}
