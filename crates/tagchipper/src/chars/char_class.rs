//! # Character Classes

use core::fmt::Write;

use crate::{
    chars::tables,
    errors::{TCResult, TagchipperError},
};

/// The names of the static character-class tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum CharClassName {
    /// ASCII letters.
    Alpha,

    /// ASCII digits.
    Digit,

    /// ASCII letters and digits.
    Alnum,

    /// ASCII punctuation.
    Punctuation,

    /// The Unicode space separators, plus the control-range whitespace.
    UnicodeSpace,

    /// Byte-order marks, directional overrides, and noncharacters.
    InvalidControl,

    /// Accented Latin letters and combining diacritics.
    LatinAccents,

    /// Hebrew and Arabic script blocks.
    RtlScripts,

    /// Letters which may appear in a hashtag, across scripts.
    HashtagEligibleAlpha,

    /// Digits, underscore, and joiners which may appear in a hashtag body.
    HashtagEligibleExtra,
}

impl CharClassName {
    /// Parse a table name; the `FromStr` impl, with this crate's error type.
    pub fn parse(name: &str) -> TCResult<Self> {
        name.parse()
            .map_err(|_| TagchipperError::UnknownCharClass(name.to_string()))
    }

    /// The class this name refers to.
    pub fn class(self) -> CharClass {
        CharClass {
            name: self,
            ranges: class_ranges(self),
        }
    }
}

/// The ordered `(low, high)` inclusive code point ranges of a named table.
///
/// Ranges are sorted and non-overlapping.
pub fn class_ranges(name: CharClassName) -> &'static [(char, char)] {
    use CharClassName::*;
    match name {
        Alpha => tables::ALPHA,
        Digit => tables::DIGIT,
        Alnum => tables::ALNUM,
        Punctuation => tables::PUNCTUATION,
        UnicodeSpace => tables::UNICODE_SPACE,
        InvalidControl => tables::INVALID_CONTROL,
        LatinAccents => tables::LATIN_ACCENTS,
        RtlScripts => tables::RTL_SCRIPTS,
        HashtagEligibleAlpha => tables::HASHTAG_ELIGIBLE_ALPHA,
        HashtagEligibleExtra => tables::HASHTAG_ELIGIBLE_EXTRA,
    }
}

/// An immutable, named set of code point ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    name: CharClassName,
    ranges: &'static [(char, char)],
}

impl CharClass {
    /// The table name.
    pub fn name(&self) -> CharClassName {
        self.name
    }

    /// The sorted inclusive ranges.
    pub fn ranges(&self) -> &'static [(char, char)] {
        self.ranges
    }

    /// Is `ch` a member of this class?
    ///
    /// `O(log n)` in the number of ranges.
    pub fn contains(
        &self,
        ch: char,
    ) -> bool {
        ranges_contain(self.ranges, ch)
    }

    /// Render the ranges as the body of a regex bracket expression.
    ///
    /// The result has no surrounding `[` `]`, so classes can be unioned
    /// by concatenation; every code point is written as `\x{..}`.
    pub fn regex_body(&self) -> String {
        let mut body = String::with_capacity(self.ranges.len() * 20);
        for &(lo, hi) in self.ranges {
            if lo == hi {
                let _ = write!(body, "\\x{{{:X}}}", lo as u32);
            } else {
                let _ = write!(body, "\\x{{{:X}}}-\\x{{{:X}}}", lo as u32, hi as u32);
            }
        }
        body
    }
}

/// Binary search of a sorted, non-overlapping range table.
pub(crate) fn ranges_contain(
    ranges: &[(char, char)],
    ch: char,
) -> bool {
    let idx = ranges.partition_point(|&(_, hi)| hi < ch);
    idx < ranges.len() && ranges[idx].0 <= ch
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_tables_sorted_and_disjoint() {
        for name in CharClassName::iter() {
            let ranges = class_ranges(name);
            assert!(!ranges.is_empty(), "{name} is empty");
            for &(lo, hi) in ranges {
                assert!(lo <= hi, "{name}: inverted range {lo:?}..={hi:?}");
            }
            for pair in ranges.windows(2) {
                assert!(
                    pair[0].1 < pair[1].0,
                    "{name}: {:?} overlaps or is out of order with {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_contains() {
        let alpha = CharClassName::Alpha.class();
        assert!(alpha.contains('a'));
        assert!(alpha.contains('Z'));
        assert!(!alpha.contains('0'));
        assert!(!alpha.contains('é'));

        let accents = CharClassName::LatinAccents.class();
        assert!(accents.contains('é'));
        assert!(accents.contains('\u{1E00}'));
        assert!(!accents.contains('\u{00D7}'));

        let spaces = CharClassName::UnicodeSpace.class();
        for ch in [' ', '\t', '\n', '\u{A0}', '\u{2003}', '\u{3000}'] {
            assert!(spaces.contains(ch), "{ch:?}");
        }
        assert!(!spaces.contains('x'));

        let invalid = CharClassName::InvalidControl.class();
        for ch in ['\u{FEFF}', '\u{FFFE}', '\u{FFFF}', '\u{202A}', '\u{202E}'] {
            assert!(invalid.contains(ch), "{ch:?}");
        }
        assert!(!invalid.contains('\u{202F}'));
    }

    #[test]
    fn test_hashtag_alpha_scripts() {
        let alpha = CharClassName::HashtagEligibleAlpha.class();
        for ch in "aZéЖשعก한ひカ中ａＺｦ".chars() {
            assert!(alpha.contains(ch), "{ch:?}");
        }
        // CJK Extension B lies outside the basic multilingual plane.
        assert!(alpha.contains('\u{20000}'));
        for ch in "0_-#@ ！".chars() {
            assert!(!alpha.contains(ch), "{ch:?}");
        }

        let extra = CharClassName::HashtagEligibleExtra.class();
        for ch in "09_０９\u{200C}".chars() {
            assert!(extra.contains(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            CharClassName::parse("LATIN_ACCENTS").unwrap(),
            CharClassName::LatinAccents
        );
        assert_eq!(CharClassName::RtlScripts.to_string(), "RTL_SCRIPTS");
        assert_eq!(
            CharClassName::parse("NOPE"),
            Err(TagchipperError::UnknownCharClass("NOPE".to_string()))
        );
    }

    #[test]
    fn test_regex_body() {
        let body = CharClassName::Digit.class().regex_body();
        assert_eq!(body, r"\x{30}-\x{39}");

        for name in CharClassName::iter() {
            let pattern = format!("[{}]", name.class().regex_body());
            assert!(regex::Regex::new(&pattern).is_ok(), "{name}");
        }
    }
}
