//! # Character-Class Tables
//!
//! Named, immutable sets of Unicode code point ranges.
//!
//! * [`CharClassName`] - the table names.
//! * [`class_ranges`] - the raw `(low, high)` ranges of a table.
//! * [`CharClass`] - membership tests and regex rendering.
//!
//! The tables are pure static data; the pattern library composes them
//! into regex bracket expressions via [`CharClass::regex_body`].

mod char_class;
pub mod tables;

#[doc(inline)]
pub use char_class::*;

/// Is `ch` a Unicode space (see [`CharClassName::UnicodeSpace`])?
pub fn is_unicode_space(ch: char) -> bool {
    char_class::ranges_contain(tables::UNICODE_SPACE, ch)
}

/// Is `ch` an invalid control character (see [`CharClassName::InvalidControl`])?
pub fn is_invalid_control(ch: char) -> bool {
    char_class::ranges_contain(tables::INVALID_CONTROL, ch)
}

/// Is `ch` in a right-to-left script block (see [`CharClassName::RtlScripts`])?
pub fn is_rtl(ch: char) -> bool {
    char_class::ranges_contain(tables::RTL_SCRIPTS, ch)
}

/// Is `ch` an accented Latin character (see [`CharClassName::LatinAccents`])?
pub fn is_latin_accent(ch: char) -> bool {
    char_class::ranges_contain(tables::LATIN_ACCENTS, ch)
}

/// Is `ch` permitted in a hashtag body (letters, digits, underscore, joiners)?
pub fn is_hashtag_alphanumeric(ch: char) -> bool {
    char_class::ranges_contain(tables::HASHTAG_ELIGIBLE_ALPHA, ch)
        || char_class::ranges_contain(tables::HASHTAG_ELIGIBLE_EXTRA, ch)
}
