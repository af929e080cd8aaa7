//! # Character Class Tables
//!
//! Every table is a sorted list of disjoint, inclusive `(low, high)` ranges.
//! The unit tests in [`char_class`](super::char_class) check the ordering.

/// ASCII letters.
pub static ALPHA: &[(char, char)] = &[('A', 'Z'), ('a', 'z')];

/// ASCII digits.
pub static DIGIT: &[(char, char)] = &[('0', '9')];

/// ASCII letters and digits.
pub static ALNUM: &[(char, char)] = &[('0', '9'), ('A', 'Z'), ('a', 'z')];

/// ASCII punctuation; the POSIX `[[:punct:]]` set.
pub static PUNCTUATION: &[(char, char)] = &[('!', '/'), (':', '@'), ('[', '`'), ('{', '~')];

/// Unicode space separators and the whitespace controls.
pub static UNICODE_SPACE: &[(char, char)] = &[
    ('\u{0009}', '\u{000D}'),
    ('\u{0020}', '\u{0020}'),
    ('\u{0085}', '\u{0085}'),
    ('\u{00A0}', '\u{00A0}'),
    ('\u{1680}', '\u{1680}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{2000}', '\u{200A}'),
    ('\u{2028}', '\u{2029}'),
    ('\u{202F}', '\u{202F}'),
    ('\u{205F}', '\u{205F}'),
    ('\u{3000}', '\u{3000}'),
];

/// Directional embedding/override controls, the byte-order mark, and the
/// `U+FFFE`/`U+FFFF` noncharacters.
pub static INVALID_CONTROL: &[(char, char)] = &[
    ('\u{202A}', '\u{202E}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFFE}', '\u{FFFF}'),
];

/// Accented Latin letters, IPA letters seen in names, and combining diacritics.
pub static LATIN_ACCENTS: &[(char, char)] = &[
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{024F}'),
    ('\u{0253}', '\u{0254}'),
    ('\u{0256}', '\u{0257}'),
    ('\u{0259}', '\u{0259}'),
    ('\u{025B}', '\u{025B}'),
    ('\u{0263}', '\u{0263}'),
    ('\u{0268}', '\u{0268}'),
    ('\u{026F}', '\u{026F}'),
    ('\u{0272}', '\u{0272}'),
    ('\u{0289}', '\u{0289}'),
    ('\u{028B}', '\u{028B}'),
    ('\u{02BB}', '\u{02BB}'),
    ('\u{0300}', '\u{036F}'),
    ('\u{1E00}', '\u{1EFF}'),
];

/// Hebrew, Arabic, Arabic Supplement, and Arabic Presentation Forms-B.
pub static RTL_SCRIPTS: &[(char, char)] = &[
    ('\u{0590}', '\u{05FF}'),
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{FE70}', '\u{FEFF}'),
];

/// Letters which count as the alphabetic part of a hashtag.
///
/// Broader than [`ALPHA`]: covers Latin (with accents), Cyrillic, Hebrew,
/// Arabic, Thai, Hangul, Hiragana/Katakana, CJK ideographs (including the
/// supplementary-plane extensions), and the full/half-width forms.
pub static HASHTAG_ELIGIBLE_ALPHA: &[(char, char)] = &[
    // Latin
    ('A', 'Z'),
    ('a', 'z'),
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{024F}'),
    ('\u{0253}', '\u{0254}'),
    ('\u{0256}', '\u{0257}'),
    ('\u{0259}', '\u{0259}'),
    ('\u{025B}', '\u{025B}'),
    ('\u{0263}', '\u{0263}'),
    ('\u{0268}', '\u{0268}'),
    ('\u{026F}', '\u{026F}'),
    ('\u{0272}', '\u{0272}'),
    ('\u{0289}', '\u{0289}'),
    ('\u{028B}', '\u{028B}'),
    ('\u{02BB}', '\u{02BB}'),
    ('\u{0300}', '\u{036F}'),
    // Cyrillic, Cyrillic Supplement
    ('\u{0400}', '\u{0527}'),
    // Hebrew
    ('\u{0591}', '\u{05BF}'),
    ('\u{05C1}', '\u{05C2}'),
    ('\u{05C4}', '\u{05C5}'),
    ('\u{05C7}', '\u{05C7}'),
    ('\u{05D0}', '\u{05EA}'),
    ('\u{05F0}', '\u{05F4}'),
    // Arabic
    ('\u{0610}', '\u{061A}'),
    ('\u{0620}', '\u{065F}'),
    ('\u{066E}', '\u{06D3}'),
    ('\u{06D5}', '\u{06DC}'),
    ('\u{06DE}', '\u{06E8}'),
    ('\u{06EA}', '\u{06EF}'),
    ('\u{06FA}', '\u{06FC}'),
    ('\u{06FF}', '\u{06FF}'),
    // Arabic Supplement, Arabic Extended-A
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08A0}'),
    ('\u{08A2}', '\u{08AC}'),
    ('\u{08E4}', '\u{08FE}'),
    // Thai
    ('\u{0E01}', '\u{0E3A}'),
    ('\u{0E40}', '\u{0E4E}'),
    // Hangul Jamo
    ('\u{1100}', '\u{11FF}'),
    // Latin Extended Additional
    ('\u{1E00}', '\u{1EFF}'),
    // Cyrillic Extended-A
    ('\u{2DE0}', '\u{2DFF}'),
    // Kanji/Han iteration marks
    ('\u{3003}', '\u{3003}'),
    ('\u{3005}', '\u{3005}'),
    ('\u{303B}', '\u{303B}'),
    // Hiragana, Katakana
    ('\u{3040}', '\u{30FF}'),
    // Hangul Compatibility Jamo
    ('\u{3130}', '\u{3185}'),
    // CJK Unified Ideographs Extension A
    ('\u{3400}', '\u{4DBF}'),
    // CJK Unified Ideographs
    ('\u{4E00}', '\u{9FFF}'),
    // Cyrillic Extended-B
    ('\u{A640}', '\u{A69F}'),
    // Hangul Jamo Extended-A
    ('\u{A960}', '\u{A97F}'),
    // Hangul Syllables, Hangul Jamo Extended-B
    ('\u{AC00}', '\u{D7FF}'),
    // Hebrew Presentation Forms
    ('\u{FB1D}', '\u{FB28}'),
    ('\u{FB2A}', '\u{FB36}'),
    ('\u{FB38}', '\u{FB3C}'),
    ('\u{FB3E}', '\u{FB3E}'),
    ('\u{FB40}', '\u{FB41}'),
    ('\u{FB43}', '\u{FB44}'),
    ('\u{FB46}', '\u{FB4F}'),
    // Arabic Presentation Forms-A
    ('\u{FB50}', '\u{FBB1}'),
    ('\u{FBD3}', '\u{FD3D}'),
    ('\u{FD50}', '\u{FD8F}'),
    ('\u{FD92}', '\u{FDC7}'),
    ('\u{FDF0}', '\u{FDFB}'),
    // Arabic Presentation Forms-B
    ('\u{FE70}', '\u{FE74}'),
    ('\u{FE76}', '\u{FEFC}'),
    // Full-width Latin
    ('\u{FF21}', '\u{FF3A}'),
    ('\u{FF41}', '\u{FF5A}'),
    // Half-width Katakana
    ('\u{FF66}', '\u{FF9F}'),
    // Half-width Hangul
    ('\u{FFA1}', '\u{FFDC}'),
    // CJK Unified Ideographs Extensions B, C, D
    ('\u{20000}', '\u{2A6DF}'),
    ('\u{2A700}', '\u{2B73F}'),
    ('\u{2B740}', '\u{2B81F}'),
    // CJK Compatibility Ideographs Supplement
    ('\u{2F800}', '\u{2FA1F}'),
];

/// Non-letters allowed in a hashtag body: digits, underscore, the zero-width
/// joiners, and full-width digits.
pub static HASHTAG_ELIGIBLE_EXTRA: &[(char, char)] = &[
    ('0', '9'),
    ('_', '_'),
    ('\u{200C}', '\u{200D}'),
    ('\u{FF10}', '\u{FF19}'),
];
