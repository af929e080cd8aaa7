//! # Text Validation
//!
//! The extractor scans past invalid control characters (BOMs, directional
//! overrides, noncharacters) as ordinary non-matching boundaries. Callers
//! which must refuse such text check it here first; or set
//! [`ExtractorOptions::reject_invalid_chars`](crate::scanner::ExtractorOptions::reject_invalid_chars).

use crate::{
    chars::is_invalid_control,
    errors::{TCResult, TagchipperError},
};

/// Check `text` for invalid control characters.
///
/// ## Returns
/// `Ok(())`, or an [`TagchipperError::InvalidCharacter`] naming the first
/// offending character and its code point offset.
pub fn check_text(text: &str) -> TCResult<()> {
    match text
        .chars()
        .enumerate()
        .find(|&(_, ch)| is_invalid_control(ch))
    {
        Some((offset, ch)) => Err(TagchipperError::InvalidCharacter { ch, offset }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text() {
        assert!(check_text("").is_ok());
        assert!(check_text("hello #world 😀 שלום").is_ok());

        assert_eq!(
            check_text("😀\u{FEFF}x"),
            Err(TagchipperError::InvalidCharacter {
                ch: '\u{FEFF}',
                offset: 1
            })
        );
        assert_eq!(
            check_text("ab\u{202A}\u{FFFF}"),
            Err(TagchipperError::InvalidCharacter {
                ch: '\u{202A}',
                offset: 2
            })
        );
        assert!(check_text("\u{FFFE}").is_err());
    }
}
