//! # Offset Translator

/// The unit in which entity offsets are reported.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum OffsetUnit {
    /// Unicode scalar values; one per `char`.
    #[default]
    CodePoint,

    /// UTF-16 code units; characters outside the BMP count as two.
    Utf16,

    /// UTF-8 bytes; the native `str` index.
    Byte,
}

impl OffsetUnit {
    /// The width of `ch` in this unit.
    pub fn width(
        &self,
        ch: char,
    ) -> usize {
        match self {
            Self::CodePoint => 1,
            Self::Utf16 => ch.len_utf16(),
            Self::Byte => ch.len_utf8(),
        }
    }
}

/// Translates UTF-8 byte offsets of one text into another [`OffsetUnit`].
///
/// Keeps a running `(byte, unit)` position, so a sequence of non-decreasing
/// queries costs a single forward scan of the text. A query behind the
/// running position restarts the scan from zero.
#[derive(Debug, Clone)]
pub struct OffsetTranslator<'a> {
    text: &'a str,
    unit: OffsetUnit,
    byte_pos: usize,
    unit_pos: usize,
}

impl<'a> OffsetTranslator<'a> {
    /// Create a translator over `text`.
    ///
    /// ## Arguments
    /// * `text` - the text the byte offsets index into.
    /// * `unit` - the target unit.
    pub fn new(
        text: &'a str,
        unit: OffsetUnit,
    ) -> Self {
        Self {
            text,
            unit,
            byte_pos: 0,
            unit_pos: 0,
        }
    }

    /// The target unit.
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Translate a byte offset.
    ///
    /// ## Arguments
    /// * `byte_offset` - a char-boundary byte offset into the text.
    ///
    /// ## Returns
    /// The same position, in the translator's unit.
    ///
    /// ## Panics
    /// If `byte_offset` is past the end of the text or not on a char boundary.
    pub fn translate(
        &mut self,
        byte_offset: usize,
    ) -> usize {
        if self.unit == OffsetUnit::Byte {
            assert!(self.text.is_char_boundary(byte_offset));
            return byte_offset;
        }

        if byte_offset < self.byte_pos {
            self.byte_pos = 0;
            self.unit_pos = 0;
        }

        let unit = self.unit;
        self.unit_pos += self.text[self.byte_pos..byte_offset]
            .chars()
            .map(|ch| unit.width(ch))
            .sum::<usize>();
        self.byte_pos = byte_offset;
        self.unit_pos
    }
}

/// Convert a byte offset to a code point offset.
pub fn to_code_point_offset(
    text: &str,
    byte_offset: usize,
) -> usize {
    OffsetTranslator::new(text, OffsetUnit::CodePoint).translate(byte_offset)
}

/// Convert a code point offset to a UTF-16 code unit offset.
///
/// Offsets past the end of the text clamp to the text's UTF-16 length.
pub fn code_point_to_utf16_offset(
    text: &str,
    code_point_offset: usize,
) -> usize {
    text.chars()
        .take(code_point_offset)
        .map(char::len_utf16)
        .sum()
}

/// Convert a UTF-16 code unit offset to a code point offset.
///
/// An offset inside a surrogate pair maps to the pair's code point.
pub fn utf16_to_code_point_offset(
    text: &str,
    utf16_offset: usize,
) -> usize {
    let mut units = 0;
    let mut code_points = 0;
    for ch in text.chars() {
        if units >= utf16_offset {
            break;
        }
        units += ch.len_utf16();
        code_points += 1;
    }
    if units > utf16_offset {
        code_points -= 1;
    }
    code_points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_points_across_planes() {
        // 'a' (1 byte), 'é' (2), '中' (3), '😀' (4, outside the BMP), 'b' (1).
        let text = "aé中😀b";
        let mut t = OffsetTranslator::new(text, OffsetUnit::CodePoint);
        assert_eq!(t.translate(0), 0);
        assert_eq!(t.translate(1), 1);
        assert_eq!(t.translate(3), 2);
        assert_eq!(t.translate(6), 3);
        assert_eq!(t.translate(10), 4);
        assert_eq!(t.translate(11), 5);

        // Backwards queries restart.
        assert_eq!(t.translate(3), 2);
    }

    #[test]
    fn test_utf16() {
        let text = "a😀b";
        let mut t = OffsetTranslator::new(text, OffsetUnit::Utf16);
        assert_eq!(t.translate(1), 1);
        assert_eq!(t.translate(5), 3);
        assert_eq!(t.translate(6), 4);

        assert_eq!(code_point_to_utf16_offset(text, 2), 3);
        assert_eq!(code_point_to_utf16_offset(text, 99), 4);
        assert_eq!(utf16_to_code_point_offset(text, 3), 2);
        assert_eq!(utf16_to_code_point_offset(text, 2), 1);
        assert_eq!(utf16_to_code_point_offset(text, 4), 3);
    }

    #[test]
    fn test_bytes_are_identity() {
        let text = "中文";
        let mut t = OffsetTranslator::new(text, OffsetUnit::Byte);
        assert_eq!(t.translate(3), 3);
        assert_eq!(to_code_point_offset(text, 3), 1);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(OffsetUnit::default(), OffsetUnit::CodePoint);
        assert_eq!("utf16".parse::<OffsetUnit>().unwrap(), OffsetUnit::Utf16);
        assert_eq!(OffsetUnit::CodePoint.to_string(), "code_point");
    }
}
