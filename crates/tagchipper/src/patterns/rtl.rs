//! # Right-to-Left Detection

use core::ops::Range;

use crate::{
    offsets::{OffsetTranslator, OffsetUnit},
    patterns::PatternLibrary,
};

/// Does `text` contain any character from a right-to-left script block?
pub fn contains_rtl(text: &str) -> bool {
    PatternLibrary::global().rtl().is_match(text)
}

/// The maximal runs of right-to-left script characters in `text`.
///
/// ## Arguments
/// * `text` - the text to scan.
/// * `unit` - the unit of the returned offsets.
///
/// ## Returns
/// Non-overlapping `[start, end)` ranges, in text order.
pub fn rtl_spans(
    text: &str,
    unit: OffsetUnit,
) -> Vec<Range<usize>> {
    let mut translator = OffsetTranslator::new(text, unit);
    PatternLibrary::global()
        .rtl()
        .find_iter(text)
        .map(|m| {
            let start = translator.translate(m.start());
            let end = translator.translate(m.end());
            start..end
        })
        .collect()
}
