//! # Cashtag Scanner

use crate::{
    entities::{EntityKind, Subgroup},
    patterns::{PatternLibrary, RawMatch},
    scanner::{
        Candidate,
        boundaries::{cashtag_preceding_ok, cashtag_valid_end, char_before, next_char_boundary},
    },
};

/// Scan `text` for `$SYMBOL` cashtags.
///
/// An exchange-qualified symbol (`$BRK.A`) which fails the trailing
/// boundary check falls back to its base symbol.
///
/// ## Returns
/// Non-overlapping candidates, in text order.
pub fn scan_cashtags(
    library: &PatternLibrary,
    text: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(m) = library.cashtag().match_at(text, pos) else {
            break;
        };
        let start = m.range.start;

        if !cashtag_preceding_ok(char_before(text, start)) {
            log::trace!("cashtag at {start}: invalid preceding character");
            pos = next_char_boundary(text, start);
            continue;
        }

        match accept_symbol(library, text, m) {
            Some(accepted) => {
                pos = accepted.range.end;
                candidates.push(Candidate::new(EntityKind::Cashtag, accepted));
            }
            None => {
                log::trace!("cashtag at {start}: invalid trailing text");
                pos = next_char_boundary(text, start);
            }
        }
    }

    candidates
}

fn accept_symbol(
    library: &PatternLibrary,
    text: &str,
    m: RawMatch,
) -> Option<RawMatch> {
    if cashtag_valid_end(library, &text[m.range.end..]) {
        return Some(m);
    }

    let symbol = m.group(Subgroup::Symbol)?;
    let base_len = text[symbol.clone()].find(['.', '_'])?;
    let base = symbol.start..symbol.start + base_len;
    cashtag_valid_end(library, &text[base.end..])
        .then(|| RawMatch::new(m.range.start..base.end).with_group(Subgroup::Symbol, base))
}
