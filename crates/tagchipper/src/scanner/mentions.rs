//! # Mention Scanner

use crate::{
    entities::{EntityKind, Subgroup},
    patterns::PatternLibrary,
    scanner::{
        Candidate,
        boundaries::{mention_invalid_end, mention_preceding_ok, next_char_boundary},
    },
};

/// Scan `text` for `@user` mentions and `@user/list` list mentions.
///
/// ## Returns
/// Non-overlapping candidates, in text order.
pub fn scan_mentions(
    library: &PatternLibrary,
    text: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(m) = library.mention().match_at(text, pos) else {
            break;
        };

        if !mention_preceding_ok(text, m.range.start) {
            log::trace!("mention at {}: invalid preceding character", m.range.start);
            pos = next_char_boundary(text, m.range.start);
            continue;
        }
        pos = m.range.end;

        if mention_invalid_end(&text[m.range.end..]) {
            log::trace!("mention at {}: invalid trailing text", m.range.start);
            continue;
        }

        let kind = if m.group(Subgroup::ListSlug).is_some() {
            EntityKind::ListMention
        } else {
            EntityKind::Mention
        };
        candidates.push(Candidate::new(kind, m));
    }

    candidates
}

/// Match a reply: a mention at the very start of `text`, after only whitespace.
///
/// ## Returns
/// The reply's candidate, or `None`.
pub fn scan_reply(
    library: &PatternLibrary,
    text: &str,
) -> Option<Candidate> {
    let m = library.reply().match_at(text, 0)?;
    if mention_invalid_end(&text[m.range.end..]) {
        log::trace!("reply: invalid trailing text");
        return None;
    }
    Some(Candidate::new(EntityKind::Mention, m))
}
