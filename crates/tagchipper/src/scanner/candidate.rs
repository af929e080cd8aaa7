//! # Scan Candidates

use core::ops::Range;

use crate::{
    entities::{EntityKind, Subgroup},
    patterns::RawMatch,
};

/// A [`RawMatch`] which passed its kind's boundary checks.
///
/// Offsets are still UTF-8 byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The entity kind.
    pub kind: EntityKind,

    /// The accepted match.
    pub raw: RawMatch,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(
        kind: EntityKind,
        raw: RawMatch,
    ) -> Self {
        Self { kind, raw }
    }

    /// The full byte range.
    pub fn range(&self) -> Range<usize> {
        self.raw.range.clone()
    }

    /// Start byte offset.
    pub fn start(&self) -> usize {
        self.raw.range.start
    }

    /// End byte offset (exclusive).
    pub fn end(&self) -> usize {
        self.raw.range.end
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Is the candidate empty?
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Do the byte ranges of two candidates intersect?
    pub fn overlaps(
        &self,
        other: &Candidate,
    ) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }

    /// The byte range of the entity's display value.
    ///
    /// The whole span for URLs; the sigil-less body for the other kinds.
    pub fn display_range(&self) -> Range<usize> {
        let role = match self.kind {
            EntityKind::Hashtag => Subgroup::Tag,
            EntityKind::Mention | EntityKind::ListMention => Subgroup::Username,
            EntityKind::Cashtag => Subgroup::Symbol,
            _ => return self.range(),
        };
        self.raw.group(role).unwrap_or_else(|| self.range())
    }
}
