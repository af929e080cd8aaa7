//! # Scan Cursor

use crate::{
    entities::{Entity, SubgroupSpan},
    offsets::{OffsetTranslator, OffsetUnit},
    scanner::Candidate,
};

/// Per-call emission state.
///
/// Converts resolved [`Candidate`]s into [`Entity`] records, translating
/// byte offsets through a single forward [`OffsetTranslator`] pass.
/// Candidates must be emitted in start order.
#[derive(Debug)]
pub struct ScanCursor<'a> {
    text: &'a str,
    translator: OffsetTranslator<'a>,
    entities: Vec<Entity>,
}

impl<'a> ScanCursor<'a> {
    /// Create a cursor over `text`, reporting offsets in `unit`.
    pub fn new(
        text: &'a str,
        unit: OffsetUnit,
    ) -> Self {
        Self {
            text,
            translator: OffsetTranslator::new(text, unit),
            entities: Vec::new(),
        }
    }

    /// The entities emitted so far.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Translate and record one candidate.
    pub fn emit(
        &mut self,
        candidate: &Candidate,
    ) {
        let text = self.text;
        let start = self.translator.translate(candidate.start());

        let subgroups = candidate
            .raw
            .groups
            .iter()
            .map(|(role, range)| SubgroupSpan {
                role: *role,
                start: self.translator.translate(range.start),
                end: self.translator.translate(range.end),
                text: text[range.clone()].to_string(),
            })
            .collect();

        let end = self.translator.translate(candidate.end());

        self.entities.push(Entity {
            kind: candidate.kind,
            start,
            end,
            display_text: text[candidate.display_range()].to_string(),
            subgroups,
        });
    }

    /// Consume the cursor.
    ///
    /// ## Returns
    /// The emitted entities, in emission order.
    pub fn finish(self) -> Vec<Entity> {
        self.entities
    }
}
