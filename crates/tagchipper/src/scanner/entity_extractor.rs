//! # Entity Extractor Trait

use crate::{
    entities::{Entity, EntityKind},
    errors::TCResult,
    patterns::PatternLibrary,
    scanner::{
        ExtractorOptions,
        ScanCursor,
        resolve_overlaps,
        scan_cashtags,
        scan_hashtags,
        scan_mentions,
        scan_reply,
        scan_urls,
    },
};

/// A trait for entity extractors.
///
/// Each call is independent; implementations hold only immutable state
/// and may be shared freely across threads.
pub trait EntityExtractor: Send + Sync {
    /// Return the configured options.
    fn options(&self) -> &ExtractorOptions;

    /// Return the attached pattern library.
    fn library(&self) -> &PatternLibrary;

    /// Extract the entities of the given kinds.
    ///
    /// URLs are always scanned; a hashtag, mention, or cashtag inside a URL
    /// is dropped even when URLs are not requested.
    ///
    /// ## Arguments
    /// * `text` - The text to scan.
    /// * `kinds` - The kinds to report.
    ///
    /// ## Returns
    /// Non-overlapping entities, sorted by start offset; or an error if
    /// the text fails the configured input checks.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn try_extract_kinds(
        &self,
        text: &str,
        kinds: &[EntityKind],
    ) -> TCResult<Vec<Entity>> {
        let options = self.options();
        options.check_input(text)?;

        let library = self.library();
        let wants = |kind: EntityKind| kinds.contains(&kind);

        let mut candidates = scan_urls(library, options, text);
        if wants(EntityKind::Hashtag) {
            candidates.extend(scan_hashtags(library, text));
        }
        if wants(EntityKind::Mention) || wants(EntityKind::ListMention) {
            candidates.extend(scan_mentions(library, text));
        }
        if wants(EntityKind::Cashtag) {
            candidates.extend(scan_cashtags(library, text));
        }

        let mut cursor = ScanCursor::new(text, options.offset_unit());
        resolve_overlaps(candidates)
            .iter()
            .filter(|c| wants(c.kind))
            .for_each(|c| cursor.emit(c));
        Ok(cursor.finish())
    }

    /// Extract all entities.
    ///
    /// ## Arguments
    /// * `text` - The text to scan.
    ///
    /// ## Returns
    /// A `Result` containing the entities, sorted by start offset.
    fn try_extract(
        &self,
        text: &str,
    ) -> TCResult<Vec<Entity>> {
        self.try_extract_kinds(text, EntityKind::ALL)
    }

    /// Extract all entities.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract(
        &self,
        text: &str,
    ) -> Vec<Entity> {
        self.try_extract(text).unwrap()
    }

    /// Extract hashtags; hashtags inside a URL are dropped.
    fn try_extract_hashtags(
        &self,
        text: &str,
    ) -> TCResult<Vec<Entity>> {
        self.try_extract_kinds(text, &[EntityKind::Hashtag])
    }

    /// Extract hashtags.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract_hashtags(
        &self,
        text: &str,
    ) -> Vec<Entity> {
        self.try_extract_hashtags(text).unwrap()
    }

    /// Extract mentions and list mentions; mentions inside a URL are dropped.
    fn try_extract_mentions(
        &self,
        text: &str,
    ) -> TCResult<Vec<Entity>> {
        self.try_extract_kinds(text, EntityKind::MENTIONS)
    }

    /// Extract mentions and list mentions.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract_mentions(
        &self,
        text: &str,
    ) -> Vec<Entity> {
        self.try_extract_mentions(text).unwrap()
    }

    /// Extract URLs.
    fn try_extract_urls(
        &self,
        text: &str,
    ) -> TCResult<Vec<Entity>> {
        self.try_extract_kinds(text, &[EntityKind::Url])
    }

    /// Extract URLs.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract_urls(
        &self,
        text: &str,
    ) -> Vec<Entity> {
        self.try_extract_urls(text).unwrap()
    }

    /// Extract cashtags.
    fn try_extract_cashtags(
        &self,
        text: &str,
    ) -> TCResult<Vec<Entity>> {
        self.try_extract_kinds(text, &[EntityKind::Cashtag])
    }

    /// Extract cashtags.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract_cashtags(
        &self,
        text: &str,
    ) -> Vec<Entity> {
        self.try_extract_cashtags(text).unwrap()
    }

    /// Extract the username a reply is addressed to.
    ///
    /// A reply is a mention at the very start of the text, after only
    /// whitespace.
    ///
    /// ## Returns
    /// The username without its at-sign, or `None` if the text is not a reply.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn try_extract_reply_username(
        &self,
        text: &str,
    ) -> TCResult<Option<String>> {
        self.options().check_input(text)?;
        Ok(scan_reply(self.library(), text).map(|c| text[c.display_range()].to_string()))
    }

    /// Extract the username a reply is addressed to.
    ///
    /// ## Panics
    /// Panics if the text fails the configured input checks.
    fn extract_reply_username(
        &self,
        text: &str,
    ) -> Option<String> {
        self.try_extract_reply_username(text).unwrap()
    }

    /// Extract all entities from a batch of texts.
    ///
    /// ## Arguments
    /// * `batch` - The texts to scan.
    ///
    /// ## Returns
    /// One entity list per text, in batch order; or the first error.
    fn try_extract_batch(
        &self,
        batch: &[&str],
    ) -> TCResult<Vec<Vec<Entity>>> {
        batch.iter().map(|text| self.try_extract(text)).collect()
    }

    /// Extract all entities from a batch of texts.
    ///
    /// ## Panics
    /// Panics if any text fails the configured input checks.
    fn extract_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<Entity>> {
        self.try_extract_batch(batch).unwrap()
    }
}
