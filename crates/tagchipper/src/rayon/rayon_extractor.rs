//! # Parallel Extractor

use std::sync::Arc;

use crate::{
    entities::{Entity, EntityKind},
    errors::TCResult,
    patterns::PatternLibrary,
    scanner::{EntityExtractor, ExtractorOptions},
};

/// Batch-Level Parallel Extractor Wrapper.
///
/// Enables ``rayon`` extraction of batches when available.
pub struct ParallelRayonExtractor {
    /// Inner extractor.
    pub inner: Arc<dyn EntityExtractor>,
}

impl ParallelRayonExtractor {
    /// Create a new parallel extractor.
    ///
    /// ## Arguments
    /// * `inner` - The entity extractor to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonExtractor` instance.
    pub fn new(inner: Arc<dyn EntityExtractor>) -> Self {
        Self { inner }
    }
}

impl EntityExtractor for ParallelRayonExtractor {
    fn options(&self) -> &ExtractorOptions {
        self.inner.options()
    }

    fn library(&self) -> &PatternLibrary {
        self.inner.library()
    }

    fn try_extract_kinds(
        &self,
        text: &str,
        kinds: &[EntityKind],
    ) -> TCResult<Vec<Entity>> {
        self.inner.try_extract_kinds(text, kinds)
    }

    fn try_extract_reply_username(
        &self,
        text: &str,
    ) -> TCResult<Option<String>> {
        self.inner.try_extract_reply_username(text)
    }

    fn try_extract_batch(
        &self,
        batch: &[&str],
    ) -> TCResult<Vec<Vec<Entity>>> {
        use rayon::prelude::*;

        let results: Vec<TCResult<Vec<Entity>>> = batch
            .par_iter()
            .map(|text| self.inner.try_extract(text))
            .collect();

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::TagchipperError,
        scanner::DefaultEntityExtractor,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_extractor() {
        let samples = vec![
            "hello #world",
            "RT@jack: hi",
            "check http://example.com/a_(b)/path.",
            "$AAPL is up",
            "nothing here",
        ];

        let inner: Arc<dyn EntityExtractor> = Arc::new(DefaultEntityExtractor::default());
        check_is_send(&inner);
        check_is_sync(&inner);

        let extractor = ParallelRayonExtractor::new(inner.clone());
        check_is_send(&extractor);
        check_is_sync(&extractor);

        let expected: Vec<Vec<Entity>> = samples.iter().map(|s| inner.extract(s)).collect();
        assert_eq!(extractor.extract_batch(&samples), expected);
        assert_eq!(extractor.extract(samples[0]), expected[0]);
        assert_eq!(
            extractor.extract_reply_username("@jack hi"),
            Some("jack".to_string())
        );
    }

    #[test]
    fn test_batch_error() {
        let inner: Arc<dyn EntityExtractor> = Arc::new(DefaultEntityExtractor::new(
            ExtractorOptions::default().with_max_input_len(Some(8)),
        ));
        let extractor = ParallelRayonExtractor::new(inner);

        assert_eq!(
            extractor.try_extract_batch(&["#short", "#this is too long"]),
            Err(TagchipperError::InputTooLong { len: 17, max: 8 })
        );
    }
}
