//! # Default Entity Extractor

use std::sync::Arc;

use crate::{
    patterns::PatternLibrary,
    scanner::{EntityExtractor, ExtractorOptions},
};

/// The standard [`EntityExtractor`].
#[derive(Debug, Clone)]
pub struct DefaultEntityExtractor {
    options: ExtractorOptions,
    library: Arc<PatternLibrary>,
}

impl Default for DefaultEntityExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

impl DefaultEntityExtractor {
    /// Create an extractor over the shared [`PatternLibrary::global`].
    ///
    /// ## Arguments
    /// * `options` - The extraction options.
    pub fn new(options: ExtractorOptions) -> Self {
        Self::with_library(options, PatternLibrary::global().clone())
    }

    /// Create an extractor over a specific pattern library.
    ///
    /// ## Arguments
    /// * `options` - The extraction options.
    /// * `library` - The compiled patterns.
    pub fn with_library(
        options: ExtractorOptions,
        library: Arc<PatternLibrary>,
    ) -> Self {
        Self { options, library }
    }
}

impl EntityExtractor for DefaultEntityExtractor {
    fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    fn library(&self) -> &PatternLibrary {
        &self.library
    }
}
