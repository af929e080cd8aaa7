//! # Extractor Options
//!
//! Options for building an [`EntityExtractor`].

use std::sync::Arc;

use crate::{
    errors::{TCResult, TagchipperError},
    offsets::OffsetUnit,
    scanner::{DefaultEntityExtractor, EntityExtractor},
    validation::check_text,
};

/// Options for configuring an [`EntityExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// The unit of reported entity offsets.
    pub offset_unit: OffsetUnit,

    /// Reject inputs longer than this many bytes.
    pub max_input_len: Option<usize>,

    /// Extract URLs which lack an `http://` or `https://` protocol.
    pub urls_without_protocol: bool,

    /// Accept protocol-less URLs with no path.
    pub bare_domains: bool,

    /// Fail extraction on invalid control characters, rather than
    /// scanning past them.
    pub reject_invalid_chars: bool,

    /// Should batch extraction be threaded?
    pub parallel: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            offset_unit: OffsetUnit::CodePoint,
            max_input_len: None,
            urls_without_protocol: true,
            bare_domains: false,
            reject_invalid_chars: false,
            parallel: false,
        }
    }
}

impl ExtractorOptions {
    /// Get the configured [`OffsetUnit`].
    pub fn offset_unit(&self) -> OffsetUnit {
        self.offset_unit
    }

    /// Set the configured [`OffsetUnit`].
    pub fn set_offset_unit(
        &mut self,
        offset_unit: OffsetUnit,
    ) {
        self.offset_unit = offset_unit;
    }

    /// Set the configured [`OffsetUnit`] and return the builder.
    pub fn with_offset_unit(
        mut self,
        offset_unit: OffsetUnit,
    ) -> Self {
        self.set_offset_unit(offset_unit);
        self
    }

    /// Get the configured maximum input length, in bytes.
    pub fn max_input_len(&self) -> Option<usize> {
        self.max_input_len
    }

    /// Set the configured maximum input length, in bytes.
    ///
    /// `None` disables the limit.
    pub fn set_max_input_len(
        &mut self,
        max_input_len: Option<usize>,
    ) {
        self.max_input_len = max_input_len;
    }

    /// Set the configured maximum input length and return the builder.
    pub fn with_max_input_len(
        mut self,
        max_input_len: Option<usize>,
    ) -> Self {
        self.set_max_input_len(max_input_len);
        self
    }

    /// Gets the configured protocol-less URL value.
    pub fn urls_without_protocol(&self) -> bool {
        self.urls_without_protocol
    }

    /// Sets the configured protocol-less URL value.
    pub fn set_urls_without_protocol(
        &mut self,
        urls_without_protocol: bool,
    ) {
        self.urls_without_protocol = urls_without_protocol;
    }

    /// Sets the configured protocol-less URL value and returns the builder.
    pub fn with_urls_without_protocol(
        mut self,
        urls_without_protocol: bool,
    ) -> Self {
        self.set_urls_without_protocol(urls_without_protocol);
        self
    }

    /// Gets the configured bare domain value.
    ///
    /// When enabled, a protocol-less domain with no path is accepted;
    /// except for a plain `name.cc` country-code domain, unless `cc`
    /// is `co` or `tv`.
    pub fn bare_domains(&self) -> bool {
        self.bare_domains
    }

    /// Sets the configured bare domain value.
    pub fn set_bare_domains(
        &mut self,
        bare_domains: bool,
    ) {
        self.bare_domains = bare_domains;
    }

    /// Sets the configured bare domain value and returns the builder.
    pub fn with_bare_domains(
        mut self,
        bare_domains: bool,
    ) -> Self {
        self.set_bare_domains(bare_domains);
        self
    }

    /// Gets the configured invalid character rejection value.
    pub fn reject_invalid_chars(&self) -> bool {
        self.reject_invalid_chars
    }

    /// Sets the configured invalid character rejection value.
    pub fn set_reject_invalid_chars(
        &mut self,
        reject_invalid_chars: bool,
    ) {
        self.reject_invalid_chars = reject_invalid_chars;
    }

    /// Sets the configured invalid character rejection value and returns the builder.
    pub fn with_reject_invalid_chars(
        mut self,
        reject_invalid_chars: bool,
    ) -> Self {
        self.set_reject_invalid_chars(reject_invalid_chars);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value and returns the builder.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Check `text` against the input limits.
    ///
    /// ## Returns
    /// `Err` if the text is too long; or, with
    /// [`reject_invalid_chars`](Self::reject_invalid_chars), if it
    /// contains an invalid control character.
    pub fn check_input(
        &self,
        text: &str,
    ) -> TCResult<()> {
        if let Some(max) = self.max_input_len
            && text.len() > max
        {
            log::warn!("rejecting input of {} bytes; the limit is {max}", text.len());
            return Err(TagchipperError::InputTooLong {
                len: text.len(),
                max,
            });
        }
        if self.reject_invalid_chars {
            check_text(text)?;
        }
        Ok(())
    }

    /// Build an [`EntityExtractor`] over the shared pattern library.
    pub fn build(&self) -> Arc<dyn EntityExtractor> {
        #[allow(unused_mut)]
        let mut extractor: Arc<dyn EntityExtractor> = Arc::new(DefaultEntityExtractor::new(*self));

        #[cfg(feature = "rayon")]
        if self.parallel() {
            extractor = Arc::new(crate::rayon::ParallelRayonExtractor::new(extractor));
        }

        extractor
    }
}
