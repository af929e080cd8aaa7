//! # `tagchipper` Entity Extraction
//!
//! Unicode-aware extraction of hashtags, @-mentions, list mentions, URLs,
//! and cashtags from short social text; with exact offsets and classified
//! sub-spans (domain / path / query of a URL, username / list of a mention).
//!
//! See:
//! * [`scanner`] to extract entities; start with [`ExtractorOptions`].
//! * [`entities`] for the output model.
//! * [`offsets`] to convert between code point, UTF-16, and byte offsets.
//! * [`validation`] to reject text containing invalid control characters.
//! * [`patterns`] for the compiled patterns and the RTL classifier.
//! * [`chars`] for the underlying character-class tables.
//!
//! ```rust
//! use tagchipper::{EntityExtractor, EntityKind, ExtractorOptions};
//!
//! let extractor = ExtractorOptions::default().build();
//!
//! let entities = extractor.extract("check http://example.com/a_(b)/path. #wow");
//! assert_eq!(entities.len(), 2);
//!
//! assert_eq!(entities[0].kind, EntityKind::Url);
//! assert_eq!(entities[0].path(), Some("/a_(b)/path"));
//!
//! assert_eq!(entities[1].kind, EntityKind::Hashtag);
//! assert_eq!(entities[1].display_text, "wow");
//! assert_eq!((entities[1].start, entities[1].end), (37, 41));
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod chars;
pub mod entities;
pub mod errors;
pub mod offsets;
pub mod patterns;
pub mod scanner;
pub mod types;
pub mod validation;

#[doc(inline)]
pub use entities::{Entity, EntityKind, Subgroup, SubgroupSpan};
#[doc(inline)]
pub use errors::{TCResult, TagchipperError};
#[doc(inline)]
pub use offsets::OffsetUnit;
#[doc(inline)]
pub use patterns::{contains_rtl, rtl_spans};
#[doc(inline)]
pub use scanner::{DefaultEntityExtractor, EntityExtractor, ExtractorOptions};
#[doc(inline)]
pub use validation::check_text;
