//! # Entity Scanner
//!
//! Each entity kind is scanned independently, left to right, by a pure
//! function returning byte-offset [`Candidate`]s:
//! * [`scan_hashtags`]
//! * [`scan_mentions`] and [`scan_reply`]
//! * [`scan_urls`]
//! * [`scan_cashtags`]
//!
//! A candidate is a pattern match which passed its kind's boundary checks
//! (see [`boundaries`]). [`resolve_overlaps`] merges the per-kind lists,
//! and a [`ScanCursor`] translates the survivors into [`crate::entities::Entity`]
//! records.
//!
//! The [`EntityExtractor`] trait wraps the whole pipeline; build one with
//! [`ExtractorOptions::build`] or use [`DefaultEntityExtractor`] directly.
//!
//! ## Example
//!
//! ```rust
//! use tagchipper::scanner::{EntityExtractor, ExtractorOptions};
//!
//! let extractor = ExtractorOptions::default().build();
//! let entities = extractor.extract("RT @jack: #rust is fun");
//! assert_eq!(entities[0].display_text, "jack");
//! assert_eq!(entities[1].display_text, "rust");
//! ```

pub mod boundaries;
mod candidate;
mod cashtags;
mod default_extractor;
mod entity_extractor;
mod extractor_options;
mod hashtags;
mod mentions;
mod resolve;
mod scan_cursor;
mod urls;

#[doc(inline)]
pub use candidate::*;
#[doc(inline)]
pub use cashtags::*;
#[doc(inline)]
pub use default_extractor::*;
#[doc(inline)]
pub use entity_extractor::*;
#[doc(inline)]
pub use extractor_options::*;
#[doc(inline)]
pub use hashtags::*;
#[doc(inline)]
pub use mentions::*;
#[doc(inline)]
pub use resolve::*;
#[doc(inline)]
pub use scan_cursor::*;
#[doc(inline)]
pub use urls::*;
