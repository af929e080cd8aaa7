//! # Entity Model
//!
//! The output of extraction: [`Entity`] records, tagged by [`EntityKind`],
//! with [`SubgroupSpan`]s for the kind-specific parts (domain/path/query
//! of a URL, username/list of a mention, and so on).

mod entity;

#[doc(inline)]
pub use entity::*;
