//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch extraction.

mod rayon_extractor;

pub use rayon_extractor::ParallelRayonExtractor;
