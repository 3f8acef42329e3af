//! Transformation module.
//!
//! - Normalize: raw author names to "Last, First" keys
//! - Aggregate: corpus records to author → cities
//! - Pipeline: end-to-end run

pub mod aggregate;
pub mod normalize;
pub mod pipeline;

pub use aggregate::{aggregate, check_author_count};
pub use normalize::{normalize_author, split_authors};
pub use pipeline::*;
