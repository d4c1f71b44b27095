//! Pubfuse — cross-source reconciliation of an author's publication list.
//!
//! Given candidates normalized from a structured bibliographic record store
//! (DBLP-style, keyed by PID) and from a scraped author profile
//! (Scholar-style), the [`Reconciler`] decides which records describe the
//! same work, merges their fields without loss or duplication, and returns
//! one deduplicated list. The [`query`] module provides sort and filter
//! views over the result.
//!
//! The crate performs no I/O: fetching and response parsing are the caller's
//! concern, and the raw shapes in [`sources`] define that boundary.

pub mod error;
pub mod matching;
pub mod query;
pub mod reconcile;
pub mod sources;
pub mod types;

pub use error::{PubfuseError, Result};
pub use matching::{NormalizedLevenshtein, TitleMatcher, TitleSimilarity, normalize_title};
pub use query::SortField;
pub use reconcile::Reconciler;
pub use types::{CandidatePublication, MergedPublication, SourceTag};
