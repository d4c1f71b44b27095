//! Title-based matching between candidates from the two sources.

use std::fmt;

use crate::types::CandidatePublication;

/// Minimum similarity for the fuzzy path. Exact key equality matches
/// regardless of this value.
pub const DEFAULT_TITLE_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Lower-cased title with punctuation stripped and whitespace collapsed to
/// single spaces. Used only as a matching key, never stored.
pub fn normalize_title(title: &str) -> String {
    let lowercase = title.to_lowercase();
    let cleaned: String = lowercase
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Pluggable similarity strategy over normalized titles, scoring in [0, 1].
pub trait TitleSimilarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Default strategy: edit distance normalized by the longer string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl TitleSimilarity for NormalizedLevenshtein {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Decides whether two candidates denote the same publication.
///
/// Equal normalized title keys match unconditionally; the sources often
/// disagree on the year for the same work (preprint vs. published version),
/// so the year is not required to agree on that path. When keys differ, a
/// fuzzy score above the threshold matches only if both candidates report
/// the same year.
pub struct TitleMatcher {
    threshold: f64,
    scorer: Box<dyn TitleSimilarity>,
}

impl Default for TitleMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TITLE_SIMILARITY_THRESHOLD,
            scorer: Box::new(NormalizedLevenshtein),
        }
    }
}

impl fmt::Debug for TitleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleMatcher")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl TitleMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_scorer(mut self, scorer: impl TitleSimilarity + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Exact-key equality. Empty keys never match each other.
    pub fn same_title_key(&self, a: &CandidatePublication, b: &CandidatePublication) -> bool {
        let key_a = normalize_title(&a.title);
        if key_a.is_empty() {
            return false;
        }
        key_a == normalize_title(&b.title)
    }

    /// Fuzzy fallback: similarity above the threshold and agreeing years.
    /// Symmetric in its arguments.
    pub fn fuzzy_same_publication(
        &self,
        a: &CandidatePublication,
        b: &CandidatePublication,
    ) -> bool {
        match (a.year, b.year) {
            (Some(left), Some(right)) if left == right => {}
            _ => return false,
        }

        let key_a = normalize_title(&a.title);
        let key_b = normalize_title(&b.title);
        if key_a.is_empty() || key_b.is_empty() {
            return false;
        }

        self.scorer.score(&key_a, &key_b) > self.threshold
    }

    pub fn same_publication(&self, a: &CandidatePublication, b: &CandidatePublication) -> bool {
        self.same_title_key(a, b) || self.fuzzy_same_publication(a, b)
    }
}
