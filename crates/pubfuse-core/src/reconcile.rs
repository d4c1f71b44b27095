//! Cross-source reconciliation: matching plus field merge for one author.

use tracing::debug;

use crate::matching::TitleMatcher;
use crate::types::{CandidatePublication, MergedPublication, append_unique_urls};

/// Orchestrates matching and merging over the full candidate sets from both
/// sources for one author.
///
/// Either input may be empty; the other side then comes through as all
/// singletons. There is no failure path: however sparse the inputs, the
/// result is a valid (possibly empty) list.
#[derive(Debug, Default)]
pub struct Reconciler {
    matcher: TitleMatcher,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(matcher: TitleMatcher) -> Self {
        Self { matcher }
    }

    /// Produces one merged entry per distinct publication. Every candidate
    /// lands in exactly one entry; unmatched candidates become singletons.
    ///
    /// Result ordering: descending by year with missing years treated as 0
    /// (sorting last), stable for equal years in first-seen order
    /// (primaries in input order, then unmatched secondaries).
    pub fn reconcile(
        &self,
        primary: &[CandidatePublication],
        secondary: &[CandidatePublication],
    ) -> Vec<MergedPublication> {
        // pairing[p] holds the index of the secondary candidate consumed by
        // primary p; a consumed primary is never matched again.
        let mut pairing: Vec<Option<usize>> = vec![None; primary.len()];
        let mut matched_secondary = vec![false; secondary.len()];

        for (s_idx, sec) in secondary.iter().enumerate() {
            let partner = self.find_partner(primary, &pairing, sec);
            if let Some(p_idx) = partner {
                debug!(
                    primary_title = %primary[p_idx].title,
                    secondary_title = %sec.title,
                    "matched candidate pair"
                );
                pairing[p_idx] = Some(s_idx);
                matched_secondary[s_idx] = true;
            }
        }

        let mut merged = Vec::with_capacity(primary.len() + secondary.len());
        for (p_idx, prim) in primary.iter().enumerate() {
            match pairing[p_idx] {
                Some(s_idx) => merged.push(merge_pair(prim, &secondary[s_idx])),
                None => merged.push(merge_singleton(prim)),
            }
        }
        for (s_idx, sec) in secondary.iter().enumerate() {
            if !matched_secondary[s_idx] {
                merged.push(merge_singleton(sec));
            }
        }

        merged.sort_by_key(|publication| std::cmp::Reverse(publication.year.unwrap_or(0)));
        merged
    }

    /// First unconsumed primary with an equal title key; the fuzzy rule is
    /// consulted only when no exact-key partner exists. Ties go to the first
    /// candidate in primary list order.
    fn find_partner(
        &self,
        primary: &[CandidatePublication],
        pairing: &[Option<usize>],
        sec: &CandidatePublication,
    ) -> Option<usize> {
        let unconsumed = || {
            primary
                .iter()
                .enumerate()
                .filter(|(p_idx, _)| pairing[*p_idx].is_none())
        };

        unconsumed()
            .find(|(_, prim)| self.matcher.same_title_key(prim, sec))
            .or_else(|| unconsumed().find(|(_, prim)| self.matcher.fuzzy_same_publication(prim, sec)))
            .map(|(p_idx, _)| p_idx)
    }
}

/// Field resolution for a matched pair. The primary source is authoritative
/// for bibliographic metadata; the secondary is the only one carrying a
/// usable author-name list.
pub fn merge_pair(
    primary: &CandidatePublication,
    secondary: &CandidatePublication,
) -> MergedPublication {
    let mut urls = Vec::new();
    append_unique_urls(&mut urls, &primary.urls);
    append_unique_urls(&mut urls, &secondary.urls);

    MergedPublication {
        title: primary.title.clone(),
        year: primary.year.or(secondary.year),
        venue: primary
            .venue_nonempty()
            .or_else(|| secondary.venue_nonempty())
            .map(str::to_string),
        authors: secondary.author_names.clone(),
        urls,
    }
}

/// A candidate with no cross-source match, carried over as-is.
pub fn merge_singleton(candidate: &CandidatePublication) -> MergedPublication {
    let mut urls = Vec::new();
    append_unique_urls(&mut urls, &candidate.urls);

    MergedPublication {
        title: candidate.title.clone(),
        year: candidate.year,
        venue: candidate.venue_nonempty().map(str::to_string),
        authors: candidate.author_names.clone(),
        urls,
    }
}
