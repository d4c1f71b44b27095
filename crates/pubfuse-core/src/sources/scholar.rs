//! Secondary-source profile shapes and normalizer.
//!
//! The profile service is already scoped to one person, so there is no
//! identifier filter here: every article on the profile becomes a candidate.
//! The data is author-curated and loosely structured, which is why several
//! fields tolerate more than one wire shape.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::sources::YearField;
use crate::types::{CandidatePublication, NO_TITLE, SourceTag};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarProfile {
    #[serde(default)]
    pub articles: Vec<ScholarArticle>,
}

impl ScholarProfile {
    pub fn from_json(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<YearField>,
    /// The profile's single "publication venue" string.
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub authors: Option<AuthorsField>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ScholarArticle {
    fn to_candidate(&self) -> CandidatePublication {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_TITLE);
        let mut candidate = CandidatePublication::new(title, SourceTag::Secondary);

        candidate.year = self.year.as_ref().and_then(YearField::as_year);
        candidate.venue = self
            .publication
            .clone()
            .filter(|v| !v.trim().is_empty());
        candidate.author_names = self
            .authors
            .as_ref()
            .map(AuthorsField::names)
            .unwrap_or_default();
        if let Some(link) = self
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            candidate.urls.push(link.to_string());
        }

        candidate
    }
}

/// Author names arrive either as a proper list or as one comma-joined
/// string, depending on the scraping collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorsField {
    List(Vec<String>),
    Joined(String),
}

impl AuthorsField {
    pub fn names(&self) -> Vec<String> {
        match self {
            AuthorsField::List(names) => names
                .iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            AuthorsField::Joined(joined) => joined
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

/// Maps each profile entry to a candidate. `None` input (blank identifier,
/// failed upstream lookup) yields an empty list.
pub fn extract_candidates(profile: Option<&ScholarProfile>) -> Vec<CandidatePublication> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    let candidates: Vec<_> = profile
        .articles
        .iter()
        .map(ScholarArticle::to_candidate)
        .collect();
    debug!(count = candidates.len(), "extracted secondary candidates");
    candidates
}
