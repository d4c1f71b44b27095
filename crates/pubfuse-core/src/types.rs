use serde::{Deserialize, Serialize};

/// Title used when a source record carries no usable title. Normalizers
/// default to it instead of dropping the record.
pub const NO_TITLE: &str = "No Title";

/// Which upstream a candidate came from. Provenance only; matching and
/// merging never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    Primary,
    Secondary,
}

/// One source's normalized view of a single publication, prior to
/// cross-source reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePublication {
    pub title: String,
    pub year: Option<i32>,
    pub venue: Option<String>,
    pub author_names: Vec<String>,
    pub urls: Vec<String>,
    pub source: SourceTag,
}

impl CandidatePublication {
    pub fn new(title: impl Into<String>, source: SourceTag) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            NO_TITLE.to_string()
        } else {
            title
        };
        Self {
            title,
            year: None,
            venue: None,
            author_names: Vec::new(),
            urls: Vec::new(),
            source,
        }
    }

    /// Venue trimmed to `None` when empty. Sources that report an empty
    /// string for the venue are treated as reporting nothing.
    pub fn venue_nonempty(&self) -> Option<&str> {
        self.venue
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// The reconciled, deduplicated record combining both sources' data for
/// one work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedPublication {
    pub title: String,
    pub year: Option<i32>,
    pub venue: Option<String>,
    pub authors: Vec<String>,
    pub urls: Vec<String>,
}

/// Appends URLs not already present, preserving first-appearance order.
pub(crate) fn append_unique_urls(target: &mut Vec<String>, incoming: &[String]) {
    for url in incoming {
        if !target.iter().any(|existing| existing == url) {
            target.push(url.clone());
        }
    }
}
