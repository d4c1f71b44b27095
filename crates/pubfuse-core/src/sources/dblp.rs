//! Primary-source record shapes and normalizer.
//!
//! Mirrors what an XML-to-JSON collaborator produces for a DBLP person page
//! (`dblp.org/pid/<pid>.xml`) with single-element lists collapsed. The
//! normalizer keeps only records where the queried PID appears among the
//! record's author identifiers.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::sources::{OneOrMany, YearField};
use crate::types::{CandidatePublication, NO_TITLE, SourceTag, append_unique_urls};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DblpPerson {
    #[serde(rename = "r", default)]
    pub records: OneOrMany<DblpRecord>,
}

impl DblpPerson {
    /// Tolerant constructor for collaborators handing over loose JSON. Any
    /// shape mismatch yields `None` rather than an error.
    pub fn from_json(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// One `<r>` element. DBLP wraps each publication in a key naming its kind;
/// only articles and inproceedings carry the fields we reconcile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DblpRecord {
    #[serde(default)]
    pub article: Option<DblpEntry>,
    #[serde(default)]
    pub inproceedings: Option<DblpEntry>,
}

impl DblpRecord {
    pub fn entry(&self) -> Option<&DblpEntry> {
        self.article.as_ref().or(self.inproceedings.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DblpEntry {
    #[serde(default)]
    pub title: Option<XmlText>,
    #[serde(default)]
    pub year: Option<YearField>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub booktitle: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(rename = "author", default)]
    pub authors: OneOrMany<DblpAuthor>,
    #[serde(default)]
    pub ee: Option<LinkField>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DblpEntry {
    fn to_candidate(&self) -> CandidatePublication {
        let title = self
            .title
            .as_ref()
            .and_then(XmlText::as_str)
            .unwrap_or(NO_TITLE);
        let mut candidate = CandidatePublication::new(title, SourceTag::Primary);

        candidate.year = self.year.as_ref().and_then(YearField::as_year);
        // Periodical name wins over the proceedings name.
        candidate.venue = self
            .journal
            .clone()
            .or_else(|| self.booktitle.clone())
            .filter(|v| !v.trim().is_empty());

        let mut urls = Vec::new();
        if let Some(ee) = &self.ee {
            append_unique_urls(&mut urls, &ee.urls());
        }
        if urls.is_empty()
            && let Some(url) = &self.url
        {
            urls.push(url.clone());
        }
        candidate.urls = urls;

        candidate
    }
}

/// An `<author>` element: plain text when it carries no attributes, or a
/// node whose `$` holds the attributes and `_` the element text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DblpAuthor {
    Name(String),
    Node {
        #[serde(rename = "$", default)]
        attrs: DblpAuthorAttrs,
        #[serde(rename = "_", default)]
        name: Option<String>,
    },
}

impl DblpAuthor {
    pub fn pid(&self) -> Option<&str> {
        match self {
            DblpAuthor::Name(_) => None,
            DblpAuthor::Node { attrs, .. } => attrs.pid.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DblpAuthor::Name(name) => Some(name),
            DblpAuthor::Node { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DblpAuthorAttrs {
    #[serde(default)]
    pub pid: Option<String>,
}

/// The `<ee>` link field arrives in one of three shapes: a single string, a
/// single wrapped value, or a list of either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkField {
    One(LinkValue),
    Many(Vec<LinkValue>),
}

impl LinkField {
    pub fn urls(&self) -> Vec<String> {
        match self {
            LinkField::One(value) => value.url().into_iter().map(str::to_string).collect(),
            LinkField::Many(values) => values
                .iter()
                .filter_map(LinkValue::url)
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    Url(String),
    Wrapped {
        #[serde(rename = "_", default)]
        text: Option<String>,
    },
}

impl LinkValue {
    fn url(&self) -> Option<&str> {
        match self {
            LinkValue::Url(url) => Some(url.as_str()),
            LinkValue::Wrapped { text } => text.as_deref(),
        }
        .map(str::trim)
        .filter(|url| !url.is_empty())
    }
}

/// Element text that may carry attributes (markup inside titles ends up as a
/// wrapped node after XML-to-JSON conversion).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum XmlText {
    Plain(String),
    Node {
        #[serde(rename = "_", default)]
        text: Option<String>,
    },
}

impl XmlText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlText::Plain(text) => Some(text.as_str()),
            XmlText::Node { text } => text.as_deref(),
        }
        .map(str::trim)
        .filter(|text| !text.is_empty())
    }
}

/// Filters the person's records down to those listing `pid` among their
/// author identifiers and maps each retained record to a candidate.
///
/// `None` input (blank identifier, failed upstream lookup) yields an empty
/// list; so does a person page with no matching records.
pub fn extract_candidates(person: Option<&DblpPerson>, pid: &str) -> Vec<CandidatePublication> {
    let Some(person) = person else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for record in person.records.iter() {
        let Some(entry) = record.entry() else {
            debug!("skipping record without article or inproceedings entry");
            continue;
        };
        // Exact identifier equality; a PID that is a prefix of another must
        // not pull in the other author's records.
        if !entry.authors.iter().any(|author| author.pid() == Some(pid)) {
            continue;
        }
        candidates.push(entry.to_candidate());
    }
    debug!(count = candidates.len(), pid, "extracted primary candidates");
    candidates
}
