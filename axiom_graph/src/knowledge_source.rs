//! External knowledge source - citation records loaded from a JSON file.
//!
//! The source is optional. Failing to read or parse it is reported through
//! [`KnowledgeSourceError`] by [`ExternalKnowledgeBase::from_path`], while
//! [`ExternalKnowledgeBase::load_or_empty`] collapses any failure into an
//! empty base so grounding simply finds nothing.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading an external knowledge source.
#[derive(Debug, Error)]
pub enum KnowledgeSourceError {
    #[error("failed to read knowledge source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed knowledge source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identifier of a citation record, as written in the source.
///
/// Any JSON number or string is accepted. Numbers sort before text; numbers
/// compare by value and text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceId {
    Number(Number),
    Text(String),
}

impl Ord for SourceId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SourceId::Number(a), SourceId::Number(b)) => compare_numbers(a, b),
            (SourceId::Number(_), SourceId::Text(_)) => Ordering::Less,
            (SourceId::Text(_), SourceId::Number(_)) => Ordering::Greater,
            (SourceId::Text(a), SourceId::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SourceId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Integers compare exactly, anything else by float value. Numbers of equal
/// value but different spelling (`1` and `1.0`) fall back to their text so the
/// order stays consistent with `Eq`.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    let by_value = if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        x.cmp(&y)
    } else if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        x.cmp(&y)
    } else {
        let x = a.as_f64().unwrap_or(f64::NAN);
        let y = b.as_f64().unwrap_or(f64::NAN);
        x.total_cmp(&y)
    };
    by_value.then_with(|| a.to_string().cmp(&b.to_string()))
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        SourceId::Text(value.to_string())
    }
}

impl From<i64> for SourceId {
    fn from(value: i64) -> Self {
        SourceId::Number(value.into())
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceId::Number(n) => write!(f, "{}", n),
            SourceId::Text(s) => f.write_str(s),
        }
    }
}

/// A document that responses can cite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    pub id: SourceId,

    #[serde(default)]
    pub title: String,

    /// Keywords matched against tokenized text. Compared as written.
    #[serde(default)]
    pub keywords: HashSet<String>,
}

impl CitationRecord {
    /// Create a record with no keywords.
    pub fn new(id: impl Into<SourceId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            keywords: HashSet::new(),
        }
    }

    /// Add keywords to this record.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }
}

/// Ordered, read-only collection of citation records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalKnowledgeBase {
    records: Vec<CitationRecord>,
}

impl ExternalKnowledgeBase {
    /// Create an empty knowledge base.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a knowledge base from records, keeping their order.
    pub fn from_records(records: Vec<CitationRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeSourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeSourceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load a knowledge base, degrading to an empty one on any failure.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(kb) => {
                tracing::info!(
                    path = %path.display(),
                    records = kb.len(),
                    "loaded external knowledge base"
                );
                kb
            }
            Err(err) => {
                tracing::warn!(error = %err, "grounding disabled, using empty knowledge base");
                Self::empty()
            }
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[CitationRecord] {
        &self.records
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there is nothing to cite.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
