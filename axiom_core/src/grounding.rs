//! Citation Grounder - cross-references text against the external knowledge base.
//!
//! A record is scored by the fraction of its keywords that appear among the
//! words of the text. Records scoring above [`MATCH_THRESHOLD`] are cited,
//! ordered by source identifier so output never depends on file order.

use axiom_graph::{CitationRecord, ExternalKnowledgeBase, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::QueryParser;

/// Scores must be strictly greater than this to be cited.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// A citation attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub source_id: SourceId,

    #[serde(rename = "document_title")]
    pub title: String,

    /// Fraction of the record's keywords found, rounded to 2 decimals.
    pub match_score: f64,
}

/// Round `value` to `places` decimal places, halves going to the even digit.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Scores citation records against text.
#[derive(Debug, Clone, Copy)]
pub struct CitationGrounder<'kb> {
    knowledge_base: &'kb ExternalKnowledgeBase,
}

impl<'kb> CitationGrounder<'kb> {
    /// Create a grounder over a knowledge base.
    pub fn new(knowledge_base: &'kb ExternalKnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    /// Find the records relevant to `text`, sorted by source identifier.
    pub fn ground(&self, text: &str) -> Vec<Citation> {
        if self.knowledge_base.is_empty() {
            return Vec::new();
        }

        let words = QueryParser::word_set(text);

        let mut citations: Vec<Citation> = self
            .knowledge_base
            .records()
            .iter()
            .filter_map(|record| {
                let score = score_record(&words, record)?;
                (score > MATCH_THRESHOLD).then(|| Citation {
                    source_id: record.id.clone(),
                    title: record.title.clone(),
                    match_score: round_to(score, 2),
                })
            })
            .collect();

        citations.sort_by(|a, b| a.source_id.cmp(&b.source_id));

        tracing::debug!(
            records = self.knowledge_base.len(),
            cited = citations.len(),
            "grounded text against knowledge base"
        );

        citations
    }
}

/// Fraction of the record's keywords present in `words`.
///
/// `None` when nothing overlaps, so the record is not considered at all.
fn score_record(words: &HashSet<String>, record: &CitationRecord) -> Option<f64> {
    let common = record
        .keywords
        .iter()
        .filter(|keyword| words.contains(*keyword))
        .count();

    if common == 0 {
        return None;
    }

    Some(if record.keywords.is_empty() {
        0.0
    } else {
        common as f64 / record.keywords.len() as f64
    })
}
