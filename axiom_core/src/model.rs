//! The model facade - runs the full pipeline for a prompt.

use axiom_graph::{ExternalKnowledgeBase, KnowledgeGraph};
use serde::{Deserialize, Serialize};

use crate::{
    Citation, CitationGrounder, IntentRecognizer, QueryParser, Recognition, ResponseSynthesizer,
};

/// Response text and the citations grounding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// The Axiom Dynamic Logic Model.
///
/// Owns the knowledge graph and the external knowledge base for its whole
/// lifetime; neither is mutated after construction.
#[derive(Debug, Clone)]
pub struct AxiomModel {
    graph: KnowledgeGraph,
    knowledge_base: ExternalKnowledgeBase,
    synthesizer: ResponseSynthesizer,
}

impl AxiomModel {
    /// Create a model over the given knowledge.
    pub fn new(graph: KnowledgeGraph, knowledge_base: ExternalKnowledgeBase) -> Self {
        tracing::info!(
            entities = graph.entity_count(),
            citation_records = knowledge_base.len(),
            "model initialized"
        );
        Self {
            graph,
            knowledge_base,
            synthesizer: ResponseSynthesizer::new(),
        }
    }

    /// Create a model over the built-in graph and no citation source.
    pub fn with_defaults() -> Self {
        Self::new(KnowledgeGraph::builtin(), ExternalKnowledgeBase::empty())
    }

    /// Parse and recognize a prompt without synthesizing a response.
    pub fn understand(&self, prompt: &str) -> Recognition<'_> {
        let tokens = QueryParser::parse(prompt);
        IntentRecognizer::new(&self.graph).recognize(&tokens)
    }

    /// Generate the response text for a prompt.
    pub fn generate(&self, prompt: &str) -> String {
        self.synthesizer.respond(&self.understand(prompt))
    }

    /// Citations from the external knowledge base relevant to `text`.
    pub fn find_citations(&self, text: &str) -> Vec<Citation> {
        CitationGrounder::new(&self.knowledge_base).ground(text)
    }

    /// Answer a prompt, grounding the answer when requested.
    ///
    /// Grounding checks the prompt and the response together, so citations
    /// can match words from either.
    pub fn answer(&self, prompt: &str, grounding: bool) -> QueryResult {
        let text = self.generate(prompt);
        let citations = if grounding {
            self.find_citations(&format!("{} {}", prompt, text))
        } else {
            Vec::new()
        };

        QueryResult { text, citations }
    }
}

impl Default for AxiomModel {
    fn default() -> Self {
        Self::with_defaults()
    }
}
