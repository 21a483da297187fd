//! Response Synthesizer - fixed templates per intent.

use axiom_graph::{Entity, Intent};

use crate::Recognition;

/// Returned when no intent or no entity was recognized.
pub const UNPROCESSABLE_RESPONSE: &str = "Your query could not be processed by the ADLM. Please ask about a known topic like 'Rust' or 'SSI'.";

/// Returned when an intent was recognized but no template applies.
pub const NO_DETAIL_RESPONSE: &str =
    "The ADLM understood your intent, but could not form a detailed response. Please try rephrasing.";

/// Builds response text from a recognized intent and its entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSynthesizer;

impl ResponseSynthesizer {
    /// Create a new synthesizer.
    pub fn new() -> Self {
        Self
    }

    /// Synthesize a response for a recognition result.
    pub fn respond(&self, recognition: &Recognition<'_>) -> String {
        self.synthesize(recognition.intent, &recognition.entities)
    }

    /// Synthesize a response for an intent and matched entities.
    ///
    /// Only the first entity is used for definitions and explanations, and
    /// only the first two for comparisons.
    pub fn synthesize(&self, intent: Option<Intent>, entities: &[&Entity]) -> String {
        let Some(intent) = intent else {
            return UNPROCESSABLE_RESPONSE.to_string();
        };

        match (intent, entities) {
            (_, []) => UNPROCESSABLE_RESPONSE.to_string(),
            (Intent::WhatIs, [entity, ..]) => self.define(entity),
            (Intent::Explain, [entity, ..]) => self.explain(entity),
            (Intent::Compare, [first, second, ..]) => self.compare(first, second),
            _ => NO_DETAIL_RESPONSE.to_string(),
        }
    }

    fn define(&self, entity: &Entity) -> String {
        format!("{} is {}.", entity.display_name(), entity.is_a)
    }

    fn explain(&self, entity: &Entity) -> String {
        format!(
            "{} is {}, characterized by properties like {}. {}",
            entity.display_name(),
            entity.is_a,
            entity.properties.join(", "),
            entity.details
        )
    }

    fn compare(&self, first: &Entity, second: &Entity) -> String {
        let mut response = format!(
            "Comparing {} and {}: Both are related to core computing principles. ",
            first.name, second.name
        );

        let shared = first.shared_properties(second);
        if shared.is_empty() {
            response.push_str(
                "While both are important, they address different aspects of system design.",
            );
        } else {
            response.push_str(&format!(
                "They share common properties such as {}. ",
                shared.join(", ")
            ));
        }

        response
    }
}
