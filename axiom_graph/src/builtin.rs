//! The built-in knowledge the model ships with.

use crate::{Entity, Intent, IntentPattern, KnowledgeGraph};

impl KnowledgeGraph {
    /// Build the fixed knowledge graph used by the model.
    ///
    /// Declaration order here is part of the observable behavior: it decides
    /// which intent wins and which entities come first in a response.
    pub fn builtin() -> Self {
        KnowledgeGraph::new()
            .with_entity(
                Entity::new(
                    "deterministic execution",
                    "a core principle of sovereign computing",
                )
                .with_properties(["verifiable", "reproducible", "auditable"])
                .with_details(
                    "It ensures that given the same input, a system will always produce the identical output.",
                ),
            )
            .with_entity(
                Entity::new("axiom model", "a local-first, deterministic AI")
                    .with_properties(["sovereign", "hardware-agnostic", "cpu-native"])
                    .with_details(
                        "The ADLM is a procedural model designed for transparency and performance without external dependencies.",
                    ),
            )
            .with_entity(
                Entity::new("rust", "a systems programming language")
                    .with_properties(["memory safety", "high performance", "concurrency"])
                    .with_details(
                        "It achieves memory safety without a garbage collector through its ownership model.",
                    ),
            )
            .with_entity(
                Entity::new("ssi", "a model for digital identity")
                    .with_properties(["decentralized", "user-centric", "verifiable"])
                    .with_details(
                        "Self-Sovereign Identity gives individuals full control over their personal data using technologies like DIDs and Verifiable Credentials.",
                    ),
            )
            // "what's" never matches: the parser splits it into "what s".
            .with_pattern(
                IntentPattern::new(Intent::WhatIs).with_triggers(["what is", "define", "what's"]),
            )
            .with_pattern(
                IntentPattern::new(Intent::Explain)
                    .with_triggers(["explain", "describe", "tell me about"]),
            )
            .with_pattern(
                IntentPattern::new(Intent::Compare)
                    .with_triggers(["compare", "vs", "versus", "differentiate"]),
            )
    }
}
