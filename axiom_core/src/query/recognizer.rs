//! Intent and entity recognition over a tokenized query.

use axiom_graph::{Entity, Intent, KnowledgeGraph};

/// What a query asks for and which entities it mentions.
///
/// Entities are borrowed straight from the graph that produced them, so
/// later stages never look them up again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recognition<'g> {
    pub intent: Option<Intent>,

    /// The trigger phrase that selected the intent.
    pub trigger: Option<&'g str>,

    /// Matched entities in graph declaration order.
    pub entities: Vec<&'g Entity>,
}

impl<'g> Recognition<'g> {
    /// Nothing was recognized.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether both an intent and at least one entity were found.
    pub fn is_actionable(&self) -> bool {
        self.intent.is_some() && !self.entities.is_empty()
    }

    /// Names of the matched entities.
    pub fn entity_names(&self) -> Vec<&'g str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Matches tokens against the intents and entities of a knowledge graph.
///
/// # Algorithm
///
/// 1. Join the tokens with single spaces
/// 2. Walk intents in recognition order and their triggers in declaration
///    order; the first trigger contained in the joined text wins
/// 3. Collect every entity whose name is contained in the joined text, in
///    graph declaration order
///
/// Matching is plain substring containment, so a short entity name inside a
/// longer word still counts (`"rust"` in `"trustworthy"`).
#[derive(Debug, Clone, Copy)]
pub struct IntentRecognizer<'g> {
    graph: &'g KnowledgeGraph,
}

impl<'g> IntentRecognizer<'g> {
    /// Create a recognizer over the given graph.
    pub fn new(graph: &'g KnowledgeGraph) -> Self {
        Self { graph }
    }

    /// Recognize the intent and entities of a tokenized query.
    pub fn recognize<S: AsRef<str>>(&self, tokens: &[S]) -> Recognition<'g> {
        let text = tokens
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        let Some((intent, trigger)) = self.match_intent(&text) else {
            tracing::debug!(query = %text, "no intent trigger matched");
            return Recognition::none();
        };

        let entities: Vec<&'g Entity> = self
            .graph
            .entities()
            .filter(|entity| text.contains(entity.name.as_str()))
            .collect();

        tracing::debug!(
            intent = %intent,
            trigger,
            entities = ?entities.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            "recognized query"
        );

        Recognition {
            intent: Some(intent),
            trigger: Some(trigger),
            entities,
        }
    }

    fn match_intent(&self, text: &str) -> Option<(Intent, &'g str)> {
        self.graph.patterns().find_map(|pattern| {
            pattern
                .first_trigger_in(text)
                .map(|trigger| (pattern.intent, trigger))
        })
    }
}
