//! Knowledge Graph - the fixed table of entities and intent patterns.

use std::collections::HashMap;

use super::{Entity, Intent, IntentPattern};

/// The main knowledge graph structure.
///
/// Entities keep their declaration order, which decides how ties between
/// several matching entities are broken during recognition. Intent patterns
/// are always visited in [`Intent::ALL`] order, whatever order they were added in.
///
/// The graph is assembled with the consuming `with_*` methods and exposes
/// only shared references afterwards.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    /// Entities in declaration order.
    entities: Vec<Entity>,

    /// Index: entity name -> position in `entities`.
    by_name: HashMap<String, usize>,

    /// Trigger phrases per intent.
    patterns: HashMap<Intent, IntentPattern>,
}

impl KnowledgeGraph {
    /// Create a new empty knowledge graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity.
    ///
    /// An entity whose name is already present replaces the earlier one but
    /// keeps its original position, so names stay unique.
    pub fn with_entity(mut self, entity: Entity) -> Self {
        match self.by_name.get(&entity.name) {
            Some(&index) => self.entities[index] = entity,
            None => {
                self.by_name.insert(entity.name.clone(), self.entities.len());
                self.entities.push(entity);
            }
        }
        self
    }

    /// Add trigger phrases for an intent, appending to any already registered.
    pub fn with_pattern(mut self, pattern: IntentPattern) -> Self {
        self.patterns
            .entry(pattern.intent)
            .or_insert_with(|| IntentPattern::new(pattern.intent))
            .triggers
            .extend(pattern.triggers);
        self
    }

    /// Get an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&index| &self.entities[index])
    }

    /// All entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Get the total number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Get the trigger pattern for an intent.
    pub fn pattern(&self, intent: Intent) -> Option<&IntentPattern> {
        self.patterns.get(&intent)
    }

    /// All registered patterns in recognition order.
    pub fn patterns(&self) -> impl Iterator<Item = &IntentPattern> {
        Intent::ALL
            .into_iter()
            .filter_map(move |intent| self.patterns.get(&intent))
    }
}
