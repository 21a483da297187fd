//! Entity definitions - the named concepts stored in the knowledge graph.

use serde::{Deserialize, Serialize};

/// A named concept the model can talk about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Lowercase identifier, also the phrase matched against queries.
    pub name: String,

    /// Category label, phrased to follow "X is ...".
    pub is_a: String,

    /// Properties in declaration order.
    pub properties: Vec<String>,

    /// Free-text description.
    pub details: String,
}

impl Entity {
    /// Create a new entity. The name is normalized to lowercase.
    pub fn new(name: impl Into<String>, is_a: impl Into<String>) -> Self {
        Self {
            name: Into::<String>::into(name).to_lowercase(),
            is_a: is_a.into(),
            properties: Vec::new(),
            details: String::new(),
        }
    }

    /// Add a property. Duplicates are ignored so the list behaves like a set.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        let property = property.into();
        if !self.properties.contains(&property) {
            self.properties.push(property);
        }
        self
    }

    /// Add multiple properties.
    pub fn with_properties<I, S>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        properties
            .into_iter()
            .fold(self, |entity, property| entity.with_property(property))
    }

    /// Set the description.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Check if this entity has a specific property.
    pub fn has_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }

    /// Properties shared with another entity, in this entity's declaration order.
    pub fn shared_properties<'a>(&'a self, other: &Entity) -> Vec<&'a str> {
        self.properties
            .iter()
            .filter(|p| other.has_property(p))
            .map(String::as_str)
            .collect()
    }

    /// The name with its first letter uppercased and the rest lowercased.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}
