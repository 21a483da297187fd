//! Intent definitions - what a query is asking for.

use serde::{Deserialize, Serialize};

/// The closed set of intents the model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "what is X" - a one-line definition.
    WhatIs,
    /// "explain X" - definition, properties and details.
    Explain,
    /// "compare X and Y" - shared properties of two entities.
    Compare,
}

impl Intent {
    /// All intents in recognition order.
    pub const ALL: [Intent; 3] = [Intent::WhatIs, Intent::Explain, Intent::Compare];

    /// Snake-case identifier of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::WhatIs => "what_is",
            Intent::Explain => "explain",
            Intent::Compare => "compare",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intent together with the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentPattern {
    pub intent: Intent,

    /// Lowercase trigger phrases, checked in declaration order.
    pub triggers: Vec<String>,
}

impl IntentPattern {
    /// Create a pattern with no triggers.
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            triggers: Vec::new(),
        }
    }

    /// Add trigger phrases. They are normalized to lowercase.
    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers
            .extend(triggers.into_iter().map(|t| Into::<String>::into(t).to_lowercase()));
        self
    }

    /// First trigger phrase contained in `text`, if any.
    pub fn first_trigger_in(&self, text: &str) -> Option<&str> {
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|trigger| text.contains(trigger))
    }
}
