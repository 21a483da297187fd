//! # Axiom Graph
//!
//! The "brain" of the Axiom Dynamic Logic Model: a fixed table of entities and
//! intent trigger phrases, plus the optional external citation source used for
//! grounding. This crate holds data only and does not contain query logic.
//!
//! Both structures are built once at startup and never mutated afterwards.

pub mod builtin;
pub mod entity;
pub mod graph;
pub mod intent;
pub mod knowledge_source;

pub use entity::*;
pub use graph::*;
pub use intent::*;
pub use knowledge_source::*;
