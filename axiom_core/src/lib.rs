//! # Axiom Core
//!
//! The query pipeline of the Axiom Dynamic Logic Model. It reads the fixed
//! knowledge in `axiom_graph` and turns a prompt into a templated answer,
//! optionally grounded with citations from an external knowledge source.
//!
//! ## Pipeline
//!
//! - **query**: tokenization and intent/entity recognition
//! - **synthesis**: fixed response templates per intent
//! - **grounding**: keyword-overlap scoring of citation records
//! - **model**: the facade tying the stages together
//!
//! Every stage is a pure function of its input and the loaded knowledge, so
//! the same prompt always yields byte-identical output.

pub mod config;
pub mod grounding;
pub mod model;
pub mod query;
pub mod synthesis;

pub use config::*;
pub use grounding::*;
pub use model::*;
pub use query::*;
pub use synthesis::*;
