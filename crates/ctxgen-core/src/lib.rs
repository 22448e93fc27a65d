//! ctxgen core - configuration, graph model, builder and Turtle serializer

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod iri;
pub mod turtle;
pub mod vocab;

pub use builder::{build, ContextAssertion, GeneratedGraph, TimestampAnnotation};
pub use config::{GeneratorConfig, DEFAULT_GENERATE_EVERY_SECS};
pub use error::{Error, Result};
pub use graph::{Graph, Term, Triple};
pub use iri::Iri;
pub use turtle::to_turtle;
