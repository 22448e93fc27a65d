//! Graph builder
//!
//! One call produces one binary context assertion plus its timestamp
//! annotation. The clock is read by the caller and handed in as `now`, so
//! the builder itself does no I/O apart from drawing random identifiers.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::graph::{Graph, Triple};
use crate::iri::Iri;
use crate::vocab;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// `ann:NumericTimestampAnnotation` node attached to an assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampAnnotation {
    pub id: Iri,
    /// Milliseconds since the Unix epoch.
    pub value_ms: i64,
}

/// A `consert:BinaryContextAssertion` instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextAssertion {
    pub id: Iri,
    pub assertion_type: Iri,
    pub subject: Iri,
    pub object: Iri,
    pub annotation: TimestampAnnotation,
}

/// Output of one build: the graph and the timestamp stamped into it.
#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub timestamp_ms: i64,
    pub assertion_id: Iri,
    pub annotation_id: Iri,
}

impl ContextAssertion {
    /// Fresh assertion with newly minted assertion and annotation URNs.
    pub fn mint(config: &GeneratorConfig, timestamp_ms: i64) -> Result<Self> {
        let id = Iri::urn_uuid(Uuid::new_v4())?;
        let annotation_id = Iri::urn_uuid(Uuid::new_v4())?;
        Ok(Self {
            id,
            assertion_type: config.assertion_type.clone(),
            subject: config.assertion_subject.clone(),
            object: config.assertion_object.clone(),
            annotation: TimestampAnnotation {
                id: annotation_id,
                value_ms: timestamp_ms,
            },
        })
    }

    /// Lowers the assertion into its seven triples.
    pub fn to_graph(&self) -> Result<Graph> {
        let rdf_type = Iri::parse(vocab::RDF_TYPE)?;
        let mut g = Graph::new();

        g.insert(Triple::new(self.id.clone(), rdf_type.clone(), self.assertion_type.clone()));
        g.insert(Triple::new(
            self.id.clone(),
            rdf_type.clone(),
            Iri::parse(vocab::BINARY_CONTEXT_ASSERTION)?,
        ));
        g.insert(Triple::new(
            self.id.clone(),
            Iri::parse(vocab::ASSERTION_SUBJECT)?,
            self.subject.clone(),
        ));
        g.insert(Triple::new(
            self.id.clone(),
            Iri::parse(vocab::ASSERTION_OBJECT)?,
            self.object.clone(),
        ));
        g.insert(Triple::new(
            self.id.clone(),
            Iri::parse(vocab::HAS_ANNOTATION)?,
            self.annotation.id.clone(),
        ));

        g.insert(Triple::new(
            self.annotation.id.clone(),
            rdf_type,
            Iri::parse(vocab::NUMERIC_TIMESTAMP_ANNOTATION)?,
        ));
        g.insert(Triple::new(
            self.annotation.id.clone(),
            Iri::parse(vocab::HAS_VALUE)?,
            self.annotation.value_ms,
        ));

        Ok(g)
    }
}

/// Builds the graph for one cycle at time `now`.
pub fn build(config: &GeneratorConfig, now: DateTime<Utc>) -> Result<GeneratedGraph> {
    let timestamp_ms = now.timestamp_millis();
    let assertion = ContextAssertion::mint(config, timestamp_ms)?;
    let graph = assertion.to_graph()?;
    Ok(GeneratedGraph {
        graph,
        timestamp_ms,
        assertion_id: assertion.id,
        annotation_id: assertion.annotation.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Term;
    use chrono::TimeZone;
    use std::time::Duration;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            assertion_type: Iri::parse("http://example.org/LocatedAt").unwrap(),
            assertion_subject: Iri::parse("http://example.org/alexAgent").unwrap(),
            assertion_object: Iri::parse("http://example.org/lab308").unwrap(),
            hub_uri: Iri::parse("http://localhost:8080/hub").unwrap(),
            stream_uri: Iri::parse("http://localhost:8080/streams/LocatedAt").unwrap(),
            generate_every: Duration::from_secs(1),
        }
    }

    #[test]
    fn builds_seven_triples_with_distinct_ids() {
        let now = Utc.timestamp_millis_opt(1_712_345_678_901).unwrap();
        let out = build(&config(), now).unwrap();

        assert_eq!(out.graph.len(), 7);
        assert_eq!(out.timestamp_ms, 1_712_345_678_901);
        assert_ne!(out.assertion_id, out.annotation_id);
        assert!(out.assertion_id.as_str().starts_with("urn:uuid:"));
        assert!(out.annotation_id.as_str().starts_with("urn:uuid:"));
    }

    #[test]
    fn annotation_value_matches_timestamp() {
        let now = Utc.timestamp_millis_opt(42).unwrap();
        let out = build(&config(), now).unwrap();
        let values: Vec<i64> = out
            .graph
            .objects(&out.annotation_id, vocab::HAS_VALUE)
            .filter_map(Term::as_integer)
            .collect();
        assert_eq!(values, vec![out.timestamp_ms]);
    }

    #[test]
    fn assertion_carries_both_types() {
        let out = build(&config(), Utc::now()).unwrap();
        let types: Vec<&str> = out
            .graph
            .objects(&out.assertion_id, vocab::RDF_TYPE)
            .filter_map(Term::as_iri)
            .map(Iri::as_str)
            .collect();
        assert_eq!(types, vec!["http://example.org/LocatedAt", vocab::BINARY_CONTEXT_ASSERTION]);
    }

    #[test]
    fn identifiers_are_fresh_per_build() {
        let cfg = config();
        let a = build(&cfg, Utc::now()).unwrap();
        let b = build(&cfg, Utc::now()).unwrap();
        assert_ne!(a.assertion_id, b.assertion_id);
        assert_ne!(a.annotation_id, b.annotation_id);
    }
}
