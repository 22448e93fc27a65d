//! Turtle serializer for generated assertion graphs.
//!
//! Writes the fixed prefix block, then one block per subject with predicates
//! joined by `;` and objects sharing a predicate joined by `,`.

use crate::error::{Error, Result};
use crate::graph::{Graph, Term};
use crate::iri::Iri;
use crate::vocab;

/// Serializes an assertion graph to Turtle.
///
/// # Errors
///
/// Returns [`Error::MalformedGraph`] if the graph is not exactly one
/// binary context assertion with its timestamp annotation.
pub fn to_turtle(graph: &Graph) -> Result<String> {
    check_assertion_shape(graph)?;
    Ok(write_turtle(graph))
}

/// Verifies the seven-triple assertion + annotation layout.
pub fn check_assertion_shape(graph: &Graph) -> Result<()> {
    if graph.len() != 7 {
        return Err(Error::malformed(format!("expected 7 triples, found {}", graph.len())));
    }

    let assertions: Vec<&Iri> = graph.instances_of(vocab::BINARY_CONTEXT_ASSERTION).collect();
    let [assertion] = assertions.as_slice() else {
        return Err(Error::malformed(format!(
            "expected one BinaryContextAssertion, found {}",
            assertions.len()
        )));
    };

    let types = graph.objects(assertion, vocab::RDF_TYPE).count();
    if types != 2 {
        return Err(Error::malformed(format!("assertion has {} types, expected 2", types)));
    }
    single_iri(graph, assertion, vocab::ASSERTION_SUBJECT)?;
    single_iri(graph, assertion, vocab::ASSERTION_OBJECT)?;
    let annotation = single_iri(graph, assertion, vocab::HAS_ANNOTATION)?;
    if annotation == *assertion {
        return Err(Error::malformed("assertion annotates itself"));
    }

    let ann_type = single_iri(graph, annotation, vocab::RDF_TYPE)?;
    if ann_type.as_str() != vocab::NUMERIC_TIMESTAMP_ANNOTATION {
        return Err(Error::malformed(format!("annotation has type {}", ann_type)));
    }
    let values: Vec<i64> = graph
        .objects(annotation, vocab::HAS_VALUE)
        .filter_map(Term::as_integer)
        .collect();
    if values.len() != 1 {
        return Err(Error::malformed(format!(
            "annotation has {} integer values, expected 1",
            values.len()
        )));
    }
    Ok(())
}

fn single_iri<'a>(graph: &'a Graph, subject: &'a Iri, predicate: &'a str) -> Result<&'a Iri> {
    let objects: Vec<&Term> = graph.objects(subject, predicate).collect();
    match objects.as_slice() {
        [Term::Iri(iri)] => Ok(iri),
        _ => Err(Error::malformed(format!(
            "<{}> needs exactly one IRI for <{}>, found {} objects",
            subject,
            predicate,
            objects.len()
        ))),
    }
}

fn write_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(1024);

    for (prefix, iri) in vocab::PREFIXES {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, iri));
    }

    for subject in graph.subjects() {
        let mut predicates: Vec<&Iri> = Vec::new();
        for t in graph.iter().filter(|t| &t.subject == subject) {
            if !predicates.contains(&&t.predicate) {
                predicates.push(&t.predicate);
            }
        }

        let statements: Vec<String> = predicates
            .iter()
            .map(|p| {
                let objects: Vec<String> = graph.objects(subject, p.as_str()).map(object_term).collect();
                format!("{} {}", predicate_term(p), objects.join(", "))
            })
            .collect();

        out.push('\n');
        out.push_str(&format!("{} {} .\n", iri_term(subject), statements.join(" ;\n    ")));
    }

    out
}

fn predicate_term(iri: &Iri) -> String {
    if iri.as_str() == vocab::RDF_TYPE {
        "a".to_owned()
    } else {
        iri_term(iri)
    }
}

fn object_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri_term(iri),
        Term::Integer(v) => v.to_string(),
    }
}

/// `prefix:local` when the IRI sits in a bound namespace and the local
/// part needs no escaping, `<iri>` otherwise.
fn iri_term(iri: &Iri) -> String {
    for (prefix, ns) in vocab::PREFIXES {
        if let Some(local) = iri.strip_namespace(ns) {
            if is_plain_local(local) {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    format!("<{}>", iri)
}

fn is_plain_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
