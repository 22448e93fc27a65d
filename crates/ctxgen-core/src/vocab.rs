//! Namespaces and terms of the CONSERT context model used by generated graphs.

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const EX: &str = "http://example.org/";
pub const CONSERT: &str = "http://pervasive.semanticweb.org/ont/2017/07/consert/core#";
pub const ANN: &str = "http://pervasive.semanticweb.org/ont/2017/07/consert/annotation#";

/// Prefix bindings written at the top of every serialized graph, in output order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("ann", ANN),
    ("consert", CONSERT),
    ("ex", EX),
    ("rdf", RDF),
];

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

pub const BINARY_CONTEXT_ASSERTION: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/core#BinaryContextAssertion";
pub const ASSERTION_SUBJECT: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/core#assertionSubject";
pub const ASSERTION_OBJECT: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/core#assertionObject";

pub const HAS_ANNOTATION: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/annotation#hasAnnotation";
pub const NUMERIC_TIMESTAMP_ANNOTATION: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/annotation#NumericTimestampAnnotation";
pub const HAS_VALUE: &str =
    "http://pervasive.semanticweb.org/ont/2017/07/consert/annotation#hasValue";
