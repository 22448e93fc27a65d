//! In-memory triple set
//!
//! Graphs produced here are tiny (one assertion per cycle), so a `Vec` that
//! refuses duplicates is all the indexing that is needed. Insertion order is
//! kept and drives the serializer's output order.

use crate::iri::Iri;
use crate::vocab;

/// Object position of a triple.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Term {
    Iri(Iri),
    /// `xsd:integer` literal.
    Integer(i64),
}

impl Term {
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Term::Integer(v) => Some(*v),
            Term::Iri(_) => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<i64> for Term {
    fn from(v: i64) -> Self {
        Term::Integer(v)
    }
}

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Triple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Iri, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }
        self.triples.push(triple);
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Distinct subjects in first-seen order.
    pub fn subjects(&self) -> Vec<&Iri> {
        let mut out: Vec<&Iri> = Vec::new();
        for t in &self.triples {
            if !out.contains(&&t.subject) {
                out.push(&t.subject);
            }
        }
        out
    }

    /// All objects of `(subject, predicate, ?)`.
    pub fn objects<'a>(&'a self, subject: &'a Iri, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// Subjects carrying `rdf:type <class>`.
    pub fn instances_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Iri> + 'a {
        self.triples
            .iter()
            .filter(move |t| {
                t.predicate.as_str() == vocab::RDF_TYPE
                    && t.object.as_iri().is_some_and(|o| o.as_str() == class)
            })
            .map(|t| &t.subject)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn insert_ignores_duplicates() {
        let mut g = Graph::new();
        let t = Triple::new(iri("urn:a"), iri(vocab::RDF_TYPE), iri("urn:C"));
        assert!(g.insert(t.clone()));
        assert!(!g.insert(t));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn lookups() {
        let mut g = Graph::new();
        let a = iri("urn:a");
        g.insert(Triple::new(a.clone(), iri(vocab::RDF_TYPE), iri("urn:C")));
        g.insert(Triple::new(a.clone(), iri(vocab::HAS_VALUE), 7i64));
        g.insert(Triple::new(iri("urn:b"), iri(vocab::RDF_TYPE), iri("urn:C")));

        assert_eq!(g.subjects().len(), 2);
        assert_eq!(g.instances_of("urn:C").count(), 2);
        let values: Vec<_> = g.objects(&a, vocab::HAS_VALUE).filter_map(Term::as_integer).collect();
        assert_eq!(values, vec![7]);
    }
}
