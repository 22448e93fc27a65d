//! Absolute IRI newtype
//!
//! Keeps the configured text verbatim. `url` only decides whether the text
//! is an absolute URI; its normalized form is never used.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Characters that cannot appear inside a Turtle `<...>` IRI reference.
const FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '^', '`', '\\'];

/// An absolute IRI - cheaply cloneable
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(Arc<str>);

impl Iri {
    pub fn parse(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(Error::invalid_uri(s, "empty"));
        }
        if let Some(c) = s
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(c))
        {
            return Err(Error::invalid_uri(s, format!("illegal character {:?}", c)));
        }
        if let Err(e) = url::Url::parse(&s) {
            return Err(Error::invalid_uri(s, e.to_string()));
        }
        Ok(Self(Arc::from(s)))
    }

    /// `urn:uuid:<uuid>` form of a UUID.
    pub fn urn_uuid(id: uuid::Uuid) -> Result<Self> {
        Self::parse(format!("urn:uuid:{}", id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme, i.e. everything before the first `:`.
    pub fn scheme(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }

    /// Local name relative to `namespace`, if this IRI lives under it.
    pub fn strip_namespace(&self, namespace: &str) -> Option<&str> {
        self.0.strip_prefix(namespace)
    }

    /// Last meaningful name of the IRI: the last non-empty path segment,
    /// else the host, else `"unnamed"`.
    pub fn local_name(&self) -> String {
        let Ok(url) = url::Url::parse(&self.0) else {
            return "unnamed".into();
        };
        let segment = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string);
        match segment {
            Some(s) => s,
            None if url.cannot_be_a_base() => url.path().to_string(),
            None => url
                .host_str()
                .map(str::to_string)
                .unwrap_or_else(|| "unnamed".into()),
        }
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Iri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.to_string()
    }
}
