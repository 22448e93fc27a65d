//! Generator configuration
//!
//! The JSON file is read into a loose raw structure first, then every field
//! is validated on its own so that a broken file reports all of its problems
//! in one `Error::Configuration`.

use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::vocab;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_GENERATE_EVERY_SECS: u64 = 60;

/// Validated, immutable configuration for one generator process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Domain-specific assertion type (e.g. `http://example.org/LocatedAt`).
    pub assertion_type: Iri,
    pub assertion_subject: Iri,
    pub assertion_object: Iri,
    /// Endpoint receiving the POSTed updates.
    pub hub_uri: Iri,
    /// Stream the updates are published to, sent as the payload target.
    pub stream_uri: Iri,
    /// Pause between the end of one cycle and the start of the next.
    pub generate_every: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "assertionType")]
    assertion_type: Option<Value>,
    #[serde(rename = "assertionSubject")]
    assertion_subject: Option<Value>,
    #[serde(rename = "assertionObject")]
    assertion_object: Option<Value>,
    #[serde(rename = "hubURI")]
    hub_uri: Option<Value>,
    #[serde(rename = "streamURI")]
    stream_uri: Option<Value>,
    #[serde(rename = "generateEvery")]
    generate_every: Option<Value>,
}

impl GeneratorConfig {
    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::configuration(vec![
                "top-level value must be a JSON object".into(),
            ]));
        }
        let raw: RawConfig = serde_json::from_value(value)?;
        let mut problems = Vec::new();

        let assertion_type = required_iri("assertionType", raw.assertion_type, &mut problems);
        let assertion_subject =
            required_iri("assertionSubject", raw.assertion_subject, &mut problems);
        let assertion_object = required_iri("assertionObject", raw.assertion_object, &mut problems);
        let hub_uri = required_iri("hubURI", raw.hub_uri, &mut problems);
        let stream_uri = required_iri("streamURI", raw.stream_uri, &mut problems);
        let generate_every = interval_secs(raw.generate_every, &mut problems);

        // The marker type is always added; repeating it would collapse two type triples into one.
        if assertion_type
            .as_ref()
            .is_some_and(|t| t.as_str() == vocab::BINARY_CONTEXT_ASSERTION)
        {
            problems.push(format!(
                "`assertionType` must be a domain type, not {}",
                vocab::BINARY_CONTEXT_ASSERTION
            ));
        }

        match (
            assertion_type,
            assertion_subject,
            assertion_object,
            hub_uri,
            stream_uri,
            generate_every,
        ) {
            (Some(t), Some(s), Some(o), Some(hub), Some(stream), Some(every))
                if problems.is_empty() =>
            {
                Ok(Self {
                    assertion_type: t,
                    assertion_subject: s,
                    assertion_object: o,
                    hub_uri: hub,
                    stream_uri: stream,
                    generate_every: Duration::from_secs(every),
                })
            }
            _ => Err(Error::configuration(problems)),
        }
    }

    /// Short stream label for log lines, derived from `stream_uri`.
    pub fn stream_name(&self) -> String {
        self.stream_uri.local_name()
    }
}

fn required_iri(key: &str, value: Option<Value>, problems: &mut Vec<String>) -> Option<Iri> {
    match value {
        None | Some(Value::Null) => {
            problems.push(format!("missing required key `{}`", key));
            None
        }
        Some(Value::String(s)) => match Iri::parse(s) {
            Ok(iri) => Some(iri),
            Err(e) => {
                problems.push(format!("`{}`: {}", key, e));
                None
            }
        },
        Some(other) => {
            problems.push(format!("`{}` must be a string, got {}", key, kind(&other)));
            None
        }
    }
}

fn interval_secs(value: Option<Value>, problems: &mut Vec<String>) -> Option<u64> {
    match value {
        None | Some(Value::Null) => Some(DEFAULT_GENERATE_EVERY_SECS),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(secs) if secs > 0 => Some(secs),
            _ => {
                problems.push(format!("`generateEvery` must be a positive integer, got {}", n));
                None
            }
        },
        Some(other) => {
            problems.push(format!(
                "`generateEvery` must be a positive integer, got {}",
                kind(&other)
            ));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "assertionType": "http://example.org/LocatedAt",
            "assertionSubject": "http://example.org/alexAgent",
            "assertionObject": "http://example.org/lab308",
            "hubURI": "http://localhost:8080/hub",
            "streamURI": "http://localhost:8080/streams/LocatedAt",
            "generateEvery": 5
        })
    }

    fn problems(value: Value) -> Vec<String> {
        match GeneratorConfig::from_value(value) {
            Err(Error::Configuration { problems }) => problems,
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn parses_complete_config() {
        let config = GeneratorConfig::from_value(full()).unwrap();
        assert_eq!(config.assertion_type.as_str(), "http://example.org/LocatedAt");
        assert_eq!(config.hub_uri.as_str(), "http://localhost:8080/hub");
        assert_eq!(config.generate_every, Duration::from_secs(5));
        assert_eq!(config.stream_name(), "LocatedAt");
    }

    #[test]
    fn generate_every_defaults_to_sixty() {
        let mut value = full();
        value.as_object_mut().unwrap().remove("generateEvery");
        let config = GeneratorConfig::from_value(value).unwrap();
        assert_eq!(config.generate_every, Duration::from_secs(60));
    }

    #[test]
    fn rejects_non_positive_interval() {
        for bad in [json!(0), json!(-3), json!(1.5), json!("10")] {
            let mut value = full();
            value["generateEvery"] = bad;
            let problems = problems(value);
            assert_eq!(problems.len(), 1);
            assert!(problems[0].contains("generateEvery"));
        }
    }

    #[test]
    fn reports_every_problem_at_once() {
        let value = json!({
            "assertionType": "http://example.org/LocatedAt",
            "assertionSubject": 42,
            "hubURI": "not a uri",
            "streamURI": null,
            "generateEvery": 0
        });
        let problems = problems(value);
        assert_eq!(problems.len(), 5, "{:?}", problems);
        let all = problems.join("\n");
        for key in ["assertionSubject", "assertionObject", "hubURI", "streamURI", "generateEvery"] {
            assert!(all.contains(key), "missing {} in {}", key, all);
        }
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(GeneratorConfig::from_json_str("[1, 2]").unwrap_err().is_configuration());
        assert!(matches!(
            GeneratorConfig::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn rejects_marker_type_as_assertion_type() {
        let mut value = full();
        value["assertionType"] = json!(vocab::BINARY_CONTEXT_ASSERTION);
        assert!(problems(value)[0].contains("assertionType"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let mut value = full();
        value["comment"] = json!("unused");
        assert!(GeneratorConfig::from_value(value).is_ok());
    }
}
