//! Hub request body
//!
//! Field names follow what the hub's stream update handler reads:
//! `hub.mode`, `hub.url` and `hub.payload` with snake_case inner keys.

use ctxgen_core::Iri;
use serde::{Deserialize, Serialize};

pub const UPDATE_STREAM_MODE: &str = "update_stream";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadBody {
    pub graph_serialized: String,
    pub timestamp_ms: i64,
}

/// One cycle's update, ready to be POSTed to the hub.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryPayload {
    #[serde(rename = "hub.mode")]
    pub mode: String,
    #[serde(rename = "hub.url")]
    pub target_url: String,
    #[serde(rename = "hub.payload")]
    pub body: PayloadBody,
}

impl DeliveryPayload {
    pub fn new(stream_uri: &Iri, graph_serialized: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            mode: UPDATE_STREAM_MODE.to_string(),
            target_url: stream_uri.to_string(),
            body: PayloadBody {
                graph_serialized: graph_serialized.into(),
                timestamp_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_hub_keys() {
        let stream = Iri::parse("http://stream.test/s1").unwrap();
        let payload = DeliveryPayload::new(&stream, "<urn:a> a <urn:B> .\n", 1234);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["hub.mode"], "update_stream");
        assert_eq!(json["hub.url"], "http://stream.test/s1");
        assert_eq!(json["hub.payload"]["graph_serialized"], "<urn:a> a <urn:B> .\n");
        assert_eq!(json["hub.payload"]["timestamp_ms"], 1234);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
