//! HTTP hub client

use crate::payload::DeliveryPayload;
use crate::publisher::{DeliveryResult, Publisher};
use ctxgen_core::{GeneratorConfig, Iri};
use reqwest::Client;
use tracing::{debug, error, info};

/// POSTs payloads as JSON to a single hub endpoint.
///
/// No request timeout is configured; a hung hub stalls the calling cycle
/// for as long as the transport allows.
pub struct HubClient {
    client: Client,
    hub_uri: Iri,
}

impl HubClient {
    pub fn new(hub_uri: Iri) -> Self {
        Self {
            client: Client::new(),
            hub_uri,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.hub_uri.clone())
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn hub_uri(&self) -> &Iri {
        &self.hub_uri
    }
}

#[async_trait::async_trait]
impl Publisher for HubClient {
    fn name(&self) -> &str {
        "hub"
    }

    async fn deliver(&self, payload: &DeliveryPayload) -> DeliveryResult {
        debug!(
            "POST {} for {} (timestamp {})",
            self.hub_uri, payload.target_url, payload.body.timestamp_ms
        );

        let response = match self.client.post(self.hub_uri.as_str()).json(payload).send().await {
            Ok(r) => r,
            Err(e) => {
                let cause = error_chain(&e);
                error!("Error sending update to {}: {}", self.hub_uri, cause);
                return DeliveryResult::TransportFailure { cause };
            }
        };

        let status = response.status().as_u16();
        let result = if matches!(status, 200 | 204) {
            DeliveryResult::Delivered { status }
        } else {
            let body = response.text().await.unwrap_or_default();
            DeliveryResult::from_status(status, body)
        };

        match &result {
            DeliveryResult::Delivered { status } => {
                info!("Update sent successfully. Status code: {}", status);
            }
            DeliveryResult::Rejected { status, body } => {
                error!("Failed to send update. Status code: {}, Response: {}", status, body);
            }
            DeliveryResult::TransportFailure { .. } => {}
        }
        result
    }
}

/// `reqwest` hides the interesting part (refused, reset, dns) in `source()`.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(s) = source {
        out.push_str(": ");
        out.push_str(&s.to_string());
        source = s.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "request failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn error_chain_includes_sources() {
        let e = Outer(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(error_chain(&e), "request failed: refused");
    }

    #[test]
    fn from_config_targets_hub() {
        let config = GeneratorConfig::from_json_str(
            r#"{
                "assertionType": "ex:Located",
                "assertionSubject": "ex:Sensor1",
                "assertionObject": "ex:RoomA",
                "hubURI": "http://hub.test/push",
                "streamURI": "http://stream.test/s1"
            }"#,
        )
        .unwrap();
        let client = HubClient::from_config(&config);
        assert_eq!(client.hub_uri().as_str(), "http://hub.test/push");
        assert_eq!(client.name(), "hub");
    }
}
