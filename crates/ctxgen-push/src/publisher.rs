//! Publisher trait and delivery outcomes

use crate::payload::DeliveryPayload;

/// Outcome of a single delivery attempt. Never retried by the publisher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryResult {
    /// Hub answered 200 or 204.
    Delivered { status: u16 },
    /// Hub answered with any other status.
    Rejected { status: u16, body: String },
    /// No HTTP response: connect failure, reset, timeout.
    TransportFailure { cause: String },
}

impl DeliveryResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Maps a response status onto an outcome.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            200 | 204 => Self::Delivered { status },
            _ => Self::Rejected {
                status,
                body: body.into(),
            },
        }
    }
}

impl std::fmt::Display for DeliveryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delivered { status } => write!(f, "delivered ({})", status),
            Self::Rejected { status, body } => write!(f, "rejected ({}): {}", status, body),
            Self::TransportFailure { cause } => write!(f, "transport failure: {}", cause),
        }
    }
}

/// Something that can push one payload somewhere.
#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, payload: &DeliveryPayload) -> DeliveryResult;
}
