//! ctxgen push - WebSub-style delivery of serialized graphs to a hub

pub mod client;
pub mod payload;
pub mod publisher;

pub use client::HubClient;
pub use payload::{DeliveryPayload, PayloadBody, UPDATE_STREAM_MODE};
pub use publisher::{DeliveryResult, Publisher};
