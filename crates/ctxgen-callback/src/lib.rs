//! ctxgen callback - request logging echo server
//!
//! Stand-in for a hub during local runs: accepts any POST, logs it and
//! echoes it back inside a `{status, message, data}` envelope.

pub mod server;

pub use server::{router, serve, Envelope};
