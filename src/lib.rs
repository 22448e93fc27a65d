//! ctxgen - periodic located-at context assertion generator
//!
//! Builds a CONSERT binary context assertion with a timestamp annotation,
//! serializes it to Turtle and POSTs it to a WebSub-style hub on a fixed
//! cadence.

pub mod app;
pub mod logging;

pub use app::{cancel_on_ctrl_c, run};
pub use logging::LogContext;
