//! ctxgen stream - the generate/serialize/push loop
//!
//! One `Scheduler` drives one configured assertion stream:
//! build a graph, serialize it, hand it to a `Publisher`, wait, repeat,
//! until its `CancellationToken` fires.

pub mod clock;
pub mod scheduler;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::Scheduler;
pub use state::{RunSummary, SchedulerState};
