//! Cycle loop
//!
//! Each cycle runs to completion before the wait starts. Cancellation is
//! looked at before a cycle and raced against the wait, never mid-cycle.
//! A slow delivery simply pushes the next cycle back; there is no catch-up.

use crate::clock::{Clock, SystemClock};
use crate::state::{RunSummary, SchedulerState};
use ctxgen_core::{build, to_turtle, Error, GeneratorConfig, Result};
use ctxgen_push::{DeliveryPayload, DeliveryResult, Publisher};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn, Instrument};

pub struct Scheduler {
    config: GeneratorConfig,
    publisher: Arc<dyn Publisher>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<SchedulerState>,
}

impl Scheduler {
    pub fn new(config: GeneratorConfig, publisher: Arc<dyn Publisher>) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        Self {
            config,
            publisher,
            clock: Arc::new(SystemClock),
            state,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Watch state transitions as they happen.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.subscribe()
    }

    /// Runs cycles until `cancel` fires. A scheduler runs at most once.
    ///
    /// Delivery failures are logged and counted, never returned. Build or
    /// serialization errors stop the loop and are returned.
    pub async fn run(&self, cancel: CancellationToken) -> Result<RunSummary> {
        let started = self.state.send_if_modified(|state| {
            if *state == SchedulerState::Idle {
                *state = SchedulerState::Running;
                true
            } else {
                false
            }
        });
        if !started {
            return Err(Error::Internal(format!("scheduler already {}", self.state())));
        }
        let span = tracing::info_span!("stream", name = %self.config.stream_name());
        self.run_loop(cancel).instrument(span).await
    }

    async fn run_loop(&self, cancel: CancellationToken) -> Result<RunSummary> {
        info!(
            "Starting context stream generator. Generating every {} seconds.",
            self.config.generate_every.as_secs_f64()
        );
        info!("Hub URI: {}", self.config.hub_uri);
        info!("Stream URI: {}", self.config.stream_uri);

        let mut summary = RunSummary::default();
        loop {
            if cancel.is_cancelled() {
                break;
            }

            let (outcome, timestamp_ms) = match self.cycle().await {
                Ok(done) => done,
                Err(e) => {
                    error!("Unexpected error: {}", e);
                    self.set(SchedulerState::Stopped);
                    return Err(e);
                }
            };
            if let Some(last) = summary.last_timestamp_ms {
                if timestamp_ms < last {
                    warn!("Clock went backwards: {} < {}", timestamp_ms, last);
                }
            }
            summary.record(&outcome, timestamp_ms);

            self.set(SchedulerState::Waiting);
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.config.generate_every) => {}
            }
            self.set(SchedulerState::Running);
        }

        self.set(SchedulerState::Stopped);
        info!("Generator stopped by user. {}", summary);
        Ok(summary)
    }

    async fn cycle(&self) -> Result<(DeliveryResult, i64)> {
        self.set(SchedulerState::Building);
        let generated = build(&self.config, self.clock.now())?;

        self.set(SchedulerState::Serializing);
        let text = to_turtle(&generated.graph)?;
        debug!(
            "Built assertion {} ({} triples, timestamp {})",
            generated.assertion_id,
            generated.graph.len(),
            generated.timestamp_ms
        );

        self.set(SchedulerState::Delivering);
        let payload = DeliveryPayload::new(&self.config.stream_uri, text, generated.timestamp_ms);
        let outcome = self.publisher.deliver(&payload).await;
        Ok((outcome, generated.timestamp_ms))
    }

    fn set(&self, state: SchedulerState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            debug!("Scheduler {} -> {}", previous, state);
        }
    }
}
