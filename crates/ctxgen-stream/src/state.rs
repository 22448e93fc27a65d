//! Scheduler lifecycle states and per-run counters

use ctxgen_push::DeliveryResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    Idle,
    Running,
    Building,
    Serializing,
    Delivering,
    Waiting,
    Stopped,
}

impl SchedulerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Building => "building",
            Self::Serializing => "serializing",
            Self::Delivering => "delivering",
            Self::Waiting => "waiting",
            Self::Stopped => "stopped",
        }
    }

    /// Inside a cycle (build, serialize, deliver).
    pub fn in_cycle(&self) -> bool {
        matches!(self, Self::Building | Self::Serializing | Self::Delivering)
    }
}

impl std::fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened during one `Scheduler::run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub delivered: u64,
    pub rejected: u64,
    pub transport_failures: u64,
    /// Timestamp of the most recent cycle, delivered or not.
    pub last_timestamp_ms: Option<i64>,
    /// Timestamp of the most recent update the hub accepted.
    pub last_delivered_ms: Option<i64>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &DeliveryResult, timestamp_ms: i64) {
        self.cycles += 1;
        self.last_timestamp_ms = Some(timestamp_ms);
        match outcome {
            DeliveryResult::Delivered { .. } => {
                self.delivered += 1;
                self.last_delivered_ms = Some(timestamp_ms);
            }
            DeliveryResult::Rejected { .. } => self.rejected += 1,
            DeliveryResult::TransportFailure { .. } => self.transport_failures += 1,
        }
    }

    pub fn attempts(&self) -> u64 {
        self.delivered + self.rejected + self.transport_failures
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cycles: {} delivered, {} rejected, {} transport failures",
            self.cycles, self.delivered, self.rejected, self.transport_failures
        )
    }
}
