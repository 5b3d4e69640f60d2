use std::time::Duration;

/// Source of the cosmetic "processing" delay between submit and output.
#[cfg_attr(test, mockall::automock)]
pub trait LatencySource: Send {
    fn next_delay(&mut self) -> Duration;
}

/// Always the same delay. Handy for tests and for a zero-latency config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency(pub Duration);

impl LatencySource for FixedLatency {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}
