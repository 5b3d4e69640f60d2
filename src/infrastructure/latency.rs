use crate::domain::latency::LatencySource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Delays drawn uniformly from `[min, max]`.
pub struct UniformLatency {
    rng: StdRng,
    min: Duration,
    max: Duration,
}

impl UniformLatency {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self::with_rng(StdRng::from_entropy(), min, max)
    }

    pub fn seeded(seed: u64, min: Duration, max: Duration) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }

    fn with_rng(rng: StdRng, min: Duration, max: Duration) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { rng, min, max }
    }
}

impl LatencySource for UniformLatency {
    fn next_delay(&mut self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        self.rng.gen_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_stay_inside_the_window() {
        let min = Duration::from_millis(300);
        let max = Duration::from_millis(700);
        let mut latency = UniformLatency::seeded(1, min, max);
        for _ in 0..1000 {
            let d = latency.next_delay();
            assert!(d >= min && d <= max, "{d:?} out of range");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let window = (Duration::from_millis(0), Duration::from_millis(1000));
        let mut a = UniformLatency::seeded(99, window.0, window.1);
        let mut b = UniformLatency::seeded(99, window.0, window.1);
        for _ in 0..20 {
            assert_eq!(a.next_delay(), b.next_delay());
        }
    }

    #[test]
    fn inverted_window_is_normalized() {
        let mut latency =
            UniformLatency::seeded(3, Duration::from_millis(500), Duration::from_millis(100));
        let d = latency.next_delay();
        assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(500));
    }

    #[test]
    fn zero_width_window_is_fixed() {
        let d = Duration::from_millis(250);
        let mut latency = UniformLatency::seeded(5, d, d);
        assert_eq!(latency.next_delay(), d);
    }
}
