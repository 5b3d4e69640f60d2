use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

const BATTERY_START: f32 = 85.0;
const BATTERY_FLOOR: f32 = 20.0;

/// Decorative machine readings for the status bar. Nothing here is real.
#[derive(Debug, Clone)]
pub struct SystemStatus {
    rng: StdRng,
    pub cpu: u8,
    pub battery: f32,
    pub now: DateTime<Local>,
    pub cursor_visible: bool,
    last_refresh: Instant,
    last_blink: Instant,
}

impl SystemStatus {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Instant::now())
    }

    pub fn seeded(seed: u64, at: Instant) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), at)
    }

    fn with_rng(rng: StdRng, at: Instant) -> Self {
        let mut status = Self {
            rng,
            cpu: 10,
            battery: BATTERY_START,
            now: Local::now(),
            cursor_visible: true,
            last_refresh: at,
            last_blink: at,
        };
        status.cpu = status.rng.gen_range(10..=40);
        status
    }

    /// Advance the simulation to `at`.
    pub fn tick(&mut self, at: Instant) {
        if at.saturating_duration_since(self.last_blink) >= BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = at;
        }
        if at.saturating_duration_since(self.last_refresh) >= REFRESH_INTERVAL {
            self.refresh();
            self.last_refresh = at;
        }
    }

    pub fn battery_percent(&self) -> u8 {
        self.battery.floor().clamp(0.0, 100.0) as u8
    }

    fn refresh(&mut self) {
        self.cpu = self.rng.gen_range(10..=40);
        self.battery = (self.battery - self.rng.gen_range(0.0..0.1)).max(BATTERY_FLOOR);
        self.now = Local::now();
    }
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_in_range() {
        let start = Instant::now();
        let mut status = SystemStatus::seeded(3, start);
        for i in 1..=20_000u64 {
            status.tick(start + REFRESH_INTERVAL * i as u32);
            assert!((10..=40).contains(&status.cpu));
            assert!(status.battery >= BATTERY_FLOOR);
        }
        assert_eq!(status.battery_percent(), 20);
    }

    #[test]
    fn cursor_blinks_on_its_own_interval() {
        let start = Instant::now();
        let mut status = SystemStatus::seeded(1, start);
        assert!(status.cursor_visible);

        status.tick(start + Duration::from_millis(250));
        assert!(status.cursor_visible);
        status.tick(start + Duration::from_millis(600));
        assert!(!status.cursor_visible);
        status.tick(start + Duration::from_millis(1200));
        assert!(status.cursor_visible);
    }

    #[test]
    fn readings_hold_between_refreshes() {
        let start = Instant::now();
        let mut status = SystemStatus::seeded(9, start);
        let (cpu, battery) = (status.cpu, status.battery);
        status.tick(start + Duration::from_millis(1500));
        assert_eq!((status.cpu, status.battery), (cpu, battery));
    }
}
