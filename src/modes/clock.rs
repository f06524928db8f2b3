use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Fixed-rate pacing for game updates.
///
/// Must be created inside a tokio runtime.
pub struct Clock {
    interval: Interval,
}

impl Clock {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        // A slow frame drops ticks instead of bursting to catch up
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick boundary. The first tick completes immediately.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
