use std::time::{Duration, Instant};

/// Stats for the running session, shown in the title bar and logged on exit
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub apples_eaten: u32,
    /// Current snake length
    pub length: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            apples_eaten: 0,
            length: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Record a game update that left the snake `length` cells long
    pub fn on_tick(&mut self, length: usize) {
        self.ticks += 1;
        if length > self.length {
            self.apples_eaten += (length - self.length) as u32;
        }
        self.length = length;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_apples_counted_from_growth() {
        let mut metrics = SessionMetrics::new();

        metrics.on_tick(1);
        metrics.on_tick(2);
        metrics.on_tick(2);
        metrics.on_tick(3);

        assert_eq!(metrics.ticks, 4);
        assert_eq!(metrics.apples_eaten, 2);
        assert_eq!(metrics.length, 3);
    }

    #[test]
    fn test_update_tracks_elapsed() {
        let mut metrics = SessionMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 20);
    }
}
