use std::time::{Duration, Instant};

/// Wall-clock stopwatch for the search phase
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Starts timing immediately
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Resets the start instant to now
    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    /// Time since construction or the last restart
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000_000.0
    }
}
