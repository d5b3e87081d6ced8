//! Elapsed-time sources for the VNS time budget.

use std::time::{Duration, Instant};

/// A source of elapsed time, polled by the runner between steps.
pub trait Clock {
    /// Starts (or restarts) measuring.
    fn start(&mut self);

    /// Time since [`start`](Self::start).
    fn elapsed(&self) -> Duration;

    /// Freezes the reading. The default keeps the clock running.
    fn stop(&mut self) {}
}

/// Wall-clock stopwatch backed by [`Instant`].
///
/// After [`stop`](Clock::stop), `elapsed` keeps returning the time
/// measured at the stop.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.frozen.is_none()
    }
}

impl Clock for Stopwatch {
    fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = None;
    }

    fn elapsed(&self) -> Duration {
        match (self.frozen, self.started) {
            (Some(frozen), _) => frozen,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    fn stop(&mut self) {
        if self.is_running() {
            self.frozen = Some(self.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_not_started() {
        let watch = Stopwatch::new();
        assert_eq!(watch.elapsed(), Duration::ZERO);
        assert!(!watch.is_running());
    }

    #[test]
    fn test_stopwatch_stop_freezes() {
        let mut watch = Stopwatch::new();
        watch.start();
        assert!(watch.is_running());
        std::thread::sleep(Duration::from_millis(2));
        watch.stop();
        let frozen = watch.elapsed();
        assert!(frozen >= Duration::from_millis(2));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(watch.elapsed(), frozen);
        assert!(!watch.is_running());
    }
}
