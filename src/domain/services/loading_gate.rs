//! Splash overlay release timing.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::shared::services::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    pub poll_interval: Duration,
    pub ceiling: Duration,
    pub min_visible: Duration,
}

impl From<&TimingConfig> for LoadingGate {
    fn from(timing: &TimingConfig) -> Self {
        Self {
            poll_interval: timing.splash_poll_interval,
            ceiling: timing.splash_ceiling,
            min_visible: timing.splash_min_visible,
        }
    }
}

impl LoadingGate {
    /// Waits until `is_busy` reports false or the ceiling passes, then until
    /// the splash has been up for at least `min_visible`. Returns how long the
    /// splash was held.
    ///
    /// A fetch still running past the ceiling is not affected; only the
    /// splash is released.
    pub async fn hold<C, F>(&self, clock: &C, is_busy: F) -> Duration
    where
        C: Clock + ?Sized,
        F: Fn() -> bool,
    {
        let start = clock.now();
        let elapsed = || clock.now().saturating_sub(start);

        while is_busy() {
            let spent = elapsed();
            if spent >= self.ceiling {
                break;
            }
            clock
                .sleep(self.poll_interval.min(self.ceiling - spent))
                .await;
        }

        let remaining = self.min_visible.saturating_sub(elapsed());
        if !remaining.is_zero() {
            clock.sleep(remaining).await;
        }

        elapsed()
    }
}
