use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Paces the game loop at a fixed rate
pub trait Clock {
    /// Resolve once the next tick boundary has passed
    fn tick(&mut self) -> impl Future<Output = ()>;
}

/// Fixed-rate clock on a tokio interval.
///
/// Must be created inside a tokio runtime.
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(rate_hz: u32) -> Self {
        let period = (Duration::from_secs(1) / rate_hz.max(1)).max(Duration::from_nanos(1));
        let mut interval = interval(period);
        // A slow frame pushes the schedule back instead of bursting
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Clock for IntervalClock {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
