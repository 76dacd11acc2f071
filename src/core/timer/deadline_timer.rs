use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::timer::ports::{Clock, SystemClock, TimerPort};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed-interval timer backed by a single deadline.
///
/// The timer is active exactly when a deadline is scheduled. Ticks that were
/// missed while the UI thread was busy are coalesced into one.
pub struct DeadlineTimer<C: Clock = SystemClock> {
    clock: C,
    interval: Duration,
    deadline: Option<Instant>,
}

impl DeadlineTimer<SystemClock> {
    #[must_use]
    pub fn with_system_clock(interval: Duration) -> Self {
        Self::new(interval, SystemClock)
    }
}

impl<C: Clock> DeadlineTimer<C> {
    #[must_use]
    pub fn new(interval: Duration, clock: C) -> Self {
        Self {
            clock,
            interval,
            deadline: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<C: Clock> TimerPort for DeadlineTimer<C> {
    fn start(&mut self) {
        if self.deadline.is_some() {
            return;
        }

        self.deadline = Some(self.clock.now() + self.interval);
        debug!(interval_ms = self.interval.as_millis() as u64, "timer started");
    }

    fn stop(&mut self) {
        if self.deadline.take().is_some() {
            debug!("timer stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    fn poll_tick(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };

        let now = self.clock.now();
        if now < deadline {
            return false;
        }

        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.deadline = Some(next);

        true
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
