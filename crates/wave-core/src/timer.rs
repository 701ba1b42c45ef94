//! Cancellable scheduled tasks polled against a caller-supplied clock.
//!
//! Nothing here sleeps or registers callbacks: the owner calls `fire`/`poll`
//! with the current time and acts on the result, which keeps the phase logic
//! on the single frame-driving thread and makes it testable with fake time.

use instant::Instant;
use std::time::Duration;

/// A named one-shot timer. Scheduling replaces whatever was pending.
#[derive(Clone, Debug)]
pub struct ScheduledTask {
    name: &'static str,
    deadline: Option<Instant>,
}

impl ScheduledTask {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            deadline: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schedule(&mut self, from: Instant, delay: Duration) {
        self.deadline = Some(from + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms the task and returns its deadline once `now` has reached it.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(at) if now >= at => self.deadline.take(),
            _ => None,
        }
    }
}

/// A fixed-rate repeating timer that fires at most once per poll.
#[derive(Clone, Debug)]
pub struct IntervalTask {
    period: Duration,
    next: Instant,
}

impl IntervalTask {
    pub fn new(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next || self.period.is_zero() {
            return false;
        }
        // Skip over any periods missed while nobody polled.
        let behind = now.duration_since(self.next).as_nanos() / self.period.as_nanos();
        let skipped = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        self.next += self.period * skipped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut task = ScheduledTask::new("debounce");
        task.schedule(t0, ms(100));
        assert!(task.is_pending());
        assert_eq!(task.fire(t0 + ms(99)), None);
        assert_eq!(task.fire(t0 + ms(130)), Some(t0 + ms(100)));
        assert!(!task.is_pending());
        assert_eq!(task.fire(t0 + ms(200)), None);
    }

    #[test]
    fn reschedule_replaces_and_cancel_disarms() {
        let t0 = Instant::now();
        let mut task = ScheduledTask::new("settle");
        task.schedule(t0, ms(100));
        task.schedule(t0 + ms(80), ms(100));
        assert_eq!(task.fire(t0 + ms(120)), None);
        assert_eq!(task.deadline(), Some(t0 + ms(180)));
        task.cancel();
        assert_eq!(task.fire(t0 + ms(1000)), None);
        assert_eq!(task.name(), "settle");
    }

    #[test]
    fn interval_skips_missed_periods() {
        let t0 = Instant::now();
        let mut every = IntervalTask::new(t0, ms(500));
        assert!(!every.poll(t0 + ms(499)));
        assert!(every.poll(t0 + ms(500)));
        assert!(!every.poll(t0 + ms(700)));
        // Three periods late: one fire, then back on the 500 ms grid.
        assert!(every.poll(t0 + ms(2600)));
        assert!(!every.poll(t0 + ms(2900)));
        assert!(every.poll(t0 + ms(3000)));
    }
}
