//! Motion phases and the timer-gated controller that moves between them.

use crate::params::WaveParams;
use crate::timer::ScheduledTask;
use instant::Instant;
use std::time::Duration;

/// Which motion policy is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The pointer is moving; the chain trails it.
    Following,
    /// The pointer stopped; elements drift onto it while the slide is pending.
    Settling,
    /// Gather then slide out, measured from `started_at`.
    Sliding { started_at: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    PointerMoved,
    DebounceElapsed,
    SettleElapsed,
}

/// Policy handed to the integrator for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Following,
    Settling,
    Sliding { progress: f32 },
}

impl Phase {
    /// The single transition function; pairs not listed keep the phase.
    pub fn on(self, event: PhaseEvent, at: Instant) -> Phase {
        match (self, event) {
            (_, PhaseEvent::PointerMoved) => Phase::Following,
            (Phase::Following, PhaseEvent::DebounceElapsed) => Phase::Settling,
            (Phase::Settling, PhaseEvent::SettleElapsed) => Phase::Sliding { started_at: at },
            (phase, _) => phase,
        }
    }

    pub fn motion(&self, now: Instant, slide_duration: Duration) -> Motion {
        match *self {
            Phase::Following => Motion::Following,
            Phase::Settling => Motion::Settling,
            Phase::Sliding { started_at } => Motion::Sliding {
                progress: slide_progress(started_at, now, slide_duration),
            },
        }
    }
}

/// `(now - start) / duration` clamped to [0, 1].
pub fn slide_progress(started_at: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    if now <= started_at {
        return 0.0;
    }
    let elapsed = now.duration_since(started_at);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Owns the debounce and settle timers and the current [`Phase`].
#[derive(Clone, Debug)]
pub struct PhaseController {
    phase: Phase,
    debounce: ScheduledTask,
    settle: ScheduledTask,
    debounce_delay: Duration,
    settle_delay: Duration,
}

impl PhaseController {
    /// Starts out settled: nothing is moving and no slide is pending.
    pub fn new(params: &WaveParams) -> Self {
        Self {
            phase: Phase::Settling,
            debounce: ScheduledTask::new("debounce"),
            settle: ScheduledTask::new("settle"),
            debounce_delay: params.debounce,
            settle_delay: params.settle_delay,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_pending_timers(&self) -> bool {
        self.debounce.is_pending() || self.settle.is_pending()
    }

    /// Back to following; both timers are cancelled and the debounce restarts.
    pub fn on_pointer_move(&mut self, now: Instant) {
        self.apply(PhaseEvent::PointerMoved, now);
        self.settle.cancel();
        self.debounce.cancel();
        self.debounce.schedule(now, self.debounce_delay);
    }

    /// Fires whichever timers are due at `now`, returning the events applied.
    ///
    /// The settle timer is armed from the debounce deadline, so one late call
    /// can run both transitions with the same timestamps as two punctual ones.
    pub fn advance(&mut self, now: Instant) -> Vec<PhaseEvent> {
        let mut fired = Vec::new();
        if let Some(at) = self.debounce.fire(now) {
            self.apply(PhaseEvent::DebounceElapsed, at);
            self.settle.schedule(at, self.settle_delay);
            fired.push(PhaseEvent::DebounceElapsed);
        }
        if let Some(at) = self.settle.fire(now) {
            self.apply(PhaseEvent::SettleElapsed, at);
            fired.push(PhaseEvent::SettleElapsed);
        }
        fired
    }

    fn apply(&mut self, event: PhaseEvent, at: Instant) {
        let next = self.phase.on(event, at);
        if next != self.phase {
            log::debug!("[phase] {:?} -> {:?} on {:?}", self.phase, next, event);
        }
        self.phase = next;
    }
}
