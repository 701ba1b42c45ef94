use crate::params::WaveParams;
use crate::phase::{Phase, PhaseController, PhaseEvent};
use crate::state::PointerState;
use glam::Vec2;
use instant::Instant;

/// Records pointer samples and drives the phase timers from them.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    phases: PhaseController,
}

impl PointerTracker {
    pub fn new(params: &WaveParams, rest: Vec2) -> Self {
        Self {
            state: PointerState {
                position: rest,
                moving: false,
            },
            phases: PhaseController::new(params),
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        // Keep the previous coordinate on garbage input but still count the move.
        if x.is_finite() && y.is_finite() {
            self.state.position = Vec2::new(x, y);
        }
        self.state.moving = true;
        self.phases.on_pointer_move(now);
    }

    /// Runs due timers; the debounce clears the moving flag.
    pub fn advance(&mut self, now: Instant) -> Vec<PhaseEvent> {
        let fired = self.phases.advance(now);
        if fired.contains(&PhaseEvent::DebounceElapsed) {
            self.state.moving = false;
        }
        fired
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phases.phase()
    }

    pub fn is_moving(&self) -> bool {
        self.state.moving
    }
}
