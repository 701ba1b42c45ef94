//! Frame-level composition: the effect state and the scheduler that pushes
//! it to a [`RenderTarget`] once per display frame.

use crate::color::{ColorCycle, Rgba};
use crate::motion::{self, FrameInput};
use crate::params::WaveParams;
use crate::phase::{Motion, Phase};
use crate::pointer::PointerTracker;
use crate::render::RenderTarget;
use crate::state::{PointerState, PositionStore, Viewport};
use instant::Instant;

/// Pointer tracking, phase timers and element positions for one chain.
#[derive(Clone, Debug)]
pub struct WaveEffect {
    params: WaveParams,
    viewport: Viewport,
    store: PositionStore,
    pointer: PointerTracker,
}

impl WaveEffect {
    pub fn new(params: WaveParams, element_count: usize, viewport: Viewport) -> Self {
        let center = viewport.center();
        Self {
            pointer: PointerTracker::new(&params, center),
            store: PositionStore::new(element_count, center),
            viewport,
            params,
        }
    }

    /// Applies one pointer sample: follow restarts and every element is shown again.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        self.pointer.on_pointer_move(x, y, now);
        self.store.show_all();
    }

    /// Re-centers every element on the new viewport. The phase is untouched.
    pub fn on_resize(&mut self, viewport: Viewport) {
        log::debug!(
            "[resize] {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.store.reset(viewport.center());
    }

    /// Fires due timers, then integrates one frame.
    pub fn step(&mut self, now: Instant) -> Motion {
        self.pointer.advance(now);
        let motion = self
            .pointer
            .phase()
            .motion(now, self.params.slide_duration);
        let input = FrameInput {
            motion,
            pointer: self.pointer.state().position,
            viewport_height: self.viewport.height,
            slide_overshoot: self.params.slide_overshoot,
        };
        let (positions, opacities) = self.store.columns_mut();
        motion::step(&input, positions, opacities);
        motion
    }

    pub fn phase(&self) -> Phase {
        self.pointer.phase()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }
}

/// Outcome of pushing one frame to the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub motion: Option<Motion>,
    pub placed: usize,
    pub failed: usize,
}

/// Steps a [`WaveEffect`] and writes the result to its render target.
///
/// Render failures are logged and counted, never returned: one bad frame
/// must not end the loop that calls [`FrameScheduler::on_frame`].
pub struct FrameScheduler<T: RenderTarget> {
    effect: WaveEffect,
    target: T,
    colors: Option<ColorCycle>,
    frames: u64,
}

impl<T: RenderTarget> FrameScheduler<T> {
    /// Sizes the effect from the target so the two always agree.
    pub fn new(params: WaveParams, target: T, viewport: Viewport) -> Self {
        let effect = WaveEffect::new(params, target.len(), viewport);
        Self {
            effect,
            target,
            colors: None,
            frames: 0,
        }
    }

    /// Polls `cycle` every frame and fills element 0 when it fires.
    pub fn with_color_cycle(mut self, cycle: ColorCycle) -> Self {
        self.colors = Some(cycle);
        self
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        self.effect.on_pointer_move(x, y, now);
    }

    pub fn on_resize(&mut self, viewport: Viewport) -> FrameReport {
        self.effect.on_resize(viewport);
        self.present()
    }

    pub fn on_frame(&mut self, now: Instant) -> FrameReport {
        let motion = self.effect.step(now);
        if let Some(fill) = self.colors.as_mut().and_then(|c| c.poll(now)) {
            self.fill_lead(fill);
        }
        self.frames += 1;
        FrameReport {
            motion: Some(motion),
            ..self.present()
        }
    }

    /// Writes current positions and opacities without stepping.
    pub fn present(&mut self) -> FrameReport {
        let mut report = FrameReport {
            motion: None,
            placed: 0,
            failed: 0,
        };
        for (i, (pos, opacity)) in self.effect.store().iter().enumerate() {
            match self.target.place(i, pos, opacity) {
                Ok(()) => report.placed += 1,
                Err(e) => {
                    report.failed += 1;
                    log::warn!("[frame] {}", e);
                }
            }
        }
        report
    }

    /// Gives element 0 a new background; a no-op without elements.
    pub fn fill_lead(&mut self, color: Rgba) {
        if self.target.is_empty() {
            return;
        }
        if let Err(e) = self.target.fill(0, color) {
            log::warn!("[color] {}", e);
        }
    }

    pub fn effect(&self) -> &WaveEffect {
        &self.effect
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
