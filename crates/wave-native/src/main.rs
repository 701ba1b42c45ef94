use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use wave_core::{
    ColorCycle, FrameScheduler, Phase, RenderError, RenderTarget, Rgba, Viewport, WaveParams,
};

const ELEMENTS: usize = 10;
const FRAME: Duration = Duration::from_micros(16_667); // ~60 Hz
const MOVE_FOR: Duration = Duration::from_millis(1200);
const RUN_FOR: Duration = Duration::from_millis(3600);
const ORBIT_RADIUS: f32 = 180.0;
const ORBIT_RAD_PER_SEC: f32 = 3.0;
const COLOR_SEED: u64 = 42;

/// Keeps the last pushed state of every element so the run can be summarized.
struct TraceTarget {
    elements: Vec<(Vec2, f32)>,
    last_fill: Option<Rgba>,
    fills: usize,
}

impl TraceTarget {
    fn new(n: usize) -> Self {
        Self {
            elements: vec![(Vec2::ZERO, 1.0); n],
            last_fill: None,
            fills: 0,
        }
    }
}

impl RenderTarget for TraceTarget {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn place(&mut self, index: usize, position: Vec2, opacity: f32) -> Result<(), RenderError> {
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(RenderError::MissingElement { index })?;
        *slot = (position, opacity);
        Ok(())
    }

    fn fill(&mut self, index: usize, color: Rgba) -> Result<(), RenderError> {
        log::debug!("[color] element {index} -> {color}");
        self.last_fill = Some(color);
        self.fills += 1;
        Ok(())
    }
}

fn phase_name(phase: &Phase) -> &'static str {
    match phase {
        Phase::Following => "following",
        Phase::Settling => "settling",
        Phase::Sliding { .. } => "sliding",
    }
}

fn orbit(center: Vec2, elapsed: Duration) -> Vec2 {
    let angle = elapsed.as_secs_f32() * ORBIT_RAD_PER_SEC;
    center + Vec2::new(angle.cos(), angle.sin()) * ORBIT_RADIUS
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = WaveParams::default();
    params.validate()?;
    let viewport = Viewport::new(1280.0, 720.0);
    let t0 = Instant::now();
    let cycle = ColorCycle::new(t0, params.color_interval, params.fill_alpha, Some(COLOR_SEED));
    let mut sched = FrameScheduler::new(params, TraceTarget::new(ELEMENTS), viewport)
        .with_color_cycle(cycle);
    sched.present();
    log::info!(
        "[init] {} elements centered at {:?}",
        ELEMENTS,
        viewport.center()
    );

    let mut last_phase = sched.effect().phase();
    let mut elapsed = Duration::ZERO;
    while elapsed < RUN_FOR {
        elapsed += FRAME;
        let now = t0 + elapsed;
        if elapsed < MOVE_FOR {
            let p = orbit(viewport.center(), elapsed);
            sched.on_pointer_move(p.x, p.y, now);
        }
        let report = sched.on_frame(now);
        if report.failed > 0 {
            log::warn!("[frame] {} of {} updates failed", report.failed, ELEMENTS);
        }
        let phase = sched.effect().phase();
        if phase != last_phase {
            log::info!(
                "[{:>5} ms] {} -> {}",
                elapsed.as_millis(),
                phase_name(&last_phase),
                phase_name(&phase)
            );
            last_phase = phase;
        }
    }

    let target = sched.target();
    let visible = target.elements.iter().filter(|(_, o)| *o > 0.0).count();
    log::info!(
        "[done] {} frames, {} fills (last {:?}), {} of {} elements still visible",
        sched.frames(),
        target.fills,
        target.last_fill.map(|c| c.to_string()),
        visible,
        ELEMENTS
    );
    for (i, (pos, opacity)) in target.elements.iter().enumerate() {
        log::debug!("[done] #{i} at ({:.1}, {:.1}) opacity {:.2}", pos.x, pos.y, opacity);
    }

    let resized = Viewport::new(1920.0, 1080.0);
    let report = sched.on_resize(resized);
    log::info!(
        "[resize] {} elements recentered at {:?}",
        report.placed,
        resized.center()
    );
    Ok(())
}
