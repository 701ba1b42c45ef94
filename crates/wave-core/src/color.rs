use crate::timer::IntervalTask;
use instant::Instant;
use rand::prelude::*;
use std::fmt;
use std::time::Duration;

/// A CSS-style color with 8-bit channels and a float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Random translucent fills on a fixed period, independent of motion state.
pub struct ColorCycle {
    rng: StdRng,
    alpha: f32,
    interval: IntervalTask,
}

impl ColorCycle {
    pub fn new(start: Instant, period: Duration, alpha: f32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            alpha,
            interval: IntervalTask::new(start, period),
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    pub fn next_fill(&mut self) -> Rgba {
        Rgba {
            r: self.rng.gen(),
            g: self.rng.gen(),
            b: self.rng.gen(),
            a: self.alpha,
        }
    }

    /// A new fill when the period has elapsed since the last one.
    pub fn poll(&mut self, now: Instant) -> Option<Rgba> {
        self.interval.poll(now).then(|| self.next_fill())
    }
}
