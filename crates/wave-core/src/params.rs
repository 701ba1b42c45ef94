use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be longer than zero")]
    ZeroDuration { name: &'static str },
    #[error("fill alpha {0} is outside [0, 1]")]
    AlphaOutOfRange(f32),
    #[error("slide overshoot {0} must be finite and non-negative")]
    InvalidOvershoot(f32),
}

/// Timings and decoration settings for one wave effect.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    /// Quiet time after the last pointer move before the pointer counts as stopped.
    pub debounce: Duration,
    /// Further quiet time before the slide-out starts.
    pub settle_delay: Duration,
    pub slide_duration: Duration,
    pub color_interval: Duration,
    pub fill_alpha: f32,
    pub slide_overshoot: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
            slide_duration: Duration::from_millis(SLIDE_DURATION_MS),
            color_interval: Duration::from_millis(COLOR_INTERVAL_MS),
            fill_alpha: FILL_ALPHA,
            slide_overshoot: SLIDE_OVERSHOOT_PX,
        }
    }
}

impl WaveParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let durations = [
            ("debounce", self.debounce),
            ("settle delay", self.settle_delay),
            ("slide duration", self.slide_duration),
            ("color interval", self.color_interval),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, d)| d.is_zero()) {
            return Err(ParamsError::ZeroDuration { name: *name });
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ParamsError::AlphaOutOfRange(self.fill_alpha));
        }
        if !self.slide_overshoot.is_finite() || self.slide_overshoot < 0.0 {
            return Err(ParamsError::InvalidOvershoot(self.slide_overshoot));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(WaveParams::default().validate(), Ok(()));
    }

    #[test]
    fn zero_duration_is_rejected_by_name() {
        let params = WaveParams {
            settle_delay: Duration::ZERO,
            ..WaveParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::ZeroDuration {
                name: "settle delay"
            })
        );
    }

    #[test]
    fn alpha_and_overshoot_bounds() {
        let params = WaveParams {
            fill_alpha: 1.2,
            ..WaveParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::AlphaOutOfRange(1.2)));

        let params = WaveParams {
            slide_overshoot: f32::NAN,
            ..WaveParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::InvalidOvershoot(_))
        ));
    }
}
