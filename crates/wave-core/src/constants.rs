// Motion tuning constants shared by the web and native front-ends.

// Following: element i chases element i-1 with easing BASE - i * FALLOFF
pub const FOLLOW_EASING_BASE: f32 = 0.2;
pub const FOLLOW_EASING_FALLOFF: f32 = 0.03; // per index; reaches zero from i = 7

// Settling: every element eases straight to the pointer
pub const SETTLE_EASING: f32 = 0.1;

// Sliding: the first part of the progress range gathers, the rest slides out
pub const GATHER_FRACTION: f32 = 0.3;
pub const GATHER_EASING_START: f32 = 0.1;
pub const GATHER_EASING_SPAN: f32 = 0.2; // 0.1 -> 0.3 over the gather
pub const SLIDE_STAGGER: f32 = 0.1; // slide progress delay per element index
pub const SLIDE_RATE: f32 = 1.5; // how fast an element runs through its own slide

// Timing defaults (milliseconds)
pub const DEBOUNCE_MS: u64 = 100;
pub const SETTLE_DELAY_MS: u64 = 500;
pub const SLIDE_DURATION_MS: u64 = 1500;
pub const COLOR_INTERVAL_MS: u64 = 500;

// Decoration and layout
pub const FILL_ALPHA: f32 = 0.7;
pub const SLIDE_OVERSHOOT_PX: f32 = 200.0; // slide this far past the bottom edge
