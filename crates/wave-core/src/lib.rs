pub mod color;
pub mod constants;
pub mod frame;
pub mod motion;
pub mod params;
pub mod phase;
pub mod pointer;
pub mod render;
pub mod state;
pub mod timer;

pub use color::*;
pub use constants::*;
pub use frame::*;
pub use motion::{follow_easing, step, FrameInput};
pub use params::*;
pub use phase::*;
pub use pointer::*;
pub use render::*;
pub use state::*;
pub use timer::*;
