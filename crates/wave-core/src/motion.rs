//! Per-frame position integration for the wave chain.
//!
//! Every policy uses `pos += (target - pos) * easing` except element 0 while
//! following, which snaps to the pointer.

use crate::constants::*;
use crate::phase::Motion;
use glam::Vec2;

/// Everything [`step`] reads besides the element state itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub motion: Motion,
    pub pointer: Vec2,
    pub viewport_height: f32,
    pub slide_overshoot: f32,
}

/// Chain easing for element `i` while following. Zero from index 7 on, which
/// freezes the tail relative to its predecessor.
#[inline]
pub fn follow_easing(i: usize) -> f32 {
    (FOLLOW_EASING_BASE - i as f32 * FOLLOW_EASING_FALLOFF).max(0.0)
}

#[inline]
pub fn gather_easing(gather_progress: f32) -> f32 {
    GATHER_EASING_START + gather_progress * GATHER_EASING_SPAN
}

/// How far element `i` has run through its own slide, in [0, 1].
#[inline]
pub fn slide_amount(slide_progress: f32, i: usize) -> f32 {
    let delay = i as f32 * SLIDE_STAGGER;
    ((slide_progress - delay) * SLIDE_RATE).clamp(0.0, 1.0)
}

#[inline]
fn ease_toward(pos: &mut Vec2, target: Vec2, easing: f32) {
    *pos += (target - *pos) * easing;
}

/// Advances every element by one frame. Lengths of both slices are kept.
pub fn step(input: &FrameInput, positions: &mut [Vec2], opacities: &mut [f32]) {
    match input.motion {
        Motion::Following => follow(input.pointer, positions),
        Motion::Settling => {
            for pos in positions.iter_mut() {
                ease_toward(pos, input.pointer, SETTLE_EASING);
            }
        }
        Motion::Sliding { progress } if progress < GATHER_FRACTION => {
            let easing = gather_easing(progress / GATHER_FRACTION);
            for pos in positions.iter_mut() {
                ease_toward(pos, input.pointer, easing);
            }
        }
        Motion::Sliding { progress } => {
            let s = (progress - GATHER_FRACTION) / (1.0 - GATHER_FRACTION);
            let distance = input.viewport_height + input.slide_overshoot;
            for (i, (pos, opacity)) in positions.iter_mut().zip(opacities.iter_mut()).enumerate() {
                let amount = slide_amount(s, i);
                if amount > 0.0 {
                    pos.y = input.pointer.y + amount * amount * distance;
                    *opacity = (1.0 - amount).max(0.0);
                }
            }
        }
    }
}

fn follow(pointer: Vec2, positions: &mut [Vec2]) {
    let Some(head) = positions.first_mut() else {
        return;
    };
    *head = pointer;
    for i in 1..positions.len() {
        let leader = positions[i - 1];
        ease_toward(&mut positions[i], leader, follow_easing(i));
    }
}
