// Host-side tests for the per-frame motion integrator.

use glam::Vec2;
use wave_core::{follow_easing, step, FrameInput, Motion, SLIDE_OVERSHOOT_PX};

fn input(motion: Motion, pointer: Vec2) -> FrameInput {
    FrameInput {
        motion,
        pointer,
        viewport_height: 600.0,
        slide_overshoot: SLIDE_OVERSHOOT_PX,
    }
}

fn run(input: &FrameInput, positions: &[Vec2]) -> (Vec<Vec2>, Vec<f32>) {
    let mut p = positions.to_vec();
    let mut o = vec![1.0; positions.len()];
    step(input, &mut p, &mut o);
    (p, o)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn step_preserves_element_count_for_every_policy() {
    let policies = [
        Motion::Following,
        Motion::Settling,
        Motion::Sliding { progress: 0.1 },
        Motion::Sliding { progress: 0.8 },
    ];
    for motion in policies {
        for n in 0..12 {
            let start = vec![Vec2::new(5.0, 5.0); n];
            let (p, o) = run(&input(motion, Vec2::new(1.0, 2.0)), &start);
            assert_eq!(p.len(), n, "{motion:?} changed the position count");
            assert_eq!(o.len(), n, "{motion:?} changed the opacity count");
        }
    }
}

#[test]
fn following_head_snaps_to_pointer() {
    let pointer = Vec2::new(321.5, -12.25);
    let (p, _) = run(&input(Motion::Following, pointer), &[Vec2::new(9.0, 9.0)]);
    assert_eq!(p[0], pointer);
}

#[test]
fn following_chain_converges_monotonically() {
    let pointer = Vec2::new(100.0, 0.0);
    let frame = input(Motion::Following, pointer);
    let mut positions = vec![Vec2::ZERO; 4];
    let mut opacities = vec![1.0; 4];
    let mut prev: Vec<f32> = positions.iter().map(|p| p.distance(pointer)).collect();
    for _ in 0..30 {
        step(&frame, &mut positions, &mut opacities);
        for i in 1..positions.len() {
            let d = positions[i].distance(pointer);
            assert!(d < prev[i], "element {i} did not get closer: {d} >= {}", prev[i]);
            prev[i] = d;
        }
    }
    assert!(prev[1] < prev[2] && prev[2] < prev[3]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chain_lag_never_speeds_up_along_the_tail() {
    for i in 1..20 {
        assert!(follow_easing(i + 1) <= follow_easing(i));
    }
    assert!(follow_easing(6) > 0.0);
    assert_eq!(follow_easing(7), 0.0);
}

#[test]
fn settling_eases_every_element_at_the_same_rate() {
    let (p, _) = run(&input(Motion::Settling, Vec2::new(100.0, 0.0)), &[Vec2::ZERO; 3]);
    for pos in p {
        assert!(close(pos.x, 10.0) && pos.y == 0.0, "got {pos:?}");
    }
}

#[test]
fn gather_easing_accelerates() {
    let start = [Vec2::ZERO; 2];
    let pointer = Vec2::new(100.0, 0.0);
    let (p, _) = run(&input(Motion::Sliding { progress: 0.0 }, pointer), &start);
    assert!(close(p[0].x, 10.0));
    let (p, _) = run(&input(Motion::Sliding { progress: 0.15 }, pointer), &start);
    assert!(close(p[1].x, 20.0));
    let (p, o) = run(&input(Motion::Sliding { progress: 0.29 }, pointer), &start);
    assert!(p[0].x > 29.0 && p[0].x < 30.0);
    assert_eq!(o, vec![1.0, 1.0]);
}

#[test]
fn slide_boundary_leaves_everything_in_place() {
    let start = vec![Vec2::new(7.0, 8.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
    let (p, o) = run(
        &input(Motion::Sliding { progress: 0.3 }, Vec2::new(50.0, 60.0)),
        &start,
    );
    assert_eq!(p, start);
    assert_eq!(o, vec![1.0; 3]);
}

#[test]
fn slide_end_golden_values() {
    let pointer = Vec2::new(50.0, 100.0);
    let start: Vec<Vec2> = (0..6).map(|i| Vec2::new(i as f32, 0.0)).collect();
    let frame = input(Motion::Sliding { progress: 1.0 }, pointer);
    let (p, o) = run(&frame, &start);

    // viewport 600 + overshoot 200
    assert!(close(p[0].y, 900.0) && close(o[0], 0.0));
    assert!(close(p[1].y, 900.0) && close(o[1], 0.0));
    assert!(close(p[5].y, 100.0 + 0.5625 * 800.0));
    assert!(close(o[5], 0.25));
    for (i, pos) in p.iter().enumerate() {
        assert_eq!(pos.x, i as f32, "slide must not move x");
    }

    let (again, _) = run(&frame, &start);
    assert_eq!(p, again);
}

#[test]
fn slide_opacity_falls_and_stops_at_zero() {
    let n = 5;
    let mut positions = vec![Vec2::ZERO; n];
    let mut opacities = vec![1.0; n];
    let mut prev = opacities.clone();
    let mut progress = 0.3;
    while progress <= 1.0 {
        let frame = input(Motion::Sliding { progress }, Vec2::new(10.0, 10.0));
        step(&frame, &mut positions, &mut opacities);
        for i in 0..n {
            assert!(opacities[i] <= prev[i], "opacity rose for element {i}");
            assert!(opacities[i] >= 0.0);
        }
        prev.clone_from(&opacities);
        progress += 0.01;
    }
    assert_eq!(opacities[0], 0.0);
}
