// Host-side tests for pointer state and press-edge semantics.

use app_core::*;
use glam::Vec2;

#[test]
fn move_overwrites_position() {
    let mut pointer = PointerState::new(Vec2::new(10.0, 10.0));
    pointer.on_move(42.0, 7.0);
    assert_eq!(pointer.position, Vec2::new(42.0, 7.0));
    assert!(!pointer.pressed);
}

#[test]
fn press_bursts_only_on_the_edge() {
    let mut pointer = PointerState::new(Vec2::ZERO);
    assert!(pointer.press_start(5.0, 5.0), "first press is an edge");
    assert!(pointer.pressed);
    assert!(
        !pointer.press_start(6.0, 6.0),
        "a held press must not re-trigger"
    );
    pointer.press_end();
    assert!(!pointer.pressed);
    assert!(pointer.press_start(7.0, 7.0), "a fresh press is an edge again");
}

#[test]
fn press_start_also_moves_the_pointer() {
    let mut pointer = PointerState::new(Vec2::ZERO);
    pointer.press_start(5.0, 9.0);
    assert_eq!(pointer.position, Vec2::new(5.0, 9.0));
}

#[test]
fn attractor_filters_non_finite_positions() {
    let mut pointer = PointerState::new(Vec2::new(1.0, 2.0));
    assert_eq!(pointer.attractor(), Some(Vec2::new(1.0, 2.0)));
    pointer.on_move(f32::NAN, 2.0);
    assert_eq!(pointer.attractor(), None);
    pointer.on_move(f32::INFINITY, 2.0);
    assert_eq!(pointer.attractor(), None);
    pointer.on_move(3.0, 4.0);
    assert_eq!(pointer.attractor(), Some(Vec2::new(3.0, 4.0)));
}
