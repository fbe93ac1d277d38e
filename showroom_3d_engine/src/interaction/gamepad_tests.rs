use std::time::Duration;
use glam::Vec2;
use super::*;

fn viewport() -> Viewport {
    Viewport::sized(800.0, 600.0)
}

fn adapter() -> GamepadAdapter {
    GamepadAdapter::new(GamepadConfig::default())
}

fn stick(x: f32, y: f32) -> GamepadSnapshot {
    GamepadSnapshot { left_stick: Vec2::new(x, y), buttons: GamepadButtons::empty() }
}

fn buttons(buttons: GamepadButtons) -> GamepadSnapshot {
    GamepadSnapshot { left_stick: Vec2::ZERO, buttons }
}

const FRAME: Duration = Duration::from_millis(100);

// ============================================================================
// Stick
// ============================================================================

#[test]
fn test_full_deflection_moves_from_center() {
    let mut pad = adapter();
    let events = pad.update(&stick(1.0, 0.0), FRAME, &viewport());
    assert_eq!(events.len(), 1);
    // 900 px/s for 0.1 s
    let cursor = pad.cursor().unwrap();
    assert!((cursor - Vec2::new(490.0, 300.0)).length() < 1e-3);
    assert_eq!(events[0], InputEvent::PointerMove { x: cursor.x, y: cursor.y });
}

#[test]
fn test_stick_up_moves_cursor_up() {
    let mut pad = adapter();
    pad.update(&stick(0.0, 1.0), FRAME, &viewport());
    let cursor = pad.cursor().unwrap();
    assert!(cursor.y < 300.0);
    assert_eq!(cursor.x, 400.0);
}

#[test]
fn test_dead_zone_suppresses_drift() {
    let mut pad = adapter();
    assert!(pad.update(&stick(0.1, -0.05), FRAME, &viewport()).is_empty());
    assert_eq!(pad.cursor(), None);
}

#[test]
fn test_output_rescaled_past_dead_zone() {
    let mut pad = adapter();
    // Just past the dead zone: tiny movement, not a jump
    let events = pad.update(&stick(0.16, 0.0), FRAME, &viewport());
    let InputEvent::PointerMove { x, .. } = events[0] else {
        panic!("expected a pointer move, got {:?}", events);
    };
    assert!(x > 400.0 && x < 402.0);
}

#[test]
fn test_cursor_clamped_to_viewport() {
    let mut pad = adapter();
    for _ in 0..20 {
        pad.update(&stick(-1.0, -1.0), FRAME, &viewport());
    }
    let cursor = pad.cursor().unwrap();
    assert_eq!(cursor.x, 0.0);
    assert_eq!(cursor.y, 600.0);
}

#[test]
fn test_nan_stick_ignored() {
    let mut pad = adapter();
    assert!(pad.update(&stick(f32::NAN, 0.5), FRAME, &viewport()).is_empty());
}

#[test]
fn test_invalid_viewport_emits_no_move() {
    let mut pad = adapter();
    let broken = Viewport::new(f32::NAN, 0.0, 800.0, 800.0);
    assert!(pad.update(&stick(1.0, 0.0), FRAME, &broken).is_empty());
    assert_eq!(pad.cursor(), None);

    let empty = Viewport::sized(0.0, 0.0);
    assert!(pad.update(&stick(1.0, 0.0), FRAME, &empty).is_empty());
    assert_eq!(pad.cursor(), None);
}

#[test]
fn test_invalid_viewport_keeps_cursor_and_buttons() {
    let mut pad = adapter();
    pad.update(&stick(1.0, 0.0), FRAME, &viewport());
    let before = pad.cursor();

    let snapshot = GamepadSnapshot { left_stick: Vec2::new(1.0, 0.0), buttons: GamepadButtons::SOUTH };
    let events = pad.update(&snapshot, FRAME, &Viewport::new(0.0, f32::NAN, 800.0, 600.0));
    assert_eq!(events, vec![InputEvent::PointerDown]);
    assert_eq!(pad.cursor(), before);
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn test_south_press_clicks_once() {
    let mut pad = adapter();
    let held = buttons(GamepadButtons::SOUTH);
    assert_eq!(pad.update(&held, FRAME, &viewport()), vec![InputEvent::PointerDown]);
    assert!(pad.update(&held, FRAME, &viewport()).is_empty());

    // Release and press again
    pad.update(&buttons(GamepadButtons::empty()), FRAME, &viewport());
    assert_eq!(pad.update(&held, FRAME, &viewport()), vec![InputEvent::PointerDown]);
}

#[test]
fn test_east_and_start_close() {
    let mut pad = adapter();
    assert_eq!(
        pad.update(&buttons(GamepadButtons::EAST), FRAME, &viewport()),
        vec![InputEvent::KeyDown(Key::Escape)]
    );

    let mut pad = adapter();
    assert_eq!(
        pad.update(&buttons(GamepadButtons::START), FRAME, &viewport()),
        vec![InputEvent::KeyDown(Key::Escape)]
    );

    // Both at once still close only once
    let mut pad = adapter();
    let both = buttons(GamepadButtons::EAST | GamepadButtons::START);
    assert_eq!(pad.update(&both, FRAME, &viewport()).len(), 1);
}

#[test]
fn test_move_then_click_order() {
    let mut pad = adapter();
    let snapshot = GamepadSnapshot { left_stick: Vec2::new(1.0, 0.0), buttons: GamepadButtons::SOUTH };
    let events = pad.update(&snapshot, FRAME, &viewport());
    assert!(matches!(events[0], InputEvent::PointerMove { .. }));
    assert_eq!(events[1], InputEvent::PointerDown);
}
