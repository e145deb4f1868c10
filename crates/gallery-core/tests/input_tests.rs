// Host-side tests for pure input mapping functions.

use gallery_core::input::*;
use gallery_core::{Facing, LoadProgress, MoveIntent, MOUSE_PITCH_LIMIT, TOUCH_PITCH_LIMIT};
use glam::Vec2;

#[test]
fn wasd_and_arrows_map_to_directions() {
    assert_eq!(direction_for_code("KeyW"), Some(Direction::Forward));
    assert_eq!(direction_for_code("ArrowUp"), Some(Direction::Forward));
    assert_eq!(direction_for_code("KeyS"), Some(Direction::Backward));
    assert_eq!(direction_for_code("ArrowDown"), Some(Direction::Backward));
    assert_eq!(direction_for_code("KeyA"), Some(Direction::Left));
    assert_eq!(direction_for_code("ArrowLeft"), Some(Direction::Left));
    assert_eq!(direction_for_code("KeyD"), Some(Direction::Right));
    assert_eq!(direction_for_code("ArrowRight"), Some(Direction::Right));
}

#[test]
fn other_codes_are_ignored() {
    assert_eq!(direction_for_code("KeyQ"), None);
    assert_eq!(direction_for_code("Space"), None);
    assert_eq!(direction_for_code("w"), None);
    assert_eq!(direction_for_code(""), None);
}

#[test]
fn held_directions_fold_into_intent() {
    let mut held = HeldDirections::default();
    assert_eq!(held.intent(), MoveIntent::default());

    held.set(Direction::Forward, true);
    held.set(Direction::Left, true);
    assert_eq!(held.intent(), MoveIntent::new(1, -1));

    // Opposite keys cancel
    held.set(Direction::Backward, true);
    assert_eq!(held.intent(), MoveIntent::new(0, -1));

    held.set(Direction::Left, false);
    held.set(Direction::Right, true);
    assert_eq!(held.intent(), MoveIntent::new(0, 1));

    held.clear();
    assert!(held.intent().is_idle());
}

#[test]
fn walking_needs_pointer_lock_on_desktop() {
    let mut keys = HeldDirections::default();
    keys.set(Direction::Forward, true);
    let pad = joystick_directions(Vec2::new(-20.0, 0.0));

    assert!(walk_intent(keys, pad, false).is_idle());
    assert_eq!(walk_intent(keys, pad, true), MoveIntent::new(1, 0));

    // Joystick drives once no key is held
    keys.clear();
    assert_eq!(walk_intent(keys, pad, true), MoveIntent::new(0, -1));
    assert!(walk_intent(keys, pad, false).is_idle());
}

#[test]
fn joystick_dead_zone() {
    assert!(joystick_directions(Vec2::new(12.0, -12.0)).intent().is_idle());
    assert_eq!(
        joystick_directions(Vec2::new(13.0, 0.0)).intent(),
        MoveIntent::new(0, 1)
    );
    assert_eq!(
        joystick_directions(Vec2::new(-20.0, -20.0)).intent(),
        MoveIntent::new(1, -1)
    );
    assert_eq!(
        joystick_directions(Vec2::new(0.0, 25.0)).intent(),
        MoveIntent::new(-1, 0)
    );
}

#[test]
fn joystick_knob_stays_on_pad() {
    let knob = joystick_knob_offset(Vec2::new(60.0, 80.0));
    assert!((knob.length() - 30.0).abs() < 1e-4);
    assert!((knob.x / knob.y - 0.75).abs() < 1e-4);
    assert_eq!(joystick_knob_offset(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
}

#[test]
fn mouse_look_turns_and_clamps() {
    let f = mouse_look(Facing::default(), Vec2::new(100.0, 0.0));
    assert!((f.yaw + 0.2).abs() < 1e-5);
    let f = mouse_look(Facing::default(), Vec2::new(0.0, -10_000.0));
    assert_eq!(f.pitch, MOUSE_PITCH_LIMIT);
}

#[test]
fn touch_look_has_tighter_pitch_limit() {
    let f = touch_look(Facing::default(), Vec2::new(0.0, -10_000.0));
    assert_eq!(f.pitch, TOUCH_PITCH_LIMIT);
    let f = touch_look(Facing::default(), Vec2::new(0.0, 10_000.0));
    assert_eq!(f.pitch, -TOUCH_PITCH_LIMIT);
    let f = touch_look(Facing::default(), Vec2::new(-100.0, 0.0));
    assert!((f.yaw - 0.3).abs() < 1e-5);
}

#[test]
fn touch_user_agents() {
    assert!(is_touch_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
    ));
    assert!(is_touch_user_agent("Mozilla/5.0 (Linux; Android 14)"));
    assert!(!is_touch_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0"
    ));
}

#[test]
fn load_progress_percent() {
    let mut progress = LoadProgress::new(0);
    assert_eq!(progress.percent(), 0);
    assert!(progress.is_done());

    progress.add_pending(3);
    assert!(!progress.is_done());
    progress.finish_one();
    assert_eq!(progress.percent(), 33);
    progress.finish_one();
    assert_eq!(progress.percent(), 67);
    progress.finish_one();
    progress.finish_one();
    assert_eq!(progress.percent(), 100);
    assert_eq!(progress.loaded, 3);
    assert!(progress.is_done());
}

#[test]
fn failed_loads_still_settle_the_loader() {
    // Three photos (one never started), the frame model and the music.
    let mut progress = LoadProgress::new(3 + 2);
    for _ in 0..4 {
        progress.finish_one();
    }
    assert!(!progress.is_done());
    progress.finish_one();
    assert!(progress.is_done());
    assert_eq!(progress.percent(), 100);
}
