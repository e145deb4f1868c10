// Host-side tests for constants and their relationships.

use gallery_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(BASE_PHOTO_SIZE > 0.0);
    assert!(MIN_ASPECT > 0.0 && MIN_ASPECT < 1.0);
    assert!(MAX_ASPECT > 1.0);
    assert!(FRAME_WIDTH_FACTOR > 0.0 && FRAME_WIDTH_FACTOR < 1.0);
    assert!(PHOTO_OVERSCAN >= 1.0);
    assert!(MAT_PADDING >= 0.0);
    assert!(DESKTOP_SPEED > 0.0 && TOUCH_SPEED > 0.0);
    assert!(POPUP_DISTANCE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Frames must hang inside the room and above eye level
    assert!(FRAME_CENTER_Y > EYE_HEIGHT);
    assert!(FRAME_CENTER_Y < BASE_WALL_HEIGHT);
    assert!(WALL_INSET < WALL_BOUNDARY);

    // Long walls need room left after the end margins
    assert!(DEFAULT_ROOM_LENGTH > LONG_WALL_MARGIN * 2.0);
    assert!(DEFAULT_ROOM_WIDTH > SHORT_WALL_SPACING);

    // Touch walking is slower than desktop
    assert!(TOUCH_SPEED < DESKTOP_SPEED);
    assert!(TOUCH_PITCH_LIMIT < MOUSE_PITCH_LIMIT);
    assert!(JOYSTICK_DEAD_ZONE < JOYSTICK_MAX_RADIUS);
}

#[test]
fn default_room_matches_constants() {
    let room = Room::default();
    assert_eq!(room.width(), DEFAULT_ROOM_WIDTH);
    assert_eq!(room.length(), DEFAULT_ROOM_LENGTH);
    assert!((room.outer_wall_height() - 7.8).abs() < 1e-4);
    assert_eq!(viewer_start().y, EYE_HEIGHT);
}
