// Host-side tests for collision and first-person movement.

use gallery_core::input::mouse_look;
use gallery_core::{
    CollisionField, Facing, MoveIntent, MovementController, Obstacle, Room, SpeedProfile,
    ViewerState, DESKTOP_SPEED, EYE_HEIGHT, TOUCH_SPEED,
};
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn partition_field() -> CollisionField {
    CollisionField::new(vec![
        Obstacle::from_wall(0.0, -6.0, 7.0, 0.6),
        Obstacle::from_wall(0.0, 6.0, 7.0, 0.6),
    ])
}

fn controller() -> MovementController {
    MovementController::new(Room::default().inner_bounds(), SpeedProfile::Desktop)
}

fn viewer_at(x: f32, z: f32, yaw: f32) -> ViewerState {
    ViewerState::new(Vec3::new(x, EYE_HEIGHT, z), Facing::new(yaw, 0.0))
}

#[test]
fn interior_points_are_blocked() {
    let field = partition_field();
    assert!(field.is_blocked(0.0, -6.0));
    assert!(field.is_blocked(3.49, -5.71));
    assert!(field.is_blocked(-3.49, 6.29));
    assert!(!field.is_blocked(0.0, 0.0));
}

#[test]
fn boundary_points_are_not_blocked() {
    let o = Obstacle::from_wall(0.0, 0.0, 2.0, 1.0);
    let field = CollisionField::new(vec![o]);
    assert!(!field.is_blocked(o.min_x, 0.0));
    assert!(!field.is_blocked(o.max_x, 0.0));
    assert!(!field.is_blocked(0.0, o.min_z));
    assert!(!field.is_blocked(0.0, o.max_z));
    assert!(!field.is_blocked(o.max_x, o.max_z));
}

#[test]
fn empty_field_blocks_nothing() {
    let field = CollisionField::default();
    assert!(!field.is_blocked(0.0, 0.0));
    assert!(field.obstacles().is_empty());
}

#[test]
fn forward_follows_facing() {
    let field = partition_field();
    let start = viewer_at(0.0, 0.0, 0.0);
    let next = controller().step(&start, MoveIntent::new(1, 0), 0.1, &field);
    assert!(approx(next.position.z, -1.0));
    assert!(approx(next.position.x, 0.0));
}

#[test]
fn strafe_right_is_perpendicular() {
    let field = partition_field();
    let start = viewer_at(0.0, 0.0, 0.0);
    let next = controller().step(&start, MoveIntent::new(0, 1), 0.1, &field);
    assert!(approx(next.position.x, 1.0));
    assert!(approx(next.position.z, 0.0));
}

#[test]
fn pitch_does_not_change_walking_speed() {
    let field = partition_field();
    let start = ViewerState::new(Vec3::new(0.0, EYE_HEIGHT, 0.0), Facing::new(0.0, 0.8));
    let next = controller().step(&start, MoveIntent::new(1, 0), 0.1, &field);
    assert!(approx(next.position.z, -1.0));
}

#[test]
fn move_into_obstacle_is_rejected_entirely() {
    let field = partition_field();
    let start = viewer_at(0.0, -5.0, 0.0);
    let next = controller().step(&start, MoveIntent::new(1, 0), 0.09, &field);
    assert_eq!(next.position, start.position);

    // Diagonal: no sliding along the wall either
    let next = controller().step(&start, MoveIntent::new(1, 1), 0.09, &field);
    assert_eq!(next.position, start.position);
}

#[test]
fn walls_clamp_to_inner_bound() {
    let room = Room::default();
    let bounds = room.inner_bounds();
    let field = partition_field();

    // Facing -X, walk far past the wall
    let start = viewer_at(0.0, 0.0, FRAC_PI_2);
    let next = controller().step(&start, MoveIntent::new(1, 0), 10.0, &field);
    assert_eq!(next.position.x, -bounds.half_x);
    assert!(approx(bounds.half_x, room.half_width() - 0.5));

    // Facing -Z from beside the partitions
    let start = viewer_at(5.0, 0.0, 0.0);
    let next = controller().step(&start, MoveIntent::new(1, 0), 10.0, &field);
    assert_eq!(next.position.z, -bounds.half_z);
    assert!(next.position.z >= -bounds.half_z);
}

#[test]
fn eye_height_never_changes() {
    let field = partition_field();
    let mut viewer = ViewerState::new(Vec3::new(0.0, EYE_HEIGHT, 0.0), Facing::new(0.3, 1.2));
    for _ in 0..20 {
        viewer = controller().step(&viewer, MoveIntent::new(1, -1), 0.05, &field);
        assert_eq!(viewer.position.y, EYE_HEIGHT);
    }
}

#[test]
fn looking_straight_up_or_down_still_walks_forward() {
    let field = partition_field();
    let looked_up = mouse_look(Facing::default(), Vec2::new(0.0, -100_000.0));
    assert_eq!(looked_up.pitch, FRAC_PI_2);
    let looked_down = mouse_look(Facing::default(), Vec2::new(0.0, 100_000.0));
    assert_eq!(looked_down.pitch, -FRAC_PI_2);

    for facing in [looked_up, looked_down] {
        let start = ViewerState::new(Vec3::new(5.0, EYE_HEIGHT, 0.0), facing);
        let next = controller().step(&start, MoveIntent::new(1, 0), 0.1, &field);
        assert!(approx(next.position.z, -1.0), "moved to {:?}", next.position);
        assert!(approx(next.position.x, 5.0));

        let next = controller().step(&start, MoveIntent::new(0, 1), 0.1, &field);
        assert!(approx(next.position.x, 6.0), "strafed to {:?}", next.position);
        assert!(approx(next.position.z, 0.0));
    }
}

#[test]
fn idle_intent_keeps_position() {
    let field = partition_field();
    let start = viewer_at(1.0, 2.0, 0.7);
    let next = controller().step(&start, MoveIntent::default(), 1.0, &field);
    assert_eq!(next, start);
}

#[test]
fn intent_axes_are_normalized() {
    assert_eq!(MoveIntent::new(5, -3), MoveIntent::new(1, -1));
    assert!(MoveIntent::new(0, 0).is_idle());
}

#[test]
fn speed_profiles() {
    let bounds = Room::default().inner_bounds();
    assert_eq!(
        MovementController::new(bounds, SpeedProfile::Desktop).speed(),
        DESKTOP_SPEED
    );
    assert_eq!(
        MovementController::new(bounds, SpeedProfile::Touch).speed(),
        TOUCH_SPEED
    );
}

#[test]
fn invalid_rooms_are_rejected() {
    assert!(Room::new(0.0, 10.0).is_err());
    assert!(Room::new(10.0, -1.0).is_err());
    assert!(Room::new(f32::NAN, 10.0).is_err());
    assert!(Room::new(18.0, 23.4).is_ok());
}
