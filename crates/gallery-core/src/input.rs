use crate::constants::{
    JOYSTICK_DEAD_ZONE, JOYSTICK_MAX_RADIUS, MOUSE_LOOK_RADIANS_PER_PX, MOUSE_PITCH_LIMIT,
    TOUCH_PITCH_LIMIT, TOUCH_PITCH_RADIANS_PER_PX, TOUCH_YAW_RADIANS_PER_PX,
};
use crate::movement::{Facing, MoveIntent};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Map a physical key code (`KeyboardEvent.code` naming) to a direction.
#[inline]
pub fn direction_for_code(code: &str) -> Option<Direction> {
    match code {
        "KeyW" | "ArrowUp" => Some(Direction::Forward),
        "KeyS" | "ArrowDown" => Some(Direction::Backward),
        "KeyA" | "ArrowLeft" => Some(Direction::Left),
        "KeyD" | "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Held movement directions, from keys or the on-screen pad.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Forward => self.forward = held,
            Direction::Backward => self.backward = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Opposite directions cancel out.
    pub fn intent(&self) -> MoveIntent {
        let forward = self.forward as i8 - self.backward as i8;
        let strafe = self.right as i8 - self.left as i8;
        MoveIntent::new(forward, strafe)
    }
}

/// Combined walking intent. Keys win while any is held; otherwise the
/// joystick drives. Nothing moves while `can_walk` is false (desktop before
/// the pointer is locked).
pub fn walk_intent(keys: HeldDirections, joystick: HeldDirections, can_walk: bool) -> MoveIntent {
    if !can_walk {
        return MoveIntent::default();
    }
    let from_keys = keys.intent();
    if from_keys.is_idle() {
        joystick.intent()
    } else {
        from_keys
    }
}

// ---------------- On-screen joystick ----------------

/// Directions held by a joystick drag `offset` px from the pad center
/// (screen space, +y down). Each axis has its own dead zone.
pub fn joystick_directions(offset: Vec2) -> HeldDirections {
    HeldDirections {
        forward: offset.y < -JOYSTICK_DEAD_ZONE,
        backward: offset.y > JOYSTICK_DEAD_ZONE,
        left: offset.x < -JOYSTICK_DEAD_ZONE,
        right: offset.x > JOYSTICK_DEAD_ZONE,
    }
}

/// Where to draw the knob: the drag offset limited to the pad radius.
#[inline]
pub fn joystick_knob_offset(offset: Vec2) -> Vec2 {
    offset.clamp_length_max(JOYSTICK_MAX_RADIUS)
}

// ---------------- Look ----------------

/// Pointer-lock mouse look.
#[inline]
pub fn mouse_look(facing: Facing, movement_px: Vec2) -> Facing {
    facing.turned(
        -movement_px.x * MOUSE_LOOK_RADIANS_PER_PX,
        -movement_px.y * MOUSE_LOOK_RADIANS_PER_PX,
        MOUSE_PITCH_LIMIT,
    )
}

/// Touch drag look; slower vertical rate and a tighter pitch limit.
#[inline]
pub fn touch_look(facing: Facing, drag_px: Vec2) -> Facing {
    facing.turned(
        -drag_px.x * TOUCH_YAW_RADIANS_PER_PX,
        -drag_px.y * TOUCH_PITCH_RADIANS_PER_PX,
        TOUCH_PITCH_LIMIT,
    )
}

/// Mobile user agents get the touch controls and walking speed.
pub fn is_touch_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ["android", "iphone", "ipad", "ipod"]
        .iter()
        .any(|needle| ua.contains(needle))
}
