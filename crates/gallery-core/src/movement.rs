//! First-person walking: intent + facing -> committed viewer position.

use crate::collision::CollisionField;
use crate::constants::{viewer_start, DESKTOP_SPEED, TOUCH_SPEED};
use crate::room::WalkBounds;
use glam::Vec3;

/// Camera orientation, YXZ order. Yaw 0 and pitch 0 look down -Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Facing {
    pub yaw: f32,
    pub pitch: f32,
}

impl Facing {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Unit look direction.
    pub fn direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Look direction flattened onto the floor. Depends on yaw only; pitch
    /// never changes the walking direction.
    pub fn ground_forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(-sy, 0.0, -cy)
    }

    /// Rotate by the given deltas, keeping pitch within `±pitch_limit`.
    pub fn turned(&self, d_yaw: f32, d_pitch: f32, pitch_limit: f32) -> Self {
        Self {
            yaw: self.yaw + d_yaw,
            pitch: (self.pitch + d_pitch).clamp(-pitch_limit, pitch_limit),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerState {
    pub position: Vec3,
    pub facing: Facing,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            position: viewer_start(),
            facing: Facing::default(),
        }
    }
}

impl ViewerState {
    pub fn new(position: Vec3, facing: Facing) -> Self {
        Self { position, facing }
    }
}

/// Per-tick movement request. Each axis is -1, 0 or +1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: i8,
    pub strafe: i8,
}

impl MoveIntent {
    pub fn new(forward: i8, strafe: i8) -> Self {
        Self {
            forward: forward.signum(),
            strafe: strafe.signum(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0 && self.strafe == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeedProfile {
    #[default]
    Desktop,
    Touch,
}

impl SpeedProfile {
    pub fn units_per_sec(self) -> f32 {
        match self {
            SpeedProfile::Desktop => DESKTOP_SPEED,
            SpeedProfile::Touch => TOUCH_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementController {
    bounds: WalkBounds,
    speed: f32,
}

impl MovementController {
    pub fn new(bounds: WalkBounds, profile: SpeedProfile) -> Self {
        Self {
            bounds,
            speed: profile.units_per_sec(),
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance the viewer by one tick.
    ///
    /// The candidate is clamped to the walkable bounds first; if the clamped
    /// point lies inside an obstacle the whole move is dropped and the
    /// previous position is returned unchanged.
    pub fn step(
        &self,
        viewer: &ViewerState,
        intent: MoveIntent,
        dt: f32,
        field: &CollisionField,
    ) -> ViewerState {
        if intent.is_idle() {
            return *viewer;
        }
        let forward = viewer.facing.ground_forward();
        let strafe = Vec3::new(-forward.z, 0.0, forward.x);
        let amount = self.speed * dt;
        let delta = forward * (intent.forward as f32 * amount)
            + strafe * (intent.strafe as f32 * amount);

        let candidate = viewer.position + delta;
        let (x, z) = self.bounds.clamp(candidate.x, candidate.z);
        if field.is_blocked(x, z) {
            log::trace!("[move] blocked at ({:.2}, {:.2})", x, z);
            return *viewer;
        }
        ViewerState {
            position: Vec3::new(x, viewer.position.y, z),
            facing: viewer.facing,
        }
    }
}
