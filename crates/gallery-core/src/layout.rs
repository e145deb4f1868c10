//! Procedural placement of exhibit slots, walls and obstacles.
//!
//! Everything here is a pure function of the [`Room`] and [`LayoutParams`]:
//! building the same room twice yields bit-identical poses.

use crate::collision::Obstacle;
use crate::constants::*;
use crate::room::Room;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Position plus rotation about +Y. A yaw of 0 faces +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
}

impl Pose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Direction the front face points to.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// Spot light aimed at one frame, derived from that frame's own normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
}

impl SpotLight {
    pub fn for_frame(pose: &Pose) -> Self {
        let normal = pose.normal();
        let target = pose.position - normal * 0.02 + Vec3::Y;
        let position = target + normal + Vec3::new(0.0, 2.0, 0.0);
        Self {
            position,
            target,
            color: SPOT_COLOR,
            intensity: SPOT_INTENSITY,
            range: SPOT_RANGE,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            decay: SPOT_DECAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallKind {
    /// Zero-thickness plane on the room boundary.
    Perimeter,
    /// Free-standing box inside the room.
    Partition,
}

/// Wall geometry handed to the scene collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallPanel {
    pub kind: WallKind,
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub yaw: f32,
}

/// Free-standing wall centered at `(x, z)`, running along X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionWall {
    pub x: f32,
    pub z: f32,
    pub width: f32,
}

/// Tunable placement parameters. Counts are per wall.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub frame_y: f32,
    pub wall_inset: f32,
    pub short_wall_frames: usize,
    pub short_wall_spacing: f32,
    pub long_wall_frames: usize,
    pub long_wall_margin: f32,
    pub partitions: Vec<PartitionWall>,
    pub partition_depth: f32,
    pub partition_clearance: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            frame_y: FRAME_CENTER_Y,
            wall_inset: WALL_INSET,
            short_wall_frames: SHORT_WALL_FRAMES,
            short_wall_spacing: SHORT_WALL_SPACING,
            long_wall_frames: LONG_WALL_FRAMES,
            long_wall_margin: LONG_WALL_MARGIN,
            partitions: DEFAULT_PARTITION_CENTERS
                .iter()
                .map(|&[x, z]| PartitionWall {
                    x,
                    z,
                    width: PARTITION_WIDTH,
                })
                .collect(),
            partition_depth: PARTITION_DEPTH,
            partition_clearance: PARTITION_CLEARANCE,
        }
    }
}

/// Museum layouts selectable from the configuration document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutKind {
    #[default]
    Default,
}

impl LayoutKind {
    /// Unknown or empty identifiers fall back to the default museum.
    pub fn from_id(id: &str) -> Self {
        match id.trim() {
            DEFAULT_LAYOUT_ID => Self::Default,
            other => {
                log::warn!("[layout] unknown layout {:?}; using default", other);
                Self::Default
            }
        }
    }
}

/// One exhibit placement produced by the builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotPlacement {
    pub pose: Pose,
    pub light: SpotLight,
}

impl SlotPlacement {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            light: SpotLight::for_frame(&pose),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryLayout {
    pub slots: Vec<SlotPlacement>,
    pub obstacles: Vec<Obstacle>,
    pub walls: Vec<WallPanel>,
}

pub fn build(kind: LayoutKind, room: &Room, params: &LayoutParams) -> GalleryLayout {
    log::info!("[layout] building {:?} museum", kind);
    match kind {
        LayoutKind::Default => build_default(room, params),
    }
}

fn build_default(room: &Room, params: &LayoutParams) -> GalleryLayout {
    let mut layout = GalleryLayout::default();
    let hw = room.half_width();
    let hl = room.half_length();
    let wall_h = room.outer_wall_height();
    let wall_y = wall_h / 2.0;

    for (center, width, yaw) in [
        (Vec3::new(0.0, wall_y, -hl), room.width(), 0.0),
        (Vec3::new(0.0, wall_y, hl), room.width(), PI),
        (Vec3::new(-hw, wall_y, 0.0), room.length(), FRAC_PI_2),
        (Vec3::new(hw, wall_y, 0.0), room.length(), -FRAC_PI_2),
    ] {
        layout.walls.push(WallPanel {
            kind: WallKind::Perimeter,
            center,
            width,
            height: wall_h,
            depth: 0.0,
            yaw,
        });
    }

    let inset = params.wall_inset;
    for (z, yaw) in [(-hl + inset, 0.0), (hl - inset, PI)] {
        for x in short_wall_offsets(params.short_wall_frames, params.short_wall_spacing) {
            push_slot(&mut layout, Vec3::new(x, params.frame_y, z), yaw);
        }
    }
    for (x, yaw) in [(-hw + inset, FRAC_PI_2), (hw - inset, -FRAC_PI_2)] {
        for z in long_wall_offsets(
            params.long_wall_frames,
            room.length(),
            params.long_wall_margin,
        ) {
            push_slot(&mut layout, Vec3::new(x, params.frame_y, z), yaw);
        }
    }

    for wall in &params.partitions {
        add_partition(&mut layout, room, params, wall);
    }

    log::debug!(
        "[layout] slots={} obstacles={} walls={}",
        layout.slots.len(),
        layout.obstacles.len(),
        layout.walls.len()
    );
    layout
}

fn push_slot(layout: &mut GalleryLayout, position: Vec3, yaw: f32) {
    layout
        .slots
        .push(SlotPlacement::new(Pose::new(position, yaw)));
}

/// Offsets along a short wall, centered on the wall with `spacing` between
/// neighbours. Two frames land at `±spacing / 2`.
pub fn short_wall_offsets(count: usize, spacing: f32) -> Vec<f32> {
    let mid = (count as f32 - 1.0) / 2.0;
    (0..count).map(|i| (i as f32 - mid) * spacing).collect()
}

/// Offsets along a long wall, evenly spread over the length minus a margin at
/// each end. A single frame sits at the wall center.
pub fn long_wall_offsets(count: usize, length: f32, margin: f32) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let usable = length - margin * 2.0;
            let step = usable / (n - 1) as f32;
            (0..n).map(|i| -usable / 2.0 + i as f32 * step).collect()
        }
    }
}

fn add_partition(
    layout: &mut GalleryLayout,
    room: &Room,
    params: &LayoutParams,
    wall: &PartitionWall,
) {
    let height = room.base_wall_height();
    let depth = params.partition_depth;
    layout.walls.push(WallPanel {
        kind: WallKind::Partition,
        center: Vec3::new(wall.x, height / 2.0, wall.z),
        width: wall.width,
        height,
        depth,
        yaw: 0.0,
    });
    layout
        .obstacles
        .push(Obstacle::from_wall(wall.x, wall.z, wall.width, depth));

    // Front and back faces, each hung just off the wall surface.
    let offset = depth / 2.0 + params.partition_clearance;
    let base = Vec3::new(wall.x, params.frame_y, wall.z);
    let normal = Vec3::Z;
    push_slot(layout, base + normal * offset, 0.0);
    push_slot(layout, base - normal * offset, PI);
}
