//! Room dimensions and the rectangular walkable bound derived from them.

use crate::constants::{
    BASE_WALL_HEIGHT, DEFAULT_ROOM_LENGTH, DEFAULT_ROOM_WIDTH, OUTER_WALL_HEIGHT_FACTOR,
    WALL_BOUNDARY,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoomError {
    #[error("room {axis} must be a positive finite number, got {value}")]
    InvalidDimension { axis: &'static str, value: f32 },
}

/// Immutable gallery room. `width` runs along X, `length` along Z and the
/// room is centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    width: f32,
    length: f32,
    base_wall_height: f32,
}

impl Room {
    pub fn new(width: f32, length: f32) -> Result<Self, RoomError> {
        check_dimension("width", width)?;
        check_dimension("length", length)?;
        Ok(Self {
            width,
            length,
            base_wall_height: BASE_WALL_HEIGHT,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// Height of partition walls.
    pub fn base_wall_height(&self) -> f32 {
        self.base_wall_height
    }

    /// Height of the four perimeter walls (and of the ceiling).
    pub fn outer_wall_height(&self) -> f32 {
        self.base_wall_height * OUTER_WALL_HEIGHT_FACTOR
    }

    /// Walkable rectangle: the room shrunk by the wall boundary margin.
    pub fn inner_bounds(&self) -> WalkBounds {
        WalkBounds {
            half_x: (self.half_width() - WALL_BOUNDARY).max(0.0),
            half_z: (self.half_length() - WALL_BOUNDARY).max(0.0),
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            length: DEFAULT_ROOM_LENGTH,
            base_wall_height: BASE_WALL_HEIGHT,
        }
    }
}

fn check_dimension(axis: &'static str, value: f32) -> Result<(), RoomError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RoomError::InvalidDimension { axis, value })
    }
}

/// Symmetric XZ clamp rectangle centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkBounds {
    pub half_x: f32,
    pub half_z: f32,
}

impl WalkBounds {
    #[inline]
    pub fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (
            x.clamp(-self.half_x, self.half_x),
            z.clamp(-self.half_z, self.half_z),
        )
    }
}
