//! Frame layer sizing from an image's natural aspect ratio.
//!
//! A frame is three concentric quads: the photo, the mat behind it and the
//! outer frame behind the mat. Sizes are in world units.

use crate::constants::{
    BASE_PHOTO_SIZE, FRAME_WIDTH_FACTOR, MAT_PADDING, MAX_ASPECT, MIN_ASPECT, OUTER_PADDING,
    PHOTO_OVERSCAN,
};
use glam::{Vec2, Vec3};

/// Width/height of each frame layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSizes {
    pub photo: Vec2,
    pub mat: Vec2,
    pub outer: Vec2,
}

impl Default for LayerSizes {
    /// Unit planes, matching a slot that never received an image.
    fn default() -> Self {
        Self {
            photo: Vec2::ONE,
            mat: Vec2::ONE,
            outer: Vec2::ONE,
        }
    }
}

/// Compute layer sizes for an image with the given `width / height` ratio.
///
/// The ratio is clamped to `[MIN_ASPECT, MAX_ASPECT]`; landscape images keep
/// a fixed height, portrait images a fixed width.
pub fn fit(ratio: f32) -> LayerSizes {
    let r = ratio.clamp(MIN_ASPECT, MAX_ASPECT);
    let (photo_w, photo_h) = if r >= 1.0 {
        (BASE_PHOTO_SIZE * r, BASE_PHOTO_SIZE)
    } else {
        (BASE_PHOTO_SIZE, BASE_PHOTO_SIZE / r)
    };

    let mat = Vec2::new(photo_w + MAT_PADDING, photo_h + MAT_PADDING);
    let outer = Vec2::new(
        (mat.x + OUTER_PADDING) * FRAME_WIDTH_FACTOR,
        mat.y + OUTER_PADDING,
    );

    LayerSizes {
        photo: Vec2::new(photo_w, photo_h * PHOTO_OVERSCAN),
        mat,
        outer,
    }
}

/// Natural ratio of a decoded texture, or `None` when it cannot be fitted.
#[inline]
pub fn texture_ratio(width: u32, height: u32) -> Option<f32> {
    let ratio = width as f32 / height as f32;
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// Decorative frame model loaded by the asset collaborator, normalized so its
/// larger XY side is one unit and its bounds are centered on the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameAsset {
    pub source: String,
    pub scale: f32,
    pub offset: Vec3,
}

impl FrameAsset {
    pub fn normalized(source: impl Into<String>, bounds_min: Vec3, bounds_max: Vec3) -> Self {
        let size = bounds_max - bounds_min;
        let max_side = size.x.max(size.y);
        let scale = if max_side > 0.0 { 1.0 / max_side } else { 1.0 };
        let center = (bounds_min + bounds_max) * 0.5;
        Self {
            source: source.into(),
            scale,
            offset: -center,
        }
    }
}

/// How a slot's outer layer is drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FrameSkin {
    #[default]
    Placeholder,
    /// Model clone, turned half a revolution so its front faces the room.
    Decorated(FrameAsset),
}
