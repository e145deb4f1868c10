//! Gaze-driven caption popup: which frame is the viewer looking at, and is it
//! close enough to show its caption.

use crate::constants::POPUP_DISTANCE;
use crate::movement::ViewerState;
use crate::registry::{FrameRegistry, Layer, PrimitiveId};
use glam::{Quat, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Screen-center ray of the viewer's camera.
    pub fn from_viewer(viewer: &ViewerState) -> Self {
        Self {
            origin: viewer.position,
            dir: viewer.facing.direction(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub primitive: PrimitiveId,
    pub distance: f32,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// Ray intersection against scene primitives, nearest first.
pub trait Raycast {
    fn intersect(&self, ray: &Ray) -> Hits;
}

/// Ray against a front-facing rectangle lying in the local XY plane of
/// `rotation`, centered at `center`. Returns the ray parameter of the hit.
#[inline]
pub fn ray_quad(ray: &Ray, center: Vec3, rotation: Quat, size: Vec2) -> Option<f32> {
    let normal = rotation * Vec3::Z;
    let denom = ray.dir.dot(normal);
    if denom > -1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rotation.inverse() * (ray.origin + ray.dir * t - center);
    let half = size * 0.5;
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}

impl Raycast for FrameRegistry {
    fn intersect(&self, ray: &Ray) -> Hits {
        let mut hits = Hits::new();
        for slot in self.iter() {
            let rotation = slot.pose.rotation();
            for layer in Layer::ALL {
                let center = slot.layer_center(layer);
                if let Some(t) = ray_quad(ray, center, rotation, slot.layer_size(layer)) {
                    hits.push(Hit {
                        primitive: FrameRegistry::primitive(slot.index, layer),
                        distance: t,
                    });
                }
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GazeDecision {
    #[default]
    Hidden,
    Show {
        slot: usize,
        text: String,
    },
}

impl GazeDecision {
    pub fn is_visible(&self) -> bool {
        matches!(self, GazeDecision::Show { .. })
    }

    pub fn slot(&self) -> Option<usize> {
        match self {
            GazeDecision::Show { slot, .. } => Some(*slot),
            GazeDecision::Hidden => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            GazeDecision::Show { text, .. } => text,
            GazeDecision::Hidden => "",
        }
    }
}

/// Resolve the popup using the registry's own frame quads.
pub fn resolve(viewer: &ViewerState, registry: &FrameRegistry) -> GazeDecision {
    resolve_with(viewer, registry, registry)
}

/// Resolve the popup against hits reported by `scene`. The nearest hit must
/// belong to a frame, lie within [`POPUP_DISTANCE`] of the viewer (measured to
/// the frame origin) and carry a non-blank caption.
pub fn resolve_with<S: Raycast>(
    viewer: &ViewerState,
    scene: &S,
    registry: &FrameRegistry,
) -> GazeDecision {
    let ray = Ray::from_viewer(viewer);
    let Some(nearest) = scene.intersect(&ray).into_iter().next() else {
        return GazeDecision::Hidden;
    };
    let Some(slot) = registry
        .owner_of(nearest.primitive)
        .and_then(|i| registry.get(i))
    else {
        return GazeDecision::Hidden;
    };
    if viewer.position.distance(slot.pose.position) > POPUP_DISTANCE {
        return GazeDecision::Hidden;
    }
    if !slot.has_caption() {
        return GazeDecision::Hidden;
    }
    GazeDecision::Show {
        slot: slot.index,
        text: slot.caption.clone(),
    }
}
