//! Fixed-size registry of exhibit slots and the scene primitives they own.

use crate::aspect::{self, FrameAsset, FrameSkin, LayerSizes};
use crate::constants::FRAME_DEPTH_OFFSET;
use crate::layout::{Pose, SlotPlacement, SpotLight};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};

/// Stacked quads that make up one frame, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Outer,
    Mat,
    Photo,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Outer, Layer::Mat, Layer::Photo];

    /// Offset along the frame normal.
    #[inline]
    pub fn depth(self) -> f32 {
        match self {
            Layer::Outer => 0.0,
            Layer::Mat => FRAME_DEPTH_OFFSET,
            Layer::Photo => FRAME_DEPTH_OFFSET * 2.0,
        }
    }

    #[inline]
    fn ordinal(self) -> u32 {
        match self {
            Layer::Outer => 0,
            Layer::Mat => 1,
            Layer::Photo => 2,
        }
    }
}

/// Handle of one hit-testable scene primitive (a single layer quad).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveId(pub u32);

/// Image state of a slot as seen by the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SlotImage {
    #[default]
    Placeholder,
    Pending {
        url: String,
    },
    Loaded {
        width: u32,
        height: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExhibitSlot {
    pub index: usize,
    pub pose: Pose,
    pub light: SpotLight,
    pub caption: String,
    pub layers: LayerSizes,
    /// Natural ratio of the resolved texture, kept for re-fitting.
    pub aspect: Option<f32>,
    pub image: SlotImage,
    pub skin: FrameSkin,
}

impl ExhibitSlot {
    fn new(index: usize, placement: &SlotPlacement, skin: FrameSkin) -> Self {
        Self {
            index,
            pose: placement.pose,
            light: placement.light,
            caption: String::new(),
            layers: LayerSizes::default(),
            aspect: None,
            image: SlotImage::Placeholder,
            skin,
        }
    }

    pub fn layer_size(&self, layer: Layer) -> Vec2 {
        match layer {
            Layer::Outer => self.layers.outer,
            Layer::Mat => self.layers.mat,
            Layer::Photo => self.layers.photo,
        }
    }

    pub fn layer_center(&self, layer: Layer) -> Vec3 {
        self.pose.position + self.pose.normal() * layer.depth()
    }

    pub fn has_caption(&self) -> bool {
        !self.caption.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameRegistry {
    slots: Vec<ExhibitSlot>,
    owners: FnvHashMap<PrimitiveId, usize>,
    skin: FrameSkin,
}

impl FrameRegistry {
    pub fn from_layout(placements: &[SlotPlacement]) -> Self {
        let mut registry = Self::default();
        for placement in placements {
            registry.push(placement);
        }
        registry
    }

    fn push(&mut self, placement: &SlotPlacement) {
        let index = self.slots.len();
        for layer in Layer::ALL {
            self.owners.insert(Self::primitive(index, layer), index);
        }
        self.slots
            .push(ExhibitSlot::new(index, placement, self.skin.clone()));
    }

    #[inline]
    pub fn primitive(slot: usize, layer: Layer) -> PrimitiveId {
        PrimitiveId(slot as u32 * Layer::ALL.len() as u32 + layer.ordinal())
    }

    /// Slot that owns a hit primitive, if it belongs to any frame.
    pub fn owner_of(&self, primitive: PrimitiveId) -> Option<usize> {
        self.owners.get(&primitive).copied()
    }

    pub fn contains(&self, primitive: PrimitiveId) -> bool {
        self.owners.contains_key(&primitive)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ExhibitSlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExhibitSlot> {
        self.slots.iter()
    }

    pub fn skin(&self) -> &FrameSkin {
        &self.skin
    }

    pub fn set_caption(&mut self, index: usize, caption: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.caption = caption.to_string();
        }
    }

    pub fn mark_pending(&mut self, index: usize, url: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.image = SlotImage::Pending {
                url: url.to_string(),
            };
        }
    }

    /// Fit a slot to its decoded texture. Returns `false` when the slot does
    /// not exist or the texture has no usable size; the slot is then left as
    /// it was.
    pub fn apply_texture(&mut self, index: usize, width: u32, height: u32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        let Some(ratio) = aspect::texture_ratio(width, height) else {
            log::warn!(
                "[frames] slot {} texture has no usable size ({}x{})",
                index,
                width,
                height
            );
            return false;
        };
        slot.aspect = Some(ratio);
        slot.image = SlotImage::Loaded { width, height };
        slot.layers = aspect::fit(ratio);
        true
    }

    /// Swap every outer layer for the decorative model and re-fit slots that
    /// already have an image. Only the first call has an effect; returns the
    /// number of slots re-fitted.
    pub fn install_skin(&mut self, asset: FrameAsset) -> Option<usize> {
        if matches!(self.skin, FrameSkin::Decorated(_)) {
            log::warn!("[frames] frame model already installed; ignoring {}", asset.source);
            return None;
        }
        self.skin = FrameSkin::Decorated(asset);
        let mut refitted = 0;
        for slot in &mut self.slots {
            slot.skin = self.skin.clone();
            if let Some(ratio) = slot.aspect {
                slot.layers = aspect::fit(ratio);
                refitted += 1;
            }
        }
        log::info!(
            "[frames] frame model installed on {} slots ({} re-fitted)",
            self.slots.len(),
            refitted
        );
        Some(refitted)
    }
}
