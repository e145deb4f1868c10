//! One gallery visit: layout, frames, collision and the viewer, owned together
//! and advanced one tick at a time.

use crate::aspect::FrameAsset;
use crate::collision::CollisionField;
use crate::config::{ConfigError, GalleryConfig};
use crate::gaze::{self, GazeDecision};
use crate::layout::{self, GalleryLayout, LayoutParams};
use crate::movement::{Facing, MoveIntent, MovementController, SpeedProfile, ViewerState};
use crate::registry::FrameRegistry;
use crate::room::Room;

/// Message shown to the visitor when the configuration could not be used.
pub const UNAVAILABLE_NOTICE: &str = "This museum is not available right now.";
/// Message shown when the configuration lists no photos.
pub const EMPTY_NOTICE: &str = "This museum has no photos yet.";

#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    pub room: Room,
    pub params: LayoutParams,
    pub speed: SpeedProfile,
}

/// Completion token binding one texture load to one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureTicket {
    slot: usize,
}

impl TextureTicket {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRequest {
    pub ticket: TextureTicket,
    pub url: String,
}

/// Natural pixel size reported by the asset loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

pub struct Session {
    room: Room,
    layout: GalleryLayout,
    registry: FrameRegistry,
    field: CollisionField,
    mover: MovementController,
    viewer: ViewerState,
    gaze: GazeDecision,
    notice: Option<String>,
}

impl Session {
    /// Build the museum named by `config` (or the default one when the
    /// configuration failed) and map its photos onto the slots. Returns the
    /// textures the asset loader should fetch.
    pub fn start(
        options: SessionOptions,
        config: Result<GalleryConfig, ConfigError>,
    ) -> (Self, Vec<TextureRequest>) {
        let (config, notice) = match config {
            Ok(config) if config.photos.is_empty() => {
                log::warn!("[config] photo list is empty");
                (config, Some(EMPTY_NOTICE.to_string()))
            }
            Ok(config) => (config, None),
            Err(e) => {
                log::error!("[config] {}", e);
                (GalleryConfig::default(), Some(UNAVAILABLE_NOTICE.to_string()))
            }
        };

        let layout = layout::build(config.layout_kind(), &options.room, &options.params);
        let registry = FrameRegistry::from_layout(&layout.slots);
        let field = CollisionField::new(layout.obstacles.clone());
        let mover = MovementController::new(options.room.inner_bounds(), options.speed);

        let mut session = Self {
            room: options.room,
            layout,
            registry,
            field,
            mover,
            viewer: ViewerState::default(),
            gaze: GazeDecision::Hidden,
            notice,
        };
        let requests = session.assign_photos(&config);
        (session, requests)
    }

    /// Entries map 1:1 onto slots; extras are ignored and missing ones leave
    /// placeholders.
    fn assign_photos(&mut self, config: &GalleryConfig) -> Vec<TextureRequest> {
        let count = config.photos.len().min(self.registry.len());
        if config.photos.len() > count {
            log::warn!(
                "[config] {} photos for {} frames; ignoring the rest",
                config.photos.len(),
                self.registry.len()
            );
        }
        let mut requests = Vec::with_capacity(count);
        for (slot, entry) in config.photos.iter().take(count).enumerate() {
            self.registry.set_caption(slot, entry.caption());
            let url = entry.image().trim();
            if url.is_empty() {
                log::warn!("[config] photo {} has no image", slot);
                continue;
            }
            self.registry.mark_pending(slot, url);
            requests.push(TextureRequest {
                ticket: TextureTicket { slot },
                url: url.to_string(),
            });
        }
        log::info!(
            "[config] {} frames, {} captions, {} textures requested",
            self.registry.len(),
            count,
            requests.len()
        );
        requests
    }

    /// Continuation for one texture load. Failures leave the slot as is.
    pub fn resolve_texture(
        &mut self,
        ticket: TextureTicket,
        result: Result<TextureInfo, String>,
    ) {
        match result {
            Ok(info) => {
                if self
                    .registry
                    .apply_texture(ticket.slot, info.width, info.height)
                {
                    log::debug!(
                        "[frames] slot {} fitted to {}x{}",
                        ticket.slot,
                        info.width,
                        info.height
                    );
                }
            }
            Err(reason) => log::error!("[frames] slot {} image failed: {}", ticket.slot, reason),
        }
    }

    /// Swap in the decorative frame model. Returns `false` if one was already
    /// installed.
    pub fn install_frame_asset(&mut self, asset: FrameAsset) -> bool {
        self.registry.install_skin(asset).is_some()
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.viewer.facing = facing;
    }

    /// Move, then look. Gaze always sees the post-move position.
    pub fn tick(&mut self, intent: MoveIntent, dt: f32) -> &GazeDecision {
        self.viewer = self.mover.step(&self.viewer, intent, dt, &self.field);
        self.gaze = gaze::resolve(&self.viewer, &self.registry);
        &self.gaze
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn collision(&self) -> &CollisionField {
        &self.field
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn gaze(&self) -> &GazeDecision {
        &self.gaze
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
