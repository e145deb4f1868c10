pub mod aspect;
pub mod collision;
pub mod config;
pub mod constants;
pub mod gaze;
pub mod input;
pub mod layout;
pub mod model;
pub mod movement;
pub mod progress;
pub mod registry;
pub mod room;
pub mod session;
pub mod soundtrack;

pub use aspect::{fit, FrameAsset, FrameSkin, LayerSizes};
pub use collision::{CollisionField, Obstacle};
pub use config::{ConfigError, GalleryConfig, PhotoEntry};
pub use constants::*;
pub use gaze::{GazeDecision, Ray, Raycast};
pub use layout::{GalleryLayout, LayoutKind, LayoutParams, Pose};
pub use model::{frame_asset_from_glb, ModelError};
pub use movement::{Facing, MoveIntent, MovementController, SpeedProfile, ViewerState};
pub use progress::LoadProgress;
pub use registry::{ExhibitSlot, FrameRegistry, Layer, SlotImage};
pub use room::{Room, RoomError, WalkBounds};
pub use session::{Session, SessionOptions, TextureInfo, TextureRequest, TextureTicket};
pub use soundtrack::SoundtrackCue;
