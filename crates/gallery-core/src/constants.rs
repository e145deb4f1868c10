use glam::Vec3;

// Shared layout/interaction tuning constants used by both web and native frontends.

// Room
pub const DEFAULT_ROOM_WIDTH: f32 = 18.0;
pub const DEFAULT_ROOM_LENGTH: f32 = 36.0 * 0.65;
pub const BASE_WALL_HEIGHT: f32 = 6.0;
pub const OUTER_WALL_HEIGHT_FACTOR: f32 = 1.3; // perimeter walls are taller than partitions

// Frame sizing
pub const BASE_PHOTO_SIZE: f32 = 2.5; // short side of the photo layer
pub const MIN_ASPECT: f32 = 0.6;
pub const MAX_ASPECT: f32 = 1.6;
pub const MAT_PADDING: f32 = 0.0; // no visible mat border
pub const OUTER_PADDING: f32 = 0.05;
pub const FRAME_WIDTH_FACTOR: f32 = 0.58; // keeps the outer frame narrower than it is tall
pub const PHOTO_OVERSCAN: f32 = 1.02; // photo slightly taller than the mat to hide the seam
pub const FRAME_DEPTH_OFFSET: f32 = 0.01; // spacing between stacked layers

// Wall placement
pub const FRAME_CENTER_Y: f32 = 3.3;
pub const WALL_INSET: f32 = 0.05;
pub const SHORT_WALL_SPACING: f32 = 7.5;
pub const SHORT_WALL_FRAMES: usize = 2;
pub const LONG_WALL_FRAMES: usize = 3;
pub const LONG_WALL_MARGIN: f32 = 5.0;

// Partition walls
pub const PARTITION_DEPTH: f32 = 0.6;
pub const PARTITION_WIDTH: f32 = 7.0;
pub const PARTITION_CLEARANCE: f32 = 0.03; // gap between partition face and its frames
pub const DEFAULT_PARTITION_CENTERS: [[f32; 2]; 2] = [[0.0, -6.0], [0.0, 6.0]];

// Frame lights
pub const SPOT_COLOR: u32 = 0xffffff;
pub const SPOT_INTENSITY: f32 = 2.2;
pub const SPOT_RANGE: f32 = 20.0;
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
pub const SPOT_PENUMBRA: f32 = 0.35;
pub const SPOT_DECAY: f32 = 1.0;

// Viewer
pub const EYE_HEIGHT: f32 = 1.7;
pub const WALL_BOUNDARY: f32 = 0.5; // closest the viewer may get to a perimeter wall
pub const DESKTOP_SPEED: f32 = 10.0; // units per second
pub const TOUCH_SPEED: f32 = 3.5;

// Look
pub const MOUSE_LOOK_RADIANS_PER_PX: f32 = 0.002;
pub const MOUSE_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
pub const TOUCH_YAW_RADIANS_PER_PX: f32 = 0.003;
pub const TOUCH_PITCH_RADIANS_PER_PX: f32 = 0.0025;
pub const TOUCH_PITCH_LIMIT: f32 = 1.2;

// Joystick (css px)
pub const JOYSTICK_DEAD_ZONE: f32 = 12.0;
pub const JOYSTICK_MAX_RADIUS: f32 = 30.0;

// Gaze
pub const POPUP_DISTANCE: f32 = 5.0;

// Configuration
pub const ASSET_BASE_URL: &str = "https://ik.imagekit.io/y6ivkwjoq";
pub const FRAME_MODEL_PATH: &str = "models/frame.glb";
pub const MUSIC_PATH: &str = "music/music.mp3";
pub const MUSIC_VOLUME: f32 = 0.25;
pub const DEFAULT_LAYOUT_ID: &str = "default";

#[inline]
pub fn viewer_start() -> Vec3 {
    Vec3::new(0.0, EYE_HEIGHT, 0.0)
}
