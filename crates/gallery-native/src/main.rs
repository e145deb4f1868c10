//! Desktop walkthrough of a gallery described by a local config file.
//!
//! ```bash
//! gallery-native --config museum/config.json
//! gallery-native --config museum/config.json --frame-model models/frame.glb --touch-speed
//! ```
//!
//! WASD or the arrow keys walk, a click grabs the mouse for looking around and
//! Escape releases it. The caption of the frame in view is shown in the window
//! title.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use gallery_core::input::{direction_for_code, mouse_look, walk_intent, HeldDirections};
use gallery_core::{
    frame_asset_from_glb, ConfigError, GalleryConfig, GazeDecision, LayoutParams, Room, Session,
    SessionOptions, SpeedProfile, DEFAULT_ROOM_LENGTH, DEFAULT_ROOM_WIDTH, FRAME_MODEL_PATH,
};
use glam::Vec2;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowBuilder};
use winit::{event::*, event_loop::EventLoopWindowTarget};

const TITLE: &str = "Gallery";
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "gallery-native")]
#[command(author, version, about = "Walk through a photo gallery", long_about = None)]
struct Cli {
    /// Gallery config (same document the web build fetches)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decorative frame model (binary glTF)
    #[arg(long, default_value = FRAME_MODEL_PATH)]
    frame_model: PathBuf,

    /// Walk at the slower touch-device speed
    #[arg(long)]
    touch_speed: bool,

    /// Room width (x extent)
    #[arg(long, default_value_t = DEFAULT_ROOM_WIDTH)]
    width: f32,

    /// Room length (z extent)
    #[arg(long, default_value_t = DEFAULT_ROOM_LENGTH)]
    length: f32,
}

fn read_config(path: Option<&Path>) -> Result<GalleryConfig, ConfigError> {
    let Some(path) = path else {
        return Err(ConfigError::NoConfigFile);
    };
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Fetch {
        url: path.display().to_string(),
        reason: e.to_string(),
    })?;
    GalleryConfig::from_json_str(&text)
}

fn install_frame_model(session: &mut Session, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("[model] {}: {}", path.display(), e);
            return;
        }
    };
    match frame_asset_from_glb(&path.display().to_string(), &bytes) {
        Ok(asset) => {
            session.install_frame_asset(asset);
        }
        Err(e) => log::warn!("[model] {}: {}", path.display(), e),
    }
}

/// DOM-style code name for the keys that walk.
fn key_code_name(code: KeyCode) -> Option<&'static str> {
    Some(match code {
        KeyCode::KeyW => "KeyW",
        KeyCode::KeyA => "KeyA",
        KeyCode::KeyS => "KeyS",
        KeyCode::KeyD => "KeyD",
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::ArrowLeft => "ArrowLeft",
        KeyCode::ArrowRight => "ArrowRight",
        _ => return None,
    })
}

fn window_title(decision: &GazeDecision) -> String {
    match decision {
        GazeDecision::Show { text, .. } => format!("{} | {}", TITLE, text),
        GazeDecision::Hidden => TITLE.to_string(),
    }
}

struct Walkthrough {
    session: Session,
    held: HeldDirections,
    grabbed: bool,
    last_tick: Instant,
    shown: GazeDecision,
}

impl Walkthrough {
    fn new(session: Session) -> Self {
        Self {
            session,
            held: HeldDirections::default(),
            grabbed: false,
            last_tick: Instant::now(),
            shown: GazeDecision::Hidden,
        }
    }

    fn set_grab(&mut self, window: &Window, grab: bool) {
        let result = if grab {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            log::warn!("[input] cursor grab: {}", e);
            return;
        }
        window.set_cursor_visible(!grab);
        self.grabbed = grab;
    }

    fn key(&mut self, window: &Window, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        if code == KeyCode::Escape && pressed {
            self.set_grab(window, false);
            return;
        }
        if let Some(dir) = key_code_name(code).and_then(direction_for_code) {
            self.held.set(dir, pressed);
        }
    }

    fn look(&mut self, delta: (f64, f64)) {
        if !self.grabbed {
            return;
        }
        let facing = mouse_look(
            self.session.viewer().facing,
            Vec2::new(delta.0 as f32, delta.1 as f32),
        );
        self.session.set_facing(facing);
    }

    fn tick(&mut self, window: &Window) {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32().min(MAX_FRAME_DT);
        self.last_tick = now;

        let intent = walk_intent(self.held, HeldDirections::default(), self.grabbed);
        let decision = self.session.tick(intent, dt);
        if *decision != self.shown {
            self.shown = decision.clone();
            window.set_title(&window_title(&self.shown));
            log::debug!("[gaze] {:?}", self.shown);
        }
    }

    fn handle(&mut self, window: &Window, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event, .. } => self.key(window, &event),
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } if !self.grabbed => self.set_grab(window, true),
                WindowEvent::Focused(false) => {
                    self.held.clear();
                    self.set_grab(window, false);
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => self.look(delta),
            Event::AboutToWait => {
                self.tick(window);
                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    let room = Room::new(cli.width, cli.length).context("invalid room size")?;
    let options = SessionOptions {
        room,
        params: LayoutParams::default(),
        speed: if cli.touch_speed {
            SpeedProfile::Touch
        } else {
            SpeedProfile::Desktop
        },
    };
    let (mut session, requests) = Session::start(options, read_config(cli.config.as_deref()));
    if let Some(notice) = session.notice() {
        log::warn!("[config] {}", notice);
    }
    // Photos are not decoded here; their slots keep placeholder planes.
    for request in &requests {
        log::info!("[texture] slot {} -> {}", request.ticket.slot(), request.url);
    }
    install_frame_model(&mut session, &cli.frame_model);
    log::info!("[engine] {} slots ready", session.registry().len());

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .build(&event_loop)
        .context("window")?;

    let mut walk = Walkthrough::new(session);
    event_loop.run(move |event, elwt| walk.handle(&window, event, elwt))?;
    Ok(())
}
