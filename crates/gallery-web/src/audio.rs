use gallery_core::{LoadProgress, SoundtrackCue, MUSIC_PATH, MUSIC_VOLUME};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct Soundtrack {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
    buffer: Option<web::AudioBuffer>,
    cue: SoundtrackCue,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("[audio] GainNode error: {:?}", e);
            None
        }
    }
}

impl Soundtrack {
    pub fn new() -> Option<Self> {
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                return None;
            }
        };
        let master_gain = create_gain(&audio_ctx, MUSIC_VOLUME)?;
        let _ = master_gain.connect_with_audio_node(&audio_ctx.destination());
        Some(Self {
            audio_ctx,
            master_gain,
            buffer: None,
            cue: SoundtrackCue::default(),
        })
    }

    /// A user gesture; resumes the context and plays if the track is ready.
    pub fn on_gesture(&mut self) {
        if self.cue.is_playing() {
            return;
        }
        let _ = self.audio_ctx.resume();
        if self.cue.on_gesture() {
            self.play();
        }
    }

    fn on_decoded(&mut self, buffer: web::AudioBuffer) {
        self.buffer = Some(buffer);
        if self.cue.on_decoded() {
            self.play();
        }
    }

    fn play(&self) {
        let Some(buffer) = self.buffer.as_ref() else {
            return;
        };
        let source = match self.audio_ctx.create_buffer_source() {
            Ok(s) => s,
            Err(e) => {
                log::error!("[audio] buffer source error: {:?}", e);
                return;
            }
        };
        source.set_buffer(Some(buffer));
        source.set_loop(true);
        let _ = source.connect_with_audio_node(&self.master_gain);
        if let Err(e) = source.start() {
            log::error!("[audio] start error: {:?}", e);
            return;
        }
        log::info!("[audio] background music playing");
    }
}

async fn fetch_and_decode(
    window: &web::Window,
    audio_ctx: &web::AudioContext,
) -> Result<web::AudioBuffer, wasm_bindgen::JsValue> {
    let resp: web::Response = JsFuture::from(window.fetch_with_str(MUSIC_PATH))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(format!("{} answered with HTTP {}", MUSIC_PATH, resp.status()).into());
    }
    let bytes = JsFuture::from(resp.array_buffer()?).await?;
    let buf: js_sys::ArrayBuffer = bytes.dyn_into()?;
    JsFuture::from(audio_ctx.decode_audio_data(&buf)?)
        .await?
        .dyn_into()
}

/// Fetch and decode the track, counting it as one loader item either way.
pub async fn load(
    window: web::Window,
    soundtrack: Rc<RefCell<Soundtrack>>,
    progress: Rc<RefCell<LoadProgress>>,
) {
    let audio_ctx = soundtrack.borrow().audio_ctx.clone();
    match fetch_and_decode(&window, &audio_ctx).await {
        Ok(buffer) => soundtrack.borrow_mut().on_decoded(buffer),
        Err(e) => log::warn!("[audio] music unavailable: {:?}", e),
    }
    crate::assets::finish_one(&progress);
}

/// Clicks (and touches on the joystick or screen) count as the start gesture.
pub fn wire_start_gesture(
    document: &web::Document,
    soundtrack: Rc<RefCell<Soundtrack>>,
    touch: bool,
) {
    let event = if touch { "pointerdown" } else { "click" };
    crate::dom::add_document_listener(document, event, move |_ev: web::Event| {
        soundtrack.borrow_mut().on_gesture();
    });
}
