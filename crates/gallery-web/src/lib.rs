#![cfg(target_arch = "wasm32")]
mod assets;
mod audio;
mod dom;
mod events;
mod frame;
mod overlay;

use gallery_core::config::museum_id;
use gallery_core::input::is_touch_user_agent;
use gallery_core::{LoadProgress, Session, SessionOptions, SpeedProfile};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn query_id(window: &web::Window) -> Option<String> {
    let search = window.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get("id")
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let raw_id = query_id(&window);
    let id = match museum_id(raw_id.as_deref()) {
        Ok(id) => id.to_string(),
        Err(e) => {
            log::warn!("[config] {}", e);
            overlay::show_not_found(&document);
            return Ok(());
        }
    };

    let touch = window
        .navigator()
        .user_agent()
        .map(|ua| is_touch_user_agent(&ua))
        .unwrap_or(false);
    overlay::set_hint(&document, touch);
    overlay::show_loader(&document);

    let config = assets::fetch_config(&window, &id).await;
    let options = SessionOptions {
        speed: if touch {
            SpeedProfile::Touch
        } else {
            SpeedProfile::Desktop
        },
        ..SessionOptions::default()
    };
    let (session, requests) = Session::start(options, config);
    if let Some(notice) = session.notice() {
        overlay::show_notice(&document, notice);
    }
    log::info!(
        "[engine] {} slots, {} photos to load",
        session.registry().len(),
        requests.len()
    );
    let session = Rc::new(RefCell::new(session));

    // Photos, the frame model and the music track.
    let progress = Rc::new(RefCell::new(LoadProgress::new(requests.len() + 2)));
    assets::load_textures(requests, session.clone(), progress.clone());
    spawn_local(assets::load_frame_model(
        window.clone(),
        session.clone(),
        progress.clone(),
    ));

    match audio::Soundtrack::new() {
        Some(soundtrack) => {
            let soundtrack = Rc::new(RefCell::new(soundtrack));
            audio::wire_start_gesture(&document, soundtrack.clone(), touch);
            spawn_local(audio::load(window.clone(), soundtrack, progress.clone()));
        }
        None => assets::finish_one(&progress),
    }

    let controls = Rc::new(RefCell::new(events::Controls::default()));
    events::wire_keyboard(&document, controls.clone());
    let wiring = events::InputWiring::new(document.clone(), session.clone(), controls.clone());
    if touch {
        overlay::sync_orientation(&window, &document);
        let (w, d) = (window.clone(), document.clone());
        let resize = Closure::wrap(Box::new(move || {
            overlay::sync_orientation(&w, &d);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .ok();
        resize.forget();
        events::wire_touch_controls(wiring);
    } else {
        events::wire_desktop_look(wiring);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document, session, controls, touch,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
