//! Config fetch, photo decode and frame model load.
//!
//! Each photo load owns the ticket for its slot, so completions can arrive in
//! any order and only ever touch the slot they were issued for.

use crate::overlay;
use gallery_core::config::config_url;
use gallery_core::{
    frame_asset_from_glb, ConfigError, GalleryConfig, LoadProgress, Session, TextureInfo,
    TextureRequest, FRAME_MODEL_PATH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_reason(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn fetch_ok(window: &web::Window, url: &str) -> Result<web::Response, ConfigError> {
    let fetch_err = |e: JsValue| ConfigError::Fetch {
        url: url.to_string(),
        reason: js_reason(e),
    };
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(ConfigError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

pub async fn fetch_config(
    window: &web::Window,
    museum_id: &str,
) -> Result<GalleryConfig, ConfigError> {
    let url = config_url(museum_id);
    log::info!("[config] fetching {}", url);
    let resp = fetch_ok(window, &url).await?;
    let fetch_err = |e: JsValue| ConfigError::Fetch {
        url: url.clone(),
        reason: js_reason(e),
    };
    let text = JsFuture::from(resp.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?
        .as_string()
        .unwrap_or_default();
    GalleryConfig::from_json_str(&text)
}

/// Fetch the decorative frame and re-skin every slot once it is measured.
pub async fn load_frame_model(
    window: web::Window,
    session: Rc<RefCell<Session>>,
    progress: Rc<RefCell<LoadProgress>>,
) {
    match fetch_frame_bytes(&window).await {
        Ok(bytes) => match frame_asset_from_glb(FRAME_MODEL_PATH, &bytes) {
            Ok(asset) => {
                session.borrow_mut().install_frame_asset(asset);
            }
            Err(e) => log::warn!("[model] {}: {}", FRAME_MODEL_PATH, e),
        },
        Err(e) => log::warn!("[model] {}", e),
    }
    finish_one(&progress);
}

async fn fetch_frame_bytes(window: &web::Window) -> Result<Vec<u8>, ConfigError> {
    let resp = fetch_ok(window, FRAME_MODEL_PATH).await?;
    let fetch_err = |e: JsValue| ConfigError::Fetch {
        url: FRAME_MODEL_PATH.to_string(),
        reason: js_reason(e),
    };
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Start one image decode per request; results land through the request's
/// ticket.
pub fn load_textures(
    requests: Vec<TextureRequest>,
    session: Rc<RefCell<Session>>,
    progress: Rc<RefCell<LoadProgress>>,
) {
    for request in requests {
        if let Err(e) = load_texture(request, session.clone(), progress.clone()) {
            log::error!("[texture] could not start load: {:?}", e);
            finish_one(&progress);
        }
    }
}

fn load_texture(
    request: TextureRequest,
    session: Rc<RefCell<Session>>,
    progress: Rc<RefCell<LoadProgress>>,
) -> Result<(), JsValue> {
    let img = web::HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));
    let ticket = request.ticket;

    let onload = {
        let img = img.clone();
        let session = session.clone();
        let progress = progress.clone();
        Closure::once(move || {
            let info = TextureInfo {
                width: img.natural_width(),
                height: img.natural_height(),
            };
            session.borrow_mut().resolve_texture(ticket, Ok(info));
            finish_one(&progress);
        })
    };
    let onerror = {
        let url = request.url.clone();
        Closure::once(move || {
            session
                .borrow_mut()
                .resolve_texture(ticket, Err(format!("could not decode {}", url)));
            finish_one(&progress);
        })
    };

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    img.set_src(&request.url);
    Ok(())
}

pub(crate) fn finish_one(progress: &Rc<RefCell<LoadProgress>>) {
    let snapshot = {
        let mut p = progress.borrow_mut();
        p.finish_one();
        *p
    };
    if let Some(document) = crate::dom::window_document() {
        overlay::update_loader(&document, &snapshot);
        if snapshot.is_done() {
            overlay::hide_loader(&document);
            log::info!("[loader] all assets settled");
        }
    }
}
