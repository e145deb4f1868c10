use crate::dom;
use gallery_core::{GazeDecision, LoadProgress};
use web_sys as web;

const LOADER_ID: &str = "loader-overlay";
const POPUP_ID: &str = "gazePopup";

pub const DESKTOP_HINT: &str = "Click to enter · WASD to walk · mouse to look around";
pub const TOUCH_HINT: &str = "Use the joystick to walk · drag the screen to look around";

const NOT_FOUND_HTML: &str = r#"<div style="background:#050816;color:#fff;font-family:sans-serif;height:100vh;display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;">
<h1>404 - Museum not found</h1>
<p>This museum does not exist or the address is invalid.</p>
<p>Try the demo: <a href="?id=DEMO" style="color:#ff8fa3;text-decoration:underline;">?id=DEMO</a></p>
</div>"#;

pub fn show_not_found(document: &web::Document) {
    if let Some(body) = document.body() {
        body.set_inner_html(NOT_FOUND_HTML);
    }
}

pub fn show_loader(document: &web::Document) {
    if let Some(el) = dom::html_element(document, LOADER_ID) {
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "display", "flex");
    }
    update_loader(document, &LoadProgress::default());
}

pub fn update_loader(document: &web::Document, progress: &LoadProgress) {
    let percent = format!("{}%", progress.percent());
    if let Some(fill) = dom::html_element(document, "loader-bar-fill") {
        dom::set_style(&fill, "width", &percent);
    }
    dom::set_text(document, "loader-percent", &percent);
}

pub fn hide_loader(document: &web::Document) {
    dom::set_display(document, LOADER_ID, "none");
}

#[inline]
pub fn loader_visible(document: &web::Document) -> bool {
    dom::html_element(document, LOADER_ID)
        .and_then(|el| el.style().get_property_value("display").ok())
        .map(|d| d != "none")
        .unwrap_or(false)
}

pub fn set_hint(document: &web::Document, touch: bool) {
    let text = if touch { TOUCH_HINT } else { DESKTOP_HINT };
    if let Ok(Some(el)) = document.query_selector("#info .hint") {
        el.set_text_content(Some(text));
    }
}

/// Shown in the hint line when the museum fell back to empty frames.
pub fn show_notice(document: &web::Document, notice: &str) {
    if let Ok(Some(el)) = document.query_selector("#info .hint") {
        el.set_text_content(Some(notice));
    }
}

pub fn render_popup(document: &web::Document, decision: &GazeDecision) {
    match decision {
        GazeDecision::Show { text, .. } => {
            dom::set_text(document, POPUP_ID, text);
            dom::set_display(document, POPUP_ID, "block");
        }
        GazeDecision::Hidden => dom::set_display(document, POPUP_ID, "none"),
    }
}

/// Portrait phones get the rotate prompt instead of the joystick.
pub fn sync_orientation(window: &web::Window, document: &web::Document) {
    let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let portrait = size(window.inner_height()) > size(window.inner_width());
    dom::set_display(document, "rotate-overlay", if portrait { "flex" } else { "none" });
    dom::set_display(document, "joystick", if portrait { "none" } else { "block" });
}
