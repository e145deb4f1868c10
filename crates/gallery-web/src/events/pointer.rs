use super::Controls;
use crate::{dom, overlay};
use gallery_core::input::{joystick_directions, joystick_knob_offset, mouse_look, touch_look};
use gallery_core::Session;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Knob rest position inside the pad, in px.
const KNOB_REST_PX: f32 = 25.0;

/// Pointers currently driving the look drag and the joystick.
#[derive(Default, Debug)]
pub struct TouchState {
    view_pointer: Option<i32>,
    last: Vec2,
    joystick_pointer: Option<i32>,
    joystick_center: Vec2,
}

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
    pub controls: Rc<RefCell<Controls>>,
    pub touch: Rc<RefCell<TouchState>>,
}

impl InputWiring {
    pub fn new(
        document: web::Document,
        session: Rc<RefCell<Session>>,
        controls: Rc<RefCell<Controls>>,
    ) -> Self {
        Self {
            document,
            session,
            controls,
            touch: Rc::new(RefCell::new(TouchState::default())),
        }
    }
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// ---------------- Desktop ----------------

/// Click to lock the pointer, then mouse motion turns the viewer.
pub fn wire_desktop_look(w: InputWiring) {
    {
        let document = w.document.clone();
        dom::add_document_listener(&w.document, "click", move |_ev: web::MouseEvent| {
            if overlay::loader_visible(&document) {
                return;
            }
            if document.pointer_lock_element().is_none() {
                if let Some(body) = document.body() {
                    body.request_pointer_lock();
                }
            }
        });
    }
    let document = w.document.clone();
    let session = w.session.clone();
    dom::add_document_listener(&w.document, "mousemove", move |ev: web::MouseEvent| {
        if document.pointer_lock_element().is_none() {
            return;
        }
        let movement = Vec2::new(ev.movement_x() as f32, ev.movement_y() as f32);
        let mut session = session.borrow_mut();
        let facing = mouse_look(session.viewer().facing, movement);
        session.set_facing(facing);
    });
}

// ---------------- Touch ----------------

pub fn wire_touch_controls(w: InputWiring) {
    let Some(pad) = w.document.get_element_by_id("joystick") else {
        log::warn!("[touch] missing #joystick; touch walking disabled");
        return;
    };
    wire_joystick_down(&w, &pad);
    wire_view_down(&w, pad);
    wire_pointermove(&w);
    for name in ["pointerup", "pointercancel"] {
        wire_release(&w, name);
    }
}

fn wire_joystick_down(w: &InputWiring, pad: &web::Element) {
    let touch = w.touch.clone();
    let pad_el = pad.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        let mut t = touch.borrow_mut();
        if t.joystick_pointer.is_some() {
            return;
        }
        let rect = pad_el.get_bounding_client_rect();
        t.joystick_pointer = Some(ev.pointer_id());
        t.joystick_center = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
    }) as Box<dyn FnMut(_)>);
    let _ = pad.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_view_down(w: &InputWiring, pad: web::Element) {
    let document = w.document.clone();
    let touch = w.touch.clone();
    dom::add_document_listener(&w.document, "pointerdown", move |ev: web::PointerEvent| {
        if overlay::loader_visible(&document) {
            return;
        }
        let inside_pad = dom::contains_point(&pad, ev.client_x() as f64, ev.client_y() as f64);
        let mut t = touch.borrow_mut();
        if !inside_pad && t.view_pointer.is_none() {
            t.view_pointer = Some(ev.pointer_id());
            t.last = client_pos(&ev);
        }
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_document_listener(&document, "pointermove", move |ev: web::PointerEvent| {
        let id = ev.pointer_id();
        let pos = client_pos(&ev);
        let mut t = w.touch.borrow_mut();

        if t.view_pointer == Some(id) {
            let delta = pos - t.last;
            t.last = pos;
            let mut session = w.session.borrow_mut();
            let facing = touch_look(session.viewer().facing, delta);
            session.set_facing(facing);
        }

        if t.joystick_pointer == Some(id) {
            let offset = pos - t.joystick_center;
            place_knob(&w.document, joystick_knob_offset(offset));
            w.controls.borrow_mut().joystick = joystick_directions(offset);
        }
    });
}

fn wire_release(w: &InputWiring, event: &str) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_document_listener(&document, event, move |ev: web::PointerEvent| {
        let id = ev.pointer_id();
        let mut t = w.touch.borrow_mut();
        if t.view_pointer == Some(id) {
            t.view_pointer = None;
        }
        if t.joystick_pointer == Some(id) {
            t.joystick_pointer = None;
            place_knob(&w.document, Vec2::ZERO);
            w.controls.borrow_mut().joystick.clear();
        }
    });
}

fn place_knob(document: &web::Document, offset: Vec2) {
    if let Some(knob) = dom::html_element(document, "joystick-inner") {
        dom::set_style(&knob, "left", &format!("{}px", KNOB_REST_PX + offset.x));
        dom::set_style(&knob, "top", &format!("{}px", KNOB_REST_PX + offset.y));
    }
}
