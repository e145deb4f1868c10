use super::Controls;
use gallery_core::input::direction_for_code;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn apply_key(controls: &Rc<RefCell<Controls>>, ev: &web::KeyboardEvent, held: bool) {
    if let Some(dir) = direction_for_code(&ev.code()) {
        controls.borrow_mut().keys.set(dir, held);
    }
}

pub fn wire_keyboard(document: &web::Document, controls: Rc<RefCell<Controls>>) {
    {
        let controls = controls.clone();
        crate::dom::add_document_listener(document, "keydown", move |ev: web::KeyboardEvent| {
            apply_key(&controls, &ev, true);
        });
    }
    crate::dom::add_document_listener(document, "keyup", move |ev: web::KeyboardEvent| {
        apply_key(&controls, &ev, false);
    });
}
