use crate::events::Controls;
use crate::overlay;
use gallery_core::{GazeDecision, Session};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Step cap after a stall such as a backgrounded tab.
const MAX_FRAME_DT: f32 = 0.1;

pub struct FrameContext {
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
    pub controls: Rc<RefCell<Controls>>,
    pub last_instant: Instant,
    pub shown: GazeDecision,
    pub touch: bool,
}

impl FrameContext {
    pub fn new(
        document: web::Document,
        session: Rc<RefCell<Session>>,
        controls: Rc<RefCell<Controls>>,
        touch: bool,
    ) -> Self {
        Self {
            document,
            session,
            controls,
            last_instant: Instant::now(),
            shown: GazeDecision::Hidden,
            touch,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        // Desktop walks only while the pointer is locked.
        let can_walk = self.touch || self.document.pointer_lock_element().is_some();
        let intent = self.controls.borrow().intent(can_walk);
        let decision = self.session.borrow_mut().tick(intent, dt_sec).clone();

        if decision != self.shown {
            overlay::render_popup(&self.document, &decision);
            self.shown = decision;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
