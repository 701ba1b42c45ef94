use crate::dom;
use crate::render::DomTarget;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wave_core::FrameScheduler;
use web_sys as web;

pub type SharedScheduler = Rc<RefCell<FrameScheduler<DomTarget>>>;

// mousemove on the document: record the pointer and restart the idle timers
pub fn wire_pointer_move(document: &web::Document, scheduler: SharedScheduler) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        match scheduler.try_borrow_mut() {
            Ok(mut s) => s.on_pointer_move(x, y, Instant::now()),
            Err(_) => log::warn!("[pointer] scheduler busy; dropped move to ({x}, {y})"),
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
    {
        log::error!("[pointer] could not listen for mousemove: {:?}", e);
    }
    closure.forget();
}

// resize: re-read the viewport and re-center the chain
pub fn wire_resize(window: &web::Window, scheduler: SharedScheduler) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::viewport(&win);
        if let Ok(mut s) = scheduler.try_borrow_mut() {
            let report = s.on_resize(viewport);
            log::info!(
                "[resize] {}x{} recentered {} elements",
                viewport.width,
                viewport.height,
                report.placed
            );
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::error!("[resize] could not listen for resize: {:?}", e);
    }
    closure.forget();
}
