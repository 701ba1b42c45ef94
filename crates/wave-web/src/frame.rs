use crate::events::SharedScheduler;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wave_core::ColorCycle;
use web_sys as web;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Steps the scheduler on every animation frame, forever.
///
/// The next frame is requested whether or not this one managed to run.
pub fn start_loop(scheduler: SharedScheduler) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match scheduler.try_borrow_mut() {
            Ok(mut s) => {
                let report = s.on_frame(Instant::now());
                if report.failed > 0 {
                    log::debug!("[frame] {} element updates failed", report.failed);
                }
            }
            Err(_) => log::warn!("[frame] scheduler busy; skipping step"),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Refills the lead element on its own interval, independent of motion.
pub fn start_color_cycle(window: &web::Window, scheduler: SharedScheduler, mut cycle: ColorCycle) {
    let period_ms = i32::try_from(cycle.period().as_millis()).unwrap_or(i32::MAX);
    let closure = Closure::wrap(Box::new(move || {
        let fill = cycle.next_fill();
        if let Ok(mut s) = scheduler.try_borrow_mut() {
            s.fill_lead(fill);
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms,
    ) {
        log::error!("[color] setInterval failed: {:?}", e);
    }
    closure.forget();
}
