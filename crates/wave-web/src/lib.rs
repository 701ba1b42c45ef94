#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wave_core::{ColorCycle, FrameScheduler, WaveParams};

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let selector = dom::chain_selector(&document);
    let elements = dom::select_elements(&document, &selector)?;
    if elements.is_empty() {
        log::warn!("no elements match {selector:?}; the effect will idle");
    }

    let params = WaveParams::default();
    params.validate()?;
    let viewport = dom::viewport(&window);
    log::info!(
        "[init] {} elements, viewport {}x{}",
        elements.len(),
        viewport.width,
        viewport.height
    );

    let cycle = ColorCycle::new(
        Instant::now(),
        params.color_interval,
        params.fill_alpha,
        None,
    );
    let scheduler = Rc::new(RefCell::new(FrameScheduler::new(
        params,
        render::DomTarget::new(elements),
        viewport,
    )));
    scheduler.borrow_mut().present();

    events::wire_pointer_move(&document, scheduler.clone());
    events::wire_resize(&window, scheduler.clone());
    frame::start_color_cycle(&window, scheduler.clone(), cycle);
    frame::start_loop(scheduler);
    Ok(())
}
