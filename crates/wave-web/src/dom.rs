use crate::constants::{DEFAULT_SELECTOR, SELECTOR_ATTRIBUTE};
use crate::style;
use wasm_bindgen::JsCast;
use wave_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Live `innerWidth` x `innerHeight`; anything unreadable counts as zero.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn chain_selector(document: &web::Document) -> String {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute(SELECTOR_ATTRIBUTE));
    style::selector_or_default(attr.as_deref(), DEFAULT_SELECTOR).to_string()
}

/// Every element matching `selector`, in document order.
pub fn select_elements(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector:?}: {e:?}"))?;
    let elements = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect();
    Ok(elements)
}
