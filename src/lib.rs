#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod options;
mod registry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-web ready (namespace `{}`)", constants::DATA_NAMESPACE);
    Ok(())
}

/// Attach the tilt effect to `element`, or update its options when it is
/// already attached.
///
/// Recognized options: `inverse`, `perspective`, `maxRotation`,
/// `animationDuration` and `element` (selector or element to rotate; a
/// selector rotates every matching descendant).
///
/// When the `element` selector matches nothing the element is not attached:
/// a warning is logged, and a later `attach` with a working target starts
/// fresh. `detach` on it is a no-op.
#[wasm_bindgen]
pub fn attach(element: &web::Element, options: JsValue) {
    let parsed = options::parse_options(&options);
    if let Err(e) = registry::attach(element, &parsed) {
        log::warn!("[tilt] attach skipped: {}", e);
    }
}

/// Remove the effect and restore the original transform. No-op when not attached.
#[wasm_bindgen]
pub fn detach(element: &web::Element) {
    registry::detach(element);
}

#[wasm_bindgen(js_name = isAttached)]
pub fn is_attached(element: &web::Element) -> bool {
    registry::is_attached(element)
}

/// Attach to every element matching `selector`; returns how many were processed.
#[wasm_bindgen(js_name = attachAll)]
pub fn attach_all(selector: &str, options: JsValue) -> u32 {
    match attach_matching(selector, &options) {
        Ok(count) => count,
        Err(e) => {
            log::warn!("[tilt] attachAll({:?}) failed: {:?}", selector, e);
            0
        }
    }
}

fn attach_matching(selector: &str, options: &JsValue) -> anyhow::Result<u32> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let parsed = options::parse_options(options);
    let mut count = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if let Err(e) = registry::attach(&element, &parsed) {
            log::warn!("[tilt] attach skipped: {}", e);
            continue;
        }
        count += 1;
    }
    Ok(count)
}
