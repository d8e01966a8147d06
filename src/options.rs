use crate::constants::TARGET_OPTION_KEY;
use tilt_core::{TiltError, TiltOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Which element an attachment rotates.
#[derive(Clone, Debug, Default)]
pub enum TargetSpec {
    /// The container itself.
    #[default]
    Container,
    /// Every descendant of the container matching a CSS selector.
    Selector(String),
    Element(web::Element),
}

#[derive(Clone, Debug, Default)]
pub struct AttachOptions {
    pub tilt: TiltOptions,
    pub target: TargetSpec,
}

/// Read the options object passed from JS.
///
/// `undefined`/`null` mean "no options". Keys with a value of the wrong type
/// are dropped one by one; a value that is not an object at all falls back
/// to defaults with a warning.
pub fn parse_options(value: &JsValue) -> AttachOptions {
    if value.is_undefined() || value.is_null() {
        return AttachOptions::default();
    }
    let tilt = match parse_tilt_options(value) {
        Ok(tilt) => tilt,
        Err(e) => {
            log::warn!("[tilt] {}; using defaults", e);
            TiltOptions::default()
        }
    };
    AttachOptions {
        tilt,
        target: parse_target(value),
    }
}

fn parse_tilt_options(value: &JsValue) -> Result<TiltOptions, TiltError> {
    serde_wasm_bindgen::from_value(value.clone())
        .map_err(|e| TiltError::InvalidOptions(e.to_string()))
}

fn parse_target(value: &JsValue) -> TargetSpec {
    let Ok(raw) = js_sys::Reflect::get(value, &JsValue::from_str(TARGET_OPTION_KEY)) else {
        return TargetSpec::Container;
    };
    if let Some(selector) = raw.as_string() {
        TargetSpec::Selector(selector)
    } else if let Some(element) = raw.dyn_ref::<web::Element>() {
        TargetSpec::Element(element.clone())
    } else {
        TargetSpec::Container
    }
}
