use crate::constants::TRANSFORM_PROPERTY;
use crate::options::TargetSpec;
use glam::DVec2;
use smallvec::SmallVec;
use tilt_core::TiltError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements rotated by one attachment; usually just one.
pub type Targets = SmallVec<[web::Element; 1]>;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Layout size of an element (border box, unaffected by its own transform).
///
/// Non-HTML elements fall back to their bounding box.
pub fn element_size(element: &web::Element) -> DVec2 {
    match element.dyn_ref::<web::HtmlElement>() {
        Some(html) => DVec2::new(html.offset_width() as f64, html.offset_height() as f64),
        None => {
            let rect = element.get_bounding_client_rect();
            DVec2::new(rect.width(), rect.height())
        }
    }
}

/// Inline style of an HTML or SVG element.
pub fn inline_style(element: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<web::HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
    }
}

/// Pick the elements to rotate for `container`.
///
/// A selector yields every matching descendant; elements without an inline
/// style (neither HTML nor SVG) are left out.
pub fn resolve_targets(
    container: &web::Element,
    spec: &TargetSpec,
) -> Result<Targets, TiltError> {
    let mut targets = Targets::new();
    match spec {
        TargetSpec::Container => targets.push(container.clone()),
        TargetSpec::Element(el) => targets.push(el.clone()),
        TargetSpec::Selector(selector) => {
            let nodes = container
                .query_selector_all(selector)
                .map_err(|e| TiltError::Dom(format!("{:?}", e)))?;
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    targets.push(el);
                }
            }
            if targets.is_empty() {
                return Err(TiltError::TargetNotFound {
                    selector: selector.clone(),
                });
            }
        }
    }
    targets.retain(|el| inline_style(el).is_some());
    if targets.is_empty() {
        return Err(TiltError::Dom("tilt target has no inline style".into()));
    }
    Ok(targets)
}

/// Transform currently rendered for `element`: computed style, or the inline
/// value when no computed style is available.
pub fn current_transform(element: &web::Element) -> String {
    let computed = web::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(TRANSFORM_PROPERTY).ok());
    match computed {
        Some(value) => value,
        None => inline_style(element)
            .and_then(|style| style.get_property_value(TRANSFORM_PROPERTY).ok())
            .unwrap_or_default(),
    }
}

#[inline]
pub fn set_transform(element: &web::Element, value: &str) {
    let Some(style) = inline_style(element) else {
        return;
    };
    if let Err(e) = style.set_property(TRANSFORM_PROPERTY, value) {
        log::warn!("[tilt] failed to set transform: {:?}", e);
    }
}
