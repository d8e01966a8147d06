use glam::DVec2;
use web_sys as web;

/// Pointer position relative to the container's top-left corner, in CSS px.
#[inline]
pub fn pointer_offset(ev: &web::MouseEvent, container: &web::Element) -> DVec2 {
    let rect = container.get_bounding_client_rect();
    offset_in_rect(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

#[inline]
pub fn offset_in_rect(client_x: f64, client_y: f64, left: f64, top: f64) -> DVec2 {
    DVec2::new(client_x - left, client_y - top)
}
