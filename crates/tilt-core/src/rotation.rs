//! Pointer offset to rotation mapping.

use crate::config::TiltConfig;
use crate::constants::ROUND_SCALE;
use glam::DVec2;

/// Rotation in degrees: `x` feeds `rotateX`, `y` feeds `rotateY`.
pub type Rotation = DVec2;

/// Round to three decimals so style strings carry no float noise.
///
/// Ties go toward positive infinity (`-0.0025` becomes `-0.002`) and
/// negative zero collapses to `0`.
#[inline]
pub fn round3(value: f64) -> f64 {
    (value * ROUND_SCALE + 0.5).floor() / ROUND_SCALE + 0.0
}

#[inline]
pub fn round3_rotation(rotation: Rotation) -> Rotation {
    DVec2::new(round3(rotation.x), round3(rotation.y))
}

/// Map a pointer offset inside a `size` box to a tilt rotation.
///
/// An absent offset forces that axis to zero; `Some(0.0)` is a real position
/// on the top/left edge. Offsets outside the box produce rotations beyond
/// `max_rotation`; they are not clamped. Non-finite results (zero-size
/// container) are replaced with zero.
pub fn compute_rotation(
    config: &TiltConfig,
    size: DVec2,
    offset_x: Option<f64>,
    offset_y: Option<f64>,
) -> Rotation {
    let rotate_x = match offset_y {
        Some(oy) => {
            let half = size.y / 2.0;
            let py = (oy - half) / half;
            round3(config.max_rotation * -py)
        }
        None => 0.0,
    };
    let rotate_y = match offset_x {
        Some(ox) => {
            let half = size.x / 2.0;
            let px = (ox - half) / half;
            round3(config.max_rotation * px)
        }
        None => 0.0,
    };
    let sign = if config.inverse { -1.0 } else { 1.0 };
    DVec2::new(finite_or_zero(rotate_x * sign), finite_or_zero(rotate_y * sign))
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value + 0.0
    } else {
        0.0
    }
}
