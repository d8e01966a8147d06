//! CSS transform string composition.

use crate::constants::IDENTITY_TRANSFORM;
use crate::rotation::Rotation;

/// Whether a captured transform should prefix the tilt functions.
#[inline]
pub fn has_base_transform(base: &str) -> bool {
    !base.is_empty() && base != IDENTITY_TRANSFORM
}

/// Compose `[base ]perspective(Ppx) rotateX(Xdeg) rotateY(Ydeg)`.
pub fn compose_transform(base: &str, perspective: f64, rotation: Rotation) -> String {
    let tilt = format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg)",
        perspective, rotation.x, rotation.y
    );
    if has_base_transform(base) {
        format!("{} {}", base, tilt)
    } else {
        tilt
    }
}
