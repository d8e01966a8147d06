// Defaults and formatting constants shared by the tilt state machine.

// Configuration defaults
pub const DEFAULT_INVERSE: bool = false;
pub const DEFAULT_PERSPECTIVE_PX: f64 = 500.0;
pub const DEFAULT_MAX_ROTATION_DEG: f64 = 10.0;
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 200.0;

// Rotations are rounded to three decimals before reaching the style string
pub const ROUND_SCALE: f64 = 1000.0;

// CSS keyword for "no transform"; never prepended to the composed transform
pub const IDENTITY_TRANSFORM: &str = "none";
