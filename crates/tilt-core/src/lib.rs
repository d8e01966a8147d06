//! Platform-agnostic core of the pointer-driven tilt effect.
//!
//! The web front-end wires DOM events and `requestAnimationFrame` into the
//! [`TiltController`] defined here; nothing in this crate touches browser APIs.

pub mod animation;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod registry;
pub mod rotation;
pub mod transform;

pub use animation::*;
pub use config::*;
pub use controller::*;
pub use error::TiltError;
pub use registry::*;
pub use rotation::*;
pub use transform::*;
