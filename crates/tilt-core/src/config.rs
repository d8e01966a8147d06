//! Tilt configuration and partial option sets.
//!
//! `TiltConfig` is the fully resolved configuration a controller runs with.
//! `TiltOptions` is what callers hand in: any subset of the recognized keys.
//! Merging is shallow and additive, so a later `configure` call only touches
//! the keys it names.

use crate::constants::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_INVERSE, DEFAULT_MAX_ROTATION_DEG,
    DEFAULT_PERSPECTIVE_PX,
};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Flip the sign of both computed rotations.
    pub inverse: bool,
    /// CSS perspective depth in px.
    pub perspective: f64,
    /// Rotation (degrees) reached when the pointer sits on a container edge.
    pub max_rotation: f64,
    /// Duration (ms) of the enter/leave transitions.
    pub animation_duration: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            inverse: DEFAULT_INVERSE,
            perspective: DEFAULT_PERSPECTIVE_PX,
            max_rotation: DEFAULT_MAX_ROTATION_DEG,
            animation_duration: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl TiltConfig {
    /// Build a configuration from defaults with `options` applied on top.
    pub fn from_options(options: &TiltOptions) -> Self {
        let mut config = Self::default();
        config.merge(options);
        config
    }

    /// Overwrite only the fields present in `options`.
    ///
    /// Non-finite numbers are skipped and keep the prior value.
    pub fn merge(&mut self, options: &TiltOptions) {
        if let Some(inverse) = options.inverse {
            self.inverse = inverse;
        }
        merge_finite(&mut self.perspective, options.perspective);
        merge_finite(&mut self.max_rotation, options.max_rotation);
        merge_finite(&mut self.animation_duration, options.animation_duration);
    }
}

#[inline]
fn merge_finite(slot: &mut f64, value: Option<f64>) {
    match value {
        Some(v) if v.is_finite() => *slot = v,
        Some(v) => log::warn!("[config] ignoring non-finite option value {}", v),
        None => {}
    }
}

/// Partial configuration as supplied by the embedding page.
///
/// Keys follow the plugin's public option names (`inverse`, `perspective`,
/// `maxRotation`, `animationDuration`); anything else is ignored. A key
/// holding the wrong kind of value is dropped on its own, the other keys
/// still apply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltOptions {
    #[serde(deserialize_with = "lenient_bool")]
    pub inverse: Option<bool>,
    #[serde(deserialize_with = "lenient_number")]
    pub perspective: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_rotation: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub animation_duration: Option<f64>,
}

impl TiltOptions {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = Some(inverse);
        self
    }

    pub fn perspective(mut self, px: f64) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn max_rotation(mut self, degrees: f64) -> Self {
        self.max_rotation = Some(degrees);
        self
    }

    pub fn animation_duration(mut self, ms: f64) -> Self {
        self.animation_duration = Some(ms);
        self
    }
}

/// Shape of a single option value, read without committing to a type.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Scalar {
    Missing,
    Bool(bool),
    Number(f64),
    Other(&'static str),
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an option value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v))
    }

    fn visit_str<E: de::Error>(self, _v: &str) -> Result<Scalar, E> {
        Ok(Scalar::Other("string"))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<Scalar, E> {
        Ok(Scalar::Other("bytes"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Missing)
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Scalar, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Scalar, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Scalar::Other("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Scalar, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Scalar::Other("object"))
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Bool(v) => Some(v),
        Scalar::Missing => None,
        other => {
            log::warn!("[config] ignoring option {:?}, expected a boolean", other);
            None
        }
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Number(v) => Some(v),
        Scalar::Missing => None,
        other => {
            log::warn!("[config] ignoring option {:?}, expected a number", other);
            None
        }
    })
}
