// Host-side tests for configuration defaults and option merging.

use tilt_core::constants::*;
use tilt_core::{TiltConfig, TiltOptions};

#[test]
fn defaults_match_constants() {
    let cfg = TiltConfig::default();
    assert_eq!(cfg.inverse, DEFAULT_INVERSE);
    assert_eq!(cfg.perspective, 500.0);
    assert_eq!(cfg.max_rotation, 10.0);
    assert_eq!(cfg.animation_duration, 200.0);
    assert_eq!(cfg.perspective, DEFAULT_PERSPECTIVE_PX);
}

#[test]
fn merge_only_touches_provided_keys() {
    let mut cfg = TiltConfig::default();
    cfg.merge(&TiltOptions::default().max_rotation(20.0));
    assert_eq!(cfg.max_rotation, 20.0);
    assert_eq!(cfg.perspective, DEFAULT_PERSPECTIVE_PX);

    cfg.merge(&TiltOptions::default().inverse(true).perspective(900.0));
    assert!(cfg.inverse);
    assert_eq!(cfg.perspective, 900.0);
    // earlier override survives a later partial merge
    assert_eq!(cfg.max_rotation, 20.0);
    assert_eq!(cfg.animation_duration, DEFAULT_ANIMATION_DURATION_MS);
}

#[test]
fn empty_options_are_a_no_op() {
    let mut cfg = TiltConfig::from_options(&TiltOptions::default().animation_duration(50.0));
    let before = cfg;
    cfg.merge(&TiltOptions::default());
    assert_eq!(cfg, before);
    assert!(TiltOptions::default().is_empty());
    assert!(!TiltOptions::default().inverse(false).is_empty());
}

#[test]
fn non_finite_values_keep_prior_value() {
    let mut cfg = TiltConfig::default();
    cfg.merge(&TiltOptions {
        perspective: Some(f64::NAN),
        max_rotation: Some(f64::INFINITY),
        animation_duration: Some(120.0),
        ..TiltOptions::default()
    });
    assert_eq!(cfg.perspective, DEFAULT_PERSPECTIVE_PX);
    assert_eq!(cfg.max_rotation, DEFAULT_MAX_ROTATION_DEG);
    assert_eq!(cfg.animation_duration, 120.0);
}

#[test]
fn options_use_camel_case_keys() {
    let options: TiltOptions = serde_json::from_str(
        r#"{"inverse":true,"perspective":800,"maxRotation":12.5,"animationDuration":0}"#,
    )
    .unwrap();
    assert_eq!(
        options,
        TiltOptions::default()
            .inverse(true)
            .perspective(800.0)
            .max_rotation(12.5)
            .animation_duration(0.0)
    );
}

#[test]
fn mistyped_option_drops_only_that_key() {
    let options: TiltOptions =
        serde_json::from_str(r#"{"inverse":1,"maxRotation":30}"#).unwrap();
    assert_eq!(options.inverse, None);
    assert_eq!(options.max_rotation, Some(30.0));

    let cfg = TiltConfig::from_options(&options);
    assert!(!cfg.inverse);
    assert_eq!(cfg.max_rotation, 30.0);
}

#[test]
fn unreadable_values_and_unknown_keys_are_skipped() {
    let options: TiltOptions = serde_json::from_str(
        r#"{
            "perspective": "800px",
            "maxRotation": [1, 2],
            "animationDuration": null,
            "inverse": {"on": true},
            "element": ".card-face"
        }"#,
    )
    .unwrap();
    assert!(options.is_empty());
}
