// Host-side tests for idempotent attach/detach bookkeeping.

mod common;

use common::FakeHost;
use glam::DVec2;
use tilt_core::{Attachment, Registry, TiltConfig, TiltController, TiltError, TiltOptions};

struct Tilt(TiltController<FakeHost>);

impl Attachment for Tilt {
    fn configure(&mut self, options: &TiltOptions) {
        self.0.configure(options);
    }

    fn teardown(&mut self) {
        self.0.teardown();
    }
}

fn create(options: &TiltOptions) -> Result<Tilt, TiltError> {
    let host = FakeHost::with_transform(200.0, 100.0, "scale(1.5)");
    let mut controller = TiltController::new(host, TiltConfig::from_options(options));
    controller.reset(None);
    Ok(Tilt(controller))
}

#[test]
fn second_attach_updates_in_place() {
    let mut registry: Registry<u32, Tilt> = Registry::new();
    let first = TiltOptions::default().perspective(800.0);
    assert!(registry.attach(1, &first, || create(&first)).unwrap());

    let second = TiltOptions::default().max_rotation(25.0);
    let created = registry
        .attach(1, &second, || panic!("must not create twice"))
        .unwrap();
    assert!(!created);
    assert_eq!(registry.len(), 1);

    let cfg = *registry.get(&1).unwrap().0.config();
    assert_eq!(cfg.perspective, 800.0);
    assert_eq!(cfg.max_rotation, 25.0);
}

#[test]
fn fresh_attachment_starts_neutral() {
    let mut registry: Registry<u32, Tilt> = Registry::new();
    let options = TiltOptions::default();
    registry.attach(7, &options, || create(&options)).unwrap();
    let tilt = &registry.get(&7).unwrap().0;
    assert_eq!(tilt.current_rotation(), Some(DVec2::ZERO));
    assert_eq!(
        tilt.host().transform,
        "scale(1.5) perspective(500px) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn detach_tears_down_once_and_ignores_unknown_keys() {
    let mut registry: Registry<u32, Tilt> = Registry::new();
    assert!(!registry.detach(&3));

    let options = TiltOptions::default();
    registry.attach(3, &options, || create(&options)).unwrap();
    assert!(registry.contains(&3));
    assert!(registry.detach(&3));
    assert!(registry.is_empty());
    assert!(!registry.detach(&3));
}

#[test]
fn failed_create_leaves_registry_untouched() {
    let mut registry: Registry<u32, Tilt> = Registry::new();
    let err = registry
        .attach(1, &TiltOptions::default(), || {
            Err(TiltError::TargetNotFound {
                selector: ".card-face".into(),
            })
        })
        .unwrap_err();
    assert!(matches!(err, TiltError::TargetNotFound { .. }));
    assert!(err.to_string().contains(".card-face"));
    assert!(registry.is_empty());
}

#[test]
fn keys_are_independent() {
    let mut registry: Registry<u32, Tilt> = Registry::new();
    let a = TiltOptions::default().inverse(true);
    let b = TiltOptions::default();
    registry.attach(1, &a, || create(&a)).unwrap();
    registry.attach(2, &b, || create(&b)).unwrap();
    assert_eq!(registry.len(), 2);

    registry.detach(&1);
    assert!(!registry.contains(&1));
    assert!(!registry.get(&2).unwrap().0.config().inverse);
}
