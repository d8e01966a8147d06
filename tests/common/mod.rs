#![allow(dead_code)]
use glam::DVec2;
use tilt_core::{TiltConfig, TiltController, TiltHost};

/// In-memory host: fixed container size, recorded style writes, manual clock.
pub struct FakeHost {
    pub size: DVec2,
    pub transform: String,
    pub writes: Vec<String>,
    pub clock: f64,
    pub frame_requests: usize,
    pub released: bool,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_transform(width, height, "")
    }

    pub fn with_transform(width: f64, height: f64, transform: &str) -> Self {
        Self {
            size: DVec2::new(width, height),
            transform: transform.to_string(),
            writes: Vec::new(),
            clock: 0.0,
            frame_requests: 0,
            released: false,
        }
    }
}

impl TiltHost for FakeHost {
    fn container_size(&self) -> DVec2 {
        self.size
    }

    fn transform(&self) -> String {
        self.transform.clone()
    }

    fn set_transform(&mut self, value: &str) {
        self.transform = value.to_string();
        self.writes.push(value.to_string());
    }

    fn now(&self) -> f64 {
        self.clock
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn release(&mut self) {
        self.released = true;
    }
}

pub fn controller(width: f64, height: f64) -> TiltController<FakeHost> {
    TiltController::new(FakeHost::new(width, height), TiltConfig::default())
}

/// Deliver a frame every `step` ms after `start` while an animation runs.
/// Returns the number of frames delivered.
pub fn run_frames(
    c: &mut TiltController<FakeHost>,
    start: f64,
    step: f64,
    max_frames: usize,
) -> usize {
    let mut t = start;
    let mut frames = 0;
    while c.is_animating() && frames < max_frames {
        t += step;
        c.on_animation_frame(t);
        frames += 1;
    }
    frames
}
