//! Tilt state machine.
//!
//! `TiltController` turns pointer offsets into a bounded 3D rotation of a
//! target element and optionally eases toward it over time. Everything
//! platform-specific (element geometry, style access, clock, frame
//! scheduling) goes through [`TiltHost`], so the same controller runs in the
//! browser and under host-side tests.

use crate::animation::AnimationJob;
use crate::config::{TiltConfig, TiltOptions};
use crate::rotation::{compute_rotation, Rotation};
use crate::transform::compose_transform;
use glam::DVec2;

/// Platform services the controller consumes.
pub trait TiltHost {
    /// Rendered width (`x`) and height (`y`) of the container in px.
    fn container_size(&self) -> DVec2;
    /// Current transform style of the target element.
    fn transform(&self) -> String;
    fn set_transform(&mut self, value: &str);
    /// High-resolution time in ms, same timeline as frame timestamps.
    fn now(&self) -> f64;
    /// Schedule one `on_animation_frame` call before the next repaint.
    fn request_frame(&mut self);
    /// Drop scheduling resources; called once on teardown.
    fn release(&mut self) {}
}

pub struct TiltController<H: TiltHost> {
    host: H,
    config: TiltConfig,
    base_transform: String,
    current: Option<Rotation>,
    job: Option<AnimationJob>,
    detached: bool,
}

impl<H: TiltHost> TiltController<H> {
    /// Capture the target's transform and start with `config`.
    pub fn new(host: H, config: TiltConfig) -> Self {
        let base_transform = host.transform();
        Self {
            host,
            config,
            base_transform,
            current: None,
            job: None,
            detached: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn base_transform(&self) -> &str {
        &self.base_transform
    }

    /// Last rendered rotation; `None` until the first render.
    pub fn current_rotation(&self) -> Option<Rotation> {
        self.current
    }

    pub fn animation(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.job.as_ref().is_some_and(AnimationJob::in_flight)
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Merge `options` into the configuration. Rotation and animation are untouched.
    pub fn configure(&mut self, options: &TiltOptions) {
        self.config.merge(options);
    }

    /// Restore the captured transform and stop animating.
    ///
    /// The controller ignores every call afterwards, including frame
    /// callbacks that were already scheduled.
    pub fn teardown(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.job = None;
        self.host.set_transform(&self.base_transform);
        self.host.release();
        log::debug!("[tilt] teardown, restored transform {:?}", self.base_transform);
    }

    pub fn compute_rotation(&self, offset_x: Option<f64>, offset_y: Option<f64>) -> Rotation {
        compute_rotation(
            &self.config,
            self.host.container_size(),
            offset_x,
            offset_y,
        )
    }

    /// Rotate toward the pointer offset.
    ///
    /// With a positive `duration_ms` a new animation starts; without one an
    /// in-flight animation is retargeted (its clock keeps running), otherwise
    /// the rotation is applied at once.
    pub fn apply_rotation(
        &mut self,
        offset_x: Option<f64>,
        offset_y: Option<f64>,
        duration_ms: Option<f64>,
    ) {
        if self.detached {
            return;
        }
        let target = self.compute_rotation(offset_x, offset_y);
        if is_positive(duration_ms) {
            self.animate_to(target, duration_ms);
        } else if let Some(job) = self.job.as_mut().filter(|j| j.in_flight()) {
            job.target = target;
        } else {
            self.apply_transform(target);
        }
    }

    /// Return to the neutral rotation.
    pub fn reset(&mut self, duration_ms: Option<f64>) {
        self.apply_rotation(None, None, duration_ms);
    }

    /// Write the tilt transform for `rotation` to the target.
    pub fn apply_transform(&mut self, rotation: Rotation) {
        if self.detached {
            return;
        }
        let value = compose_transform(&self.base_transform, self.config.perspective, rotation);
        self.host.set_transform(&value);
        self.current = Some(rotation);
    }

    /// Start (or restart) an animation toward `rotation`.
    ///
    /// Restarting while a frame chain is alive resets the clock but does not
    /// schedule a second chain.
    pub fn animate_to(&mut self, rotation: Rotation, duration_ms: Option<f64>) {
        if self.detached {
            return;
        }
        let duration = match duration_ms {
            Some(d) if d > 0.0 => d,
            _ => {
                self.apply_transform(rotation);
                return;
            }
        };
        let was_in_flight = self.is_animating();
        self.job = Some(AnimationJob::new(self.host.now(), duration, rotation));
        if !was_in_flight {
            log::debug!(
                "[tilt] animate to ({}, {}) over {}ms",
                rotation.x,
                rotation.y,
                duration
            );
            self.host.request_frame();
        }
    }

    /// Advance the running animation to `timestamp_ms`.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64) {
        if self.detached {
            return;
        }
        let current = self.current.unwrap_or(Rotation::ZERO);
        let Some(job) = self.job.as_mut() else {
            return;
        };
        let step = job.advance(timestamp_ms, current);
        self.apply_transform(step.rotation);
        if step.finished {
            self.job = None;
        } else {
            self.host.request_frame();
        }
    }

    /// Pointer entered the container at `offset`.
    pub fn on_enter(&mut self, offset: DVec2) {
        let duration = self.config.animation_duration;
        self.apply_rotation(Some(offset.x), Some(offset.y), Some(duration));
    }

    /// Pointer left the container.
    pub fn on_leave(&mut self) {
        let duration = self.config.animation_duration;
        self.reset(Some(duration));
    }

    /// Pointer moved within the container to `offset`.
    pub fn on_move(&mut self, offset: DVec2) {
        self.apply_rotation(Some(offset.x), Some(offset.y), None);
    }
}

#[inline]
fn is_positive(duration_ms: Option<f64>) -> bool {
    duration_ms.is_some_and(|d| d > 0.0)
}
