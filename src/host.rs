use crate::dom::{self, Targets};
use crate::frame::FrameScheduler;
use glam::DVec2;
use tilt_core::TiltHost;
use web_sys as web;

/// [`TiltHost`] backed by live DOM elements and `requestAnimationFrame`.
///
/// The transform is read from the first target and written to all of them.
pub struct DomHost {
    container: web::Element,
    targets: Targets,
    pub frame: FrameScheduler,
}

impl DomHost {
    pub fn new(container: web::Element, targets: Targets) -> Self {
        Self {
            container,
            targets,
            frame: FrameScheduler::default(),
        }
    }
}

impl TiltHost for DomHost {
    fn container_size(&self) -> DVec2 {
        dom::element_size(&self.container)
    }

    fn transform(&self) -> String {
        self.targets
            .first()
            .map(dom::current_transform)
            .unwrap_or_default()
    }

    fn set_transform(&mut self, value: &str) {
        for target in &self.targets {
            dom::set_transform(target, value);
        }
    }

    fn now(&self) -> f64 {
        instant::now()
    }

    fn request_frame(&mut self) {
        if let Err(e) = self.frame.request() {
            log::warn!("[tilt] frame request failed: {:?}", e);
        }
    }

    fn release(&mut self) {
        self.frame.release();
    }
}
