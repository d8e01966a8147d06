use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One reusable `requestAnimationFrame` callback per controller.
#[derive(Default)]
pub struct FrameScheduler {
    callback: Option<Closure<dyn FnMut(f64)>>,
    handle: Option<i32>,
}

impl FrameScheduler {
    pub fn install(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }

    /// Ask the browser for one callback before the next repaint.
    pub fn request(&mut self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| anyhow!("frame callback not installed"))?;
        let handle = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("{:?}", e))?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel the pending frame (if any) and drop the callback.
    pub fn release(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web::window()) {
            _ = window.cancel_animation_frame(handle);
        }
        self.callback = None;
    }
}
