//! Linear interpolation job advanced once per display frame.

use crate::rotation::{round3_rotation, Rotation};

/// In-flight animation toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationJob {
    /// Timestamp (ms) of the job start or of the last processed frame.
    pub time: f64,
    /// Time (ms) left until the target is reached.
    pub remaining: f64,
    pub target: Rotation,
}

/// Result of one frame of interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
    pub rotation: Rotation,
    pub finished: bool,
}

impl AnimationJob {
    pub fn new(time: f64, remaining: f64, target: Rotation) -> Self {
        Self {
            time,
            remaining,
            target,
        }
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.remaining > 0.0
    }

    /// Move from `current` toward the target by the share of the remaining
    /// time that elapsed since the last frame.
    pub fn advance(&mut self, timestamp: f64, current: Rotation) -> FrameStep {
        let delta = timestamp - self.time;
        self.time = timestamp;
        let percent = progress(delta, self.remaining);
        let rotation = round3_rotation(current.lerp(self.target, percent));
        self.remaining -= delta;
        FrameStep {
            rotation,
            finished: !self.in_flight(),
        }
    }
}

/// Fraction of the remaining time covered by `delta`, in `[0, 1]`.
///
/// A job with nothing left (zero, negative or NaN) snaps to its target.
#[inline]
pub fn progress(delta: f64, remaining: f64) -> f64 {
    if !(remaining > 0.0) {
        return 1.0;
    }
    let percent = delta / remaining;
    if percent.is_nan() {
        1.0
    } else {
        percent.clamp(0.0, 1.0)
    }
}
