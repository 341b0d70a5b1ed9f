use crate::{
    animation::animatable::Animatable,
    animation::ease::Ease,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{DrawingError, DrawingResult},
};

/// Longest transition accepted, in frames.
pub const MAX_FRAMES: u64 = u32::MAX as u64;

/// Timed change of an [`Animatable`] shape from one state to another.
///
/// Every frame is computed from the eased progress alone, so frames may be sampled
/// in any order or skipped.
#[derive(Clone, Debug)]
pub struct Transition<S> {
    from: S,
    to: S,
    duration_secs: f64,
    fps: Fps,
    ease: Ease,
}

impl<S: Animatable> Transition<S> {
    /// Build a transition; `duration_secs` must be finite, non-negative, and span
    /// fewer than [`MAX_FRAMES`] frames.
    pub fn new(from: S, to: S, duration_secs: f64, fps: Fps, ease: Ease) -> DrawingResult<Self> {
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(DrawingError::animation(format!(
                "transition duration must be finite and >= 0, got {duration_secs}"
            )));
        }
        let last = (duration_secs * fps.as_f64()).round();
        if last >= MAX_FRAMES as f64 {
            return Err(DrawingError::animation(format!(
                "transition of {duration_secs}s at {} fps exceeds {MAX_FRAMES} frames",
                fps.as_f64()
            )));
        }
        Ok(Self {
            from,
            to,
            duration_secs,
            fps,
            ease,
        })
    }

    /// Start state.
    pub fn start_state(&self) -> &S {
        &self.from
    }

    /// End state.
    pub fn end_state(&self) -> &S {
        &self.to
    }

    /// Easing curve.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Index of the final frame; the transition spans `0..=last_frame`.
    pub fn last_frame(&self) -> FrameIndex {
        FrameIndex(self.fps.secs_to_frames_round(self.duration_secs))
    }

    /// Number of frames produced by [`Transition::frames`].
    pub fn frame_count(&self) -> u64 {
        self.last_frame().0 + 1
    }

    /// Eased progress in `[0, 1]` at `frame`; frames past the end hold at 1.
    pub fn progress_at(&self, frame: FrameIndex) -> f64 {
        let last = self.last_frame().0;
        if last == 0 {
            return 1.0;
        }
        let t = (frame.0.min(last) as f64) / (last as f64);
        self.ease.apply(t)
    }

    /// Shape state at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> S {
        S::interpolated(&self.from, &self.to, self.progress_at(frame))
    }

    /// All frames in increasing time order, both endpoints included.
    #[tracing::instrument(skip(self), fields(frames = self.frame_count(), ease = self.ease.name()))]
    pub fn frames(&self) -> impl Iterator<Item = S> + '_ {
        tracing::debug!(duration_secs = self.duration_secs, "sampling transition");
        (0..=self.last_frame().0).map(|f| self.sample(FrameIndex(f)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
