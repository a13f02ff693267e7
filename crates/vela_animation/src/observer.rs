//! Optional lifecycle and progress notifications.

/// Observes one animation's lifecycle and per-step progress.
///
/// Every method defaults to a no-op, so implementors override only what
/// they care about. The animation holds the observer weakly
/// ([`std::rc::Weak`]); dropping the observer mid-run is allowed and
/// silently stops delivery without affecting the animation itself.
///
/// Within one step the order is fixed:
/// `animation_started` (first step only) → `progress_will_change` →
/// the animatable mutates → `progress_did_change` → `animation_stopped`
/// (terminal step only).
pub trait AnimationObserver {
    /// The first step latched a start time.
    fn animation_started(&self) {}

    /// The run ended. `finished` is true for a natural finish at progress 1,
    /// false when forced by [`Animation::cancel`](crate::Animation::cancel).
    fn animation_stopped(&self, finished: bool) {
        let _ = finished;
    }

    /// Eased progress is about to be applied to the animatable.
    fn progress_will_change(&self, progress: f32) {
        let _ = progress;
    }

    /// Eased progress has been applied to the animatable.
    fn progress_did_change(&self, progress: f32) {
        let _ = progress;
    }
}
