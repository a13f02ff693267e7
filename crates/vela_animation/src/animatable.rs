//! The capability that makes an object animatable.

/// Implemented by any object that wants to be driven by an
/// [`Animation`](crate::Animation).
///
/// The implementor privately owns its transition state, typically one
/// `Option<Tween<_>>` slot per field in flight:
///
/// ```
/// use vela_animation::{Animatable, Tween};
/// use vela_core::Point;
///
/// struct LineItem {
///     value: Point,
///     value_tween: Option<Tween<Point>>,
/// }
///
/// impl Animatable for LineItem {
///     fn transform(&mut self, progress: f32) {
///         if let Some(tween) = &self.value_tween {
///             self.value = tween.value(progress);
///         }
///     }
///
///     fn clear_transforms(&mut self) {
///         self.value_tween = None;
///     }
/// }
/// ```
///
/// The animation never enumerates an implementor's fields; it only pushes
/// eased progress in and, when the run ends, asks for the transition state
/// to be dropped.
pub trait Animatable {
    /// Apply eased progress to every field currently in transition.
    ///
    /// `progress` may lie outside `[0, 1]` when an overshoot curve is
    /// installed; tweens extrapolate.
    fn transform(&mut self, progress: f32);

    /// Discard all transition state, leaving live fields at their last
    /// written value.
    ///
    /// Called after progress has been driven to 1, so the fields normally
    /// rest at their target values.
    fn clear_transforms(&mut self);
}
