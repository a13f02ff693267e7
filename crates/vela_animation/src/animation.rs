//! One run of one animatable over a fixed duration.
//!
//! An [`Animation`] owns no clock. An external driver (frame callback,
//! display timer) feeds it absolute timestamps through [`Animation::step`];
//! the animation turns elapsed time into clamped linear progress, reshapes
//! it through its [`Interpolator`], and pushes the eased progress into the
//! bound [`Animatable`]. Timestamps and duration share whatever unit the
//! caller picks (seconds by convention).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::animatable::Animatable;
use crate::interpolator::{Easing, Interpolator};
use crate::observer::AnimationObserver;

/// Lifecycle state. Transitions only move forward; [`Animation::reset`] is
/// the single way back to `NotStarted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// Drives one [`Animatable`] through one time-bounded transition.
///
/// The animatable is held through a shared `Rc<RefCell<_>>` handle; the
/// caller keeps its own handle and ownership. The observer link is weak and
/// purely optional.
pub struct Animation {
    animatable: Rc<RefCell<dyn Animatable>>,
    interpolator: Box<dyn Interpolator>,
    observer: Option<Weak<dyn AnimationObserver>>,
    duration: f64,
    start_time: Option<f64>,
    last_step_time: Option<f64>,
    state: AnimationState,
}

impl Animation {
    /// A linear animation over `duration`.
    pub fn new(animatable: Rc<RefCell<dyn Animatable>>, duration: f64) -> Self {
        Self::with_interpolator(animatable, duration, Easing::Linear)
    }

    pub fn with_interpolator(
        animatable: Rc<RefCell<dyn Animatable>>,
        duration: f64,
        interpolator: impl Interpolator + 'static,
    ) -> Self {
        Self {
            animatable,
            interpolator: Box::new(interpolator),
            observer: None,
            duration,
            start_time: None,
            last_step_time: None,
            state: AnimationState::NotStarted,
        }
    }

    /// Install a non-owning observer. The animation never keeps the
    /// observer alive; dropping it elsewhere just stops delivery.
    pub fn set_observer(&mut self, observer: &Rc<dyn AnimationObserver>) {
        self.observer = Some(Rc::downgrade(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time of the first step, latched when the run starts.
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    /// Time of the most recent step.
    pub fn last_step_time(&self) -> Option<f64> {
        self.last_step_time
    }

    /// Advance to `time`, an absolute timestamp from the external clock.
    ///
    /// The first call latches the start time and fires `animation_started`
    /// before any progress is applied. Returns `false` without doing
    /// anything once the animation is finished, so a driver loop may call
    /// this unconditionally.
    pub fn step(&mut self, time: f64) -> bool {
        if self.state == AnimationState::Finished {
            return false;
        }

        if self.state == AnimationState::NotStarted {
            self.start_time = Some(time);
            self.state = AnimationState::Running;
            debug!(duration = self.duration, start_time = time, "animation started");
            if let Some(observer) = self.observer() {
                observer.animation_started();
            }
        }

        let start = self.start_time.unwrap_or(time);
        let linear = self.linear_progress(time, start);
        self.last_step_time = Some(time);
        self.apply_eased(self.interpolator.interpolate(linear));

        if linear >= 1.0 {
            self.finish(true);
        }
        true
    }

    /// Force completion of a running animation.
    ///
    /// The animatable receives one final transform at progress 1 and then
    /// has its transition state cleared, so the end state is deterministic
    /// no matter how far the run had come. Bookkeeping reuses the last step
    /// time; no clock is read. A no-op unless the animation is `Running`.
    pub fn cancel(&mut self) {
        if self.state != AnimationState::Running {
            return;
        }
        self.apply_eased(1.0);
        self.finish(false);
    }

    /// Return to `NotStarted` so the animation can run again. The next
    /// `step` latches a fresh start time and re-fires `animation_started`.
    /// Duration and interpolator are untouched.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.state = AnimationState::NotStarted;
    }

    fn linear_progress(&self, time: f64, start: f64) -> f32 {
        // Non-positive durations complete on the first step; guard the
        // division rather than lean on float infinity.
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((time - start) / self.duration).clamp(0.0, 1.0)) as f32
    }

    fn apply_eased(&mut self, eased: f32) {
        if let Some(observer) = self.observer() {
            observer.progress_will_change(eased);
        }
        self.animatable.borrow_mut().transform(eased);
        if let Some(observer) = self.observer() {
            observer.progress_did_change(eased);
        }
    }

    fn finish(&mut self, finished: bool) {
        self.animatable.borrow_mut().clear_transforms();
        self.state = AnimationState::Finished;
        debug!(finished, "animation stopped");
        if let Some(observer) = self.observer() {
            observer.animation_stopped(finished);
        }
    }

    fn observer(&self) -> Option<Rc<dyn AnimationObserver>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }
}
