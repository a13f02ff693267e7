//! Vela Animation Core
//!
//! Drives stateful chart objects through time-bounded transitions.
//!
//! # How it fits together
//!
//! - An [`Animation`] binds one [`Animatable`] to one duration and is fed
//!   absolute timestamps by an external per-frame clock.
//! - Each step maps elapsed time to linear progress, reshapes it through an
//!   [`Interpolator`], and hands the eased progress to the animatable.
//! - The animatable applies the progress to its own [`Tween`] fields and
//!   discards them when the run ends.
//! - An optional [`AnimationObserver`] sees lifecycle and per-step events;
//!   its absence never changes behavior.
//! - An [`AnimationScheduler`] can own many animations and fan a single
//!   clock tick out to all of them.

pub mod animatable;
pub mod animation;
pub mod interpolator;
pub mod observer;
pub mod scheduler;
pub mod tween;

pub use animatable::Animatable;
pub use animation::{Animation, AnimationState};
pub use interpolator::{Easing, Interpolator};
pub use observer::AnimationObserver;
pub use scheduler::{AnimationId, AnimationScheduler};
pub use tween::{Blend, SeriesTween, Tween, TweenError};
