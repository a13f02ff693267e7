//! Two-endpoint value blending.
//!
//! A [`Tween`] pairs a `from` and `to` value and answers "what is the value
//! at progress `t`?". Chart objects own their tweens privately: a field in
//! transition holds `Some(Tween)`, applies it on every
//! [`transform`](crate::Animatable::transform), and drops it on
//! [`clear_transforms`](crate::Animatable::clear_transforms).
//!
//! Progress is not clamped here. Eased progress legitimately leaves `[0, 1]`
//! for overshoot curves, and the blend extrapolates linearly past either
//! endpoint.

use thiserror::Error;
use vela_core::{Color, Point, Rect, Size};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TweenError {
    #[error("series tween endpoints differ in length: from={from}, to={to}")]
    LengthMismatch { from: usize, to: usize },
}

/// Linear blend between two values of the same shape.
///
/// Implementations must be exact at the endpoints: `a.blend(&b, 0.0) == a`
/// and `a.blend(&b, 1.0) == b`, with `a + (b - a) * t` semantics in between.
pub trait Blend: Clone {
    fn blend(&self, to: &Self, t: f32) -> Self;
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 1.0 {
        // a + (b - a) exactly reaching b is not guaranteed in f32
        b
    } else {
        a + (b - a) * t
    }
}

impl Blend for f32 {
    fn blend(&self, to: &Self, t: f32) -> Self {
        lerp(*self, *to, t)
    }
}

impl Blend for f64 {
    fn blend(&self, to: &Self, t: f32) -> Self {
        if t == 1.0 {
            *to
        } else {
            self + (to - self) * t as f64
        }
    }
}

impl Blend for Point {
    fn blend(&self, to: &Self, t: f32) -> Self {
        Point::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }
}

impl Blend for Size {
    fn blend(&self, to: &Self, t: f32) -> Self {
        Size::new(lerp(self.width, to.width, t), lerp(self.height, to.height, t))
    }
}

impl Blend for Rect {
    fn blend(&self, to: &Self, t: f32) -> Self {
        Rect {
            origin: self.origin.blend(&to.origin, t),
            size: self.size.blend(&to.size, t),
        }
    }
}

/// Channel-wise blend, alpha included. Both endpoints are assumed to be in
/// the same (linear RGBA) color space.
impl Blend for Color {
    fn blend(&self, to: &Self, t: f32) -> Self {
        Color::rgba(
            lerp(self.r, to.r, t),
            lerp(self.g, to.g, t),
            lerp(self.b, to.b, t),
            lerp(self.a, to.a, t),
        )
    }
}

/// An immutable `(from, to)` pair queried by progress.
#[derive(Clone, Debug)]
pub struct Tween<T: Blend> {
    from: T,
    to: T,
}

impl<T: Blend> Tween<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    /// The blended value at eased progress `t`
    pub fn value(&self, t: f32) -> T {
        self.from.blend(&self.to, t)
    }
}

/// Pairwise tween over two equal-length sequences.
///
/// Construction checks the lengths; a mismatch is a caller bug and is
/// reported before any animation starts rather than discovered mid-step
/// with the target half blended.
#[derive(Clone, Debug)]
pub struct SeriesTween<T: Blend> {
    elements: Vec<Tween<T>>,
}

impl<T: Blend> SeriesTween<T> {
    pub fn new(from: Vec<T>, to: Vec<T>) -> Result<Self, TweenError> {
        if from.len() != to.len() {
            return Err(TweenError::LengthMismatch {
                from: from.len(),
                to: to.len(),
            });
        }
        let elements = from
            .into_iter()
            .zip(to)
            .map(|(a, b)| Tween::new(a, b))
            .collect();
        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The blended sequence at eased progress `t`
    pub fn value(&self, t: f32) -> Vec<T> {
        self.elements.iter().map(|tw| tw.value(t)).collect()
    }

    /// Blend in place, writing element `i` into `out[i]`.
    ///
    /// `out` must have the same length as the tween.
    pub fn value_into(&self, t: f32, out: &mut [T]) {
        debug_assert_eq!(out.len(), self.elements.len());
        for (slot, tw) in out.iter_mut().zip(&self.elements) {
            *slot = tw.value(t);
        }
    }
}
