//! Easing strategies for animations.
//!
//! An [`Interpolator`] reshapes clamped linear progress into eased progress.
//! The input is always in `[0, 1]`; the output is allowed to leave that
//! range (overshoot curves rely on it), so consumers of eased progress must
//! extrapolate rather than clamp.

/// A pure mapping from linear progress to eased progress.
///
/// Implementations must be stateless: calling `interpolate` repeatedly with
/// the same input yields the same output, with no side effects.
pub trait Interpolator {
    fn interpolate(&self, t: f32) -> f32;
}

/// Any plain function or capture-free closure is an interpolator.
impl<F> Interpolator for F
where
    F: Fn(f32) -> f32,
{
    fn interpolate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// Built-in easing curves
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Identity: eased progress equals linear progress
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Staircase with `n` equal treads; `n` is clamped to at least 1
    Steps(u32),
    /// Back-ease with the given tension; exceeds 1.0 before settling.
    /// A tension of 1.70158 gives the classic ~10% overshoot.
    Overshoot(f32),
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Steps(n) => {
                let n = n.max(1) as f32;
                if t >= 1.0 {
                    1.0
                } else {
                    (t * n).floor() / n
                }
            }
            Easing::Overshoot(tension) => {
                let u = t - 1.0;
                u * u * ((tension + 1.0) * u + tension) + 1.0
            }
        }
    }
}

impl Interpolator for Easing {
    fn interpolate(&self, t: f32) -> f32 {
        self.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_curves_hit_endpoints() {
        let curves = [
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::Steps(4),
            Easing::Overshoot(1.70158),
        ];
        for curve in curves {
            assert!((curve.apply(0.0) - 0.0).abs() < 1e-6, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_overshoot_leaves_unit_range() {
        let curve = Easing::Overshoot(1.70158);
        let peak = (0..100)
            .map(|i| curve.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_steps_quantizes() {
        let curve = Easing::Steps(4);
        assert_eq!(curve.apply(0.1), 0.0);
        assert_eq!(curve.apply(0.26), 0.25);
        assert_eq!(curve.apply(0.99), 0.75);
        assert_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn test_closure_interpolator() {
        let square = |t: f32| t * t;
        assert_eq!(square.interpolate(0.5), 0.25);
    }
}
