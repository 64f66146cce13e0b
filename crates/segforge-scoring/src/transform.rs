//! Elementary numeric transforms.
//!
//! Transforms are the strategy values injected into [`UnaryOp`] and
//! [`BinaryOp`] wrappers. Each is a pure function, total over its domain
//! except where an explicit edge-case policy is documented below.
//!
//! [`UnaryOp`]: crate::compose::UnaryOp
//! [`BinaryOp`]: crate::compose::BinaryOp

use num_traits::Float;

/// A pure transform of a single score.
pub trait UnaryTransform<F: Float> {
    /// Applies the transform.
    fn apply(&self, x: F) -> F;
}

/// A pure combination of two scores.
///
/// Operands always arrive in tree order (left child first); several
/// transforms are non-commutative.
pub trait BinaryTransform<F: Float> {
    /// Applies the transform.
    fn apply(&self, a: F, b: F) -> F;
}

fn constant<F: Float>(value: f64) -> F {
    F::from(value).expect("transform constant must be representable in the score type")
}

/// `1 - x`. Total.
///
/// The usual first step for affinity statistics, turning "high affinity
/// merges first" into a min-ordered priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneMinus;

impl<F: Float> UnaryTransform<F> for OneMinus {
    #[inline]
    fn apply(&self, x: F) -> F {
        F::one() - x
    }
}

/// `1 / x`. Unguarded: the call site must guarantee `x != 0`.
///
/// The lighter-weight alternative to [`SafeDivide`] for denominators that
/// are nonzero by construction (e.g. a region size, which is at least one).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invert;

impl<F: Float> UnaryTransform<F> for Invert {
    #[inline]
    fn apply(&self, x: F) -> F {
        F::one() / x
    }
}

/// `x * x`. Total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl<F: Float> UnaryTransform<F> for Square {
    #[inline]
    fn apply(&self, x: F) -> F {
        x * x
    }
}

/// Signed-distance response of the equivalent contact radius.
///
/// Treats the input as a contact area, estimates the radius of a circle of
/// that area, clamps it to `max_radius`, and maps it through
/// `128 * tanh(r / falloff) + 127`. The clamp bounds the domain explored by
/// the curve; past the default 35 distance units the response is numerically
/// flat anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturatingRadius<F> {
    max_radius: F,
    falloff: F,
}

impl<F: Float> SaturatingRadius<F> {
    /// Creates the transform with an explicit clamp radius and falloff.
    pub fn new(max_radius: F, falloff: F) -> Self {
        Self { max_radius, falloff }
    }

    /// The largest radius fed into the response curve.
    pub fn max_radius(&self) -> F {
        self.max_radius
    }
}

impl<F: Float> Default for SaturatingRadius<F> {
    fn default() -> Self {
        Self::new(constant(35.0), constant(12.5))
    }
}

impl<F: Float> UnaryTransform<F> for SaturatingRadius<F> {
    #[inline]
    fn apply(&self, x: F) -> F {
        let r = (x / constant(std::f64::consts::PI)).sqrt();
        let r = if r < self.max_radius { r } else { self.max_radius };
        constant::<F>(128.0) * (r / self.falloff).tanh() + constant(127.0)
    }
}

/// `a + b`. Total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

impl<F: Float> BinaryTransform<F> for Add {
    #[inline]
    fn apply(&self, a: F, b: F) -> F {
        a + b
    }
}

/// `a - b`. Total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtract;

impl<F: Float> BinaryTransform<F> for Subtract {
    #[inline]
    fn apply(&self, a: F, b: F) -> F {
        a - b
    }
}

/// `a * b`. Total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiply;

impl<F: Float> BinaryTransform<F> for Multiply {
    #[inline]
    fn apply(&self, a: F, b: F) -> F {
        a * b
    }
}

/// `a / b`, saturating near a zero denominator.
///
/// When `|b|` is at or below the smallest positive representable value, the
/// quotient is pushed to the far end of the ranking instead: the most
/// negative representable value when `a * b` carries a negative sign, the
/// most positive otherwise. A score feeding a priority queue must stay
/// totally ordered, and NaN or an infinity would corrupt comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeDivide;

impl<F: Float> BinaryTransform<F> for SafeDivide {
    #[inline]
    fn apply(&self, a: F, b: F) -> F {
        if b.abs() <= F::min_positive_value() {
            if (a * b).is_sign_negative() {
                F::min_value()
            } else {
                F::max_value()
            }
        } else {
            a / b
        }
    }
}

/// `0` if `a < b`, else `1`. Total, boolean-valued.
///
/// Usually paired with a [`Constant`] threshold on the right.
///
/// [`Constant`]: crate::leaf::Constant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step;

impl<F: Float> BinaryTransform<F> for Step {
    #[inline]
    fn apply(&self, a: F, b: F) -> F {
        if a < b {
            F::zero()
        } else {
            F::one()
        }
    }
}
