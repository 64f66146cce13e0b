//! Fluent combinators for building composition trees.

use segforge_core::error::Result;

use crate::compose::{BinaryOp, UnaryOp};
use crate::function::ScoreFunction;
use crate::transform::{
    Add, Invert, Multiply, OneMinus, SafeDivide, SaturatingRadius, Square, Step, Subtract,
};

/// Combinators turning any scoring function into a larger one.
///
/// Unary combinators are infallible. Binary combinators resolve the merged
/// capability set and so return `Result`; a conflict surfaces here, at tree
/// construction, never during scoring.
///
/// # Example
///
/// ```
/// use segforge_core::EdgeId;
/// use segforge_scoring::{Constant, ScoreFunction, ScoreFunctionExt};
///
/// // 1 - (affinity + bias), over constant stand-ins
/// let score = Constant::new(0.25f32).add(Constant::new(0.5))?.one_minus();
/// assert_eq!(score.score(EdgeId::new(0)), 0.25);
/// # Ok::<(), segforge_core::CompositionError>(())
/// ```
pub trait ScoreFunctionExt: ScoreFunction + Sized {
    /// `1 - self`.
    fn one_minus(self) -> UnaryOp<Self, OneMinus> {
        UnaryOp::new(self, OneMinus)
    }

    /// `1 / self`. Unguarded; the call site must guarantee a nonzero score.
    fn invert(self) -> UnaryOp<Self, Invert> {
        UnaryOp::new(self, Invert)
    }

    /// `self * self`.
    fn square(self) -> UnaryOp<Self, Square> {
        UnaryOp::new(self, Square)
    }

    /// Saturating equivalent-radius response of a contact-area score,
    /// with the default clamp.
    fn saturating_radius(self) -> UnaryOp<Self, SaturatingRadius<Self::Value>> {
        UnaryOp::new(self, SaturatingRadius::default())
    }

    /// `self + rhs`.
    fn add<R>(self, rhs: R) -> Result<BinaryOp<Self, R, Add>>
    where
        R: ScoreFunction<Value = Self::Value>,
    {
        BinaryOp::new(self, rhs, Add)
    }

    /// `self - rhs`.
    fn subtract<R>(self, rhs: R) -> Result<BinaryOp<Self, R, Subtract>>
    where
        R: ScoreFunction<Value = Self::Value>,
    {
        BinaryOp::new(self, rhs, Subtract)
    }

    /// `self * rhs`.
    fn multiply<R>(self, rhs: R) -> Result<BinaryOp<Self, R, Multiply>>
    where
        R: ScoreFunction<Value = Self::Value>,
    {
        BinaryOp::new(self, rhs, Multiply)
    }

    /// `self / rhs`, saturating when `rhs` scores near zero.
    fn safe_divide<R>(self, rhs: R) -> Result<BinaryOp<Self, R, SafeDivide>>
    where
        R: ScoreFunction<Value = Self::Value>,
    {
        BinaryOp::new(self, rhs, SafeDivide)
    }

    /// `0` where `self < rhs`, else `1`.
    fn step<R>(self, rhs: R) -> Result<BinaryOp<Self, R, Step>>
    where
        R: ScoreFunction<Value = Self::Value>,
    {
        BinaryOp::new(self, rhs, Step)
    }
}

impl<T: ScoreFunction + Sized> ScoreFunctionExt for T {}
