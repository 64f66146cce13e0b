//! Unary and binary composition wrappers.
//!
//! Wrappers own their children by value and hold the combining transform as
//! a generic parameter, so a finished tree is a single concrete type with no
//! virtual dispatch on the scoring path.

use segforge_core::{CapabilitySet, EdgeId};
use segforge_core::error::Result;

use crate::function::ScoreFunction;
use crate::transform::{BinaryTransform, UnaryTransform};

/// Applies a transform to the score of a single child.
///
/// The capability set passes through unchanged: the wrapper reads exactly
/// what its child reads, so no set is stored here.
#[derive(Debug, Clone)]
pub struct UnaryOp<C, T> {
    child: C,
    transform: T,
}

impl<C, T> UnaryOp<C, T>
where
    C: ScoreFunction,
    T: UnaryTransform<C::Value>,
{
    /// Wraps `child` with `transform`.
    pub fn new(child: C, transform: T) -> Self {
        Self { child, transform }
    }
}

impl<C, T> ScoreFunction for UnaryOp<C, T>
where
    C: ScoreFunction,
    T: UnaryTransform<C::Value>,
{
    type Value = C::Value;

    #[inline]
    fn score(&self, edge: EdgeId) -> Self::Value {
        self.transform.apply(self.child.score(edge))
    }

    fn capabilities(&self) -> &CapabilitySet {
        self.child.capabilities()
    }
}

/// Combines the scores of two children with a transform.
///
/// Both children must be bound to the same statistics source so a single
/// call observes a mutually consistent snapshot. They are evaluated fully
/// and independently on every call, in fixed order (left, then right) -
/// leaves are cheap and side-effect free, and several transforms are
/// non-commutative, so there is nothing to gain from short-circuiting or
/// reordering.
#[derive(Debug, Clone)]
pub struct BinaryOp<L, R, T> {
    lhs: L,
    rhs: R,
    transform: T,
    capabilities: CapabilitySet,
}

impl<L, R, T> BinaryOp<L, R, T>
where
    L: ScoreFunction,
    R: ScoreFunction<Value = L::Value>,
    T: BinaryTransform<L::Value>,
{
    /// Combines `lhs` and `rhs` with `transform`.
    ///
    /// The merged capability set is resolved here, once; a conflict between
    /// the children's requirements fails the composition before any scoring
    /// can happen.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::CapabilityConflict`] if the children read
    /// the same statistic with different units.
    ///
    /// [`CompositionError::CapabilityConflict`]: segforge_core::CompositionError::CapabilityConflict
    pub fn new(lhs: L, rhs: R, transform: T) -> Result<Self> {
        let capabilities = lhs.capabilities().merge(rhs.capabilities())?;
        Ok(Self {
            lhs,
            rhs,
            transform,
            capabilities,
        })
    }
}

impl<L, R, T> ScoreFunction for BinaryOp<L, R, T>
where
    L: ScoreFunction,
    R: ScoreFunction<Value = L::Value>,
    T: BinaryTransform<L::Value>,
{
    type Value = L::Value;

    #[inline]
    fn score(&self, edge: EdgeId) -> Self::Value {
        self.transform
            .apply(self.lhs.score(edge), self.rhs.score(edge))
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}
