//! Leaf scoring functions.

use std::fmt;
use std::marker::PhantomData;

use num_traits::Float;

use segforge_core::{Capability, CapabilitySet, EdgeId};

use crate::function::ScoreFunction;

/// A leaf reading one statistic from a shared statistics source.
///
/// The leaf borrows the source for its entire lifetime; the borrow checker
/// keeps the source alive until every tree built against it is discarded.
/// The accessor closure is invoked on every `score` call, so the leaf always
/// observes the source's current state.
pub struct StatisticLeaf<'s, S, A, F> {
    source: &'s S,
    accessor: A,
    capabilities: CapabilitySet,
    _value: PhantomData<fn() -> F>,
}

impl<'s, S, A, F> StatisticLeaf<'s, S, A, F>
where
    A: Fn(&S, EdgeId) -> F,
    F: Float,
{
    /// Creates a leaf reading the statistic described by `capability`
    /// through `accessor`.
    ///
    /// The capability must describe what the accessor actually reads; it is
    /// what the merge resolver sees when this leaf is composed with others.
    pub fn new(source: &'s S, capability: Capability, accessor: A) -> Self {
        Self {
            source,
            accessor,
            capabilities: CapabilitySet::single(capability),
            _value: PhantomData,
        }
    }
}

impl<S, A, F> ScoreFunction for StatisticLeaf<'_, S, A, F>
where
    A: Fn(&S, EdgeId) -> F,
    F: Float,
{
    type Value = F;

    #[inline]
    fn score(&self, edge: EdgeId) -> F {
        (self.accessor)(self.source, edge)
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}

// The accessor is a closure; Debug only surfaces what the merge resolver sees.
impl<S, A, F> fmt::Debug for StatisticLeaf<'_, S, A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatisticLeaf")
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// A leaf producing the same value for every edge.
///
/// Reads no statistics, so it composes with anything; used for thresholds
/// fed to `Step` and for weighting terms of a blended score.
#[derive(Debug, Clone)]
pub struct Constant<F> {
    value: F,
    capabilities: CapabilitySet,
}

impl<F: Float> Constant<F> {
    /// Creates a constant scoring function.
    pub fn new(value: F) -> Self {
        Self {
            value,
            capabilities: CapabilitySet::empty(),
        }
    }
}

impl<F: Float> ScoreFunction for Constant<F> {
    type Value = F;

    #[inline]
    fn score(&self, _edge: EdgeId) -> F {
        self.value
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use segforge_core::StatisticUnit;

    use super::*;

    #[test]
    fn test_constant_scores_every_edge_identically() {
        let c = Constant::new(0.25f32);
        assert_eq!(c.score(EdgeId::new(0)), 0.25);
        assert_eq!(c.score(EdgeId::new(981)), 0.25);
        assert!(c.capabilities().is_empty());
    }

    #[test]
    fn test_statistic_leaf_reads_the_live_source() {
        let source = vec![0.5f32, 0.9];
        let leaf = StatisticLeaf::new(
            &source,
            Capability::new("mean_affinity", StatisticUnit::Affinity),
            |s: &Vec<f32>, e: EdgeId| s[e.raw() as usize],
        );
        assert_eq!(leaf.score(EdgeId::new(0)), 0.5);
        assert_eq!(leaf.score(EdgeId::new(1)), 0.9);
        assert!(leaf.capabilities().contains("mean_affinity"));
    }
}
