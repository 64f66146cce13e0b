//! The scoring function contract.

use num_traits::Float;

use segforge_core::{CapabilitySet, EdgeId};

/// A merge-priority function over region-graph edges.
///
/// Every node of a composition tree - leaf or composite - exposes the same
/// two operations: produce a score for an edge, and report which statistics
/// the node (including its children) reads.
///
/// # Contract
///
/// - `score` is a pure function of the edge id and the *current* state of
///   the externally owned statistics source. Nothing is cached: if the
///   source is updated between two calls (e.g. after a merge event folds
///   statistics into a surviving edge), the next call reflects the update.
/// - `score` is total over the valid edge domain. The one guarded numeric
///   singularity (`SafeDivide`) saturates instead of failing, so scores stay
///   comparable inside the scheduler's priority queue.
/// - `score` runs inline on the caller's thread with no blocking and no
///   internal synchronization. The caller must not mutate the statistics
///   source while a call is in flight; updating statistics and querying
///   scores are separate phases of the merge loop.
/// - `capabilities` is computed at construction time and does not change
///   over the life of the tree.
pub trait ScoreFunction {
    /// Floating-point score type produced by this function.
    type Value: Float;

    /// Scores the given edge against the live statistics source.
    fn score(&self, edge: EdgeId) -> Self::Value;

    /// The statistics this function reads, merged over all children.
    fn capabilities(&self) -> &CapabilitySet;
}

impl<T> ScoreFunction for Box<T>
where
    T: ScoreFunction + ?Sized,
{
    type Value = T::Value;

    #[inline]
    fn score(&self, edge: EdgeId) -> Self::Value {
        (**self).score(edge)
    }

    fn capabilities(&self) -> &CapabilitySet {
        (**self).capabilities()
    }
}
