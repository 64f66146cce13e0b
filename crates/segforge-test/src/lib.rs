//! Shared test fixtures for SegForge crates.
//!
//! Provides a deterministic in-memory statistics source standing in for the
//! accumulators of a real merge session.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! segforge-test = { workspace = true }
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

use segforge_core::{Capability, EdgeId, StatisticUnit};
use segforge_scoring::{ScoreFunction, StatisticLeaf};

/// An in-memory per-edge statistics table.
///
/// Values live behind a `RefCell` so tests can mutate statistics between
/// scoring calls while composition trees keep borrowing the table - the same
/// update-then-query phase discipline a merge scheduler follows. The table
/// also counts reads per statistic, which lets tests assert that a tree
/// evaluates each leaf exactly once per call.
///
/// Strictly single-threaded, like the scoring contract itself.
#[derive(Debug, Default)]
pub struct TableSource {
    values: RefCell<BTreeMap<String, BTreeMap<EdgeId, f32>>>,
    reads: RefCell<BTreeMap<String, usize>>,
}

impl TableSource {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `statistic` for `edge`, as a merge event would.
    pub fn set(&self, edge: EdgeId, statistic: &str, value: f32) -> &Self {
        self.values
            .borrow_mut()
            .entry(statistic.to_string())
            .or_default()
            .insert(edge, value);
        self
    }

    /// Reads the value of `statistic` for `edge`.
    ///
    /// # Panics
    ///
    /// Panics if the statistic was never set for that edge; a test reading
    /// an unseeded cell is a broken test.
    pub fn get(&self, edge: EdgeId, statistic: &str) -> f32 {
        *self
            .reads
            .borrow_mut()
            .entry(statistic.to_string())
            .or_insert(0) += 1;
        match self
            .values
            .borrow()
            .get(statistic)
            .and_then(|column| column.get(&edge))
        {
            Some(value) => *value,
            None => panic!("statistic `{statistic}` not seeded for {edge}"),
        }
    }

    /// Number of reads of `statistic` since construction or the last
    /// [`reset_reads`](Self::reset_reads).
    pub fn reads(&self, statistic: &str) -> usize {
        self.reads.borrow().get(statistic).copied().unwrap_or(0)
    }

    /// Clears the read counters.
    pub fn reset_reads(&self) {
        self.reads.borrow_mut().clear();
    }

    /// Builds a leaf reading `statistic` from this table.
    pub fn leaf(
        &self,
        statistic: &'static str,
        unit: StatisticUnit,
    ) -> impl ScoreFunction<Value = f32> + std::fmt::Debug + '_ {
        StatisticLeaf::new(
            self,
            Capability::new(statistic, unit),
            move |table: &TableSource, edge| table.get(edge, statistic),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let table = TableSource::new();
        table.set(EdgeId::new(1), "mean_affinity", 0.75);
        assert_eq!(table.get(EdgeId::new(1), "mean_affinity"), 0.75);
        assert_eq!(table.reads("mean_affinity"), 1);
    }

    #[test]
    fn test_overwrite_is_visible() {
        let table = TableSource::new();
        table.set(EdgeId::new(1), "contact_area", 4.0);
        table.set(EdgeId::new(1), "contact_area", 9.0);
        assert_eq!(table.get(EdgeId::new(1), "contact_area"), 9.0);
    }

    #[test]
    #[should_panic(expected = "not seeded")]
    fn test_unseeded_read_panics() {
        TableSource::new().get(EdgeId::new(0), "mean_affinity");
    }

    #[test]
    fn test_leaf_reads_through() {
        let table = TableSource::new();
        table.set(EdgeId::new(2), "mean_affinity", 0.5);
        let leaf = table.leaf("mean_affinity", StatisticUnit::Affinity);
        assert_eq!(leaf.score(EdgeId::new(2)), 0.5);
        assert_eq!(table.reads("mean_affinity"), 1);
    }
}
