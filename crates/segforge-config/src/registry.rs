//! Registry of the statistics a host's accumulators expose.

use std::collections::BTreeMap;

use segforge_core::StatisticUnit;

/// The statistics available to configured expressions, with their units.
///
/// The host registers whatever its statistics source actually accumulates;
/// expressions referring to anything else are rejected at validation time.
#[derive(Debug, Clone, Default)]
pub struct StatisticRegistry {
    entries: BTreeMap<String, StatisticUnit>,
}

impl StatisticRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a statistic. Re-registering a name overwrites its unit.
    pub fn register(&mut self, name: impl Into<String>, unit: StatisticUnit) -> &mut Self {
        self.entries.insert(name.into(), unit);
        self
    }

    /// Returns the unit of the named statistic, if registered.
    pub fn unit_of(&self, name: &str) -> Option<StatisticUnit> {
        self.entries.get(name).copied()
    }

    /// Returns true if the statistic is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered statistics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
