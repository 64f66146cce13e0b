//! Capability descriptors for scoring functions.
//!
//! A scoring function declares which statistics it reads from the shared
//! statistics source as a [`CapabilitySet`]. Composite functions merge their
//! children's sets at construction time so a whole composition tree can be
//! served by a single source, and so incompatible readings of the same
//! statistic are rejected before any scoring happens.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{CompositionError, Result};

/// Semantic tag attached to a statistic name.
///
/// Two scoring functions may only share a statistic when they agree on its
/// unit; a mismatch is reported as a [`CompositionError`] when their
/// capability sets are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticUnit {
    /// Normalized affinity in `[0, 1]`.
    Affinity,
    /// Contact area between two regions, in voxels.
    Area,
    /// Plain element count.
    Count,
    /// Physical distance.
    Distance,
    /// Unitless value.
    Dimensionless,
}

impl fmt::Display for StatisticUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatisticUnit::Affinity => "affinity",
            StatisticUnit::Area => "area",
            StatisticUnit::Count => "count",
            StatisticUnit::Distance => "distance",
            StatisticUnit::Dimensionless => "dimensionless",
        };
        f.write_str(name)
    }
}

/// A single required statistic: an accessor name plus its unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    name: String,
    unit: StatisticUnit,
}

impl Capability {
    /// Creates a capability for the named statistic.
    pub fn new(name: impl Into<String>, unit: StatisticUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }

    /// Returns the accessor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit the statistic is read as.
    pub fn unit(&self) -> StatisticUnit {
        self.unit
    }
}

/// The set of statistics a scoring function requires.
///
/// Entries are kept sorted by name, so the set behaves as a mathematical set:
/// merging is idempotent, commutative and associative, and merging a subset
/// into a superset returns the superset.
///
/// # Example
///
/// ```
/// use segforge_core::{Capability, CapabilitySet, StatisticUnit};
///
/// let affinity = CapabilitySet::single(Capability::new("mean_affinity", StatisticUnit::Affinity));
/// let area = CapabilitySet::single(Capability::new("contact_area", StatisticUnit::Area));
///
/// let merged = affinity.merge(&area).unwrap();
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged.merge(&affinity).unwrap(), merged);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    entries: SmallVec<[Capability; 4]>,
}

impl CapabilitySet {
    /// Creates an empty set, for scoring functions that read no statistics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set requiring exactly one statistic.
    pub fn single(capability: Capability) -> Self {
        let mut entries = SmallVec::new();
        entries.push(capability);
        Self { entries }
    }

    /// Returns the minimal set covering both `self` and `other`.
    ///
    /// The same statistic name appearing on both sides with different units
    /// is a configuration error, detected here rather than at scoring time.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::CapabilityConflict`] on a unit mismatch.
    pub fn merge(&self, other: &CapabilitySet) -> Result<CapabilitySet> {
        let mut entries = SmallVec::new();
        let (lhs, rhs) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() && j < rhs.len() {
            match lhs[i].name.cmp(&rhs[j].name) {
                std::cmp::Ordering::Less => {
                    entries.push(lhs[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    entries.push(rhs[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    if lhs[i].unit != rhs[j].unit {
                        return Err(CompositionError::CapabilityConflict {
                            name: lhs[i].name.clone(),
                            left: lhs[i].unit,
                            right: rhs[j].unit,
                        });
                    }
                    entries.push(lhs[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        entries.extend(lhs[i..].iter().cloned());
        entries.extend(rhs[j..].iter().cloned());

        Ok(CapabilitySet { entries })
    }

    /// Returns the capability registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.entries
            .binary_search_by(|c| c.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Returns true if the set requires the named statistic.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if every requirement of `self` also appears in `other`.
    pub fn is_subset_of(&self, other: &CapabilitySet) -> bool {
        self.entries
            .iter()
            .all(|c| other.get(&c.name) == Some(c))
    }

    /// Iterates over requirements in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.entries.iter()
    }

    /// Number of distinct statistics required.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no statistics are required.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
