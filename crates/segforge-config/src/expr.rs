//! Expression trees for runtime-configured scoring.

use serde::{Deserialize, Serialize};

use segforge_core::{Capability, CapabilitySet};

use crate::registry::StatisticRegistry;
use crate::ConfigError;

/// A merge-priority expression, as described in configuration.
///
/// Mirrors the composition algebra of `segforge-scoring`: statistic and
/// constant leaves, unary transforms over one operand, binary transforms
/// over an ordered pair. Binding an expression to a statistics source
/// produces a boxed scoring tree (see [`ScoringExpr::bind`]).
///
/// [`ScoringExpr::bind`]: crate::ScoringExpr::bind
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScoringExpr {
    /// Read a named statistic of the scored edge.
    Statistic {
        /// Accessor name; must be present in the [`StatisticRegistry`].
        name: String,
    },
    /// A fixed value, independent of the edge.
    Constant {
        /// The value.
        value: f64,
    },
    /// `1 - of`.
    OneMinus {
        /// Operand.
        of: Box<ScoringExpr>,
    },
    /// `1 / of`; the configured expression must keep the operand nonzero.
    Invert {
        /// Operand.
        of: Box<ScoringExpr>,
    },
    /// `of * of`.
    Square {
        /// Operand.
        of: Box<ScoringExpr>,
    },
    /// Saturating equivalent-radius response of a contact area.
    SaturatingRadius {
        /// Operand.
        of: Box<ScoringExpr>,
    },
    /// `lhs + rhs`.
    Add {
        /// Left operand.
        lhs: Box<ScoringExpr>,
        /// Right operand.
        rhs: Box<ScoringExpr>,
    },
    /// `lhs - rhs`.
    Subtract {
        /// Left operand.
        lhs: Box<ScoringExpr>,
        /// Right operand.
        rhs: Box<ScoringExpr>,
    },
    /// `lhs * rhs`.
    Multiply {
        /// Left operand.
        lhs: Box<ScoringExpr>,
        /// Right operand.
        rhs: Box<ScoringExpr>,
    },
    /// `lhs / rhs`, saturating near a zero denominator.
    SafeDivide {
        /// Left operand.
        lhs: Box<ScoringExpr>,
        /// Right operand.
        rhs: Box<ScoringExpr>,
    },
    /// `0` where `lhs < rhs`, else `1`.
    Step {
        /// Left operand.
        lhs: Box<ScoringExpr>,
        /// Right operand.
        rhs: Box<ScoringExpr>,
    },
}

impl ScoringExpr {
    /// Resolves the statistics this expression requires.
    ///
    /// Walks the expression bottom-up, merging requirements exactly the way
    /// tree construction will, so a valid result here guarantees `bind`
    /// cannot fail on capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStatistic`] for a statistic missing
    /// from the registry.
    pub fn capabilities(&self, registry: &StatisticRegistry) -> Result<CapabilitySet, ConfigError> {
        match self {
            Self::Statistic { name } => match registry.unit_of(name) {
                Some(unit) => Ok(CapabilitySet::single(Capability::new(name.clone(), unit))),
                None => Err(ConfigError::UnknownStatistic(name.clone())),
            },
            Self::Constant { .. } => Ok(CapabilitySet::empty()),
            Self::OneMinus { of }
            | Self::Invert { of }
            | Self::Square { of }
            | Self::SaturatingRadius { of } => of.capabilities(registry),
            Self::Add { lhs, rhs }
            | Self::Subtract { lhs, rhs }
            | Self::Multiply { lhs, rhs }
            | Self::SafeDivide { lhs, rhs }
            | Self::Step { lhs, rhs } => Ok(lhs
                .capabilities(registry)?
                .merge(&rhs.capabilities(registry)?)?),
        }
    }
}
