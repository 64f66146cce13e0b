//! Error types for SegForge

use thiserror::Error;

use crate::capability::StatisticUnit;

/// Errors raised while composing scoring functions.
///
/// All variants are construction-time failures; scoring itself is total and
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// Two operands read the same statistic with incompatible semantics.
    #[error("statistic `{name}` is read as {left} by one operand and as {right} by the other")]
    CapabilityConflict {
        /// Accessor name claimed by both operands.
        name: String,
        /// Unit required by the left operand.
        left: StatisticUnit,
        /// Unit required by the right operand.
        right: StatisticUnit,
    },
}

/// Result type alias for composition operations
pub type Result<T> = std::result::Result<T, CompositionError>;
