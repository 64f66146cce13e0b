//! SegForge - Compositional merge-priority scoring for region merging.
//!
//! Build the scoring function of an agglomerative merge session out of
//! elementary transforms, bound to a shared statistics source, and hand the
//! root to your merge scheduler.
//!
//! # Example
//!
//! ```rust
//! use segforge::prelude::*;
//!
//! // 1 - (affinity + bias), over constant stand-ins
//! let score = Constant::new(0.25f32).add(Constant::new(0.5))?.one_minus();
//! assert_eq!(score.score(EdgeId::new(0)), 0.25);
//! assert!(score.capabilities().is_empty());
//! # Ok::<(), segforge::CompositionError>(())
//! ```

// Core vocabulary
pub use segforge_core::{Capability, CapabilitySet, CompositionError, EdgeId, StatisticUnit};

// Scoring contract and composition surface
pub use segforge_scoring::{
    BinaryOp, Constant, ScoreFunction, ScoreFunctionExt, StatisticLeaf, UnaryOp,
};

// Elementary transforms
pub use segforge_scoring::transform;

// Declarative configuration
pub use segforge_config::{
    ConfigError, NamedStatisticSource, ScoringConfig, ScoringExpr, StatisticRegistry,
};

/// Commonly used imports for building scoring trees.
pub mod prelude {
    pub use segforge_core::{Capability, CapabilitySet, CompositionError, EdgeId, StatisticUnit};
    pub use segforge_scoring::{Constant, ScoreFunction, ScoreFunctionExt, StatisticLeaf};
}
