//! Binding configured expressions to a live statistics source.

use num_traits::NumCast;

use segforge_core::{Capability, EdgeId};
use segforge_scoring::transform::{
    Add, Invert, Multiply, OneMinus, SafeDivide, SaturatingRadius, Square, Step, Subtract,
};
use segforge_scoring::{BinaryOp, Constant, ScoreFunction, StatisticLeaf, UnaryOp};

use crate::expr::ScoringExpr;
use crate::registry::StatisticRegistry;
use crate::ConfigError;

/// A statistics source addressable by statistic name.
///
/// Compile-time trees access statistics through closures; trees bound from
/// configuration only know statistic names, so their source must resolve
/// names at call time. Implementations follow the same contract as any
/// statistics source: externally owned, mutated only between scoring calls.
pub trait NamedStatisticSource {
    /// Floating-point score type served by this source.
    type Value: num_traits::Float;

    /// Reads the named statistic for an edge.
    ///
    /// Only names from the validated expression's capability set are ever
    /// requested, so implementations may treat unknown names as unreachable.
    fn statistic(&self, name: &str, edge: EdgeId) -> Self::Value;
}

type BoundNode<'s, V> = Box<dyn ScoreFunction<Value = V> + 's>;

impl ScoringExpr {
    /// Compiles this expression into a scoring tree over `source`.
    ///
    /// The resulting tree is runtime-dispatched (one boxed node per
    /// expression node); hosts with a hot enough scoring loop should prefer
    /// the statically-typed combinators. Scores and capabilities are
    /// identical between the two forms.
    ///
    /// # Errors
    ///
    /// Fails on statistics missing from the registry, constants that do not
    /// fit the score type, and capability conflicts between operands.
    pub fn bind<'s, S>(
        &self,
        registry: &StatisticRegistry,
        source: &'s S,
    ) -> Result<BoundNode<'s, S::Value>, ConfigError>
    where
        S: NamedStatisticSource,
        S::Value: 'static,
    {
        let root = self.bind_node(registry, source)?;
        tracing::debug!(
            required_statistics = root.capabilities().len(),
            "bound scoring expression"
        );
        Ok(root)
    }

    fn bind_node<'s, S>(
        &self,
        registry: &StatisticRegistry,
        source: &'s S,
    ) -> Result<BoundNode<'s, S::Value>, ConfigError>
    where
        S: NamedStatisticSource,
        S::Value: 'static,
    {
        match self {
            Self::Statistic { name } => {
                let unit = registry
                    .unit_of(name)
                    .ok_or_else(|| ConfigError::UnknownStatistic(name.clone()))?;
                let stat = name.clone();
                Ok(Box::new(StatisticLeaf::new(
                    source,
                    Capability::new(name.clone(), unit),
                    move |s: &S, edge| s.statistic(&stat, edge),
                )))
            }
            Self::Constant { value } => {
                let value = <S::Value as NumCast>::from(*value)
                    .ok_or(ConfigError::UnrepresentableConstant(*value))?;
                Ok(Box::new(Constant::new(value)))
            }
            Self::OneMinus { of } => {
                Ok(Box::new(UnaryOp::new(of.bind_node(registry, source)?, OneMinus)))
            }
            Self::Invert { of } => {
                Ok(Box::new(UnaryOp::new(of.bind_node(registry, source)?, Invert)))
            }
            Self::Square { of } => {
                Ok(Box::new(UnaryOp::new(of.bind_node(registry, source)?, Square)))
            }
            Self::SaturatingRadius { of } => Ok(Box::new(UnaryOp::new(
                of.bind_node(registry, source)?,
                SaturatingRadius::default(),
            ))),
            Self::Add { lhs, rhs } => Ok(Box::new(BinaryOp::new(
                lhs.bind_node(registry, source)?,
                rhs.bind_node(registry, source)?,
                Add,
            )?)),
            Self::Subtract { lhs, rhs } => Ok(Box::new(BinaryOp::new(
                lhs.bind_node(registry, source)?,
                rhs.bind_node(registry, source)?,
                Subtract,
            )?)),
            Self::Multiply { lhs, rhs } => Ok(Box::new(BinaryOp::new(
                lhs.bind_node(registry, source)?,
                rhs.bind_node(registry, source)?,
                Multiply,
            )?)),
            Self::SafeDivide { lhs, rhs } => Ok(Box::new(BinaryOp::new(
                lhs.bind_node(registry, source)?,
                rhs.bind_node(registry, source)?,
                SafeDivide,
            )?)),
            Self::Step { lhs, rhs } => Ok(Box::new(BinaryOp::new(
                lhs.bind_node(registry, source)?,
                rhs.bind_node(registry, source)?,
                Step,
            )?)),
        }
    }
}
