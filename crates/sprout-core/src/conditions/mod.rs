//! Condition evaluation
//!
//! Decides, for a candidate unit or producer and a registration phase,
//! whether it should be skipped. Semantics: logical AND across all declared
//! conditions - a single unmatched condition vetoes admission. Evaluation
//! order is declaration order, so repeated passes are reproducible.

pub mod property;
pub mod types;

pub use property::PropertyCondition;
pub use types::TypeResolvableCondition;

use tracing::trace;

use sprout_domain::error::{Error, Result};
use sprout_domain::ports::environment::Environment;
use sprout_domain::ports::inspector::UnitInspector;
use sprout_domain::ports::registry::RegistryView;
use sprout_domain::{ConditionContext, ConditionDecl, RegistrationPhase};

/// Evaluates declared conditions against the ambient context of one
/// registration pass.
///
/// Side-effect-free: safe to call repeatedly, never registers anything.
pub struct ConditionEvaluator<'a> {
    ctx: ConditionContext<'a>,
}

impl<'a> ConditionEvaluator<'a> {
    /// Assemble an evaluator over the pass's ambient state
    pub fn new(
        environment: &'a dyn Environment,
        registry: &'a dyn RegistryView,
        inspector: &'a dyn UnitInspector,
    ) -> Self {
        Self {
            ctx: ConditionContext::new(environment, registry, inspector),
        }
    }

    /// Whether a candidate carrying `conditions` should be skipped in `phase`.
    ///
    /// A declaration bound to a different phase is a configuration error: it
    /// propagates instead of being silently skipped.
    pub fn should_skip(
        &self,
        conditions: &[ConditionDecl],
        phase: RegistrationPhase,
    ) -> Result<bool> {
        for decl in conditions {
            if decl.phase() != phase {
                return Err(Error::condition(format!(
                    "condition `{}` declared for phase `{}` was evaluated during `{}`",
                    decl.condition().describe(),
                    decl.phase(),
                    phase,
                )));
            }
            let outcome = decl.condition().evaluate(&self.ctx)?;
            if !outcome.is_matched() {
                trace!(condition = %decl.condition().describe(), "condition unmatched, skipping candidate");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
