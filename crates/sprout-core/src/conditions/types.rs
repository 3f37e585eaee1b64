//! Type-resolvable condition

use sprout_domain::error::Result;
use sprout_domain::{Condition, ConditionContext, ConditionOutcome};

/// Matches when a type with the given qualified name is resolvable through
/// the active inspector (present in the unit catalog).
///
/// The compile-time analogue of a class-on-classpath check.
#[derive(Debug, Clone)]
pub struct TypeResolvableCondition {
    type_name: String,
}

impl TypeResolvableCondition {
    /// Match on resolvability of the named type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl Condition for TypeResolvableCondition {
    fn describe(&self) -> String {
        format!("type `{}` resolvable", self.type_name)
    }

    fn evaluate(&self, ctx: &ConditionContext<'_>) -> Result<ConditionOutcome> {
        Ok(if ctx.is_type_resolvable(&self.type_name) {
            ConditionOutcome::Matched
        } else {
            ConditionOutcome::Unmatched
        })
    }
}
