//! Property presence/value condition

use sprout_domain::error::Result;
use sprout_domain::{Condition, ConditionContext, ConditionOutcome};

/// Matches when a configuration property is present (and, if an expected
/// value is declared, equal to it).
#[derive(Debug, Clone)]
pub struct PropertyCondition {
    key: String,
    expected: Option<String>,
    match_if_missing: bool,
}

impl PropertyCondition {
    /// Match on the presence of `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            expected: None,
            match_if_missing: false,
        }
    }

    /// Require the property to hold an exact value
    pub fn with_value(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Treat an absent property as a match
    pub fn match_if_missing(mut self) -> Self {
        self.match_if_missing = true;
        self
    }
}

impl Condition for PropertyCondition {
    fn describe(&self) -> String {
        match &self.expected {
            Some(value) => format!("property `{}` == `{}`", self.key, value),
            None => format!("property `{}` present", self.key),
        }
    }

    fn evaluate(&self, ctx: &ConditionContext<'_>) -> Result<ConditionOutcome> {
        match ctx.property(&self.key) {
            Some(actual) => {
                let matched = self
                    .expected
                    .as_ref()
                    .is_none_or(|expected| expected == &actual);
                Ok(if matched {
                    ConditionOutcome::Matched
                } else {
                    ConditionOutcome::Unmatched
                })
            }
            None if self.match_if_missing => Ok(ConditionOutcome::Matched),
            None => Ok(ConditionOutcome::Unmatched),
        }
    }
}
