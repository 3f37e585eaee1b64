//! Condition port: predicates over an ambient context deciding admission

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::environment::Environment;
use crate::ports::inspector::UnitInspector;
use crate::ports::registry::RegistryView;

/// Point in the discovery pipeline at which conditions are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPhase {
    /// Bean-definition registration (the graph-discovery pass)
    #[default]
    RegisterDefinition,
    /// Bean-instance creation (deferred recipe execution).
    ///
    /// The engine evaluates conditions during registration only; a
    /// declaration bound to this phase fails fast with a phase-mismatch
    /// error instead of being carried to creation time. The variant exists
    /// so such declarations are diagnosed rather than silently skipped.
    CreateInstance,
}

impl fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterDefinition => f.write_str("register-definition"),
            Self::CreateInstance => f.write_str("create-instance"),
        }
    }
}

/// Outcome of a single condition evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    /// The condition matched; the candidate stays admitted
    Matched,
    /// The condition did not match; the candidate is skipped
    Unmatched,
}

impl ConditionOutcome {
    /// Whether the outcome admits the candidate
    pub fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Ambient, read-only view consulted by conditions.
///
/// Combines the caller's configuration environment, the registry contents
/// known so far, and type resolvability. Constructed once per registration
/// pass; never mutated by the units under evaluation.
pub struct ConditionContext<'a> {
    environment: &'a dyn Environment,
    registry: &'a dyn RegistryView,
    inspector: &'a dyn UnitInspector,
}

impl<'a> ConditionContext<'a> {
    /// Assemble a context for one registration pass
    pub fn new(
        environment: &'a dyn Environment,
        registry: &'a dyn RegistryView,
        inspector: &'a dyn UnitInspector,
    ) -> Self {
        Self {
            environment,
            registry,
            inspector,
        }
    }

    /// Look up a configuration property
    pub fn property(&self, key: &str) -> Option<String> {
        self.environment.get(key)
    }

    /// Look up a configuration property as a boolean
    pub fn property_bool(&self, key: &str) -> Option<bool> {
        self.environment.get_bool(key)
    }

    /// Whether a definition is already registered under `key`
    pub fn contains_definition(&self, key: &str) -> bool {
        self.registry.contains_definition(key)
    }

    /// Whether a type with the given qualified name is resolvable
    pub fn is_type_resolvable(&self, name: &str) -> bool {
        self.inspector.is_resolvable(name)
    }
}

/// A predicate over the ambient context deciding whether a unit or producer
/// is admitted.
///
/// Evaluation must be side-effect-free: it is safe to call repeatedly and
/// must never register anything.
pub trait Condition: Send + Sync {
    /// Human-readable description used in diagnostics
    fn describe(&self) -> String;

    /// Evaluate the condition against the ambient context
    fn evaluate(&self, ctx: &ConditionContext<'_>) -> Result<ConditionOutcome>;
}

/// A condition attached to a candidate, bound to the phase it applies to.
///
/// Evaluating a declaration in a phase other than the one it was declared
/// for is a configuration error, never a silent skip.
#[derive(Clone)]
pub struct ConditionDecl {
    phase: RegistrationPhase,
    condition: Arc<dyn Condition>,
}

impl ConditionDecl {
    /// Declare a condition for the definition-registration phase
    pub fn new(condition: Arc<dyn Condition>) -> Self {
        Self {
            phase: RegistrationPhase::RegisterDefinition,
            condition,
        }
    }

    /// Declare a condition for an explicit phase
    pub fn for_phase(phase: RegistrationPhase, condition: Arc<dyn Condition>) -> Self {
        Self { phase, condition }
    }

    /// The phase this declaration applies to
    pub fn phase(&self) -> RegistrationPhase {
        self.phase
    }

    /// The declared condition
    pub fn condition(&self) -> &dyn Condition {
        self.condition.as_ref()
    }
}

impl fmt::Debug for ConditionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionDecl")
            .field("phase", &self.phase)
            .field("condition", &self.condition.describe())
            .finish()
    }
}
