//! Unit Registrar
//!
//! The graph-walking engine: recursively discovers configuration units
//! reachable from a root (nested types, imports, conditionally-enabled
//! property types), applies the condition evaluator, and registers a
//! construction recipe for each accepted unit and each of its producer
//! methods.
//!
//! Failure semantics: a structural introspection failure on any single
//! candidate drops that branch without aborting sibling processing; every
//! other error aborts the pass, wrapped with the root unit's identity.

use tracing::{debug, trace};

use sprout_domain::error::{Error, Result};
use sprout_domain::ports::environment::Environment;
use sprout_domain::ports::inspector::UnitInspector;
use sprout_domain::{RegistrationPhase, TypeRef, UnitDescriptor};

use crate::conditions::ConditionEvaluator;
use crate::imports::InstanceFactory;
use crate::registry::{BeanDefinition, DefinitionRegistry};

/// Drives one registration pass over the graph reachable from a root unit.
///
/// Registration is single-threaded and synchronous; the registrar borrows
/// the registry for the duration of the pass and owns nothing itself.
pub struct UnitRegistrar<'a> {
    inspector: &'a dyn UnitInspector,
    registry: &'a DefinitionRegistry,
    factory: &'a dyn InstanceFactory,
    evaluator: ConditionEvaluator<'a>,
}

impl<'a> UnitRegistrar<'a> {
    /// Assemble a registrar over the pass's collaborators
    pub fn new(
        inspector: &'a dyn UnitInspector,
        registry: &'a DefinitionRegistry,
        factory: &'a dyn InstanceFactory,
        environment: &'a dyn Environment,
    ) -> Self {
        Self {
            inspector,
            registry,
            factory,
            evaluator: ConditionEvaluator::new(environment, registry, inspector),
        }
    }

    /// Register the graph reachable from `root`.
    ///
    /// A root that cannot be introspected registers nothing and returns
    /// `Ok`; a root rejected by its conditions likewise registers nothing.
    /// Any other failure is wrapped with the root's identity.
    pub fn register(&self, root: &TypeRef) -> Result<()> {
        let descriptor = match self.inspector.inspect(root) {
            Ok(descriptor) => descriptor,
            Err(err) if err.is_introspection() => {
                debug!(root = root.name(), %err, "root unit not introspectable, registering nothing");
                return Ok(());
            }
            Err(err) => return Err(Error::registration(root.name(), err)),
        };

        let skip = self
            .evaluator
            .should_skip(descriptor.conditions(), RegistrationPhase::RegisterDefinition)
            .map_err(|err| Error::registration(root.name(), err))?;
        if skip {
            debug!(root = root.name(), "root unit rejected by its conditions");
            return Ok(());
        }

        self.register_unit(&descriptor)
            .map_err(|err| Error::registration(root.name(), err))
    }

    /// Register one admitted unit: its nested units, imports, enabled
    /// property types, its own class definition, and its producers.
    fn register_unit(&self, unit: &UnitDescriptor) -> Result<()> {
        trace!(unit = unit.key().name(), "registering configuration unit");

        self.register_nested(unit)?;
        self.register_imports(unit)?;
        self.register_enabled_properties(unit);
        self.register_self(unit);
        self.register_producers(unit)?;

        Ok(())
    }

    fn register_nested(&self, unit: &UnitDescriptor) -> Result<()> {
        for nested in unit.nested() {
            // identity guard: revisiting a node must not duplicate side effects
            if self.registry.contains(nested.name()) {
                continue;
            }
            let descriptor = match self.inspector.inspect(nested) {
                Ok(descriptor) => descriptor,
                Err(err) if err.is_introspection() => {
                    debug!(nested = nested.name(), %err, "dropping nested candidate");
                    continue;
                }
                Err(err) => return Err(err),
            };
            if !descriptor.is_unit_shaped() {
                continue;
            }
            if self
                .evaluator
                .should_skip(descriptor.conditions(), RegistrationPhase::RegisterDefinition)?
            {
                trace!(nested = nested.name(), "nested unit rejected by its conditions");
                continue;
            }
            self.register_unit(&descriptor)?;
        }
        Ok(())
    }

    fn register_imports(&self, unit: &UnitDescriptor) -> Result<()> {
        for import in unit.imports() {
            if let Some(registrar) = self.factory.create_registrar(import)? {
                trace!(import = import.name(), "invoking import registrar");
                registrar.register_definitions(unit, self.registry)?;
            }
            if self.registry.contains(import.name()) {
                continue;
            }
            let descriptor = match self.inspector.inspect(import) {
                Ok(descriptor) => descriptor,
                Err(err) if err.is_introspection() => {
                    debug!(import = import.name(), %err, "dropping imported candidate");
                    continue;
                }
                Err(err) => return Err(err),
            };
            if !descriptor.is_unit_shaped() {
                continue;
            }
            if self
                .evaluator
                .should_skip(descriptor.conditions(), RegistrationPhase::RegisterDefinition)?
            {
                trace!(import = import.name(), "imported unit rejected by its conditions");
                continue;
            }
            self.register_unit(&descriptor)?;
        }
        Ok(())
    }

    fn register_enabled_properties(&self, unit: &UnitDescriptor) {
        for properties in unit.enabled_properties() {
            if self.registry.contains(properties.target().name()) {
                continue;
            }
            let definition = BeanDefinition::class(properties.target().clone())
                .with_constructor(properties.constructor());
            let _ = self.registry.register(definition);
        }
    }

    fn register_self(&self, unit: &UnitDescriptor) {
        let mut definition = BeanDefinition::class(unit.key().clone());
        if let Some(constructor) = unit.constructor() {
            definition = definition.with_constructor(constructor);
        }
        if unit.is_primary() {
            definition = definition.primary();
        }
        let _ = self.registry.register(definition);
    }

    fn register_producers(&self, unit: &UnitDescriptor) -> Result<()> {
        for producer in unit.producers() {
            if self
                .evaluator
                .should_skip(producer.conditions(), RegistrationPhase::RegisterDefinition)?
            {
                trace!(producer = producer.name(), "producer rejected by its conditions");
                continue;
            }
            // key collision: the first registration wins, silently
            let _ = self.registry.register(BeanDefinition::from_producer(producer));
        }
        Ok(())
    }
}
