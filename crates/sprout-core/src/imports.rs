//! Import registrar capability and the caller-supplied instance factory

use std::sync::Arc;

use sprout_domain::error::Result;
use sprout_domain::{TypeRef, UnitDescriptor};

use crate::registry::DefinitionRegistry;

/// Callback capability of an imported registrar type.
///
/// When a configuration unit imports a type implementing this capability,
/// the registrar is instantiated through the caller's [`InstanceFactory`]
/// and handed the importing unit's metadata together with the registry.
pub trait ImportRegistrar: Send + Sync {
    /// Register additional definitions on behalf of the importing unit
    fn register_definitions(
        &self,
        importing: &UnitDescriptor,
        registry: &DefinitionRegistry,
    ) -> Result<()>;
}

/// Instance-creation capability supplied by the bootstrap caller.
///
/// The engine does not implement general object construction; it only asks
/// the caller to materialize import-registrar types. Returning `Ok(None)`
/// means the target does not implement the registrar capability.
pub trait InstanceFactory: Send + Sync {
    /// Create an import registrar for `target`, if the type is one
    fn create_registrar(&self, target: &TypeRef) -> Result<Option<Arc<dyn ImportRegistrar>>>;
}

/// Factory that treats every import as a plain (non-registrar) type
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInstanceFactory;

impl NullInstanceFactory {
    /// Create the null factory
    pub fn new() -> Self {
        Self
    }
}

impl InstanceFactory for NullInstanceFactory {
    fn create_registrar(&self, _target: &TypeRef) -> Result<Option<Arc<dyn ImportRegistrar>>> {
        Ok(None)
    }
}
