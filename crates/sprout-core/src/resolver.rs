//! Dependency resolution
//!
//! Resolves one producer parameter to a managed object by target type.
//! Exact single-match is required: zero candidates, or several with no
//! unique `primary`, is an error - never a silent arbitrary pick.

use std::sync::Arc;

use sprout_domain::error::{Error, Result};
use sprout_domain::{BeanInstance, TypeRef};

use crate::container::BeanContainer;
use crate::registry::BeanDefinition;

/// Resolves producer parameters against the container's registry,
/// instantiating definitions on demand.
pub struct DependencyResolver<'a> {
    container: &'a BeanContainer,
}

impl<'a> DependencyResolver<'a> {
    /// Resolve against `container`
    pub fn new(container: &'a BeanContainer) -> Self {
        Self { container }
    }

    /// Resolve a single object assignable to `parameter`.
    ///
    /// `requested_by` names the definition asking, for diagnostics.
    pub fn resolve(&self, parameter: &TypeRef, requested_by: &str) -> Result<BeanInstance> {
        let candidates: Vec<Arc<BeanDefinition>> = self
            .container
            .registry()
            .definitions_in_order()
            .into_iter()
            .filter(|definition| definition.target().id() == parameter.id())
            .collect();

        match candidates.as_slice() {
            [] => Err(Error::unresolved(
                parameter.name(),
                requested_by,
                "no definition with a matching target type",
            )),
            [only] => self.container.get(only.key()),
            _ => {
                let primaries: Vec<&Arc<BeanDefinition>> = candidates
                    .iter()
                    .filter(|definition| definition.is_primary())
                    .collect();
                if let [primary] = primaries.as_slice() {
                    return self.container.get(primary.key());
                }
                let keys: Vec<&str> = candidates.iter().map(|d| d.key()).collect();
                Err(Error::unresolved(
                    parameter.name(),
                    requested_by,
                    format!(
                        "{} candidates match ({}) and no unique primary is declared",
                        candidates.len(),
                        keys.join(", "),
                    ),
                ))
            }
        }
    }

    /// Resolve the declaring instance for a non-static producer: the first
    /// definition (in insertion order) whose target type matches.
    ///
    /// When several definitions share the declaring type the first match is
    /// taken arbitrarily; disambiguating here is a known limitation.
    pub fn instance_of(&self, declaring: &TypeRef) -> Result<BeanInstance> {
        let first = self
            .container
            .registry()
            .definitions_in_order()
            .into_iter()
            .find(|definition| definition.target().id() == declaring.id())
            .ok_or_else(|| {
                Error::instantiation(
                    declaring.name(),
                    "no definition registered for the declaring unit",
                )
            })?;
        self.container.get(first.key())
    }
}
