//! Unit Catalog
//!
//! Compile-time registration of configuration units using linkme distributed
//! slices. The catalog plays the role a classpath plays for a reflective
//! container: a type is "resolvable" exactly when an entry for its qualified
//! name is linked into the binary.
//!
//! ## Usage
//!
//! ### Registering a unit
//!
//! ```ignore
//! use sprout_core::catalog::{UnitCatalogEntry, UNIT_CATALOG};
//!
//! #[linkme::distributed_slice(UNIT_CATALOG)]
//! static APP_UNIT: UnitCatalogEntry = UnitCatalogEntry {
//!     name: "myapp::AppUnit",
//!     description: "Root application unit",
//!     descriptor: app_unit_descriptor,
//! };
//! ```
//!
//! ### Inspecting through the catalog
//!
//! ```ignore
//! let inspector = CatalogInspector;
//! let descriptor = inspector.inspect(&TypeRef::of::<AppUnit>())?;
//! ```

use std::collections::HashMap;

use sprout_domain::error::{Error, Result};
use sprout_domain::ports::inspector::UnitInspector;
use sprout_domain::{TypeRef, UnitDescriptor};

/// Catalog entry for one configuration unit.
///
/// The descriptor function is invoked on every inspection; descriptors are
/// cheap to build and immutable once returned.
pub struct UnitCatalogEntry {
    /// Qualified type name; must equal `TypeRef::of::<T>().name()`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory producing the unit's structural view
    pub descriptor: fn() -> UnitDescriptor,
}

// Auto-collection via linkme distributed slices - units submit entries at compile time
#[linkme::distributed_slice]
pub static UNIT_CATALOG: [UnitCatalogEntry] = [..];

/// Find a catalog entry by qualified type name
pub fn lookup_unit(name: &str) -> Option<&'static UnitCatalogEntry> {
    UNIT_CATALOG.iter().find(|entry| entry.name == name)
}

/// List all registered units as (name, description) tuples
pub fn list_units() -> Vec<(&'static str, &'static str)> {
    UNIT_CATALOG
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

/// Inspector backed by the compile-time unit catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogInspector;

impl UnitInspector for CatalogInspector {
    fn inspect(&self, target: &TypeRef) -> Result<UnitDescriptor> {
        lookup_unit(target.name())
            .map(|entry| (entry.descriptor)())
            .ok_or_else(|| Error::introspection(target.name(), "type not present in unit catalog"))
    }

    fn is_resolvable(&self, name: &str) -> bool {
        lookup_unit(name).is_some()
    }
}

/// Inspector over hand-built descriptors.
///
/// Lets traversal be exercised without the compile-time catalog: tests and
/// embedding callers register descriptors directly.
#[derive(Default)]
pub struct StaticInspector {
    units: HashMap<String, UnitDescriptor>,
}

impl StaticInspector {
    /// Create an empty inspector
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own type key
    pub fn with_unit(mut self, descriptor: UnitDescriptor) -> Self {
        let _ = self
            .units
            .insert(descriptor.key().name().to_string(), descriptor);
        self
    }
}

impl UnitInspector for StaticInspector {
    fn inspect(&self, target: &TypeRef) -> Result<UnitDescriptor> {
        self.units
            .get(target.name())
            .cloned()
            .ok_or_else(|| Error::introspection(target.name(), "no descriptor registered"))
    }

    fn is_resolvable(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }
}
