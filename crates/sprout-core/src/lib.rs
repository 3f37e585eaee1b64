//! # Sprout Core
//!
//! The component-registration engine: given a root configuration unit, the
//! [`UnitRegistrar`] walks nested units, imports, and conditionally-enabled
//! property types, applies the [`ConditionEvaluator`], and registers a
//! deferred construction recipe for every accepted unit and producer into
//! the [`DefinitionRegistry`]. The [`BeanContainer`] later assembles
//! instances on demand, resolving producer parameters through the
//! [`DependencyResolver`].
//!
//! ## Architecture
//!
//! ```text
//! register(root)
//!     │
//!     ▼
//! UnitInspector ──▶ UnitDescriptor          (metadata introspection)
//!     │
//!     ▼
//! ConditionEvaluator ──▶ admit / skip       (AND across declared conditions)
//!     │
//!     ▼
//! UnitRegistrar ──▶ DefinitionRegistry      (recursive graph discovery)
//!     │                    │
//!     ▼                    ▼
//! ImportRegistrar     BeanContainer ◀──▶ DependencyResolver
//! (caller capability)  (lazy, per-key at-most-once creation)
//! ```
//!
//! Registration is single-threaded and synchronous; instance creation may
//! happen later from another thread and is serialized per key.

pub mod catalog;
pub mod conditions;
pub mod container;
pub mod imports;
pub mod registrar;
pub mod registry;
pub mod resolver;

pub use catalog::{list_units, lookup_unit, CatalogInspector, StaticInspector, UnitCatalogEntry, UNIT_CATALOG};
pub use conditions::{ConditionEvaluator, PropertyCondition, TypeResolvableCondition};
pub use container::BeanContainer;
pub use imports::{ImportRegistrar, InstanceFactory, NullInstanceFactory};
pub use registrar::UnitRegistrar;
pub use registry::{BeanDefinition, DefinitionRegistry, DefinitionSource, ProducerRecipe};
pub use resolver::DependencyResolver;
