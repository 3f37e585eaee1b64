//! Application bootstrap
//!
//! Provides the composition root: loads configuration, wires the condition
//! environment, and exposes registration and lookup over one shared
//! definition registry and bean container.
//!
//! ```text
//! AppConfig → ConfigEnvironment → UnitRegistrar → DefinitionRegistry
//!                  ↑                    ↑                ↓
//!             properties          UNIT_CATALOG     BeanContainer
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//!
//! // Walk the unit graph reachable from a cataloged root
//! context.register(&TypeRef::of::<AppUnit>())?;
//!
//! // Retrieve managed objects
//! let greeting = context.get("greeting")?;
//! let limits = context.get_by_type::<Limits>()?;
//! ```

use std::sync::Arc;

use tracing::info;

use sprout_core::{
    BeanContainer, CatalogInspector, DefinitionRegistry, InstanceFactory, NullInstanceFactory,
    UnitRegistrar,
};
use sprout_domain::error::Result;
use sprout_domain::ports::inspector::UnitInspector;
use sprout_domain::{BeanInstance, TypeRef};

use crate::config::AppConfig;
use crate::environment::ConfigEnvironment;

/// Application context combining configuration, the condition environment,
/// and the bean container.
///
/// All registration passes run against the same registry, so later passes
/// see (and never overwrite) definitions contributed by earlier ones.
pub struct ApplicationContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    environment: ConfigEnvironment,
    factory: Arc<dyn InstanceFactory>,
    container: BeanContainer,
}

impl ApplicationContext {
    /// Register the unit graph reachable from `root`, resolving descriptors
    /// through the compile-time unit catalog
    pub fn register(&self, root: &TypeRef) -> Result<()> {
        self.register_with_inspector(&CatalogInspector, root)
    }

    /// Register the unit graph reachable from `root` against an explicit
    /// inspector
    pub fn register_with_inspector(
        &self,
        inspector: &dyn UnitInspector,
        root: &TypeRef,
    ) -> Result<()> {
        let registrar = UnitRegistrar::new(
            inspector,
            self.container.registry(),
            self.factory.as_ref(),
            &self.environment,
        );
        registrar.register(root)
    }

    /// Get (building if necessary) the managed object registered under `key`
    pub fn get(&self, key: &str) -> Result<BeanInstance> {
        self.container.get(key)
    }

    /// Get (building if necessary) the unique managed object of type `T`
    pub fn get_by_type<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.container.get_by_type::<T>()
    }

    /// The underlying definition registry
    pub fn registry(&self) -> &DefinitionRegistry {
        self.container.registry()
    }

    /// The underlying bean container
    pub fn container(&self) -> &BeanContainer {
        &self.container
    }
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from a loaded configuration.
///
/// Imports are treated as plain types; callers with import registrars use
/// [`init_app_with_factory`].
pub fn init_app(config: AppConfig) -> Result<ApplicationContext> {
    init_app_with_factory(config, Arc::new(NullInstanceFactory::new()))
}

/// Initialize the application context with a caller-supplied instance
/// factory for import-registrar types
pub fn init_app_with_factory(
    config: AppConfig,
    factory: Arc<dyn InstanceFactory>,
) -> Result<ApplicationContext> {
    info!(
        properties = config.properties.len(),
        "Initializing application context"
    );

    let environment = ConfigEnvironment::from_config(&config);
    let container = BeanContainer::new(Arc::new(DefinitionRegistry::new()));

    Ok(ApplicationContext {
        config: Arc::new(config),
        environment,
        factory,
        container,
    })
}

/// Initialize an application context for testing
pub fn init_test_app() -> Result<ApplicationContext> {
    init_app(AppConfig::default())
}
