//! Bean container
//!
//! Assembles managed objects on demand from registered definitions.
//! Singletons are created at most once per key: creation is serialized by a
//! per-key lock with a double-checked singleton lookup, and re-entering a
//! key already being created on the same thread is reported as a circular
//! dependency instead of hanging. Lock entries are dropped once the
//! singleton is stored; afterwards lookups take the lock-free fast path.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use sprout_domain::error::{Error, Result};
use sprout_domain::{BeanInstance, TypeRef};

use crate::registry::{BeanDefinition, DefinitionRegistry, DefinitionSource};
use crate::resolver::DependencyResolver;

thread_local! {
    // keys currently being created on this thread, outermost first
    static CREATION_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Holds built singletons and drives deferred-construction recipes.
///
/// Owns the registry for its lifetime; tearing the container down tears the
/// registry and every built instance down with it.
pub struct BeanContainer {
    registry: Arc<DefinitionRegistry>,
    singletons: DashMap<String, BeanInstance>,
    creation_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl BeanContainer {
    /// Create a container over an existing registry
    pub fn new(registry: Arc<DefinitionRegistry>) -> Self {
        Self {
            registry,
            singletons: DashMap::new(),
            creation_locks: DashMap::new(),
        }
    }

    /// The definition registry this container assembles from
    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// Whether a singleton has already been built under `key`
    pub fn contains_instance(&self, key: &str) -> bool {
        self.singletons.contains_key(key)
    }

    /// Get (building if necessary) the singleton registered under `key`
    pub fn get(&self, key: &str) -> Result<BeanInstance> {
        if let Some(existing) = self.singletons.get(key) {
            return Ok(Arc::clone(&existing));
        }

        let definition = self
            .registry
            .get(key)
            .ok_or_else(|| Error::instantiation(key, "no definition registered under this key"))?;

        // cycle check must precede the per-key lock or a cycle would deadlock
        let cycle = CREATION_STACK.with(|stack| stack.borrow().iter().any(|k| k == key));
        if cycle {
            let chain = CREATION_STACK.with(|stack| stack.borrow().join(" -> "));
            return Err(Error::circular(key, format!("{chain} -> {key}")));
        }

        let lock = Arc::clone(
            &self
                .creation_locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        );
        let _guard = lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // another thread may have built it while we waited
        if let Some(existing) = self.singletons.get(key) {
            return Ok(Arc::clone(&existing));
        }

        CREATION_STACK.with(|stack| stack.borrow_mut().push(key.to_string()));
        let built = self.build(&definition);
        CREATION_STACK.with(|stack| {
            let _ = stack.borrow_mut().pop();
        });

        let instance = built?;
        let _ = self.singletons.insert(key.to_string(), Arc::clone(&instance));
        // waiters hold their own clone of the lock and re-check the
        // singleton map, so the entry can be dropped here
        let _ = self.creation_locks.remove(key);
        Ok(instance)
    }

    /// Get (building if necessary) the unique singleton of type `T`
    pub fn get_by_type<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let target = TypeRef::of::<T>();
        let resolver = DependencyResolver::new(self);
        let instance = resolver.resolve(&target, "get_by_type")?;
        instance.downcast::<T>().map_err(|_| {
            Error::instantiation(
                target.name(),
                "stored instance does not match its declared target type",
            )
        })
    }

    /// Execute a definition's construction recipe
    fn build(&self, definition: &BeanDefinition) -> Result<BeanInstance> {
        debug!(key = definition.key(), "creating singleton");
        match definition.source() {
            DefinitionSource::Class { constructor } => constructor
                .as_ref()
                .map(|construct| construct())
                .ok_or_else(|| {
                    Error::instantiation(
                        definition.key(),
                        "class definition declares no constructor",
                    )
                }),
            DefinitionSource::Producer(recipe) => {
                let resolver = DependencyResolver::new(self);
                let owner = if recipe.is_static {
                    None
                } else {
                    Some(resolver.instance_of(&recipe.declaring)?)
                };
                let mut args = Vec::with_capacity(recipe.params.len());
                for param in &recipe.params {
                    args.push(resolver.resolve(param, &recipe.method)?);
                }
                (recipe.invoke)(owner, &args)
            }
        }
    }
}

impl std::fmt::Debug for BeanContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanContainer")
            .field("definitions", &self.registry.len())
            .field("singletons", &self.singletons.len())
            .finish()
    }
}
