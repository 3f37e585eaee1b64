//! Bean definitions and the definition registry
//!
//! A definition is a deferred construction recipe plus identity. The
//! registry maps stable keys (qualified type name for class definitions,
//! method name for producer definitions) to definitions with idempotent
//! insertion: once a key is taken, later registrations for it are no-ops,
//! never overwrites and never errors.

use std::fmt;
use std::sync::Mutex;

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use sprout_domain::ports::registry::RegistryView;
use sprout_domain::{ConstructorFn, ProducerDescriptor, ProducerFn, TypeRef};

/// Deferred recipe bound to a producer method
#[derive(Clone)]
pub struct ProducerRecipe {
    /// The unit the producer is declared on
    pub declaring: TypeRef,
    /// Producer method name
    pub method: String,
    /// Static producers resolve no declaring instance
    pub is_static: bool,
    /// Ordered parameter types, resolved at invoke time
    pub params: Vec<TypeRef>,
    /// The underlying method, captured as a closure
    pub invoke: ProducerFn,
}

impl fmt::Debug for ProducerRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerRecipe")
            .field("declaring", &self.declaring)
            .field("method", &self.method)
            .field("is_static", &self.is_static)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// How a definition constructs its instance
#[derive(Clone)]
pub enum DefinitionSource {
    /// Plain class-based definition with an optional no-arg constructor
    Class {
        /// Constructor closure; absent for marker definitions that are
        /// never instantiated directly
        constructor: Option<ConstructorFn>,
    },
    /// Deferred-construction recipe bound to a producer method
    Producer(ProducerRecipe),
}

impl fmt::Debug for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class { constructor } => f
                .debug_struct("Class")
                .field("has_constructor", &constructor.is_some())
                .finish(),
            Self::Producer(recipe) => f.debug_tuple("Producer").field(recipe).finish(),
        }
    }
}

/// The registry's core record: identity, target type, construction source.
///
/// Created once during graph discovery and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    key: String,
    target: TypeRef,
    source: DefinitionSource,
    primary: bool,
}

impl BeanDefinition {
    /// Class-based definition keyed by the target's qualified name
    pub fn class(target: TypeRef) -> Self {
        Self {
            key: target.name().to_string(),
            target,
            source: DefinitionSource::Class { constructor: None },
            primary: false,
        }
    }

    /// Producer-based definition keyed by the method name
    pub fn from_producer(producer: &ProducerDescriptor) -> Self {
        Self {
            key: producer.name().to_string(),
            target: producer.return_type().clone(),
            primary: producer.is_primary(),
            source: DefinitionSource::Producer(ProducerRecipe {
                declaring: producer.declaring().clone(),
                method: producer.name().to_string(),
                is_static: producer.is_static(),
                params: producer.params().to_vec(),
                invoke: producer.invoke_fn(),
            }),
        }
    }

    /// Attach a no-arg constructor to a class-based definition
    pub fn with_constructor(mut self, constructor: ConstructorFn) -> Self {
        if let DefinitionSource::Class {
            constructor: ref mut slot,
        } = self.source
        {
            *slot = Some(constructor);
        }
        self
    }

    /// Mark this definition as the primary candidate of its target type
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Stable registry key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Declared target type
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    /// Construction source
    pub fn source(&self) -> &DefinitionSource {
        &self.source
    }

    /// Whether this definition is the primary candidate of its type
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// Mapping from stable key to definition, with idempotent insertion.
///
/// Keeps insertion order so traversal-order guarantees (first-writer-wins,
/// first-match declaring-instance lookup) stay deterministic.
pub struct DefinitionRegistry {
    definitions: DashMap<String, Arc<BeanDefinition>>,
    order: Mutex<Vec<String>>,
}

impl DefinitionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            order: Mutex::new(Vec::new()),
        }
    }

    /// Register a definition.
    ///
    /// Returns `true` when inserted; `false` when the key was already taken
    /// (the earlier registration wins, the new one is discarded).
    pub fn register(&self, definition: BeanDefinition) -> bool {
        let key = definition.key().to_string();
        match self.definitions.entry(key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                debug!(key = %key, "definition already registered, keeping the first");
                false
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                let _ = slot.insert(Arc::new(definition));
                self.order
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .push(key);
                true
            }
        }
    }

    /// Whether a definition is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Look up a definition by key
    pub fn get(&self, key: &str) -> Option<Arc<BeanDefinition>> {
        self.definitions.get(key).map(|entry| Arc::clone(&entry))
    }

    /// All definitions, in insertion order
    pub fn definitions_in_order(&self) -> Vec<Arc<BeanDefinition>> {
        let order = self
            .order
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        order.iter().filter_map(|key| self.get(key)).collect()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for DefinitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryView for DefinitionRegistry {
    fn contains_definition(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn definition_names(&self) -> Vec<String> {
        self.order
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for DefinitionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionRegistry")
            .field("definitions", &self.definition_names())
            .finish()
    }
}
