//! Configuration-unit descriptors
//!
//! Descriptors are the statically-typed replacement for runtime reflection:
//! an introspection pass (or a hand-written builder, in tests) produces an
//! immutable structural view of a configuration unit, and the registration
//! engine only ever reads it.

pub mod annotation;
pub mod producer;
pub mod unit;

pub use annotation::{AnnotationData, AttrValue};
pub use producer::{ProducerDescriptor, ProducerFn};
pub use unit::{PropertiesDecl, UnitDescriptor};

use std::any::{type_name, TypeId};
use std::fmt;

/// Stable identity of a managed type: its `TypeId` plus the fully-qualified
/// type name used as the registry key.
///
/// Assignability between types is `TypeId` equality; Rust has no subtype
/// relation over erased types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
}

impl TypeRef {
    /// Identity of the concrete type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The erased type identity
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully-qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
