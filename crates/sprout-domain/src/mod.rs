//! # Sprout Domain
//!
//! Core data model for the Sprout component-registration engine: statically
//! typed configuration-unit descriptors, deferred-construction bean
//! definitions, and the port traits the engine consumes.
//!
//! This crate is intentionally free of I/O and runtime machinery. The graph
//! traversal, condition evaluation, and instance construction live in
//! `sprout-core`; configuration loading and bootstrap live in `sprout`.

pub mod constants;
pub mod descriptor;
pub mod error;
pub mod instance;
pub mod ports;

pub use descriptor::{
    AnnotationData, AttrValue, ProducerDescriptor, ProducerFn, PropertiesDecl, TypeRef,
    UnitDescriptor,
};
pub use error::{Error, Result};
pub use instance::{instance_of, BeanInstance, ConstructorFn};
pub use ports::condition::{
    Condition, ConditionContext, ConditionDecl, ConditionOutcome, RegistrationPhase,
};
pub use ports::environment::{Environment, MapEnvironment};
pub use ports::inspector::UnitInspector;
pub use ports::registry::RegistryView;
