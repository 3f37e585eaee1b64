//! Producer method descriptors
//!
//! A producer is a method whose return value becomes a managed object once
//! its owning unit is admitted. The descriptor captures the method's shape
//! (return type, ordered parameters, static/instance flag) together with an
//! invoke closure; the closure is stored as data inside the registered
//! definition and executed lazily by the container.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::{AnnotationData, TypeRef};
use crate::error::Result;
use crate::instance::BeanInstance;
use crate::ports::condition::ConditionDecl;

/// Invoke closure of a producer method.
///
/// Receives the declaring instance (`None` for static producers) and the
/// resolved parameter values, in declaration order.
pub type ProducerFn =
    Arc<dyn Fn(Option<BeanInstance>, &[BeanInstance]) -> Result<BeanInstance> + Send + Sync>;

/// Structural view of one producer method
#[derive(Clone)]
pub struct ProducerDescriptor {
    declaring: TypeRef,
    name: String,
    return_type: TypeRef,
    params: Vec<TypeRef>,
    is_static: bool,
    primary: bool,
    annotations: Vec<AnnotationData>,
    conditions: Vec<ConditionDecl>,
    invoke: ProducerFn,
}

impl ProducerDescriptor {
    /// Create a producer descriptor for `name` declared on `declaring`
    pub fn new(
        declaring: TypeRef,
        name: impl Into<String>,
        return_type: TypeRef,
        invoke: ProducerFn,
    ) -> Self {
        Self {
            declaring,
            name: name.into(),
            return_type,
            params: Vec::new(),
            is_static: false,
            primary: false,
            annotations: Vec::new(),
            conditions: Vec::new(),
            invoke,
        }
    }

    /// Append a parameter type (declaration order)
    pub fn with_param(mut self, param: TypeRef) -> Self {
        self.params.push(param);
        self
    }

    /// Mark the producer as static: no declaring instance is resolved
    pub fn static_producer(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the produced definition as the primary candidate of its type
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Attach an annotation
    pub fn with_annotation(mut self, annotation: AnnotationData) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Attach a condition declaration (declaration order is preserved)
    pub fn with_condition(mut self, condition: ConditionDecl) -> Self {
        self.conditions.push(condition);
        self
    }

    /// The unit this producer is declared on
    pub fn declaring(&self) -> &TypeRef {
        &self.declaring
    }

    /// Method name; doubles as the definition's registry key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared return type
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Ordered parameter types
    pub fn params(&self) -> &[TypeRef] {
        &self.params
    }

    /// Whether the producer is static
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the produced definition is the primary candidate of its type
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Declared annotations
    pub fn annotations(&self) -> &[AnnotationData] {
        &self.annotations
    }

    /// Condition declarations, in declaration order
    pub fn conditions(&self) -> &[ConditionDecl] {
        &self.conditions
    }

    /// Clone a handle to the invoke closure
    pub fn invoke_fn(&self) -> ProducerFn {
        Arc::clone(&self.invoke)
    }
}

impl fmt::Debug for ProducerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerDescriptor")
            .field("declaring", &self.declaring)
            .field("name", &self.name)
            .field("return_type", &self.return_type)
            .field("params", &self.params)
            .field("is_static", &self.is_static)
            .field("primary", &self.primary)
            .finish_non_exhaustive()
    }
}
