//! Configuration-unit descriptors

use std::fmt;

use crate::constants::CONFIGURATION_ANNOTATION;
use crate::descriptor::{AnnotationData, AttrValue, ProducerDescriptor, TypeRef};
use crate::instance::ConstructorFn;
use crate::ports::condition::ConditionDecl;

/// A conditionally-enabled property type declared on a configuration unit.
///
/// Registered as a plain class-based definition when the declaring unit is
/// admitted; the constructor typically produces the type's default value.
#[derive(Clone)]
pub struct PropertiesDecl {
    target: TypeRef,
    construct: ConstructorFn,
}

impl PropertiesDecl {
    /// Declare a property type with its constructor
    pub fn new(target: TypeRef, construct: ConstructorFn) -> Self {
        Self { target, construct }
    }

    /// The property type's identity
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    /// Clone a handle to the constructor
    pub fn constructor(&self) -> ConstructorFn {
        std::sync::Arc::clone(&self.construct)
    }
}

impl fmt::Debug for PropertiesDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesDecl")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Immutable structural view of one configuration unit.
///
/// Produced by a [`UnitInspector`](crate::ports::inspector::UnitInspector)
/// (or built by hand in tests) and only ever read by the registrar.
#[derive(Clone, Default)]
pub struct UnitDescriptor {
    key: Option<TypeRef>,
    annotations: Vec<AnnotationData>,
    conditions: Vec<ConditionDecl>,
    nested: Vec<TypeRef>,
    imports: Vec<TypeRef>,
    enabled_properties: Vec<PropertiesDecl>,
    producers: Vec<ProducerDescriptor>,
    constructor: Option<ConstructorFn>,
    primary: bool,
}

impl UnitDescriptor {
    /// Create a descriptor for the unit identified by `key`
    pub fn new(key: TypeRef) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
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

    /// Declare a static nested type reference
    pub fn with_nested(mut self, nested: TypeRef) -> Self {
        self.nested.push(nested);
        self
    }

    /// Declare an imported unit reference
    pub fn with_import(mut self, import: TypeRef) -> Self {
        self.imports.push(import);
        self
    }

    /// Declare a conditionally-enabled property type
    pub fn with_properties(mut self, properties: PropertiesDecl) -> Self {
        self.enabled_properties.push(properties);
        self
    }

    /// Declare a producer method
    pub fn with_producer(mut self, producer: ProducerDescriptor) -> Self {
        self.producers.push(producer);
        self
    }

    /// Provide a no-argument constructor for the unit's own class definition
    pub fn with_constructor(mut self, construct: ConstructorFn) -> Self {
        self.constructor = Some(construct);
        self
    }

    /// Mark the unit's own definition as the primary candidate of its type
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// The unit's qualified identity
    ///
    /// # Panics
    /// Panics if the descriptor was built via `Default` without a key; the
    /// builder entry point [`UnitDescriptor::new`] always sets one.
    pub fn key(&self) -> &TypeRef {
        self.key
            .as_ref()
            .unwrap_or_else(|| panic!("unit descriptor built without a type key"))
    }

    /// Declared annotations
    pub fn annotations(&self) -> &[AnnotationData] {
        &self.annotations
    }

    /// Whether an annotation with the given logical name is declared
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name() == name)
    }

    /// Look up a declared annotation by logical name
    pub fn annotation(&self, name: &str) -> Option<&AnnotationData> {
        self.annotations.iter().find(|a| a.name() == name)
    }

    /// Look up one attribute of a declared annotation
    pub fn attribute(&self, annotation: &str, key: &str) -> Option<&AttrValue> {
        self.annotation(annotation).and_then(|a| a.attribute(key))
    }

    /// Condition declarations, in declaration order
    pub fn conditions(&self) -> &[ConditionDecl] {
        &self.conditions
    }

    /// Static nested type references
    pub fn nested(&self) -> &[TypeRef] {
        &self.nested
    }

    /// Imported unit references
    pub fn imports(&self) -> &[TypeRef] {
        &self.imports
    }

    /// Conditionally-enabled property declarations
    pub fn enabled_properties(&self) -> &[PropertiesDecl] {
        &self.enabled_properties
    }

    /// Declared producer methods
    pub fn producers(&self) -> &[ProducerDescriptor] {
        &self.producers
    }

    /// Clone a handle to the unit's own constructor, if one was declared
    pub fn constructor(&self) -> Option<ConstructorFn> {
        self.constructor.as_ref().map(std::sync::Arc::clone)
    }

    /// Whether the unit's own definition is primary
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Whether this type looks like a configuration unit: directly annotated
    /// as one, or exposing at least one producer method
    pub fn is_unit_shaped(&self) -> bool {
        self.has_annotation(CONFIGURATION_ANNOTATION) || !self.producers.is_empty()
    }
}

impl fmt::Debug for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDescriptor")
            .field("key", &self.key)
            .field("annotations", &self.annotations)
            .field("nested", &self.nested)
            .field("imports", &self.imports)
            .field("producers", &self.producers)
            .finish_non_exhaustive()
    }
}
