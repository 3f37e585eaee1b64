//! Annotation metadata attached to units and producers

use std::collections::HashMap;

/// Attribute value inside an annotation's key→value map
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String attribute
    Str(String),
    /// Boolean attribute
    Bool(bool),
    /// Integer attribute
    Int(i64),
    /// Ordered list of attribute values
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Borrow the string payload, if this is a string attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean attribute
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer attribute
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A declared annotation: logical name plus attribute map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationData {
    name: String,
    attributes: HashMap<String, AttrValue>,
}

impl AnnotationData {
    /// Create an annotation with the given logical name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let _ = self.attributes.insert(key.into(), value.into());
        self
    }

    /// The annotation's logical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute by key
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }
}
