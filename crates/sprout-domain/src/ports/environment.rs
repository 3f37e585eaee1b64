//! Configuration environment port

use std::collections::HashMap;

/// Read-only key→value configuration lookup supplied by the caller.
///
/// Consumed by the condition evaluator; the engine never writes to it.
pub trait Environment: Send + Sync {
    /// Look up a property value
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a property as a boolean. Accepts `true`/`false` and `1`/`0`.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|value| match value.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        })
    }

    /// Whether a property is present at all
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory environment backed by a map, used in tests and embedding callers
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

impl MapEnvironment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.values.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
