//! Condition environment backed by the application configuration

use std::collections::BTreeMap;

use sprout_domain::Environment;

use crate::config::AppConfig;

/// Read-only view over the configuration `properties` table, consulted by
/// registration conditions.
#[derive(Debug, Clone, Default)]
pub struct ConfigEnvironment {
    properties: BTreeMap<String, String>,
}

impl ConfigEnvironment {
    /// Build from the loaded application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            properties: config.properties.clone(),
        }
    }
}

impl Environment for ConfigEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}
