//! Read-only registry view exposed to conditions

/// The slice of registry state conditions are allowed to see.
///
/// Kept deliberately narrow: conditions may ask what is registered but can
/// never register anything themselves.
pub trait RegistryView: Send + Sync {
    /// Whether a definition is registered under `key`
    fn contains_definition(&self, key: &str) -> bool;

    /// Registered definition keys, in insertion order
    fn definition_names(&self) -> Vec<String>;
}
