//! Shared constants for annotation names used across the registration engine

/// Marks a type as a configuration unit
pub const CONFIGURATION_ANNOTATION: &str = "configuration";

/// Marks a method descriptor as a producer ("bean factory") method
pub const PRODUCER_ANNOTATION: &str = "producer";

/// Declares imported unit references on a configuration unit
pub const IMPORT_ANNOTATION: &str = "import";

/// Declares conditionally-enabled property types on a configuration unit
pub const ENABLE_PROPERTIES_ANNOTATION: &str = "enable-properties";
