//! Application-facade constants
//!
//! Constants tied to configuration loading and logging. Engine-level
//! constants (annotation names) live in `sprout_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sprout.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sprout";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SPROUT";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable consulted for the tracing filter
pub const ENV_LOG_FILTER: &str = "SPROUT_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Re-export domain constants for convenience
pub use sprout_domain::constants::*;
