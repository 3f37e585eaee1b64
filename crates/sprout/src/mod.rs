//! # Sprout Application Facade
//!
//! Configuration, logging, and bootstrap for applications embedding the
//! Sprout registration engine.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`environment`] | Condition environment backed by configuration |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Application context: registration and lookup |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{ApplicationContext, init_app, init_app_with_factory, init_test_app};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use environment::ConfigEnvironment;
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};

// Re-export the engine layers for embedding callers
pub use sprout_core as core;
pub use sprout_domain as domain;
