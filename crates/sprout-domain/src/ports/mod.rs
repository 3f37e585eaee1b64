//! Port traits consumed by the registration engine
//!
//! The engine in `sprout-core` depends only on these narrow interfaces;
//! concrete implementations (catalog-backed inspection, figment-backed
//! environments) live in the outer crates, and tests substitute hand-built
//! ones.

pub mod condition;
pub mod environment;
pub mod inspector;
pub mod registry;
