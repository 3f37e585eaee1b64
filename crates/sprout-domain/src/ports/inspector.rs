//! Metadata inspector port

use crate::descriptor::{TypeRef, UnitDescriptor};
use crate::error::Result;

/// Produces the structural view of a configuration unit.
///
/// Pure and side-effect-free. Returns [`Error::Introspection`] when the
/// target type cannot be resolved; the registrar treats that as a dropped
/// branch, never as a pass-level failure.
///
/// [`Error::Introspection`]: crate::error::Error::Introspection
pub trait UnitInspector: Send + Sync {
    /// Reflect over `target` and produce its descriptor
    fn inspect(&self, target: &TypeRef) -> Result<UnitDescriptor>;

    /// Whether a type with the given qualified name is resolvable at all
    fn is_resolvable(&self, name: &str) -> bool;
}
