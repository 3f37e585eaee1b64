//! Type-erased managed-object handles
//!
//! A managed object is stored as `Arc<dyn Any + Send + Sync>` so the
//! registry can hold heterogeneous singletons behind one handle type.
//! Callers recover the concrete type with [`Arc::downcast`] or
//! [`downcast_ref`].

use std::any::Any;
use std::sync::Arc;

/// Type-erased handle to a managed object
pub type BeanInstance = Arc<dyn Any + Send + Sync>;

/// Zero-argument constructor closure stored inside class-based definitions
pub type ConstructorFn = Arc<dyn Fn() -> BeanInstance + Send + Sync>;

/// Erase a concrete value into a [`BeanInstance`]
pub fn instance_of<T: Send + Sync + 'static>(value: T) -> BeanInstance {
    Arc::new(value)
}

/// Borrow the concrete value behind an instance handle, if the type matches
pub fn downcast_ref<T: 'static>(instance: &BeanInstance) -> Option<&T> {
    instance.downcast_ref::<T>()
}
