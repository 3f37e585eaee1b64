//! Tests for dependency resolution
//!
//! Covers candidate matching by target type, primary-based disambiguation,
//! declaring-instance lookup, and cycle detection when recipes depend on
//! each other.

use std::sync::Arc;

use sprout_core::{BeanContainer, BeanDefinition, DefinitionRegistry, DependencyResolver};
use sprout_domain::{instance_of, Error, ProducerDescriptor, ProducerFn, TypeRef};

struct Owner;
struct Port(u16);
struct A;
struct B;

fn port_producer(name: &str, value: u16, primary: bool) -> BeanDefinition {
    let invoke: ProducerFn = Arc::new(move |_owner, _args| Ok(instance_of(Port(value))));
    let mut producer =
        ProducerDescriptor::new(TypeRef::of::<Owner>(), name, TypeRef::of::<Port>(), invoke)
            .static_producer();
    if primary {
        producer = producer.primary();
    }
    BeanDefinition::from_producer(&producer)
}

#[test]
fn no_matching_candidate_is_an_unresolved_error() {
    let registry = Arc::new(DefinitionRegistry::new());
    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let err = resolver
        .resolve(&TypeRef::of::<Port>(), "http_server")
        .unwrap_err();
    match err {
        Error::UnresolvedDependency { requested_by, .. } => {
            assert_eq!(requested_by, "http_server");
        }
        other => panic!("expected an unresolved dependency, got {other}"),
    }
}

#[test]
fn unique_candidate_is_resolved() {
    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(port_producer("http_port", 8080, false));

    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let instance = resolver.resolve(&TypeRef::of::<Port>(), "http_server").unwrap();
    assert_eq!(instance.downcast_ref::<Port>().map(|p| p.0), Some(8080));
}

#[test]
fn several_candidates_without_primary_are_ambiguous() {
    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(port_producer("http_port", 8080, false));
    let _ = registry.register(port_producer("admin_port", 9090, false));

    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let err = resolver
        .resolve(&TypeRef::of::<Port>(), "http_server")
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedDependency { .. }));
    // the diagnostic names the competing keys
    let message = err.to_string();
    assert!(message.contains("http_port"));
    assert!(message.contains("admin_port"));
}

#[test]
fn unique_primary_breaks_the_tie() -> anyhow::Result<()> {
    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(port_producer("http_port", 8080, false));
    let _ = registry.register(port_producer("admin_port", 9090, true));

    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let instance = resolver.resolve(&TypeRef::of::<Port>(), "http_server")?;
    assert_eq!(instance.downcast_ref::<Port>().map(|p| p.0), Some(9090));
    Ok(())
}

#[test]
fn two_primaries_stay_ambiguous() {
    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(port_producer("http_port", 8080, true));
    let _ = registry.register(port_producer("admin_port", 9090, true));

    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let err = resolver
        .resolve(&TypeRef::of::<Port>(), "http_server")
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedDependency { .. }));
}

#[test]
fn declaring_instance_takes_the_first_insertion_order_match() {
    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(port_producer("first_port", 1, false));
    let _ = registry.register(port_producer("second_port", 2, false));

    let container = BeanContainer::new(registry);
    let resolver = DependencyResolver::new(&container);

    let instance = resolver.instance_of(&TypeRef::of::<Port>()).unwrap();
    assert_eq!(instance.downcast_ref::<Port>().map(|p| p.0), Some(1));
}

#[test]
fn declaring_instance_without_definition_is_an_instantiation_error() {
    let container = BeanContainer::new(Arc::new(DefinitionRegistry::new()));
    let resolver = DependencyResolver::new(&container);

    let err = resolver.instance_of(&TypeRef::of::<Owner>()).unwrap_err();
    assert!(matches!(err, Error::Instantiation { .. }));
}

#[test]
fn mutually_dependent_recipes_are_reported_as_a_cycle() {
    let a_invoke: ProducerFn = Arc::new(|_owner, _args| Ok(instance_of(A)));
    let b_invoke: ProducerFn = Arc::new(|_owner, _args| Ok(instance_of(B)));

    let a = ProducerDescriptor::new(TypeRef::of::<Owner>(), "a", TypeRef::of::<A>(), a_invoke)
        .with_param(TypeRef::of::<B>())
        .static_producer();
    let b = ProducerDescriptor::new(TypeRef::of::<Owner>(), "b", TypeRef::of::<B>(), b_invoke)
        .with_param(TypeRef::of::<A>())
        .static_producer();

    let registry = Arc::new(DefinitionRegistry::new());
    let _ = registry.register(BeanDefinition::from_producer(&a));
    let _ = registry.register(BeanDefinition::from_producer(&b));

    let container = BeanContainer::new(registry);
    let err = container.get("a").unwrap_err();

    match err {
        Error::CircularDependency { key, chain } => {
            assert_eq!(key, "a");
            assert_eq!(chain, "a -> b -> a");
        }
        other => panic!("expected a circular dependency, got {other}"),
    }
}
