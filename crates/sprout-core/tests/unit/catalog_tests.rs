//! Tests for the compile-time unit catalog
//!
//! Registers real catalog entries from this test binary and drives a full
//! discovery pass through the `CatalogInspector`, mirroring how an embedding
//! application wires units in.

use std::sync::Arc;

use sprout_core::catalog::{list_units, lookup_unit, UnitCatalogEntry, UNIT_CATALOG};
use sprout_core::{BeanContainer, CatalogInspector, DefinitionRegistry, NullInstanceFactory, UnitRegistrar};
use sprout_domain::constants::CONFIGURATION_ANNOTATION;
use sprout_domain::ports::inspector::UnitInspector;
use sprout_domain::{
    instance_of, AnnotationData, MapEnvironment, ProducerDescriptor, ProducerFn, TypeRef,
    UnitDescriptor,
};

struct CatalogRoot;
struct CatalogGreeter;
struct Uncataloged;

fn catalog_root_descriptor() -> UnitDescriptor {
    UnitDescriptor::new(TypeRef::of::<CatalogRoot>())
        .with_annotation(AnnotationData::new(CONFIGURATION_ANNOTATION))
        .with_nested(TypeRef::of::<CatalogGreeter>())
}

fn catalog_greeter_descriptor() -> UnitDescriptor {
    let invoke: ProducerFn =
        Arc::new(|_owner, _args| Ok(instance_of("hello from the catalog".to_string())));
    UnitDescriptor::new(TypeRef::of::<CatalogGreeter>())
        .with_annotation(AnnotationData::new(CONFIGURATION_ANNOTATION))
        .with_producer(
            ProducerDescriptor::new(
                TypeRef::of::<CatalogGreeter>(),
                "catalog_greeting",
                TypeRef::of::<String>(),
                invoke,
            )
            .static_producer(),
        )
}

#[linkme::distributed_slice(UNIT_CATALOG)]
static CATALOG_ROOT: UnitCatalogEntry = UnitCatalogEntry {
    name: "unit::catalog_tests::CatalogRoot",
    description: "Root unit used by the catalog tests",
    descriptor: catalog_root_descriptor,
};

#[linkme::distributed_slice(UNIT_CATALOG)]
static CATALOG_GREETER: UnitCatalogEntry = UnitCatalogEntry {
    name: "unit::catalog_tests::CatalogGreeter",
    description: "Greeting unit used by the catalog tests",
    descriptor: catalog_greeter_descriptor,
};

#[test]
fn lookup_finds_linked_entries() {
    let entry = lookup_unit(TypeRef::of::<CatalogRoot>().name()).expect("entry linked");
    let descriptor = (entry.descriptor)();
    assert_eq!(descriptor.key(), &TypeRef::of::<CatalogRoot>());
    assert_eq!(descriptor.nested(), &[TypeRef::of::<CatalogGreeter>()]);

    assert!(lookup_unit(TypeRef::of::<Uncataloged>().name()).is_none());
}

#[test]
fn listing_includes_linked_entries() {
    let units = list_units();
    assert!(units
        .iter()
        .any(|(name, _)| *name == TypeRef::of::<CatalogRoot>().name()));
    assert!(units
        .iter()
        .any(|(name, _)| *name == TypeRef::of::<CatalogGreeter>().name()));
}

#[test]
fn catalog_inspector_resolves_only_linked_types() {
    let inspector = CatalogInspector;

    assert!(inspector.is_resolvable(TypeRef::of::<CatalogGreeter>().name()));
    assert!(!inspector.is_resolvable(TypeRef::of::<Uncataloged>().name()));

    let err = inspector.inspect(&TypeRef::of::<Uncataloged>()).unwrap_err();
    assert!(err.is_introspection());
}

#[test]
fn full_pass_through_the_catalog() -> anyhow::Result<()> {
    let inspector = CatalogInspector;
    let registry = Arc::new(DefinitionRegistry::new());
    let factory = NullInstanceFactory::new();
    let env = MapEnvironment::new();

    {
        let registrar = UnitRegistrar::new(&inspector, &registry, &factory, &env);
        registrar.register(&TypeRef::of::<CatalogRoot>())?;
    }

    assert!(registry.contains(TypeRef::of::<CatalogRoot>().name()));
    assert!(registry.contains(TypeRef::of::<CatalogGreeter>().name()));

    let container = BeanContainer::new(registry);
    let greeting = container.get("catalog_greeting")?;
    assert_eq!(
        greeting.downcast_ref::<String>().map(String::as_str),
        Some("hello from the catalog")
    );
    Ok(())
}
