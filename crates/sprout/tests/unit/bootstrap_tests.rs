//! End-to-end bootstrap tests
//!
//! Declares real unit catalog entries in this test binary and drives the
//! full path: configuration -> condition environment -> registration ->
//! container lookup.

use std::sync::Arc;

use sprout::core::catalog::{UNIT_CATALOG, UnitCatalogEntry};
use sprout::core::PropertyCondition;
use sprout::domain::constants::CONFIGURATION_ANNOTATION;
use sprout::domain::{
    AnnotationData, ConditionDecl, ProducerDescriptor, ProducerFn, TypeRef, UnitDescriptor,
    instance_of,
};
use sprout::{AppConfig, init_app, init_test_app};

struct AppRoot;
struct GreeterUnit;

fn app_root_descriptor() -> UnitDescriptor {
    UnitDescriptor::new(TypeRef::of::<AppRoot>())
        .with_annotation(AnnotationData::new(CONFIGURATION_ANNOTATION))
        .with_nested(TypeRef::of::<GreeterUnit>())
}

fn greeter_descriptor() -> UnitDescriptor {
    let invoke: ProducerFn =
        Arc::new(|_owner, _args| Ok(instance_of("Hello from Sprout".to_string())));
    UnitDescriptor::new(TypeRef::of::<GreeterUnit>())
        .with_annotation(AnnotationData::new(CONFIGURATION_ANNOTATION))
        .with_condition(ConditionDecl::new(Arc::new(
            PropertyCondition::new("greeter.enabled").with_value("true"),
        )))
        .with_producer(
            ProducerDescriptor::new(
                TypeRef::of::<GreeterUnit>(),
                "greeting",
                TypeRef::of::<String>(),
                invoke,
            )
            .static_producer(),
        )
}

#[linkme::distributed_slice(UNIT_CATALOG)]
static APP_ROOT: UnitCatalogEntry = UnitCatalogEntry {
    name: "unit::bootstrap_tests::AppRoot",
    description: "Root unit for the bootstrap tests",
    descriptor: app_root_descriptor,
};

#[linkme::distributed_slice(UNIT_CATALOG)]
static GREETER_UNIT: UnitCatalogEntry = UnitCatalogEntry {
    name: "unit::bootstrap_tests::GreeterUnit",
    description: "Conditionally-enabled greeter",
    descriptor: greeter_descriptor,
};

#[test]
fn enabled_property_admits_the_greeter() -> anyhow::Result<()> {
    let config = AppConfig::default().with_property("greeter.enabled", "true");
    let context = init_app(config)?;

    context.register(&TypeRef::of::<AppRoot>())?;

    let greeting = context.get("greeting")?;
    assert_eq!(
        greeting.downcast_ref::<String>().map(String::as_str),
        Some("Hello from Sprout")
    );
    Ok(())
}

#[test]
fn missing_property_skips_the_greeter_but_keeps_the_root() {
    let context = init_test_app().unwrap();

    context.register(&TypeRef::of::<AppRoot>()).unwrap();

    assert!(context.registry().contains(TypeRef::of::<AppRoot>().name()));
    assert!(!context.registry().contains("greeting"));
}

#[test]
fn typed_lookup_resolves_through_the_context() -> anyhow::Result<()> {
    let config = AppConfig::default().with_property("greeter.enabled", "true");
    let context = init_app(config)?;

    context.register(&TypeRef::of::<AppRoot>())?;

    let greeting = context.get_by_type::<String>()?;
    assert_eq!(greeting.as_str(), "Hello from Sprout");
    Ok(())
}

#[test]
fn repeated_registration_is_idempotent() {
    let config = AppConfig::default().with_property("greeter.enabled", "true");
    let context = init_app(config).unwrap();

    context.register(&TypeRef::of::<AppRoot>()).unwrap();
    let first = context.registry().len();
    context.register(&TypeRef::of::<AppRoot>()).unwrap();

    assert_eq!(context.registry().len(), first);
}
