#![allow(dead_code)]

use std::path::PathBuf;

use json_data::logging::{self, Verbosity};
use json_data::{DeclaringType, Resolver, ResourceStore};

/// Namespace of the resources compiled into the test unit.
pub const NAMESPACE: &str = "json_data_test";

/// Full name of the type that declares the test methods.
pub const TYPE_NAME: &str = "json_data_test.JsonDataTest";

pub fn get_test_fixture_path(fixture_name: Option<&str>) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    match fixture_name {
        Some(name) => root.join(name),
        None => root,
    }
}

/// Resources of the test unit: the type's default resource plus every file
/// under `fixtures/resources`.
pub fn resources() -> ResourceStore {
    ResourceStore::from_dir(get_test_fixture_path(Some("resources")), NAMESPACE)
        .unwrap()
        .with_resource(TYPE_NAME, include_bytes!("JsonDataTest.json"))
}

pub fn declaring_type() -> DeclaringType {
    init_logging();
    DeclaringType::new(TYPE_NAME).with_resources(resources())
}

/// A resolver that opens files from `fixtures/data`.
pub fn resolver() -> Resolver {
    Resolver::builder()
        .with_base_dir(get_test_fixture_path(Some("data")))
        .build()
}

pub fn init_logging() {
    logging::try_init_for_tests(Verbosity::from_flags(2, false));
}
