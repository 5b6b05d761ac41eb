//! Registry behaviour on concrete annotation scenarios.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use tagreg_core::{ErrorCode, Registry, RegistryError, Tag, TagValue};

#[test]
fn find_metric_on_create_user() {
    let mut reg = Registry::new();
    let metric = Tag::new("Metric").with_param("name", "user.creation");
    reg.register("createUser", metric.clone()).unwrap();

    let hits = reg.find_by_tag_name("Metric");
    assert_eq!(hits, vec![("createUser", &metric)]);
}

#[test]
fn deprecated_method_has_no_rate_limit() {
    let mut reg = Registry::new();
    reg.register(
        "legacyMethod",
        Tag::new("Deprecated").with_param("since", "2.0"),
    )
    .unwrap();

    assert!(reg.find_by_tag_name("RateLimit").is_empty());
    assert_eq!(reg.find_by_tag_name("Deprecated").len(), 1);
}

#[test]
fn empty_name_is_rejected_and_registry_unchanged() {
    let mut reg = Registry::new();
    reg.register("createUser", Tag::new("Metric")).unwrap();

    let err = reg
        .register("createUser", Tag::new("").with_param("x", 1))
        .expect_err("must fail");
    assert!(matches!(err, RegistryError::InvalidTag { ref entity } if entity == "createUser"));
    assert_eq!(err.code(), ErrorCode::InvalidTag);
    assert_eq!(err.code().as_str(), "INVALID_TAG");

    assert_eq!(reg.lookup("createUser").len(), 1);

    // A rejected first tag must not create the entity either.
    reg.register("ghost", Tag::new("")).expect_err("must fail");
    assert!(!reg.contains("ghost"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn unknown_entity_lookup_is_empty() {
    let reg = Registry::new();
    assert!(reg.lookup("nowhere").is_empty());
    assert!(reg.is_empty());
}

#[test]
fn find_preserves_entity_insertion_order() {
    let mut reg = Registry::new();
    reg.register("deleteUser", Tag::new("Metric").with_param("name", "user.deletion"))
        .unwrap();
    reg.register("createUser", Tag::new("Metric").with_param("name", "user.creation"))
        .unwrap();
    reg.register("createUser", Tag::new("RateLimit").with_param("requests", 100))
        .unwrap();

    let ids: Vec<&str> = reg
        .find_by_tag_name("Metric")
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec!["deleteUser", "createUser"]);
}

#[test]
fn parameters_keep_their_types() {
    let mut reg = Registry::new();
    reg.register(
        "AdminController.purge",
        Tag::new("Secured")
            .with_param("roles", &["admin", "ops"][..])
            .with_param("level", 3)
            .with_param("ratio", 0.5),
    )
    .unwrap();

    let tag = &reg.lookup("AdminController.purge")[0];
    assert_eq!(
        tag.param("roles").and_then(TagValue::as_list),
        Some(&["admin".to_string(), "ops".to_string()][..])
    );
    assert_eq!(tag.param("level").and_then(TagValue::as_i64), Some(3));
    assert_eq!(tag.param("ratio").and_then(TagValue::as_f64), Some(0.5));
    assert!(tag.param("missing").is_none());
}

#[test]
fn concurrent_readers_after_initialization() {
    let mut reg = Registry::new();
    for i in 0..16 {
        reg.register("hot.path", Tag::new("Metric").with_param("idx", i))
            .unwrap();
    }
    let shared = Arc::new(reg);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reg = Arc::clone(&shared);
            thread::spawn(move || reg.lookup("hot.path").len())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 16);
    }
}

#[test]
fn whitespace_name_is_not_empty() {
    let mut reg = Registry::new();
    reg.register("m", Tag::new(" ")).unwrap();
    assert_eq!(reg.lookup("m")[0].name(), " ");
    assert_eq!(reg.find_by_tag_name(" ").len(), 1);
}

#[test]
fn empty_entity_id_is_accepted() {
    let mut reg = Registry::new();
    reg.register("", Tag::new("Metric")).unwrap();
    assert!(reg.contains(""));
    assert_eq!(reg.find_by_tag_name("Metric"), vec![("", &Tag::new("Metric"))]);
}
