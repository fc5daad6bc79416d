//! Upgrade request guard specs
//!
//! Requests are checked before any migration runs; author errors surface
//! unchanged.

use crate::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn kind_mismatch_fails_before_migrating() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut ops = UpgradeOperations::new();
    ops.add(ObjectKind::Snapshot, "1", IdGrammar::Platform, move |m: Metadata| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, BoxError>(m)
    })
    .unwrap();
    let coordinator = ops.into_coordinator();

    let request = UpgradeRequest::new(ObjectKind::SourceConfig)
        .with_object("sc-1", "{}")
        .with_migration_ids(["1"]);
    let err = coordinator.upgrade_snapshot(&request).unwrap_err();
    assert!(matches!(err, UpgradeError::IncorrectObjectType { .. }));
    assert_err_contains(&err, &["SOURCECONFIG", "SNAPSHOT"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[derive(Debug)]
struct MissingField(&'static str);

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing field {}", self.0)
    }
}

impl std::error::Error for MissingField {}

#[test]
fn author_errors_abort_the_request() {
    let mut ops = UpgradeOperations::new();
    ops.add(ObjectKind::Repository, "2", IdGrammar::Platform, |m: Metadata| {
        if m.contains_key("host") {
            Ok(m)
        } else {
            Err(MissingField("host"))
        }
    })
    .unwrap();
    let coordinator = ops.into_coordinator();

    let request = UpgradeRequest::new(ObjectKind::Repository)
        .with_object("ok", r#"{"host": "db1"}"#)
        .with_object("bad", "{}")
        .with_migration_ids(["2"]);
    let err = coordinator.upgrade_repository(&request).unwrap_err();
    assert_eq!(err.to_string(), "missing field host");
    let original = err.into_migration_error().unwrap();
    assert_eq!(original.downcast_ref::<MissingField>().unwrap().0, "host");
}
