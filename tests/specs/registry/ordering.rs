//! Migration ordering specs
//!
//! Platform ids are advertised in one ascending list across all kinds.

use crate::prelude::*;

#[test]
fn global_ordering_across_kinds() {
    let p = plugin()
        .platform(ObjectKind::Repository, "2019.04.01", "a")
        .platform(ObjectKind::SourceConfig, "4.10.04", "b")
        .platform(ObjectKind::LinkedSource, "20190.10.006", "c")
        .platform(ObjectKind::VirtualSource, "1.2.3.4", "d")
        .platform(ObjectKind::Snapshot, "5.4.3.2.1.0", "e")
        .platform(ObjectKind::Repository, "1", "f")
        .platform(ObjectKind::SourceConfig, "10.01.10.00.1.0.0", "g");
    assert_eq!(
        p.ops().migration_id_list(),
        ["1", "1.2.3.4", "4.10.4", "5.4.3.2.1", "10.1.10.0.1", "2019.4.1", "20190.10.6"]
    );
}

#[test]
fn manifest_serializes_for_host() {
    let coordinator = plugin()
        .platform(ObjectKind::Repository, "2020.10.1", "a")
        .platform(ObjectKind::Repository, "2020.2.1", "b")
        .lua(ObjectKind::Snapshot, "3.6", "c")
        .build();
    similar_asserts::assert_eq!(
        serde_json::to_value(coordinator.manifest()).unwrap(),
        json!({
            "migrationIdList": ["2020.2.1", "2020.10.1"],
            "luaMigrationIdList": ["3.6"],
            "lastLuaVersion": "3.6"
        })
    );
}

#[test]
fn lua_range_selection() {
    let coordinator = plugin()
        .lua(ObjectKind::Repository, "3.6", "3.6")
        .lua(ObjectKind::Repository, "1.02", "1.02")
        .lua(ObjectKind::Repository, "4.0", "4.0")
        .lua(ObjectKind::Repository, "2.01", "2.01")
        .build();
    let run = |version: Option<&str>| {
        let mut request = UpgradeRequest::new(ObjectKind::Repository)
            .with_object("repo", r#"{"tags": []}"#);
        if let Some(version) = version {
            request = request.with_lua_version(version);
        }
        let response = coordinator.upgrade_repository(&request).unwrap();
        let metadata: Value = serde_json::from_str(response.get("repo").unwrap()).unwrap();
        metadata["tags"].clone()
    };
    assert_eq!(run(Some("2.1")), json!(["2.01", "3.6", "4.0"]));
    assert_eq!(run(Some("5.1")), json!([]));
    assert_eq!(run(Some("0.0")), json!(["1.02", "2.01", "3.6", "4.0"]));
    assert_eq!(run(None), json!([]));
}
