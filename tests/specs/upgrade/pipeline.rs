//! Upgrade pipeline specs
//!
//! Lua migrations run first, then platform migrations in host order.

use crate::prelude::*;

#[test]
fn lua_then_platform() {
    let coordinator = plugin()
        .lua(ObjectKind::Repository, "1.2", "lua")
        .platform(ObjectKind::Repository, "2020.1.1", "a")
        .platform(ObjectKind::Repository, "2020.2.2", "b")
        .build();
    let request = UpgradeRequest::new(ObjectKind::Repository)
        .with_object("repo-1", r#"{"tags": []}"#)
        .with_migration_ids(["2020.1.1", "2020.2.2"])
        .with_lua_version("1.1");
    let response = coordinator.upgrade_repository(&request).unwrap();
    assert_object(&response, "repo-1", json!({"tags": ["lua", "a", "b"]}));
}

#[test]
fn unknown_platform_ids_are_skipped() {
    let coordinator = plugin()
        .platform(ObjectKind::Snapshot, "2020.1.1", "a")
        .build();
    let request = UpgradeRequest::new(ObjectKind::Snapshot)
        .with_object("snap-1", r#"{"tags": []}"#)
        .with_migration_ids(["2020.1.1", "2020.9.9"]);
    let response = coordinator.upgrade_snapshot(&request).unwrap();
    assert_object(&response, "snap-1", json!({"tags": ["a"]}));
}

#[test]
fn objects_of_one_request_are_migrated_independently() {
    let coordinator = plugin()
        .platform(ObjectKind::VirtualSource, "3", "v3")
        .build();
    let request = UpgradeRequest::new(ObjectKind::VirtualSource)
        .with_object("vdb-1", r#"{"tags": ["old"], "port": 5432}"#)
        .with_object("vdb-2", r#"{"name": "stage"}"#)
        .with_migration_ids(["3"]);
    let response = coordinator.upgrade_virtual_source(&request).unwrap();
    assert_object(&response, "vdb-1", json!({"tags": ["old", "v3"], "port": 5432}));
    assert_object(&response, "vdb-2", json!({"name": "stage", "tags": ["v3"]}));
}

#[test]
fn request_round_trips_through_host_json() {
    let coordinator = plugin()
        .platform(ObjectKind::LinkedSource, "2021.3", "a")
        .build();
    let request = UpgradeRequest::from_json(
        &json!({
            "type": "LINKEDSOURCE",
            "preUpgradeParameters": { "ls-1": "{\"tags\": []}" },
            "migrationIds": ["2021.3.0"],
            "luaUpgradeVersion": ""
        })
        .to_string(),
    )
    .unwrap();
    let response = coordinator.upgrade_linked_source(&request).unwrap();
    similar_asserts::assert_eq!(
        serde_json::from_str::<Value>(&response.to_json().unwrap()).unwrap(),
        json!({ "postUpgradeParameters": { "ls-1": "{\"tags\":[\"a\"]}" } })
    );
}
