//! Duplicate migration id specs
//!
//! Uniqueness is checked on canonical form, per object kind and grammar.

use crate::prelude::*;

#[test]
fn equivalent_ids_collide() {
    let mut p = plugin();
    p.try_platform(ObjectKind::Repository, "1000").unwrap();
    let err = p
        .try_platform(ObjectKind::Repository, "1000.0.0")
        .unwrap_err();
    assert!(matches!(err, RegistrationError::AlreadyUsed { .. }));
    assert_err_contains(&err, &["'1000.0.0'", "'1000'"]);
}

#[test]
fn same_id_across_kinds_is_allowed() {
    let mut p = plugin();
    for kind in ObjectKind::ALL {
        p.try_platform(kind, "2020.4.1").unwrap();
    }
    assert_eq!(p.ops().migration_id_list(), ["2020.4.1"]);
}

#[test]
fn same_id_across_grammars_is_allowed() {
    let p = plugin()
        .platform(ObjectKind::SourceConfig, "1.5", "platform")
        .lua(ObjectKind::SourceConfig, "1.5", "lua");
    assert_eq!(p.ops().platform().len(), 1);
    assert_eq!(p.ops().lua().len(), 1);
}

#[test]
fn duplicate_lua_ids_collide() {
    let mut ops = UpgradeOperations::new();
    ops.add_migration(ObjectKind::Snapshot, "2.1", IdGrammar::Lua, tagger("a"))
        .unwrap();
    let err = ops
        .add_migration(ObjectKind::Snapshot, "02.01", IdGrammar::Lua, tagger("b"))
        .unwrap_err();
    assert_err_contains(&err, &["'02.01'", "'2.1'", "'a'", "'b'", "lua"]);
}
