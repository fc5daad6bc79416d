// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration ids a plugin advertises to the host.

use crate::lua::LuaMigrationRegistry;
use crate::platform::PlatformMigrationRegistry;
use serde::{Deserialize, Serialize};
use vsdk_core::{LuaId, PlatformId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationManifest {
    /// Canonical platform ids across all object kinds, ascending.
    pub migration_id_list: Vec<PlatformId>,
    /// Canonical lua ids across all object kinds, ascending.
    #[serde(default)]
    pub lua_migration_id_list: Vec<LuaId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_lua_version: Option<LuaId>,
}

impl MigrationManifest {
    pub fn from_registries(
        platform: &PlatformMigrationRegistry,
        lua: &LuaMigrationRegistry,
    ) -> Self {
        let mut lua_ids = lua.migration_id_list().to_vec();
        lua_ids.sort();
        lua_ids.dedup();
        Self {
            migration_id_list: platform.sorted_ids(),
            lua_migration_id_list: lua_ids,
            last_lua_version: lua.last_version(),
        }
    }
}
