// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy lua migration selection.

use crate::migration::Migration;
use crate::registry::MigrationRegistry;
use vsdk_core::{IdParseError, LuaId, MigrationIdentifier, ObjectKind};

pub type LuaMigrationRegistry = MigrationRegistry<LuaId>;

impl MigrationRegistry<LuaId> {
    /// Migrations for `kind` at or above `version`, ascending.
    ///
    /// `None` selects nothing: objects created after the switch to platform
    /// ids carry no lua version.
    pub fn impls_to_exec(
        &self,
        kind: ObjectKind,
        version: Option<&str>,
    ) -> Result<Vec<&Migration>, IdParseError> {
        let Some(version) = version else {
            return Ok(Vec::new());
        };
        let lower = LuaId::parse(version)?;
        Ok(self
            .entries(kind)
            .map(|entries| entries.range(lower..).map(|(_, m)| m).collect())
            .unwrap_or_default())
    }

    /// Highest lua id registered for any kind.
    pub fn last_version(&self) -> Option<LuaId> {
        self.migration_id_list().iter().max().copied()
    }
}

#[cfg(test)]
#[path = "lua_tests.rs"]
mod tests;
