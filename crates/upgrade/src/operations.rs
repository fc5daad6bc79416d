// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration registration performed while a plugin loads.

use crate::coordinator::UpgradeCoordinator;
use crate::error::RegistrationError;
use crate::lua::LuaMigrationRegistry;
use crate::manifest::MigrationManifest;
use crate::migration::{BoxError, Migration};
use crate::platform::PlatformMigrationRegistry;
use serde_json::Value;
use vsdk_core::{IdGrammar, Metadata, ObjectKind};

/// Collects a plugin's upgrade migrations.
///
/// Registration needs `&mut self`; once every migration is in, convert to an
/// [`UpgradeCoordinator`] which only reads them.
#[derive(Debug, Default)]
pub struct UpgradeOperations {
    platform: PlatformMigrationRegistry,
    lua: LuaMigrationRegistry,
}

impl UpgradeOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` as the `kind` migration for `raw_id` under `grammar`.
    ///
    /// Returns the canonical id.
    pub fn add<F, E>(
        &mut self,
        kind: ObjectKind,
        raw_id: &str,
        grammar: IdGrammar,
        func: F,
    ) -> Result<String, RegistrationError>
    where
        F: Fn(Metadata) -> Result<Metadata, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.add_migration(kind, raw_id, grammar, Migration::new(func))
    }

    pub fn add_migration(
        &mut self,
        kind: ObjectKind,
        raw_id: &str,
        grammar: IdGrammar,
        migration: Migration,
    ) -> Result<String, RegistrationError> {
        match grammar {
            IdGrammar::Platform => self
                .platform
                .add(kind, raw_id, migration)
                .map(|id| id.to_string()),
            IdGrammar::Lua => self
                .lua
                .add(kind, raw_id, migration)
                .map(|id| id.to_string()),
        }
    }

    /// Register a migration whose id was read from untyped data.
    pub fn add_value(
        &mut self,
        kind: ObjectKind,
        raw_id: &Value,
        grammar: IdGrammar,
        migration: Migration,
    ) -> Result<String, RegistrationError> {
        match grammar {
            IdGrammar::Platform => self
                .platform
                .add_value(kind, raw_id, migration)
                .map(|id| id.to_string()),
            IdGrammar::Lua => self
                .lua
                .add_value(kind, raw_id, migration)
                .map(|id| id.to_string()),
        }
    }

    pub fn platform(&self) -> &PlatformMigrationRegistry {
        &self.platform
    }

    pub fn lua(&self) -> &LuaMigrationRegistry {
        &self.lua
    }

    /// Canonical platform ids this plugin defines, ascending.
    pub fn migration_id_list(&self) -> Vec<String> {
        self.platform
            .sorted_ids()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn manifest(&self) -> MigrationManifest {
        MigrationManifest::from_registries(&self.platform, &self.lua)
    }

    pub fn into_coordinator(self) -> UpgradeCoordinator {
        tracing::debug!(
            platform = self.platform.len(),
            lua = self.lua.len(),
            "migrations frozen"
        );
        UpgradeCoordinator::new(self.platform, self.lua)
    }
}

#[cfg(test)]
#[path = "operations_tests.rs"]
mod tests;
