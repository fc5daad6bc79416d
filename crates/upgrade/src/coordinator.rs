// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs upgrade requests against registered migrations.

use crate::error::UpgradeError;
use crate::lua::LuaMigrationRegistry;
use crate::manifest::MigrationManifest;
use crate::migration::Migration;
use crate::platform::PlatformMigrationRegistry;
use crate::request::{UpgradeRequest, UpgradeResponse};
use indexmap::IndexMap;
use serde_json::Value;
use vsdk_core::{json_type_name, ObjectKind};

/// Applies a plugin's migrations to the objects in an upgrade request.
///
/// Each object is migrated independently: its metadata is decoded, passed
/// through every lua migration the request selects and then every selected
/// platform migration, and encoded again. Lua migrations always run first.
#[derive(Debug)]
pub struct UpgradeCoordinator {
    platform: PlatformMigrationRegistry,
    lua: LuaMigrationRegistry,
}

impl UpgradeCoordinator {
    pub fn new(platform: PlatformMigrationRegistry, lua: LuaMigrationRegistry) -> Self {
        Self { platform, lua }
    }

    pub fn manifest(&self) -> MigrationManifest {
        MigrationManifest::from_registries(&self.platform, &self.lua)
    }

    /// The ordered migrations `request` would run.
    pub fn pipeline(&self, request: &UpgradeRequest) -> Result<Vec<&Migration>, UpgradeError> {
        let mut pipeline = self
            .lua
            .impls_to_exec(request.kind, request.lua_version())
            .map_err(UpgradeError::InvalidLuaVersion)?;
        pipeline.extend(
            self.platform
                .impls_to_exec(request.kind, request.migration_ids.as_slice()),
        );
        Ok(pipeline)
    }

    /// Upgrade every object in `request`, which must be of kind `expected`.
    ///
    /// A failing migration aborts the whole request with the author's error;
    /// nothing is returned for objects already migrated.
    pub fn upgrade(
        &self,
        expected: ObjectKind,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        if request.kind != expected {
            tracing::warn!(
                received = %request.kind,
                %expected,
                "upgrade request for wrong object type"
            );
            return Err(UpgradeError::IncorrectObjectType {
                received: request.kind,
                expected,
            });
        }

        let pipeline = self.pipeline(request)?;
        tracing::info!(
            kind = expected.name(),
            objects = request.pre_upgrade_parameters.len(),
            migrations = pipeline.len(),
            "upgrading objects"
        );

        let mut post_upgrade_parameters =
            IndexMap::with_capacity(request.pre_upgrade_parameters.len());
        for (reference, metadata) in &request.pre_upgrade_parameters {
            let upgraded = migrate_object(&pipeline, reference, metadata)?;
            post_upgrade_parameters.insert(reference.clone(), upgraded);
        }
        Ok(UpgradeResponse {
            post_upgrade_parameters,
        })
    }

    pub fn upgrade_repository(
        &self,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        self.upgrade(ObjectKind::Repository, request)
    }

    pub fn upgrade_source_config(
        &self,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        self.upgrade(ObjectKind::SourceConfig, request)
    }

    pub fn upgrade_linked_source(
        &self,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        self.upgrade(ObjectKind::LinkedSource, request)
    }

    pub fn upgrade_virtual_source(
        &self,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        self.upgrade(ObjectKind::VirtualSource, request)
    }

    pub fn upgrade_snapshot(
        &self,
        request: &UpgradeRequest,
    ) -> Result<UpgradeResponse, UpgradeError> {
        self.upgrade(ObjectKind::Snapshot, request)
    }
}

fn migrate_object(
    pipeline: &[&Migration],
    reference: &str,
    text: &str,
) -> Result<String, UpgradeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| UpgradeError::InvalidMetadata {
            reference: reference.to_string(),
            source,
        })?;
    let mut metadata = match value {
        Value::Object(map) => map,
        other => {
            return Err(UpgradeError::MetadataNotObject {
                reference: reference.to_string(),
                found: json_type_name(&other),
            })
        }
    };

    for migration in pipeline {
        tracing::trace!(reference, function = migration.name(), "applying migration");
        metadata = migration.apply(metadata).map_err(|e| {
            tracing::warn!(
                reference,
                function = migration.name(),
                error = %e,
                "migration failed"
            );
            UpgradeError::Migration(e)
        })?;
    }

    serde_json::to_string(&metadata).map_err(|source| UpgradeError::Encode {
        reference: reference.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
