// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform migration selection.
//!
//! The host decides which platform migrations an object still needs and
//! sends their ids already in execution order. This registry only resolves
//! those ids to functions.

use crate::migration::Migration;
use crate::registry::MigrationRegistry;
use vsdk_core::{MigrationIdentifier, ObjectKind, PlatformId};

pub type PlatformMigrationRegistry = MigrationRegistry<PlatformId>;

impl MigrationRegistry<PlatformId> {
    /// All canonical platform ids across every kind, ascending and deduplicated.
    pub fn sorted_ids(&self) -> Vec<PlatformId> {
        let mut ids = self.migration_id_list().to_vec();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Resolve host-selected ids to migrations, keeping the host's order.
    ///
    /// Ids with no registered migration for `kind` are skipped, as are ids
    /// that do not parse: the host may ask for a wider range than this plugin
    /// defines.
    pub fn impls_to_exec<S: AsRef<str>>(
        &self,
        kind: ObjectKind,
        migration_ids: &[S],
    ) -> Vec<&Migration> {
        let Some(entries) = self.entries(kind) else {
            return Vec::new();
        };
        migration_ids
            .iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                let found = PlatformId::parse(raw)
                    .ok()
                    .and_then(|id| entries.get(&id));
                if found.is_none() {
                    tracing::debug!(
                        kind = kind.name(),
                        migration_id = raw,
                        "no platform migration"
                    );
                }
                found
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
