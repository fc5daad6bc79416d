// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-kind migration registries keyed by canonical id.

use crate::error::RegistrationError;
use crate::migration::Migration;
use serde_json::Value;
use std::collections::BTreeMap;
use vsdk_core::{IdParseError, MigrationIdentifier, ObjectKind};

/// Migrations for all object kinds under one id grammar.
///
/// Uniqueness is enforced per kind at insertion: two raw ids that
/// canonicalize to the same value cannot both be registered for one kind.
/// Iteration over a kind is in ascending id order.
#[derive(Debug)]
pub struct MigrationRegistry<I: MigrationIdentifier> {
    kinds: BTreeMap<ObjectKind, BTreeMap<I, Migration>>,
    migration_ids: Vec<I>,
}

impl<I: MigrationIdentifier> Default for MigrationRegistry<I> {
    fn default() -> Self {
        Self {
            kinds: BTreeMap::new(),
            migration_ids: Vec::new(),
        }
    }
}

impl<I: MigrationIdentifier> MigrationRegistry<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `migration` for `kind` under `raw_id`, returning the canonical id.
    pub fn add(
        &mut self,
        kind: ObjectKind,
        raw_id: &str,
        migration: Migration,
    ) -> Result<I, RegistrationError> {
        self.insert(kind, raw_id, I::parse(raw_id), migration)
    }

    /// Register a migration whose id arrived as an untyped JSON value.
    pub fn add_value(
        &mut self,
        kind: ObjectKind,
        raw_id: &Value,
        migration: Migration,
    ) -> Result<I, RegistrationError> {
        let raw = match raw_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.insert(kind, &raw, I::from_value(raw_id), migration)
    }

    fn insert(
        &mut self,
        kind: ObjectKind,
        raw_id: &str,
        parsed: Result<I, IdParseError>,
        migration: Migration,
    ) -> Result<I, RegistrationError> {
        let id = parsed.map_err(|e| RegistrationError::from_parse(e, kind, migration.name()))?;
        let entries = self.kinds.entry(kind).or_default();
        if let Some(existing) = entries.get(&id) {
            return Err(RegistrationError::AlreadyUsed {
                kind,
                function: migration.name().to_string(),
                raw: raw_id.to_string(),
                canonical: id.to_string(),
                existing: existing.name().to_string(),
                grammar: I::GRAMMAR,
            });
        }
        let grammar = I::GRAMMAR;
        tracing::debug!(
            kind = kind.name(),
            %grammar,
            raw_id,
            canonical_id = %id,
            function = migration.name(),
            "registered migration"
        );
        entries.insert(id.clone(), migration);
        self.migration_ids.push(id.clone());
        Ok(id)
    }

    pub fn get(&self, kind: ObjectKind, id: &I) -> Option<&Migration> {
        self.kinds.get(&kind)?.get(id)
    }

    /// Canonical ids registered for `kind`, ascending.
    pub fn ids(&self, kind: ObjectKind) -> impl Iterator<Item = &I> {
        self.kinds.get(&kind).into_iter().flat_map(|m| m.keys())
    }

    /// Every canonical id in registration order, across all kinds.
    pub fn migration_id_list(&self) -> &[I] {
        &self.migration_ids
    }

    pub fn len(&self) -> usize {
        self.migration_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migration_ids.is_empty()
    }

    pub(crate) fn entries(&self, kind: ObjectKind) -> Option<&BTreeMap<I, Migration>> {
        self.kinds.get(&kind)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
