// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrade request and response envelopes exchanged with the host.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vsdk_core::ObjectKind;

/// One host request to upgrade every stored object of a single kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Object reference to its stored metadata as JSON text.
    #[serde(default)]
    pub pre_upgrade_parameters: IndexMap<String, String>,
    /// Platform migration ids to run, in execution order.
    #[serde(default)]
    pub migration_ids: Vec<String>,
    /// Lua version the objects were last written at. An empty string is
    /// treated the same as an absent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lua_upgrade_version: Option<String>,
}

impl UpgradeRequest {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            pre_upgrade_parameters: IndexMap::new(),
            migration_ids: Vec::new(),
            lua_upgrade_version: None,
        }
    }

    pub fn with_object(
        mut self,
        reference: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        self.pre_upgrade_parameters
            .insert(reference.into(), metadata.into());
        self
    }

    pub fn with_migration_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.migration_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_lua_version(mut self, version: impl Into<String>) -> Self {
        self.lua_upgrade_version = Some(version.into());
        self
    }

    /// The lua version to select from, if any.
    pub fn lua_version(&self) -> Option<&str> {
        self.lua_upgrade_version
            .as_deref()
            .filter(|version| !version.is_empty())
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Upgraded metadata for every object in the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeResponse {
    pub post_upgrade_parameters: IndexMap<String, String>,
}

impl UpgradeResponse {
    pub fn get(&self, reference: &str) -> Option<&str> {
        self.post_upgrade_parameters
            .get(reference)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.post_upgrade_parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.post_upgrade_parameters.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
