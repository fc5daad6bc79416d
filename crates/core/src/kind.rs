// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin object kinds that carry upgradable metadata.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of plugin object an upgrade migration applies to.
///
/// Each kind is an independent migration namespace: the same id may be
/// registered for a repository and a snapshot without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "REPOSITORY")]
    Repository,
    #[serde(rename = "SOURCECONFIG")]
    SourceConfig,
    #[serde(rename = "LINKEDSOURCE")]
    LinkedSource,
    #[serde(rename = "VIRTUALSOURCE")]
    VirtualSource,
    #[serde(rename = "SNAPSHOT")]
    Snapshot,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Repository,
        ObjectKind::SourceConfig,
        ObjectKind::LinkedSource,
        ObjectKind::VirtualSource,
        ObjectKind::Snapshot,
    ];

    /// Tag used by the host in upgrade requests (e.g. `SOURCECONFIG`).
    pub fn tag(self) -> &'static str {
        match self {
            ObjectKind::Repository => "REPOSITORY",
            ObjectKind::SourceConfig => "SOURCECONFIG",
            ObjectKind::LinkedSource => "LINKEDSOURCE",
            ObjectKind::VirtualSource => "VIRTUALSOURCE",
            ObjectKind::Snapshot => "SNAPSHOT",
        }
    }

    /// Name used in author-facing diagnostics (e.g. `source_config`).
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Repository => "repository",
            ObjectKind::SourceConfig => "source_config",
            ObjectKind::LinkedSource => "linked_source",
            ObjectKind::VirtualSource => "virtual_source",
            ObjectKind::Snapshot => "snapshot",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A request tag that does not name any object kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown object kind '{0}'")]
pub struct UnknownObjectKind(pub String);

impl std::str::FromStr for ObjectKind {
    type Err = UnknownObjectKind;

    /// Accepts either the host tag (`LINKEDSOURCE`) or the diagnostic name
    /// (`linked_source`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s || kind.name() == s)
            .ok_or_else(|| UnknownObjectKind(s.to_string()))
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
