// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for migration registration and upgrade execution

use crate::migration::BoxError;
use thiserror::Error;
use vsdk_core::{IdGrammar, IdParseError, ObjectKind};

/// Errors raised while a plugin registers its migrations.
///
/// All of these are fatal to plugin load. Each names the object kind and
/// the migration function so authors can find the offending registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(
        "the migration id used by {} upgrade function '{function}' must be a string, found {found}",
        kind.name()
    )]
    IncorrectType {
        kind: ObjectKind,
        function: String,
        found: &'static str,
    },

    #[error(
        "the migration id '{raw}' used by {} upgrade function '{function}' does not follow the {grammar} format '{}'",
        kind.name(),
        grammar.format()
    )]
    IncorrectFormat {
        kind: ObjectKind,
        function: String,
        raw: String,
        grammar: IdGrammar,
    },

    #[error(
        "the migration id '{raw}' used by {} upgrade function '{function}' is reserved: an all-zero id sorts below every migration",
        kind.name()
    )]
    ZeroId {
        kind: ObjectKind,
        function: String,
        raw: String,
    },

    #[error(
        "the migration id '{raw}' used by {} upgrade function '{function}' has the same canonical form '{canonical}' as the {grammar} migration '{existing}'",
        kind.name()
    )]
    AlreadyUsed {
        kind: ObjectKind,
        function: String,
        raw: String,
        canonical: String,
        existing: String,
        grammar: IdGrammar,
    },
}

impl RegistrationError {
    pub(crate) fn from_parse(err: IdParseError, kind: ObjectKind, function: &str) -> Self {
        let function = function.to_string();
        match err {
            IdParseError::IncorrectType { found } => Self::IncorrectType {
                kind,
                function,
                found,
            },
            IdParseError::IncorrectFormat { raw, grammar } => Self::IncorrectFormat {
                kind,
                function,
                raw,
                grammar,
            },
            IdParseError::ZeroId { raw } => Self::ZeroId {
                kind,
                function,
                raw,
            },
        }
    }
}

/// Errors raised while running an upgrade request.
#[derive(Debug, Error)]
pub enum UpgradeError {
    #[error("incorrect upgrade object type: received {received}, expected {expected}")]
    IncorrectObjectType {
        received: ObjectKind,
        expected: ObjectKind,
    },

    #[error("invalid lua upgrade version: {0}")]
    InvalidLuaVersion(#[source] IdParseError),

    #[error("metadata for object '{reference}' is not valid JSON: {source}")]
    InvalidMetadata {
        reference: String,
        source: serde_json::Error,
    },

    #[error("metadata for object '{reference}' must be a JSON object, found {found}")]
    MetadataNotObject {
        reference: String,
        found: &'static str,
    },

    #[error("failed to encode upgraded metadata for object '{reference}': {source}")]
    Encode {
        reference: String,
        source: serde_json::Error,
    },

    /// An author-supplied migration failed. The author's error is carried
    /// unchanged and can be recovered with [`UpgradeError::into_migration_error`].
    #[error(transparent)]
    Migration(BoxError),
}

impl UpgradeError {
    /// The author's original error, if a migration function failed.
    pub fn into_migration_error(self) -> Option<BoxError> {
        match self {
            UpgradeError::Migration(err) => Some(err),
            _ => None,
        }
    }
}
