// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vsdk-core: Shared types for virtualization plugin upgrades

pub mod kind;
pub mod migration_id;

pub use kind::{ObjectKind, UnknownObjectKind};
pub use migration_id::{
    json_type_name, IdGrammar, IdParseError, LuaId, MigrationIdentifier, PlatformId,
};

/// Object metadata as stored by the host: a JSON object.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
