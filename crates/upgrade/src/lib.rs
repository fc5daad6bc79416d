// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Upgrade migrations for virtualization plugins.
//!
//! Plugins register migrations at load time through [`UpgradeOperations`],
//! then freeze them into an [`UpgradeCoordinator`] that runs upgrade
//! requests from the host.

mod coordinator;
pub mod env;
mod error;
pub mod logging;
mod lua;
mod manifest;
mod migration;
mod operations;
mod platform;
mod registry;
mod request;

pub use coordinator::UpgradeCoordinator;
pub use env::EnvError;
pub use error::{RegistrationError, UpgradeError};
pub use logging::{LogConfig, LoggingError};
pub use lua::LuaMigrationRegistry;
pub use manifest::MigrationManifest;
pub use migration::{BoxError, Migration};
pub use operations::UpgradeOperations;
pub use platform::PlatformMigrationRegistry;
pub use registry::MigrationRegistry;
pub use request::{UpgradeRequest, UpgradeResponse};

pub use vsdk_core::{IdGrammar, LuaId, Metadata, ObjectKind, PlatformId};
