// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Author-supplied migration functions

use std::fmt;
use vsdk_core::Metadata;

/// Error type migration functions may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type MigrationFn = dyn Fn(Metadata) -> Result<Metadata, BoxError> + Send + Sync;

/// A named metadata transform registered by a plugin.
pub struct Migration {
    name: String,
    func: Box<MigrationFn>,
}

impl Migration {
    /// Wrap a function, naming it after its Rust type path.
    ///
    /// For `fn` items this is the function path (`my_plugin::upgrade::add_port`);
    /// closures get their enclosing item's path with a `{{closure}}` suffix.
    pub fn new<F, E>(func: F) -> Self
    where
        F: Fn(Metadata) -> Result<Metadata, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::named(std::any::type_name::<F>(), func)
    }

    pub fn named<F, E>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Metadata) -> Result<Metadata, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            func: Box::new(move |metadata| func(metadata).map_err(Into::into)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, metadata: Metadata) -> Result<Metadata, BoxError> {
        (self.func)(metadata)
    }
}

impl fmt::Debug for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Migration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
