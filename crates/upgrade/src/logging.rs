// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup for processes that host a plugin.
//!
//! The engine itself only emits `tracing` events; hosts call [`init`] once at
//! startup to route them to stderr.

use crate::env::{self, EnvError};
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub ansi: bool,
}

impl LogConfig {
    pub fn from_env() -> Result<Self, EnvError> {
        Ok(Self {
            filter: env::log_filter(),
            ansi: env::log_ansi()?,
        })
    }
}

/// Build a subscriber for `config` writing to `writer`.
pub fn subscriber<W>(
    config: &LogConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.filter)?;
    Ok(tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(config.ansi)
            .with_target(false),
    ))
}

/// Install the global subscriber from environment configuration.
pub fn init() -> Result<(), LoggingError> {
    let config = LogConfig::from_env()?;
    subscriber(&config, std::io::stderr)?.try_init()?;
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
