// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for plugin hosts.

use thiserror::Error;

pub const LOG_VAR: &str = "VSDK_LOG";
pub const LOG_ANSI_VAR: &str = "VSDK_LOG_ANSI";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("{var} must be one of 1/true/yes/on or 0/false/no/off, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Tracing filter directive: VSDK_LOG > RUST_LOG > `info`
pub fn log_filter() -> String {
    resolve_log_filter(
        std::env::var(LOG_VAR).ok().as_deref(),
        std::env::var("RUST_LOG").ok().as_deref(),
    )
}

/// Whether log output uses ANSI colour (default on)
pub fn log_ansi() -> Result<bool, EnvError> {
    parse_flag(LOG_ANSI_VAR, std::env::var(LOG_ANSI_VAR).ok().as_deref(), true)
}

fn resolve_log_filter(vsdk: Option<&str>, rust: Option<&str>) -> String {
    [vsdk, rust]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

fn parse_flag(var: &'static str, value: Option<&str>, default: bool) -> Result<bool, EnvError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EnvError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
