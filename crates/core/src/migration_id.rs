// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration identifiers.
//!
//! Two grammars are in use. Platform ids are dotted integers of any length
//! (`2020.1.15`) whose trailing zero components are insignificant. Lua ids
//! are legacy `MAJOR.MINOR` pairs. Both compare lexicographically over their
//! integer components, never over the original text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

// ASCII digits only: `\d` would admit other Unicode decimal digits.
#[allow(clippy::expect_used)]
static PLATFORM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)*$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static LUA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("constant regex pattern is valid"));

/// Which identifier grammar a migration is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdGrammar {
    Platform,
    Lua,
}

impl IdGrammar {
    /// Textual shape an id must have, shown to plugin authors on error.
    pub fn format(self) -> &'static str {
        match self {
            IdGrammar::Platform => "N(.N)*, e.g. 2020.1.15",
            IdGrammar::Lua => "MAJOR.MINOR, e.g. 1.2",
        }
    }
}

impl fmt::Display for IdGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdGrammar::Platform => f.write_str("platform"),
            IdGrammar::Lua => f.write_str("lua"),
        }
    }
}

/// Errors from parsing a raw migration id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("migration id must be a string, found {found}")]
    IncorrectType { found: &'static str },

    #[error("migration id '{raw}' does not follow the {grammar} format '{}'", grammar.format())]
    IncorrectFormat { raw: String, grammar: IdGrammar },

    #[error("migration id '{raw}' is reserved: an all-zero id sorts below every migration")]
    ZeroId { raw: String },
}

/// A migration id grammar: how to parse raw text into an ordered canonical id.
pub trait MigrationIdentifier:
    Ord + Clone + fmt::Display + fmt::Debug + Send + Sync + 'static
{
    const GRAMMAR: IdGrammar;

    /// Validate and canonicalize a raw id.
    fn parse(raw: &str) -> Result<Self, IdParseError>;

    /// Parse an id that arrived as an untyped JSON value.
    fn from_value(value: &Value) -> Result<Self, IdParseError> {
        match value {
            Value::String(raw) => Self::parse(raw),
            other => Err(IdParseError::IncorrectType {
                found: json_type_name(other),
            }),
        }
    }
}

/// JSON type name of `value`, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse dot-separated decimal components. Components too large for `u64`
/// are a format error rather than a silent wrap.
fn parse_components(raw: &str, grammar: IdGrammar) -> Result<Vec<u64>, IdParseError> {
    raw.split('.')
        .map(|part| part.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| IdParseError::IncorrectFormat {
            raw: raw.to_string(),
            grammar,
        })
}

/// A canonical platform migration id.
///
/// Holds at least one component and never ends in a zero component unless it
/// is the only one, so `50`, `50.0` and `50.0.0` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformId(Vec<u64>);

impl PlatformId {
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl MigrationIdentifier for PlatformId {
    const GRAMMAR: IdGrammar = IdGrammar::Platform;

    fn parse(raw: &str) -> Result<Self, IdParseError> {
        if !PLATFORM_PATTERN.is_match(raw) {
            return Err(IdParseError::IncorrectFormat {
                raw: raw.to_string(),
                grammar: IdGrammar::Platform,
            });
        }
        let mut components = parse_components(raw, IdGrammar::Platform)?;
        while components.len() > 1 && components.last() == Some(&0) {
            components.pop();
        }
        if components == [0] {
            return Err(IdParseError::ZeroId {
                raw: raw.to_string(),
            });
        }
        Ok(Self(components))
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl FromStr for PlatformId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MigrationIdentifier>::parse(s)
    }
}

impl TryFrom<String> for PlatformId {
    type Error = IdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PlatformId> for String {
    fn from(id: PlatformId) -> Self {
        id.to_string()
    }
}

/// A canonical legacy lua migration id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LuaId {
    // Field order defines the derived ordering.
    pub major: u64,
    pub minor: u64,
}

impl LuaId {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }
}

impl MigrationIdentifier for LuaId {
    const GRAMMAR: IdGrammar = IdGrammar::Lua;

    /// Lua ids have no reserved value: `0.0` is a valid lower bound when
    /// selecting migrations for an object recorded at the oldest version.
    fn parse(raw: &str) -> Result<Self, IdParseError> {
        if !LUA_PATTERN.is_match(raw) {
            return Err(IdParseError::IncorrectFormat {
                raw: raw.to_string(),
                grammar: IdGrammar::Lua,
            });
        }
        match parse_components(raw, IdGrammar::Lua)?.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor)),
            _ => Err(IdParseError::IncorrectFormat {
                raw: raw.to_string(),
                grammar: IdGrammar::Lua,
            }),
        }
    }
}

impl fmt::Display for LuaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for LuaId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MigrationIdentifier>::parse(s)
    }
}

impl TryFrom<String> for LuaId {
    type Error = IdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LuaId> for String {
    fn from(id: LuaId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
#[path = "migration_id_tests.rs"]
mod tests;
