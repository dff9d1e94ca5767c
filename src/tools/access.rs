//! Access control — capability gating for tools.
//!
//! Every tool declares the minimum access mode it needs; a single global
//! mode chosen at startup decides which tools are exposed at all. Gating
//! happens once, before registration — a filtered-out tool is simply never
//! registered, so callers cannot reach it.

use crate::types::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Access mode, both per-tool (minimum required) and global (granted).
///
/// `ReadWrite` is a strict superset of `ReadOnly` in capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessMode {
    /// Read-only operations: list and get.
    ReadOnly,
    /// Mutating operations: create, update, delete.
    ReadWrite,
}

impl AccessMode {
    /// Whether a tool requiring `tool_mode` may be exposed under this
    /// global mode. A read-write global grants everything; a read-only
    /// global grants only read-only tools.
    pub fn allows(self, tool_mode: AccessMode) -> bool {
        match self {
            AccessMode::ReadWrite => true,
            AccessMode::ReadOnly => tool_mode == AccessMode::ReadOnly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::ReadOnly => "read_only",
            AccessMode::ReadWrite => "read_write",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = Error;

    /// Strict parse: an unrecognized mode is a configuration error, never
    /// silently defaulted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "read_only" => Ok(AccessMode::ReadOnly),
            "read_write" => Ok(AccessMode::ReadWrite),
            other => Err(Error::configuration(format!(
                "invalid access mode '{other}' (expected 'read_only' or 'read_write')"
            ))),
        }
    }
}
