//! # hcloud-mcp — Hetzner Cloud tools over the Model Context Protocol
//!
//! A stdio MCP server that exposes Hetzner Cloud resources (servers,
//! networks, firewalls, SSH keys, volumes, ...) as callable tools:
//! - Per-resource tool catalogs merged into one registry at startup
//! - Capability gating: `read_only` (default) exposes only read tools,
//!   `read_write` additionally exposes create/update/delete tools
//! - Uniform dispatch: decode arguments → call the cloud API → encode the
//!   result (or the error) as a tool response
//!
//! ## Architecture
//!
//! ```text
//!   stdin ──► JSON-RPC loop ──► ToolRegistry ──► CloudClient ──► API
//!                 │                  │
//!   stdout ◄── response ◄─── ResponseCodec ◄── handler result
//! ```
//!
//! The loop is strictly sequential: one tool call (including its network
//! round trip) completes before the next request is read.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod client;
pub mod mcp;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
