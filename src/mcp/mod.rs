//! MCP transport — JSON-RPC 2.0 message types and the stdio server loop.

pub mod protocol;
pub mod server;

pub use server::McpServer;
