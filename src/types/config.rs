//! Configuration structures.
//!
//! Configuration is assembled in `main` from command-line flags and the
//! environment; the API token additionally falls back to a `.env` file next
//! to the executable.

use crate::tools::access::AccessMode;
use crate::types::{Error, Result};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the Hetzner Cloud API token.
pub const TOKEN_ENV_VAR: &str = "HCLOUD_TOKEN";

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.hetzner.cloud/v1";

/// Global server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Global access mode gating which tools are exposed.
    pub access_mode: AccessMode,

    /// Cloud API connection settings.
    pub api: ApiConfig,
}

/// Cloud API connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base endpoint of the cloud API.
    pub endpoint: String,

    /// Bearer token. Never logged.
    pub token: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Resolve the API token: command-line flag, else environment variable,
/// else a `.env` file in the executable's directory. An empty token from
/// every source is a fatal configuration error.
pub fn resolve_token(flag: Option<String>) -> Result<String> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    if let Some(token) = token_from_env_file()? {
        return Ok(token);
    }

    Err(Error::configuration(format!(
        "{TOKEN_ENV_VAR} is not set. Provide the token via one of:\n\
         1. Command line: hcloud-mcp --token=your_token_here\n\
         2. Environment:  export {TOKEN_ENV_VAR}=your_token_here\n\
         3. .env file:    {TOKEN_ENV_VAR}=your_token_here next to the binary"
    )))
}

/// Look for `HCLOUD_TOKEN=...` in a `.env` file next to the executable.
/// A missing or unreadable file is not an error.
fn token_from_env_file() -> Result<Option<String>> {
    let exe = match std::env::current_exe() {
        Ok(path) => path,
        Err(_) => return Ok(None),
    };
    let env_path = match exe.parent() {
        Some(dir) => dir.join(".env"),
        None => return Ok(None),
    };
    Ok(read_env_file(&env_path))
}

fn read_env_file(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    parse_env_token(&contents)
}

/// Parse `KEY=VALUE` lines, returning the token value if present. Quotes
/// around the value and `#` comment lines are tolerated.
fn parse_env_token(contents: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() == TOKEN_ENV_VAR {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flag_takes_precedence() {
        let token = resolve_token(Some("flag-token".into())).unwrap();
        assert_eq!(token, "flag-token");
    }

    #[test]
    fn empty_flag_is_ignored() {
        // Falls through to env/.env; in a clean test environment that means
        // a configuration error rather than an empty token.
        if std::env::var(TOKEN_ENV_VAR).is_err() {
            let err = resolve_token(Some(String::new())).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        }
    }

    #[test]
    fn env_file_parsing() {
        assert_eq!(
            parse_env_token("HCLOUD_TOKEN=abc123\n"),
            Some("abc123".to_string())
        );
        assert_eq!(
            parse_env_token("# comment\nOTHER=x\nHCLOUD_TOKEN=\"quoted\"\n"),
            Some("quoted".to_string())
        );
        assert_eq!(parse_env_token("HCLOUD_TOKEN=\n"), None);
        assert_eq!(parse_env_token("OTHER=x\n"), None);
    }

    #[test]
    fn default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.endpoint, DEFAULT_ENDPOINT);
        assert!(api.token.is_empty());
    }
}
