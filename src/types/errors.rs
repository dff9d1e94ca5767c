//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.
//!
//! Propagation policy: `Configuration` and `DuplicateRegistration` abort the
//! process at startup. `BadArgument`, `NotFound`, `Remote`, `Http` and
//! `Serialization` are caught at the dispatch boundary and become failure
//! responses for the offending call only.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the MCP server.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid startup configuration (bad access-mode flag, missing token).
    /// Fatal: the process exits before any tool becomes reachable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Two tools registered under the same name. Fatal at bind time.
    #[error("duplicate tool registration: {0}")]
    DuplicateRegistration(String),

    /// Tool arguments failed to decode against the declared input shape.
    /// The handler is never invoked for such a call.
    #[error("invalid arguments: {0}")]
    BadArgument(String),

    /// The cloud API has no resource matching the given identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// The cloud API rejected the request.
    #[error("api error ({code}): {message}")]
    Remote { code: String, message: String },

    /// A handler's result could not be encoded to JSON. Indicates a defect
    /// in the handler's result type, not a remote condition.
    #[error("response serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport errors talking to the cloud API.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors (stdio transport).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn duplicate_registration(name: impl Into<String>) -> Self {
        Self::DuplicateRegistration(name.into())
    }

    pub fn bad_argument(msg: impl Into<String>) -> Self {
        Self::BadArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    /// True for errors that indicate a server-side defect rather than a
    /// remote condition or bad input (used to pick the log level).
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        assert_eq!(
            Error::bad_argument("missing field `name`").to_string(),
            "invalid arguments: missing field `name`"
        );
        assert_eq!(
            Error::remote("uniqueness_error", "name already used").to_string(),
            "api error (uniqueness_error): name already used"
        );
        assert_eq!(
            Error::duplicate_registration("get_all_servers").to_string(),
            "duplicate tool registration: get_all_servers"
        );
    }

    #[test]
    fn serialization_is_a_defect() {
        let err = Error::from(serde_json::from_str::<u8>("{}").unwrap_err());
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.is_defect());
        assert!(!Error::not_found("server 42").is_defect());
    }
}
