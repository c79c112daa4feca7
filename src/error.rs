//! Error types for devfarm-release.
//!
//! Uses `thiserror` for ergonomic error definitions. Only [`ConfigError`]
//! stops a run; the other kinds are per-device and end up in the
//! release report.

use thiserror::Error;

/// Errors raised while building or validating the release configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("input {raw} cannot be deserialized as a list of serials: {source}")]
    InvalidSerialList {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid STF host: {0:?}")]
    InvalidHostUrl(String),

    #[error("STF access token cannot be empty")]
    MissingAccessToken,

    #[error("request timeout must be greater than zero")]
    InvalidTimeout,
}

/// Errors from invoking the local transport tool.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {args} exited with {status}: {output}")]
    Failed {
        program: String,
        args: String,
        status: String,
        output: String,
    },

    #[error("device has no known transport")]
    MissingTarget,

    #[error("{program} returned no serial for {transport}")]
    EmptySerial { program: String, transport: String },
}

/// Errors from the remote inventory service.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("could not build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("request failed, status: {status}")]
    UnexpectedStatus { url: String, status: String },
}

/// Top-level error for a CLI invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not create config, error: {0}")]
    Config(#[source] ConfigError),

    #[error("Could not validate config, error: {0}")]
    Validation(#[source] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("{failed} of {total} devices could not be deregistered")]
    PartialFailure { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error: 3 for a partial release, 1 otherwise.
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PartialFailure { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for transport tool invocations.
pub type CommandResult<T> = Result<T, CommandError>;

/// Result type alias for inventory service calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
