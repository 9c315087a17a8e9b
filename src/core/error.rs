//! Request errors produced by the command router.

use super::load_mode::LoadKind;
use crate::client::PlayerError;

/// Everything that can end a request unsuccessfully.
///
/// Every variant is terminal for its request; nothing here is retried.
#[derive(Debug)]
pub enum CtlError {
    /// A required query/CLI parameter was absent.
    MissingParameter(String),
    MissingPath,
    MissingPropertyName,
    /// Load flag unknown, or not legal for the content kind.
    InvalidFlag { flag: String, kind: LoadKind },
    InvalidCommand(String),
    /// Player answered with an empty value.
    PropertyNotFound(String),
    /// Player client failure, wrapped with the operation that triggered it.
    Player { context: String, source: PlayerError },
}

impl CtlError {
    pub(crate) fn player(context: impl Into<String>, source: PlayerError) -> Self {
        CtlError::Player { context: context.into(), source }
    }
}

impl std::fmt::Display for CtlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CtlError::MissingParameter(name) => write!(f, "missing '{}' parameter", name),
            CtlError::MissingPath => write!(f, "missing path"),
            CtlError::MissingPropertyName => write!(f, "missing property name"),
            CtlError::InvalidFlag { flag, kind } => {
                write!(f, "invalid load flag '{}' for {}", flag, kind)
            }
            CtlError::InvalidCommand(cmd) => write!(
                f,
                "invalid command '{}' (expected one of: play, pause, pause-cycle, next, prev)",
                cmd
            ),
            CtlError::PropertyNotFound(name) => write!(f, "property '{}' not found", name),
            CtlError::Player { context, source } => write!(f, "{} error: {}", context, source),
        }
    }
}

impl std::error::Error for CtlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CtlError::Player { source, .. } => Some(source),
            _ => None,
        }
    }
}
