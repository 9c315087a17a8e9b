//! Player client capability.
//!
//! The router never talks to a socket directly; it drives a [`PlayerClient`].
//! [`MpvIpcClient`] is the real implementation over mpv's JSON IPC socket.
//!
//! Implementations must be safe to call from several HTTP worker threads at
//! once. The router adds no locking of its own.

pub mod ipc;

#[cfg(test)]
pub(crate) mod testing;

pub use ipc::MpvIpcClient;

use crate::core::coerce::PropertyValue;
use crate::core::load_mode::LoadMode;

/// Transport or protocol failure reported by a player client.
#[derive(Debug)]
pub enum PlayerError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Player rejected the command (its status string).
    Command(String),
    /// Connection closed before a reply arrived.
    Closed,
    UnexpectedData(String),
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::Io(e) => write!(f, "socket error: {}", e),
            PlayerError::Json(e) => write!(f, "malformed reply: {}", e),
            PlayerError::Command(status) => write!(f, "{}", status),
            PlayerError::Closed => write!(f, "connection closed"),
            PlayerError::UnexpectedData(what) => write!(f, "unexpected reply data: {}", what),
        }
    }
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Io(e) => Some(e),
            PlayerError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(e: std::io::Error) -> Self {
        PlayerError::Io(e)
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(e: serde_json::Error) -> Self {
        PlayerError::Json(e)
    }
}

/// Remote-control surface of the media player.
pub trait PlayerClient: Send + Sync {
    fn load_file(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError>;

    fn load_list(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError>;

    fn set_pause(&self, paused: bool) -> Result<(), PlayerError>;

    /// Current value of the `pause` property.
    fn pause_state(&self) -> Result<bool, PlayerError>;

    fn next_track(&self) -> Result<(), PlayerError>;

    fn previous_track(&self) -> Result<(), PlayerError>;

    fn set_property(&self, name: &str, value: &PropertyValue) -> Result<(), PlayerError>;

    /// Property rendered as a string. Empty for both empty and absent properties.
    fn get_property(&self, name: &str) -> Result<String, PlayerError>;
}
