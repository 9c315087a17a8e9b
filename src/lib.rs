//! MPV-CTL - remote control for mpv over its IPC socket
//!
//! Re-exports all modules for use by binary targets.

// Request semantics (coercion, load modes, commands, router)
pub mod core;

// Player side
pub mod client;

// Front ends and bootstrap
pub mod cli;
pub mod config;
pub mod server;
pub mod shell;

// Re-export commonly used types from core
pub use client::{MpvIpcClient, PlayerClient, PlayerError};
pub use core::{ControlCommand, CtlError, LoadKind, LoadMode, Outcome, PropertyValue, Reply, Router};
