//! Transport commands and what each one does to the player.
//!
//! | command       | player calls                          |
//! |---------------|---------------------------------------|
//! | `play`        | `set_pause(false)`                    |
//! | `pause`       | `set_pause(true)`                     |
//! | `pause-cycle` | `pause_state()` then `set_pause(!s)`  |
//! | `next`        | `next_track()`                        |
//! | `prev`        | `previous_track()`                    |
//!
//! `pause-cycle` is a read followed by a write, not an atomic toggle. Two
//! concurrent toggles can both read the same state and flip it the same way,
//! leaving the player where it started. The player protocol has no atomic
//! toggle to fall back on.

use super::error::CtlError;
use crate::client::{PlayerClient, PlayerError};
use std::str::FromStr;

/// Closed set of transport commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Play,
    Pause,
    PauseToggle,
    Next,
    Previous,
}

impl ControlCommand {
    pub const ALL: [ControlCommand; 5] = [
        ControlCommand::Play,
        ControlCommand::Pause,
        ControlCommand::PauseToggle,
        ControlCommand::Next,
        ControlCommand::Previous,
    ];

    /// Wire token accepted by both front ends.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlCommand::Play => "play",
            ControlCommand::Pause => "pause",
            ControlCommand::PauseToggle => "pause-cycle",
            ControlCommand::Next => "next",
            ControlCommand::Previous => "prev",
        }
    }

    /// Run the command against a player.
    pub fn run<C: PlayerClient + ?Sized>(self, client: &C) -> Result<(), PlayerError> {
        match self {
            ControlCommand::Play => client.set_pause(false),
            ControlCommand::Pause => client.set_pause(true),
            ControlCommand::PauseToggle => {
                let paused = client.pause_state()?;
                client.set_pause(!paused)
            }
            ControlCommand::Next => client.next_track(),
            ControlCommand::Previous => client.previous_track(),
        }
    }
}

impl FromStr for ControlCommand {
    type Err = CtlError;

    /// Exact, case-sensitive match against the wire tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlCommand::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| CtlError::InvalidCommand(s.to_string()))
    }
}

impl std::fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
