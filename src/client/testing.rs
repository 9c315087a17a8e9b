//! Recording player client for tests.

use super::{PlayerClient, PlayerError};
use crate::core::coerce::PropertyValue;
use crate::core::load_mode::LoadMode;
use std::collections::HashSet;
use std::sync::Mutex;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LoadFile(String, LoadMode),
    LoadList(String, LoadMode),
    SetPause(bool),
    PauseState,
    Next,
    Previous,
    SetProperty(String, PropertyValue),
    GetProperty(String),
}

/// Fake player: records calls, fails the ones it's told to.
#[derive(Debug, Default)]
pub struct FakePlayer {
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<&'static str>>,
    paused: Mutex<bool>,
    property: Mutex<String>,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to the named method fail.
    pub fn fail(self, method: &'static str) -> Self {
        self.failing.lock().unwrap().insert(method);
        self
    }

    pub fn paused(self, paused: bool) -> Self {
        *self.paused.lock().unwrap() = paused;
        self
    }

    /// Value returned by `get_property`.
    pub fn property(self, value: &str) -> Self {
        *self.property.lock().unwrap() = value.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, call: Call) -> Result<(), PlayerError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(method) {
            return Err(PlayerError::Command(format!("{} failed", method)));
        }
        Ok(())
    }
}

impl PlayerClient for FakePlayer {
    fn load_file(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError> {
        self.record("load_file", Call::LoadFile(path.to_string(), mode))
    }

    fn load_list(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError> {
        self.record("load_list", Call::LoadList(path.to_string(), mode))
    }

    fn set_pause(&self, paused: bool) -> Result<(), PlayerError> {
        self.record("set_pause", Call::SetPause(paused))?;
        *self.paused.lock().unwrap() = paused;
        Ok(())
    }

    fn pause_state(&self) -> Result<bool, PlayerError> {
        self.record("pause_state", Call::PauseState)?;
        Ok(*self.paused.lock().unwrap())
    }

    fn next_track(&self) -> Result<(), PlayerError> {
        self.record("next_track", Call::Next)
    }

    fn previous_track(&self) -> Result<(), PlayerError> {
        self.record("previous_track", Call::Previous)
    }

    fn set_property(&self, name: &str, value: &PropertyValue) -> Result<(), PlayerError> {
        self.record("set_property", Call::SetProperty(name.to_string(), value.clone()))
    }

    fn get_property(&self, name: &str) -> Result<String, PlayerError> {
        self.record("get_property", Call::GetProperty(name.to_string()))?;
        Ok(self.property.lock().unwrap().clone())
    }
}
