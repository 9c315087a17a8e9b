//! Command router: the one place requests from either front end land.
//!
//! Both the CLI and the HTTP server turn their input into plain strings and
//! call one of four entry points here. Each entry point validates, resolves,
//! calls the player, and returns an [`Outcome`] that the front end renders in
//! its own way.
//!
//! The router keeps no state between calls. It is shared across HTTP worker
//! threads as-is; any serialization of player access is the client's job.

use super::coerce::PropertyValue;
use super::control::ControlCommand;
use super::error::CtlError;
use super::load_mode::{LoadKind, LoadMode};
use crate::client::PlayerClient;
use log::debug;

/// Successful result of a router call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Done,
    Value(String),
}

/// Uniform result of every router entry point.
pub type Outcome = Result<Reply, CtlError>;

/// Routes front-end requests to a player client.
#[derive(Debug)]
pub struct Router<C> {
    client: C,
}

impl<C: PlayerClient> Router<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Load a file or playlist with an optional load flag.
    pub fn load(&self, path: &str, kind: LoadKind, flag: Option<&str>) -> Outcome {
        if path.is_empty() {
            return Err(CtlError::MissingPath);
        }
        let mode = LoadMode::resolve(kind, flag)?;
        debug!("load {} {:?} ({})", kind, path, mode);

        let res = match kind {
            LoadKind::SingleFile => self.client.load_file(path, mode),
            LoadKind::Playlist => self.client.load_list(path, mode),
        };
        res.map_err(|e| CtlError::player("load", e))?;
        Ok(Reply::Done)
    }

    /// Run a transport command by its wire name.
    pub fn control(&self, cmd: &str) -> Outcome {
        let cmd: ControlCommand = cmd.parse()?;
        debug!("control {}", cmd);

        cmd.run(&self.client)
            .map_err(|e| CtlError::player("control", e))?;
        Ok(Reply::Done)
    }

    /// Set a property, inferring the value type from the raw string.
    pub fn set_property(&self, name: &str, raw: &str) -> Outcome {
        if name.is_empty() {
            return Err(CtlError::MissingPropertyName);
        }
        let value = PropertyValue::coerce(raw);
        debug!("set {} = {:?}", name, value);

        self.client
            .set_property(name, &value)
            .map_err(|e| CtlError::player(format!("set property '{}' ({})", name, value), e))?;
        Ok(Reply::Done)
    }

    /// Read a property.
    ///
    /// The player reports an empty string for both empty and absent
    /// properties; both come back as [`CtlError::PropertyNotFound`].
    pub fn get_property(&self, name: &str) -> Outcome {
        if name.is_empty() {
            return Err(CtlError::MissingPropertyName);
        }
        debug!("get {}", name);

        let value = self
            .client
            .get_property(name)
            .map_err(|e| CtlError::player(format!("get property '{}'", name), e))?;
        if value.is_empty() {
            return Err(CtlError::PropertyNotFound(name.to_string()));
        }
        Ok(Reply::Value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{Call, FakePlayer};

    fn router() -> Router<FakePlayer> {
        Router::new(FakePlayer::new())
    }

    #[test]
    fn test_load_file_and_list() {
        let r = router();
        assert_eq!(r.load("/tmp/a.mp4", LoadKind::SingleFile, Some("append-play")).unwrap(), Reply::Done);
        assert_eq!(r.load("/tmp/l.m3u", LoadKind::Playlist, None).unwrap(), Reply::Done);
        assert_eq!(
            r.client().calls(),
            vec![
                Call::LoadFile("/tmp/a.mp4".into(), LoadMode::AppendPlay),
                Call::LoadList("/tmp/l.m3u".into(), LoadMode::Replace),
            ]
        );
    }

    #[test]
    fn test_load_empty_path_never_reaches_player() {
        let r = router();
        assert!(matches!(r.load("", LoadKind::SingleFile, None), Err(CtlError::MissingPath)));
        assert!(r.client().calls().is_empty());
    }

    #[test]
    fn test_load_bad_flag_never_reaches_player() {
        let r = router();
        let err = r.load("/tmp/l.m3u", LoadKind::Playlist, Some("append-play")).unwrap_err();
        assert!(matches!(err, CtlError::InvalidFlag { .. }));
        assert!(r.client().calls().is_empty());
    }

    #[test]
    fn test_load_wraps_player_error() {
        let r = Router::new(FakePlayer::new().fail("load_file"));
        let err = r.load("/tmp/a.mp4", LoadKind::SingleFile, None).unwrap_err();
        assert_eq!(err.to_string(), "load error: load_file failed");
    }

    #[test]
    fn test_control_dispatch() {
        let r = router();
        assert_eq!(r.control("next").unwrap(), Reply::Done);
        assert_eq!(r.client().calls(), vec![Call::Next]);
    }

    #[test]
    fn test_control_invalid_command() {
        let r = router();
        assert!(matches!(r.control("rewind"), Err(CtlError::InvalidCommand(c)) if c == "rewind"));
        assert!(r.client().calls().is_empty());
    }

    #[test]
    fn test_control_pause_cycle_failure_skips_write() {
        let r = Router::new(FakePlayer::new().fail("pause_state"));
        let err = r.control("pause-cycle").unwrap_err();
        assert!(matches!(err, CtlError::Player { .. }));
        assert_eq!(r.client().calls(), vec![Call::PauseState]);
    }

    #[test]
    fn test_set_property_coerces() {
        let r = router();
        r.set_property("volume", "55").unwrap();
        r.set_property("mute", "true").unwrap();
        r.set_property("title", "hello").unwrap();
        assert_eq!(
            r.client().calls(),
            vec![
                Call::SetProperty("volume".into(), PropertyValue::Int(55)),
                Call::SetProperty("mute".into(), PropertyValue::Bool(true)),
                Call::SetProperty("title".into(), PropertyValue::Text("hello".into())),
            ]
        );
    }

    #[test]
    fn test_set_property_requires_name() {
        let r = router();
        assert!(matches!(r.set_property("", "1"), Err(CtlError::MissingPropertyName)));
        assert!(r.client().calls().is_empty());
    }

    #[test]
    fn test_set_property_error_names_property_and_value() {
        let r = Router::new(FakePlayer::new().fail("set_property"));
        let msg = r.set_property("volume", "55").unwrap_err().to_string();
        assert!(msg.contains("volume"));
        assert!(msg.contains("55"));
    }

    #[test]
    fn test_get_property_value() {
        let r = Router::new(FakePlayer::new().property("42.000000"));
        assert_eq!(r.get_property("volume").unwrap(), Reply::Value("42.000000".into()));
    }

    #[test]
    fn test_get_property_empty_is_not_found() {
        let r = router();
        match r.get_property("x") {
            Err(CtlError::PropertyNotFound(name)) => assert_eq!(name, "x"),
            other => panic!("expected PropertyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_property_requires_name() {
        let r = router();
        assert!(matches!(r.get_property(""), Err(CtlError::MissingPropertyName)));
        assert!(r.client().calls().is_empty());
    }

    #[test]
    fn test_get_property_wraps_player_error() {
        let r = Router::new(FakePlayer::new().fail("get_property"));
        let err = r.get_property("volume").unwrap_err();
        assert!(matches!(err, CtlError::Player { .. }));
        assert!(err.to_string().starts_with("get property 'volume' error"));
    }
}
