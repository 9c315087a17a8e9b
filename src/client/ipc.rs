//! mpv JSON IPC client over a UNIX domain socket.
//!
//! # Protocol
//!
//! One JSON object per line in both directions:
//!
//! ```text
//! -> {"command":["set_property","pause",true],"request_id":7}
//! <- {"event":"pause"}                                   (skipped)
//! <- {"data":null,"request_id":7,"error":"success"}
//! ```
//!
//! Replies are matched on `request_id`; event lines, stale replies and
//! unparsable lines are dropped. Any `error` other than `"success"` becomes [`PlayerError::Command`].
//!
//! # Thread safety
//!
//! The connection sits behind a `Mutex`, so concurrent callers are serialized
//! one request/reply exchange at a time.

use super::{PlayerClient, PlayerError};
use crate::core::coerce::PropertyValue;
use crate::core::load_mode::LoadMode;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default read/write timeout for one exchange with the player.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct IpcRequest<'a> {
    command: &'a [Value],
    request_id: u64,
}

#[derive(Debug, Deserialize)]
struct IpcReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    request_id: Option<u64>,
    #[serde(default)]
    event: Option<String>,
}

/// Player client speaking mpv's `--input-ipc-server` protocol.
pub struct MpvIpcClient {
    socket_path: PathBuf,
    conn: Mutex<BufReader<UnixStream>>,
    request_id: AtomicU64,
}

impl std::fmt::Debug for MpvIpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MpvIpcClient")
            .field("socket_path", &self.socket_path)
            .finish_non_exhaustive()
    }
}

impl MpvIpcClient {
    /// Connect to the socket. `timeout` bounds every read and write.
    pub fn connect(path: impl AsRef<Path>, timeout: Duration) -> Result<Self, PlayerError> {
        let socket_path = path.as_ref().to_path_buf();
        let stream = UnixStream::connect(&socket_path)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        debug!("Connected to player socket {}", socket_path.display());

        Ok(Self {
            socket_path,
            conn: Mutex::new(BufReader::new(stream)),
            request_id: AtomicU64::new(1),
        })
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Send one command and wait for its reply. Returns the reply's `data`.
    fn request(&self, command: &[Value]) -> Result<Value, PlayerError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let mut line = serde_json::to_string(&IpcRequest { command, request_id: id })?;
        line.push('\n');

        let mut conn = self.conn.lock().map_err(|_| PlayerError::Closed)?;
        trace!("-> {}", line.trim_end());
        {
            let stream = conn.get_mut();
            stream.write_all(line.as_bytes())?;
            stream.flush()?;
        }

        let mut buf = String::new();
        loop {
            buf.clear();
            if conn.read_line(&mut buf)? == 0 {
                return Err(PlayerError::Closed);
            }
            let text = buf.trim();
            if text.is_empty() {
                continue;
            }
            trace!("<- {}", text);

            // Tail of a line cut short by an earlier timeout; matching recovers
            let reply: IpcReply = match serde_json::from_str(text) {
                Ok(reply) => reply,
                Err(e) => {
                    debug!("Skipping unparsable reply line: {}", e);
                    continue;
                }
            };
            if reply.event.is_some() || reply.request_id != Some(id) {
                continue;
            }
            return match reply.error.as_deref() {
                Some("success") => Ok(reply.data.unwrap_or(Value::Null)),
                Some(status) => Err(PlayerError::Command(status.to_string())),
                None => Err(PlayerError::UnexpectedData("reply without status".into())),
            };
        }
    }

    fn exec(&self, command: &[Value]) -> Result<(), PlayerError> {
        self.request(command).map(|_| ())
    }
}

impl PlayerClient for MpvIpcClient {
    fn load_file(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError> {
        self.exec(&[json!("loadfile"), json!(path), json!(mode.as_str())])
    }

    fn load_list(&self, path: &str, mode: LoadMode) -> Result<(), PlayerError> {
        self.exec(&[json!("loadlist"), json!(path), json!(mode.as_str())])
    }

    fn set_pause(&self, paused: bool) -> Result<(), PlayerError> {
        self.exec(&[json!("set_property"), json!("pause"), json!(paused)])
    }

    fn pause_state(&self) -> Result<bool, PlayerError> {
        let data = self.request(&[json!("get_property"), json!("pause")])?;
        data.as_bool()
            .ok_or_else(|| PlayerError::UnexpectedData(format!("pause = {}", data)))
    }

    fn next_track(&self) -> Result<(), PlayerError> {
        self.exec(&[json!("playlist-next")])
    }

    fn previous_track(&self) -> Result<(), PlayerError> {
        self.exec(&[json!("playlist-prev")])
    }

    fn set_property(&self, name: &str, value: &PropertyValue) -> Result<(), PlayerError> {
        self.exec(&[json!("set_property"), json!(name), serde_json::to_value(value)?])
    }

    fn get_property(&self, name: &str) -> Result<String, PlayerError> {
        match self.request(&[json!("get_property_string"), json!(name)])? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            other => Ok(other.to_string()),
        }
    }
}
