//! Load modes and the rules for which ones a load request may use.
//!
//! | flag          | file         | playlist      |
//! |---------------|--------------|---------------|
//! | *(absent)*    | `Replace`    | `Replace`     |
//! | `replace`     | `Replace`    | `Replace`     |
//! | `append`      | `Append`     | `Append`      |
//! | `append-play` | `AppendPlay` | rejected      |
//! | anything else | rejected     | rejected      |

use super::error::CtlError;

/// What is being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    SingleFile,
    Playlist,
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadKind::SingleFile => write!(f, "file"),
            LoadKind::Playlist => write!(f, "playlist"),
        }
    }
}

/// How loaded content interacts with the current playback queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    #[default]
    Replace,
    Append,
    AppendPlay,
}

impl LoadMode {
    /// Protocol token for the `loadfile`/`loadlist` commands.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadMode::Replace => "replace",
            LoadMode::Append => "append",
            LoadMode::AppendPlay => "append-play",
        }
    }

    /// Validate a requested flag against the content kind.
    ///
    /// Absent or empty flags mean `Replace`. `append-play` on a playlist is an
    /// error rather than a silent downgrade.
    pub fn resolve(kind: LoadKind, requested: Option<&str>) -> Result<LoadMode, CtlError> {
        let flag = match requested {
            None | Some("") => return Ok(LoadMode::Replace),
            Some(flag) => flag,
        };

        let mode = match flag {
            "replace" => LoadMode::Replace,
            "append" => LoadMode::Append,
            "append-play" if kind == LoadKind::SingleFile => LoadMode::AppendPlay,
            _ => {
                return Err(CtlError::InvalidFlag {
                    flag: flag.to_string(),
                    kind,
                });
            }
        };
        Ok(mode)
    }
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
