use anyhow::{Context, Result, bail};
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/mpv.sock";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const LOG_FILE_NAME: &str = "mpv-ctl.log";

pub const ENV_SOCKET: &str = "MPV_CTL_SOCKET";
pub const ENV_PORT: &str = "MPV_CTL_PORT";
pub const ENV_BIND: &str = "MPV_CTL_BIND";
pub const ENV_DATA_DIR: &str = "MPV_CTL_DATA_DIR";

/// Runtime configuration shared by both binaries.
///
/// Built once at startup and handed to whatever needs it; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtlConfig {
    /// mpv `--input-ipc-server` socket
    pub socket_path: PathBuf,
    pub port: u16,
    pub bind: String,
    /// Custom data directory (log file); None = platform default
    pub data_dir: Option<PathBuf>,
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub socket_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl CtlConfig {
    /// Resolve configuration from CLI values and the process environment.
    ///
    /// Priority: CLI args → ENV vars (MPV_CTL_*) → defaults
    pub fn from_env_and_cli(cli: CliOverrides) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env_and_cli`](Self::from_env_and_cli) with an explicit env lookup.
    pub fn resolve<F>(cli: CliOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let socket_path = cli
            .socket_path
            .or_else(|| lookup(ENV_SOCKET).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH));

        let port = match cli.port {
            Some(port) => port,
            None => match lookup(ENV_PORT) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("{}={:?} is not a valid port", ENV_PORT, raw))?,
                None => DEFAULT_PORT,
            },
        };

        let bind = cli
            .bind
            .or_else(|| lookup(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let data_dir = cli.data_dir.or_else(|| lookup(ENV_DATA_DIR).map(PathBuf::from));

        Ok(Self { socket_path, port, bind, data_dir })
    }

    /// `bind:port` for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Get path to a data file (logs)
    ///
    /// Platform paths when no data dir is configured:
    /// - Linux: ~/.local/share/mpv-ctl/{name}
    /// - macOS: ~/Library/Application Support/mpv-ctl/{name}
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        if let Some(dir) = dirs_next::data_dir() {
            return dir.join("mpv-ctl");
        }
        // Fallback: "." if everything else fails
        PathBuf::from(".")
    }

    /// Ensure the data directory exists
    pub fn ensure_data_dir(&self) -> Result<()> {
        let dir = self.data_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Check that `path` exists and is a UNIX domain socket.
pub fn check_socket(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("check socket error: {}", path.display()))?;
    if !meta.file_type().is_socket() {
        bail!("{:?} is not a socket file", path);
    }
    Ok(())
}
