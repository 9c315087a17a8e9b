use crate::client::PlayerClient;
use crate::config::CliOverrides;
use crate::core::{LoadKind, Outcome, Router};
use clap::{Args, Parser};
use std::path::PathBuf;

// Build version with transport info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "IPC:    mpv JSON IPC (UNIX socket)\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Flags shared by the CLI and the server
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// mpv IPC socket path (env: MPV_CTL_SOCKET, default: /tmp/mpv.sock)
    #[arg(short = 's', long = "sock", value_name = "SOCKET")]
    pub socket: Option<PathBuf>,

    /// Log to file instead of stderr (default: mpv-ctl.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom data directory for the log file (env: MPV_CTL_DATA_DIR)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Control a running mpv through its IPC socket
#[derive(Parser, Debug)]
#[command(name = "mpv-ctl", author, version = VERSION_INFO, about, long_about = None)]
pub struct CtlArgs {
    /// Transport command (play/pause/pause-cycle/next/prev)
    #[arg(long = "cmd", value_name = "CMD")]
    pub cmd: Option<String>,

    /// Video file to load
    #[arg(long = "video", value_name = "PATH")]
    pub video: Option<String>,

    /// Playlist file to load
    #[arg(long = "playlist", value_name = "PATH")]
    pub playlist: Option<String>,

    /// Load flag (replace/append/append-play); append-play is for videos only
    #[arg(long = "flag", value_name = "FLAG")]
    pub flag: Option<String>,

    /// Property to set (requires --value)
    #[arg(long = "set", value_name = "NAME")]
    pub set: Option<String>,

    /// Property value for --set (bool, integer or text)
    #[arg(long = "value", value_name = "VALUE")]
    pub value: Option<String>,

    /// Property to read
    #[arg(long = "get", value_name = "NAME")]
    pub get: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Serve the HTTP control API
#[derive(Parser, Debug)]
#[command(name = "mpv-ctl-server", author, version = VERSION_INFO, about, long_about = None)]
pub struct ServerArgs {
    /// Listen port (env: MPV_CTL_PORT, default: 5000)
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Listen address (env: MPV_CTL_BIND, default: 0.0.0.0)
    #[arg(long = "bind", value_name = "ADDR")]
    pub bind: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            socket_path: self.socket.clone(),
            data_dir: self.data_dir.clone(),
            ..Default::default()
        }
    }
}

impl ServerArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind: self.bind.clone(),
            ..self.common.overrides()
        }
    }
}

/// The one operation a CLI invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Control(String),
    Load {
        path: String,
        kind: LoadKind,
        flag: Option<String>,
    },
    Set { name: String, value: String },
    Get(String),
}

impl CtlArgs {
    /// Pick the operation. Checked in order: cmd, video, playlist, set+value, get.
    ///
    /// Empty strings count as absent. `None` means print usage.
    pub fn operation(&self) -> Option<Operation> {
        let given = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(cmd) = given(&self.cmd) {
            return Some(Operation::Control(cmd));
        }
        if let Some(path) = given(&self.video) {
            return Some(Operation::Load { path, kind: LoadKind::SingleFile, flag: self.flag.clone() });
        }
        if let Some(path) = given(&self.playlist) {
            return Some(Operation::Load { path, kind: LoadKind::Playlist, flag: self.flag.clone() });
        }
        if let (Some(name), Some(value)) = (given(&self.set), self.value.clone()) {
            return Some(Operation::Set { name, value });
        }
        given(&self.get).map(Operation::Get)
    }
}

impl Operation {
    /// Hand the operation to the router.
    pub fn dispatch<C: PlayerClient>(&self, router: &Router<C>) -> Outcome {
        match self {
            Operation::Control(cmd) => router.control(cmd),
            Operation::Load { path, kind, flag } => router.load(path, *kind, flag.as_deref()),
            Operation::Set { name, value } => router.set_property(name, value),
            Operation::Get(name) => router.get_property(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{Call, FakePlayer};
    use crate::core::{LoadMode, PropertyValue, Reply};

    fn parse(args: &[&str]) -> CtlArgs {
        CtlArgs::try_parse_from(std::iter::once("mpv-ctl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_operation() {
        assert_eq!(parse(&[]).operation(), None);
        assert_eq!(parse(&["--flag", "append"]).operation(), None);
        assert_eq!(parse(&["--cmd", ""]).operation(), None);
    }

    #[test]
    fn test_set_needs_value() {
        assert_eq!(parse(&["--set", "volume"]).operation(), None);
        assert_eq!(
            parse(&["--set", "volume", "--value", "55"]).operation(),
            Some(Operation::Set { name: "volume".into(), value: "55".into() })
        );
    }

    #[test]
    fn test_selection_order() {
        let args = parse(&["--get", "volume", "--video", "/tmp/a.mp4", "--cmd", "play"]);
        assert_eq!(args.operation(), Some(Operation::Control("play".into())));

        let args = parse(&["--playlist", "/tmp/l.m3u", "--video", "/tmp/a.mp4", "--flag", "append"]);
        assert_eq!(
            args.operation(),
            Some(Operation::Load {
                path: "/tmp/a.mp4".into(),
                kind: LoadKind::SingleFile,
                flag: Some("append".into()),
            })
        );
    }

    #[test]
    fn test_common_flags() {
        let args = parse(&["-s", "/run/mpv.sock", "-vv", "--get", "pause"]);
        assert_eq!(args.common.verbosity, 2);
        assert_eq!(args.common.overrides().socket_path, Some(PathBuf::from("/run/mpv.sock")));
        assert!(args.common.log_file.is_none());

        let args = parse(&["-l", "--get", "pause"]);
        assert_eq!(args.common.log_file, Some(None));
    }

    #[test]
    fn test_server_args() {
        let args = ServerArgs::try_parse_from(["mpv-ctl-server", "-p", "8080", "-s", "/tmp/x.sock"]).unwrap();
        let o = args.overrides();
        assert_eq!(o.port, Some(8080));
        assert_eq!(o.socket_path, Some(PathBuf::from("/tmp/x.sock")));
        assert_eq!(o.bind, None);
    }

    #[test]
    fn test_dispatch() {
        let router = Router::new(FakePlayer::new().property("yes"));
        let ops = [
            Operation::Control("pause".into()),
            Operation::Load { path: "/tmp/l.m3u".into(), kind: LoadKind::Playlist, flag: Some("append".into()) },
            Operation::Set { name: "mute".into(), value: "t".into() },
        ];
        for op in &ops {
            assert_eq!(op.dispatch(&router).unwrap(), Reply::Done);
        }
        assert_eq!(
            Operation::Get("mute".into()).dispatch(&router).unwrap(),
            Reply::Value("yes".into())
        );
        assert_eq!(
            router.client().calls(),
            vec![
                Call::SetPause(true),
                Call::LoadList("/tmp/l.m3u".into(), LoadMode::Append),
                Call::SetProperty("mute".into(), PropertyValue::Bool(true)),
                Call::GetProperty("mute".into()),
            ]
        );
    }
}
