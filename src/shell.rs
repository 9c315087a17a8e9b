//! Shared shell module for the binary targets.
//!
//! Provides the startup boilerplate both front ends need: logger setup and
//! connecting to the player socket.

use crate::cli::CommonArgs;
use crate::client::MpvIpcClient;
use crate::client::ipc::DEFAULT_TIMEOUT;
use crate::config::{self, CtlConfig};
use anyhow::{Context, Result};
use log::info;

/// Map `-v` count to a level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize env_logger based on `--log` and `-v`.
pub fn init_logging(args: &CommonArgs, config: &CtlConfig) -> Result<()> {
    let log_level = log_level(args.verbosity);

    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = match log_path_opt {
            Some(path) => path.clone(),
            None => {
                config.ensure_data_dir()?;
                config.data_file(config::LOG_FILE_NAME)
            }
        };

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        // Console logging (respects RUST_LOG if set)
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level.as_str().to_lowercase()),
        )
        .format_timestamp_millis()
        .init();
    }
    Ok(())
}

/// Verify the socket and connect to the player.
pub fn connect(config: &CtlConfig) -> Result<MpvIpcClient> {
    config::check_socket(&config.socket_path)?;
    let client = MpvIpcClient::connect(&config.socket_path, DEFAULT_TIMEOUT)
        .with_context(|| format!("Failed to connect to {}", config.socket_path.display()))?;
    Ok(client)
}
