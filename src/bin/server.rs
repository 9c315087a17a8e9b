//! HTTP control server.
//!
//! Exposes the router over `GET` query-string routes; see `server` module docs.

use mpv_ctl::cli::ServerArgs;
use mpv_ctl::config::CtlConfig;
use mpv_ctl::core::Router;
use mpv_ctl::server::ApiServer;
use mpv_ctl::shell;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = ServerArgs::parse();
    let config = CtlConfig::from_env_and_cli(args.overrides())?;

    if let Err(e) = shell::init_logging(&args.common, &config) {
        eprintln!("Warning: {:#}", e);
    }
    debug!("Command-line args: {:?}", args);
    info!("Player socket: {}", config.socket_path.display());

    let client = shell::connect(&config)?;
    ApiServer::new(Router::new(client)).run(&config.listen_addr())
}
