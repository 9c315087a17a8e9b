use mpv_ctl::cli::CtlArgs;
use mpv_ctl::config::CtlConfig;
use mpv_ctl::core::{Reply, Router};
use mpv_ctl::shell;

use clap::{CommandFactory, Parser};
use log::{debug, error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CtlArgs::parse();

    let Some(operation) = args.operation() else {
        let _ = CtlArgs::command().print_help();
        return ExitCode::FAILURE;
    };

    let config = match CtlConfig::from_env_and_cli(args.common.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = shell::init_logging(&args.common, &config) {
        eprintln!("Warning: {:#}", e);
    }
    debug!("Command-line args: {:?}", args);

    let client = match shell::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let router = Router::new(client);
    match operation.dispatch(&router) {
        Ok(Reply::Done) => ExitCode::SUCCESS,
        Ok(Reply::Value(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
