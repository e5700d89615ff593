//! rmine - work with a Redmine server from the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use redmine_client::cli::Cli;
use redmine_client::config::ConfigStore;
use redmine_client::error::AppError;
use redmine_client::{commands, logging};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = logging::init() {
        eprintln!("Warning: could not set up logging: {:#}", e);
    }

    let result = ConfigStore::open_default()
        .map_err(AppError::from)
        .and_then(|store| {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let result = commands::run(cli, &store, &mut out);
            out.flush()?;
            result
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::FAILURE
        }
    }
}
