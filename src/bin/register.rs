//! Register a user
//!
//! Reads `<username> <password> <role>` from one line of stdin, appends the
//! record to the store, and rewrites the store file.

use clap::Parser;
use log::info;
use std::io;
use std::process::ExitCode;

use rax_credstore::StoreConfig;
use rax_credstore::cli::CliArgs;
use rax_credstore::commands::{handle_register, read_request_line};
use rax_credstore::error::CredStoreError;
use rax_credstore::error::handlers::{error_to_exit_code, handle_error};
use rax_credstore::storage::JsonFileRepository;
use rax_credstore::utils::logging::setup_logging;

#[derive(Debug, Parser)]
#[command(name = "register", version, about = "Add a user to the credential store")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() -> ExitCode {
    setup_logging();
    let args = Args::parse();

    match run(&args.common) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

fn run(args: &CliArgs) -> Result<(), CredStoreError> {
    let config = StoreConfig::load(&args.config, args.store_path.as_deref())?;
    let repo = JsonFileRepository::new(config.store_path());
    info!("Using store {}", repo.path().display());

    let line = read_request_line(io::stdin().lock())?;
    handle_register(&repo, &line)?;
    Ok(())
}
