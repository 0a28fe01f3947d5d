//! Authenticate a user
//!
//! Reads `<username> <password>` from one line of stdin and prints the
//! outcome. Exit code 0 on login, 1 on a rejected login, 2 when the store
//! or configuration cannot be used.

use clap::Parser;
use log::info;
use std::io;
use std::process::ExitCode;

use rax_credstore::StoreConfig;
use rax_credstore::cli::CliArgs;
use rax_credstore::commands::{handle_authenticate, read_request_line};
use rax_credstore::error::CredStoreError;
use rax_credstore::error::handlers::{error_to_exit_code, handle_error};
use rax_credstore::storage::JsonFileRepository;
use rax_credstore::utils::logging::setup_logging;

#[derive(Debug, Parser)]
#[command(name = "authenticate", version, about = "Check a username and password against the credential store")]
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
            // Auth failures are reported on stdout
            if let CredStoreError::Auth(auth) = &e {
                println!("{}", auth);
            }
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
    let success = handle_authenticate(&repo, &line)?;
    println!("{}", success);
    Ok(())
}
