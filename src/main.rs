use std::process;

use clap::Parser;
use registry_credentials::cli::{run, setup_logs, Cli};
use registry_credentials::CREDENTIALS_DIR;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = setup_logs(cli.verbose) {
        eprintln!("Unable to set up logging: {}", error);
    }

    if let Err(error) = run(cli, CREDENTIALS_DIR) {
        log::error!("{}", error);
        process::exit(1);
    }
}
