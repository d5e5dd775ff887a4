//! Auth model CLI

use std::process;

use clap::Parser;

mod cli;

#[expect(
    clippy::print_stderr,
    reason = "errors are reported on stderr before exiting"
)]
fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = cli::logging::init_subscriber(&cli.logging) {
        eprintln!("failed to initialise logging: {error}");
        process::exit(1);
    }

    if let Err(error) = cli.run() {
        eprintln!("{error}");
        process::exit(1);
    }
}
