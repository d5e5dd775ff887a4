use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use ma_auth::config::AuthConfig;

mod check;
mod guest;
pub(crate) mod logging;
mod roles;
mod scopes;

#[derive(Debug, Parser)]
#[command(name = "ma-auth", about = "Inspect roles, scopes and guest access", long_about = None)]
pub(crate) struct Cli {
    /// Auth configuration file (YAML)
    #[arg(long, global = true, env = "MA_AUTH_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) logging: logging::LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the permission scope registry
    Scopes(scopes::ScopesArgs),

    /// List built-in and custom roles
    Roles(roles::RolesArgs),

    /// Check scopes against a role
    Check(check::CheckArgs),

    /// Show the current guest access snapshot
    Guest(guest::GuestArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        let config = match &self.config {
            Some(path) => AuthConfig::from_path(path)
                .map_err(|error| format!("failed to load {}: {error}", path.display()))?,
            None => AuthConfig::default(),
        };

        let mut out = io::stdout().lock();

        match self.command {
            Commands::Scopes(args) => scopes::run(&args, &mut out),
            Commands::Roles(args) => roles::run(&args, &config, &mut out),
            Commands::Check(args) => check::run(&args, &config, &mut out),
            Commands::Guest(args) => guest::run(&args, &config, &mut out),
        }
    }
}
