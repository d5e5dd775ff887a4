use std::io;

use clap::Args;
use ma_auth::{config::AuthConfig, permissions::PermissionScope};
use tracing::debug;

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// Role id to check
    #[arg(long)]
    role: String,

    /// Scopes to check, e.g. `player.queue`
    #[arg(required = true)]
    scopes: Vec<String>,
}

pub(crate) fn run(
    args: &CheckArgs,
    config: &AuthConfig,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let registry = config
        .build_registry()
        .map_err(|error| format!("failed to build role registry: {error}"))?;

    let role = registry
        .resolve(&args.role)
        .ok_or_else(|| format!("unknown role: {}", args.role))?;

    for requested in &args.scopes {
        let allowed = role.has_permission(requested);

        debug!(role_id = %role.role_id, scope = %requested, allowed, "checked scope");

        let verdict = match (allowed, requested.parse::<PermissionScope>()) {
            (true, _) => "allow",
            (false, Ok(_)) => "deny",
            (false, Err(_)) => "deny (unknown scope)",
        };

        writeln!(out, "{requested}: {verdict}")
            .map_err(|error| format!("failed to write output: {error}"))?;
    }

    Ok(())
}
