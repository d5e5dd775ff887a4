use std::io;

use clap::Args;
use ma_auth::{config::AuthConfig, guest::GuestCapabilities};

#[derive(Debug, Args)]
pub(crate) struct GuestArgs {
    /// Print the capabilities a role would grant to guests instead
    #[arg(long)]
    from_role: Option<String>,
}

pub(crate) fn run(
    args: &GuestArgs,
    config: &AuthConfig,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let serialized = match &args.from_role {
        Some(role_id) => {
            let registry = config
                .build_registry()
                .map_err(|error| format!("failed to build role registry: {error}"))?;

            let role = registry
                .resolve(role_id)
                .ok_or_else(|| format!("unknown role: {role_id}"))?;

            serde_json::to_string_pretty(&GuestCapabilities::from_role(role))
        }
        None => serde_json::to_string_pretty(&config.guest.snapshot()),
    }
    .map_err(|error| format!("failed to serialize guest access: {error}"))?;

    writeln!(out, "{serialized}").map_err(|error| format!("failed to write output: {error}"))
}
