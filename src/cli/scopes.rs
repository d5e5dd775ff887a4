use std::io;

use clap::Args;
use ma_auth::permissions::PermissionScope;
use tabled::{builder::Builder, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct ScopesArgs {
    /// Only list scopes of this domain (player, library, playlist, provider, system, user)
    #[arg(long)]
    domain: Option<String>,
}

pub(crate) fn run(args: &ScopesArgs, out: &mut impl io::Write) -> Result<(), String> {
    let mut builder = Builder::default();

    builder.push_record(["Scope", "Domain", "Description"]);

    let scopes = PermissionScope::ALL.into_iter().filter(|scope| {
        args.domain
            .as_deref()
            .is_none_or(|domain| scope.domain().as_str() == domain)
    });

    let mut rows = 0_usize;

    for scope in scopes {
        builder.push_record([scope.as_str(), scope.domain().as_str(), scope.description()]);
        rows += 1;
    }

    if rows == 0 {
        return Err(format!(
            "unknown domain: {}",
            args.domain.as_deref().unwrap_or_default()
        ));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|error| format!("failed to write output: {error}"))
}
