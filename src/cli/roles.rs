use std::io;

use clap::Args;
use ma_auth::{config::AuthConfig, roles::Role};
use tabled::{builder::Builder, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct RolesArgs {
    /// Print roles as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(
    args: &RolesArgs,
    config: &AuthConfig,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let registry = config
        .build_registry()
        .map_err(|error| format!("failed to build role registry: {error}"))?;

    let roles: Vec<&Role> = registry.roles().collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &roles)
            .map_err(|error| format!("failed to serialize roles: {error}"))?;

        return writeln!(out).map_err(|error| format!("failed to write output: {error}"));
    }

    let mut builder = Builder::default();

    builder.push_record(["Role", "Name", "System", "Permissions"]);

    for role in roles {
        builder.push_record([
            role.role_id.clone(),
            role.name.clone(),
            if role.is_system { "yes" } else { "no" }.to_string(),
            permissions_cell(role),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|error| format!("failed to write output: {error}"))
}

fn permissions_cell(role: &Role) -> String {
    if role.is_wildcard() {
        return "* (all scopes)".to_string();
    }

    if role.permissions.is_empty() {
        return "-".to_string();
    }

    role.permissions
        .iter()
        .map(|scope| scope.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use ma_auth::permissions::PermissionScope;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn table_lists_built_in_and_custom_roles() -> TestResult {
        let config = AuthConfig {
            roles: vec![
                Role::new("listener", "Listener", "")
                    .with_permissions([PermissionScope::PlayerView]),
            ],
            ..AuthConfig::default()
        };

        let mut out = Vec::new();

        run(&RolesArgs { json: false }, &config, &mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Administrator"));
        assert!(rendered.contains("* (all scopes)"));
        assert!(rendered.contains("listener"));

        Ok(())
    }

    #[test]
    fn json_output_is_a_role_list() -> TestResult {
        let mut out = Vec::new();

        run(&RolesArgs { json: true }, &AuthConfig::default(), &mut out)?;

        let roles: Vec<Role> = serde_json::from_slice(&out)?;

        assert_eq!(roles.len(), 4);

        Ok(())
    }
}
