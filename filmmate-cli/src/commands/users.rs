//! Account administration over the users file.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use filmmate_core::Role;
use filmmate_lib::{Accounts, DataPaths, UserFileStore};

use crate::CliError;

fn open_accounts(paths: &DataPaths) -> Result<Accounts<UserFileStore>, CliError> {
    Ok(Accounts::open(UserFileStore::new(paths.users()))?)
}

/// List every account with its role.
pub(crate) fn run_user_list(paths: &DataPaths) -> Result<(), CliError> {
    let accounts = open_accounts(paths)?;
    if accounts.users().is_empty() {
        log::info!("No accounts in {}", paths.users().display());
        return Ok(());
    }
    let width = accounts
        .users()
        .iter()
        .map(|u| u.username.chars().count())
        .max()
        .unwrap_or(0);
    for user in accounts.users() {
        let role = if user.role.is_admin() {
            user.role
                .display_name()
                .if_supports_color(Stdout, |t| t.yellow())
                .to_string()
        } else {
            user.role.display_name().to_string()
        };
        log::info!("  {:<width$}  {role}", user.username);
    }
    Ok(())
}

/// Give `name` the Administrator role.
pub(crate) fn run_user_promote(paths: &DataPaths, name: &str) -> Result<(), CliError> {
    run_user_set_role(paths, name, Role::Administrator)
}

/// Give `name` any role.
pub(crate) fn run_user_set_role(
    paths: &DataPaths,
    name: &str,
    role: Role,
) -> Result<(), CliError> {
    let mut accounts = open_accounts(paths)?;
    let previous = accounts.set_role(name, role)?;
    if previous == role {
        log::info!("'{name}' already has the {role} role");
    } else {
        log::info!(
            "{} '{name}' changed from {previous} to {role}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
    }
    Ok(())
}
