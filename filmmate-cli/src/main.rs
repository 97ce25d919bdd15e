//! filmmate CLI
//!
//! Console front end for a film catalog: an interactive menu for
//! administrators and viewers plus read-only subcommands.

mod cli_types;
mod commands;
mod console;
mod error;
mod logging;
mod menu;

use std::io;

use clap::Parser;

use filmmate_lib::{Accounts, Catalog, DataPaths, FilmFileStore, UserFileStore, current_year};

use cli_types::{Cli, Commands, ConfigAction, UserAction};
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cli_override = cli.data_dir.is_some();
    let paths = filmmate_lib::resolve_data_dir(cli.data_dir);
    log::debug!("Data directory: {}", paths.dir.display());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&paths),
        Commands::List => commands::films::run_list(&paths),
        Commands::Search { query } => commands::films::run_search(&paths, &query),
        Commands::Sort { key, desc } => commands::films::run_sort(&paths, key, desc),
        Commands::Categories => commands::films::run_categories(&paths),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&paths, cli_override),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDataDir { dir } => commands::config::run_config_set_data_dir(&dir),
            ConfigAction::ClearDataDir => commands::config::run_config_clear_data_dir(),
        },
        Commands::User { action } => match action {
            UserAction::List => commands::users::run_user_list(&paths),
            UserAction::Promote { name } => commands::users::run_user_promote(&paths, &name),
            UserAction::SetRole { name, role } => {
                commands::users::run_user_set_role(&paths, &name, role)
            }
        },
    }
}

/// Load both data files and hand the console to the start menu.
fn run_menu(paths: &DataPaths) -> Result<(), CliError> {
    let catalog = Catalog::open(FilmFileStore::new(paths.films()))?;
    let accounts = Accounts::open(UserFileStore::new(paths.users()))?;
    log::debug!(
        "Loaded {} films and {} accounts",
        catalog.len(),
        accounts.users().len()
    );

    let mut session = menu::Session {
        catalog,
        accounts,
        console: console::Console::new(io::stdin().lock(), io::stdout()),
        current_year: current_year(),
    };
    session.run()?;
    Ok(())
}
