use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use filmmate_lib::DataPaths;
use filmmate_lib::settings::{Settings, load_settings_string, save_data_dir, settings_path};

use crate::CliError;

/// Where the resolved data directory came from.
fn data_dir_source(cli_override: bool, settings: &Settings) -> &'static str {
    if cli_override {
        "--data-dir"
    } else if settings.data_dir().is_some() {
        "settings file"
    } else {
        "current directory"
    }
}

/// Show the settings file and the data directory in effect.
pub(crate) fn run_config_show(paths: &DataPaths, cli_override: bool) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "FilmMate Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let settings = Settings::load_from(&path)?;
    log::info!(
        "  Data directory: {} {}",
        paths.dir.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("(from {})", data_dir_source(cli_override, &settings))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    for file in [paths.films(), paths.users()] {
        let state = if file.exists() { "present" } else { "missing" };
        log::info!("    {} ({state})", file.display());
    }

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Remember `dir` as the data directory.
pub(crate) fn run_config_set_data_dir(dir: &Path) -> Result<(), CliError> {
    let dir: PathBuf = std::path::absolute(dir)
        .map_err(|e| CliError::config(format!("Cannot resolve {}: {e}", dir.display())))?;
    if !dir.is_dir() {
        log::warn!(
            "{} does not exist yet; it will be created on the first save",
            dir.display()
        );
    }
    save_data_dir(Some(&dir))?;
    log::info!(
        "{} Data directory set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        dir.display(),
    );
    Ok(())
}

/// Forget the remembered data directory.
pub(crate) fn run_config_clear_data_dir() -> Result<(), CliError> {
    save_data_dir(None)?;
    log::info!("Data directory cleared; the current directory will be used");
    Ok(())
}
