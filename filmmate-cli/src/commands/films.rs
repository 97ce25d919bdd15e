//! Read-only catalog views: list, search, sort and categories.

use filmmate_core::display::{
    ALL_FILMS_TITLE, format_categories, format_full_list, format_search_results,
};
use filmmate_core::{Film, SearchKind, SortKey};
use filmmate_lib::{Catalog, DataPaths, FilmFileStore};

use crate::CliError;
use crate::cli_types::SearchArgs;

fn open_catalog(paths: &DataPaths) -> Result<Catalog<FilmFileStore>, CliError> {
    let path = paths.films();
    log::debug!("Reading films from {}", path.display());
    Ok(Catalog::open(FilmFileStore::new(path))?)
}

/// Print every film.
pub(crate) fn run_list(paths: &DataPaths) -> Result<(), CliError> {
    let catalog = open_catalog(paths)?;
    let films: Vec<&Film> = catalog.films().iter().collect();
    log::info!("{}", format_full_list(&films, ALL_FILMS_TITLE));
    Ok(())
}

impl SearchArgs {
    /// The single criterion clap guarantees is present.
    fn criterion(&self) -> Result<(SearchKind, &str), CliError> {
        if let Some(t) = self.title.as_deref() {
            Ok((SearchKind::Title, t))
        } else if let Some(c) = self.category.as_deref() {
            Ok((SearchKind::Category, c))
        } else if let Some(r) = self.min_rating.as_deref() {
            Ok((SearchKind::MinRating, r))
        } else {
            Err(CliError::other("No search criterion given"))
        }
    }
}

/// Print the films matching one criterion, at most ten of them.
pub(crate) fn run_search(paths: &DataPaths, query: &SearchArgs) -> Result<(), CliError> {
    let (kind, text) = query.criterion()?;
    let catalog = open_catalog(paths)?;
    let matches = catalog.search(kind, text)?;
    log::debug!("Search by {kind} for '{text}': {} matches", matches.len());
    log::info!("{}", format_search_results(&matches));
    Ok(())
}

/// Print every film in the requested order.
pub(crate) fn run_sort(paths: &DataPaths, key: SortKey, descending: bool) -> Result<(), CliError> {
    let catalog = open_catalog(paths)?;
    let ascending = !descending;
    let sorted = catalog.sorted(key, ascending);
    log::info!(
        "{}",
        format_full_list(&sorted, &key.order(ascending).heading())
    );
    Ok(())
}

/// Print the distinct categories.
pub(crate) fn run_categories(paths: &DataPaths) -> Result<(), CliError> {
    let catalog = open_catalog(paths)?;
    log::info!("{}", format_categories(&catalog.categories()));
    Ok(())
}
