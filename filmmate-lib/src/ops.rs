//! Catalog mutations: add, delete, update and rate.
//!
//! Each operation validates its input first. A validation or lookup failure
//! leaves the catalog untouched and never writes to the store. A successful
//! change is persisted exactly once; if that write fails the change is
//! rolled back in memory and the storage error is returned.

use chrono::Datelike;

use filmmate_core::validate::{
    InitialRating, parse_rating, parse_year, require_non_blank,
    resolve_initial_rating, validate_new_title,
};
use filmmate_core::{CatalogError, Film};

use crate::catalog::Catalog;
use crate::error::OperationError;
use crate::store::{FIELD_SEPARATOR, RecordStore};

/// Literal the user must type to delete a film that has ratings.
pub const DELETE_TOKEN: &str = "DELETE";

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn reject_separator<'a>(value: &'a str, field: &str) -> Result<&'a str, CatalogError> {
    if value.contains(FIELD_SEPARATOR) {
        return Err(CatalogError::invalid_input(format!(
            "{field} must not contain '{FIELD_SEPARATOR}'."
        )));
    }
    Ok(value)
}

fn require_lookup_title(title: &str) -> Result<&str, CatalogError> {
    require_non_blank(title, "Film title")
}

fn not_found() -> CatalogError {
    CatalogError::not_found("Film not found!")
}

/// Check that `title` is acceptable for a new film in `catalog`.
///
/// Lets an interactive caller reject a bad title before asking for the
/// remaining fields. [`add_film`] runs the same check again.
pub fn check_new_title<S>(catalog: &Catalog<S>, title: &str) -> Result<(), CatalogError> {
    validate_new_title(title)?;
    reject_separator(title, "Title")?;
    if catalog.find(title).is_some() {
        return Err(CatalogError::duplicate("Film already exists!"));
    }
    Ok(())
}

/// Raw input for a new film, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct NewFilm {
    pub title: String,
    pub category: String,
    pub rating: String,
    pub year: String,
}

/// Result of a successful [`add_film`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Added {
    /// Rating actually recorded
    pub rating: InitialRating,
}

impl Added {
    /// Warning to show when the rating was replaced by the default.
    pub fn warning(&self) -> Option<&'static str> {
        self.rating.fallback.map(|f| f.message())
    }
}

/// Add a film to the catalog.
pub fn add_film<S: RecordStore<Film>>(
    catalog: &mut Catalog<S>,
    input: &NewFilm,
    current_year: i32,
) -> Result<Added, OperationError> {
    check_new_title(catalog, &input.title)?;
    let category = require_non_blank(&input.category, "Category")?;
    reject_separator(category, "Category")?;
    let rating = resolve_initial_rating(&input.rating);
    let year = parse_year(&input.year, current_year)?;

    catalog
        .films_mut()
        .push(Film::new(input.title.as_str(), category, rating.value, year));
    catalog.persist_or_undo(|films| {
        films.pop();
    })?;
    log::debug!("Added film '{}'", input.title);
    Ok(Added { rating })
}

/// Asks the user to confirm a deletion.
pub trait DeleteConfirmation {
    /// First stage: a yes/no question. Returns true to go ahead.
    fn confirm(&mut self, film: &Film) -> bool;

    /// Second stage, only asked when the film has ratings.
    ///
    /// Returns whatever the user typed; the deletion proceeds only if it
    /// equals `token` exactly.
    fn final_check(&mut self, film: &Film, token: &str) -> String;
}

/// What happened to a delete request for an existing film.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The yes/no question was answered no
    Cancelled,
    /// The typed token did not match
    FinalCheckFailed,
}

/// Delete a film after confirmation.
pub fn delete_film<S: RecordStore<Film>>(
    catalog: &mut Catalog<S>,
    title: &str,
    confirmation: &mut impl DeleteConfirmation,
) -> Result<DeleteOutcome, OperationError> {
    let title = require_lookup_title(title)?;
    let idx = catalog.position(title).ok_or_else(not_found)?;
    let film = &catalog.films()[idx];

    if !confirmation.confirm(film) {
        return Ok(DeleteOutcome::Cancelled);
    }
    if film.rating_count() > 0 && confirmation.final_check(film, DELETE_TOKEN) != DELETE_TOKEN {
        return Ok(DeleteOutcome::FinalCheckFailed);
    }

    let removed = catalog.films_mut().remove(idx);
    let name = removed.title().to_string();
    catalog.persist_or_undo(move |films| films.insert(idx, removed))?;
    log::debug!("Deleted film '{name}'");
    Ok(DeleteOutcome::Deleted)
}

/// One field change applied by [`update_film`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmUpdate {
    Title(String),
    Category(String),
    /// Raw year text, parsed and range-checked before anything changes
    Year(String),
}

/// A [`FilmUpdate`] that passed validation.
enum Change {
    Title(String),
    Category(String),
    Year(i32),
}

/// Change one field of an existing film.
pub fn update_film<S: RecordStore<Film>>(
    catalog: &mut Catalog<S>,
    title: &str,
    update: FilmUpdate,
    current_year: i32,
) -> Result<(), OperationError> {
    let title = require_lookup_title(title)?;
    let idx = catalog.position(title).ok_or_else(not_found)?;

    let change = match update {
        FilmUpdate::Title(new_title) => {
            require_non_blank(&new_title, "Title")?;
            reject_separator(&new_title, "Title")?;
            let clash = catalog
                .films()
                .iter()
                .enumerate()
                .any(|(i, f)| i != idx && f.title_matches(&new_title));
            if clash {
                return Err(CatalogError::duplicate("Film already exists!").into());
            }
            Change::Title(new_title)
        }
        FilmUpdate::Category(category) => {
            require_non_blank(&category, "Category")?;
            reject_separator(&category, "Category")?;
            Change::Category(category)
        }
        FilmUpdate::Year(raw) => Change::Year(parse_year(&raw, current_year)?),
    };

    let before = catalog.films()[idx].clone();
    let film = &mut catalog.films_mut()[idx];
    match change {
        Change::Title(new_title) => film.set_title(new_title),
        Change::Category(category) => film.set_category(category),
        Change::Year(year) => film.set_year(year),
    }

    catalog.persist_or_undo(move |films| films[idx] = before)?;
    log::debug!("Updated film '{}'", catalog.films()[idx].title());
    Ok(())
}

/// Record a viewer's rating. Returns the film's new average.
pub fn rate_film<S: RecordStore<Film>>(
    catalog: &mut Catalog<S>,
    title: &str,
    raw_rating: &str,
) -> Result<f64, OperationError> {
    let title = require_lookup_title(title)?;
    let idx = catalog.position(title).ok_or_else(not_found)?;
    let rating = parse_rating(raw_rating)?;

    let before = catalog.films()[idx].clone();
    let film = &mut catalog.films_mut()[idx];
    film.add_rating(rating);
    let average = film.average_rating();

    catalog.persist_or_undo(move |films| films[idx] = before)?;
    Ok(average)
}
