//! Field validation shared by the mutation operations.
//!
//! The film entity itself accepts anything; these helpers turn raw user
//! input into checked values or a [`CatalogError`].

use crate::error::CatalogError;
use crate::film::{MAX_RATING, MIN_RATING, is_valid_rating};

/// Years must be strictly after this one.
pub const EARLIEST_YEAR_EXCLUSIVE: i32 = 1900;

/// Rating substituted when the initial rating of a new film is unusable.
pub const DEFAULT_INITIAL_RATING: f64 = 5.0;

/// Minimum number of non-whitespace characters in a new title.
pub const MIN_TITLE_CHARS: usize = 2;

/// Check a title for a new film.
pub fn validate_new_title(title: &str) -> Result<&str, CatalogError> {
    let visible = title.chars().filter(|c| !c.is_whitespace()).count();
    if visible < MIN_TITLE_CHARS {
        return Err(CatalogError::invalid_input(format!(
            "Title must have at least {MIN_TITLE_CHARS} characters!"
        )));
    }
    Ok(title)
}

/// Check that a required text field is not blank.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_input(format!(
            "{field} must not be empty."
        )));
    }
    Ok(value)
}

/// Parse a release year and check it lies in `(1900, current_year]`.
pub fn parse_year(raw: &str, current_year: i32) -> Result<i32, CatalogError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| CatalogError::invalid_format("Invalid year format."))?;
    if year <= EARLIEST_YEAR_EXCLUSIVE || year > current_year {
        return Err(CatalogError::invalid_range(format!(
            "Year must be after {EARLIEST_YEAR_EXCLUSIVE} and no later than {current_year}."
        )));
    }
    Ok(year)
}

/// Parse a rating submitted for an existing film.
pub fn parse_rating(raw: &str) -> Result<i32, CatalogError> {
    let rating: i32 = raw
        .trim()
        .parse()
        .map_err(|_| CatalogError::invalid_format("Invalid rating input."))?;
    if !is_valid_rating(rating) {
        return Err(CatalogError::invalid_range(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )));
    }
    Ok(rating)
}

/// Why the initial rating of a new film was replaced by the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFallback {
    /// The input was not a number
    BadFormat,
    /// The input was a number outside `1..=10`
    OutOfRange,
}

impl RatingFallback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadFormat => "Invalid rating format, set to 5.",
            Self::OutOfRange => "Invalid rating, set to 5.",
        }
    }
}

/// Initial rating for a new film, after substitution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialRating {
    pub value: f64,
    /// Set when the raw input was replaced by [`DEFAULT_INITIAL_RATING`]
    pub fallback: Option<RatingFallback>,
}

/// Resolve the initial rating typed when adding a film.
///
/// Unlike [`parse_rating`], bad input never aborts: it is replaced by 5
/// and the reason is reported back so the caller can warn about it.
pub fn resolve_initial_rating(raw: &str) -> InitialRating {
    match raw.trim().parse::<f64>() {
        Ok(v) if (f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&v) => InitialRating {
            value: v,
            fallback: None,
        },
        Ok(_) => InitialRating {
            value: DEFAULT_INITIAL_RATING,
            fallback: Some(RatingFallback::OutOfRange),
        },
        Err(_) => InitialRating {
            value: DEFAULT_INITIAL_RATING,
            fallback: Some(RatingFallback::BadFormat),
        },
    }
}
