//! Search and filter functions over a catalog snapshot.
//!
//! Every function here borrows the films it is given and returns references
//! into that slice in source order. Nothing is copied or mutated, so edits
//! made through the catalog after a query are visible on the next read.

use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;
use crate::film::{Film, MAX_RATING, MIN_RATING};

/// Maximum number of matches shown for a search or filter.
pub const RESULT_LIMIT: usize = 10;

/// Which field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Case-insensitive substring of the title
    Title,
    /// Case-insensitive exact category
    Category,
    /// Average rating at or above a threshold
    MinRating,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::MinRating => "minimum rating",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn require_text<'a>(query: &'a str, what: &str) -> Result<&'a str, CatalogError> {
    if query.trim().is_empty() {
        return Err(CatalogError::invalid_input(format!(
            "{what} must not be empty."
        )));
    }
    Ok(query)
}

/// Films whose title contains `needle`, ignoring case.
pub fn search_by_title<'a>(films: &'a [Film], needle: &str) -> Result<Vec<&'a Film>, CatalogError> {
    let needle = require_text(needle, "Search text")?.to_lowercase();
    Ok(films
        .iter()
        .filter(|f| f.title().to_lowercase().contains(&needle))
        .collect())
}

/// Films whose category equals `category`, ignoring case.
pub fn filter_by_category<'a>(
    films: &'a [Film],
    category: &str,
) -> Result<Vec<&'a Film>, CatalogError> {
    let category = require_text(category, "Category")?.to_lowercase();
    Ok(films
        .iter()
        .filter(|f| f.category().to_lowercase() == category)
        .collect())
}

/// Parse a minimum-rating threshold typed by the user.
///
/// Non-numeric input is `InvalidFormat`; a number outside `1..=10`
/// (including NaN) is `InvalidRange`.
pub fn parse_rating_threshold(raw: &str) -> Result<f64, CatalogError> {
    let threshold: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CatalogError::invalid_format("Invalid rating format."))?;
    if !(f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&threshold) {
        return Err(CatalogError::invalid_range(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )));
    }
    Ok(threshold)
}

/// Films whose average rating is at least the threshold in `raw_threshold`.
///
/// Unrated films average 0.0 and can never pass, since thresholds below 1
/// are rejected.
pub fn filter_by_min_rating<'a>(
    films: &'a [Film],
    raw_threshold: &str,
) -> Result<Vec<&'a Film>, CatalogError> {
    let threshold = parse_rating_threshold(raw_threshold)?;
    Ok(films
        .iter()
        .filter(|f| f.average_rating() >= threshold)
        .collect())
}

/// Run a search of the given kind.
pub fn search<'a>(
    films: &'a [Film],
    kind: SearchKind,
    query: &str,
) -> Result<Vec<&'a Film>, CatalogError> {
    match kind {
        SearchKind::Title => search_by_title(films, query),
        SearchKind::Category => filter_by_category(films, query),
        SearchKind::MinRating => filter_by_min_rating(films, query),
    }
}

/// Distinct categories in the order they first appear.
pub fn unique_categories(films: &[Film]) -> Vec<&str> {
    let mut seen = HashSet::new();
    films
        .iter()
        .map(Film::category)
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Find the film whose title matches `title` exactly, ignoring case.
pub fn find_by_title<'a>(films: &'a [Film], title: &str) -> Option<&'a Film> {
    films.iter().find(|f| f.title_matches(title))
}

/// Matches trimmed to [`RESULT_LIMIT`], remembering how many there were.
#[derive(Debug, Clone, PartialEq)]
pub struct CappedResults<'a> {
    /// At most [`RESULT_LIMIT`] films, in filter order
    pub shown: Vec<&'a Film>,
    /// Number of matches before capping
    pub total: usize,
}

impl<'a> CappedResults<'a> {
    /// Keep the first [`RESULT_LIMIT`] matches.
    pub fn new(mut matches: Vec<&'a Film>) -> Self {
        let total = matches.len();
        matches.truncate(RESULT_LIMIT);
        Self {
            shown: matches,
            total,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.total > self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
