//! The film record and its running list of ratings.

use std::fmt;

/// Lowest rating a viewer can give.
pub const MIN_RATING: i32 = 1;

/// Highest rating a viewer can give.
pub const MAX_RATING: i32 = 10;

/// Returns true if `value` is an acceptable individual rating.
pub fn is_valid_rating(value: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

/// A film in the catalog.
///
/// Title, category and year are freely mutable; callers are responsible for
/// validating new values before calling the setters. Ratings only ever grow
/// through [`Film::add_rating`], which silently drops anything outside
/// `1..=10`, so every stored rating is always in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    title: String,
    category: String,
    year: i32,
    ratings: Vec<u8>,
}

impl Film {
    /// Create a film with an initial rating.
    ///
    /// The initial rating is rounded half-to-even and recorded only when it
    /// lies in `1.0..=10.0`; otherwise the film starts with no ratings.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        initial_rating: f64,
        year: i32,
    ) -> Self {
        let mut film = Self {
            title: title.into(),
            category: category.into(),
            year,
            ratings: Vec::new(),
        };
        if (MIN_RATING as f64..=MAX_RATING as f64).contains(&initial_rating) {
            film.add_rating(initial_rating.round_ties_even() as i32);
        }
        film
    }

    /// Create a film with no ratings at all.
    pub fn unrated(title: impl Into<String>, category: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            year,
            ratings: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Individual ratings in submission order.
    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Append a rating. Values outside `1..=10` are ignored.
    pub fn add_rating(&mut self, value: i32) {
        if is_valid_rating(value) {
            self.ratings.push(value as u8);
        }
    }

    /// Drop every recorded rating.
    pub fn clear_ratings(&mut self) {
        self.ratings.clear();
    }

    /// Arithmetic mean of all ratings, or `0.0` when there are none.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / self.ratings.len() as f64
    }

    /// Case-insensitive exact title comparison used for lookups.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | Average: {:.2} ({} ratings)",
            self.title,
            self.category,
            self.year,
            self.average_rating(),
            self.ratings.len(),
        )
    }
}

#[cfg(test)]
#[path = "tests/film_tests.rs"]
mod tests;
