//! Stable merge sort over catalog snapshots.
//!
//! The sort itself is generic and knows nothing about films: it takes a
//! "strictly precedes" predicate. [`SortKey`] plus a direction resolves to a
//! [`SortOrder`] that supplies that predicate for films.

use std::fmt;
use std::str::FromStr;

use crate::film::Film;

/// Sort `items` with a classic top-down merge sort.
///
/// `precedes(a, b)` must return true only when `a` has to come strictly
/// before `b`. Equal elements keep their input order.
pub fn merge_sort<T, F>(items: &[T], precedes: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    sort_slice(items, &precedes)
}

fn sort_slice<T, F>(items: &[T], precedes: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let (left, right) = items.split_at(items.len() / 2);
    let left = sort_slice(left, precedes);
    let right = sort_slice(right, precedes);
    merge(left, right, precedes)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, precedes: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => precedes(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        // Ties fall through to the left head.
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
    out
}

/// Field a film listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Average rating
    Rating,
    /// Release year
    Year,
    /// Title, by code point (case-sensitive, not locale-aware)
    Title,
}

const ALL_SORT_KEYS: &[SortKey] = &[SortKey::Rating, SortKey::Year, SortKey::Title];

impl SortKey {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Year => "year",
            Self::Title => "title",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Year => "Release Year",
            Self::Title => "Title",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Rating => &["rating", "ratings", "avg", "average", "score"],
            Self::Year => &["year", "release", "released"],
            Self::Title => &["title", "name"],
        }
    }

    pub fn all() -> &'static [SortKey] {
        ALL_SORT_KEYS
    }

    /// Pair this key with a direction.
    pub fn order(self, ascending: bool) -> SortOrder {
        SortOrder {
            key: self,
            ascending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `SortKey`.
#[derive(Debug, Clone)]
pub struct SortKeyParseError(pub String);

impl fmt::Display for SortKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = ALL_SORT_KEYS.iter().map(|key| key.short_name()).collect();
        write!(
            f,
            "unknown sort key: '{}' (expected one of: {})",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for SortKeyParseError {}

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SORT_KEYS
            .iter()
            .copied()
            .find(|key| key.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SortKeyParseError(s.to_string()))
    }
}

/// A sort key resolved together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortOrder {
    /// Whether `a` must be listed strictly before `b`.
    pub fn precedes(&self, a: &Film, b: &Film) -> bool {
        match (self.key, self.ascending) {
            (SortKey::Rating, true) => a.average_rating() < b.average_rating(),
            (SortKey::Rating, false) => a.average_rating() > b.average_rating(),
            (SortKey::Year, true) => a.year() < b.year(),
            (SortKey::Year, false) => a.year() > b.year(),
            (SortKey::Title, true) => a.title() < b.title(),
            (SortKey::Title, false) => a.title() > b.title(),
        }
    }

    pub fn direction_label(&self) -> &'static str {
        if self.ascending {
            "Ascending"
        } else {
            "Descending"
        }
    }

    /// Heading used when the sorted list is displayed.
    pub fn heading(&self) -> String {
        format!(
            "Sorted List ({} - {})",
            self.key.display_name(),
            self.direction_label()
        )
    }
}

/// Sort a catalog snapshot by `key`, returning references in the new order.
pub fn sort_films(films: &[Film], key: SortKey, ascending: bool) -> Vec<&Film> {
    let order = key.order(ascending);
    let refs: Vec<&Film> = films.iter().collect();
    merge_sort(&refs, |a, b| order.precedes(a, b))
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
