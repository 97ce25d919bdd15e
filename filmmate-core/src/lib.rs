//! Film catalog domain types and the query/sort engine.
//!
//! This crate does no I/O. It defines the [`Film`] entity, account types,
//! validation errors, the search/filter functions, the stable merge sort and
//! the plain-text listing format. Storage and the console live in
//! `filmmate-lib` and `filmmate-cli`.

pub mod display;
pub mod error;
pub mod film;
pub mod query;
pub mod sort;
pub mod user;
pub mod validate;

pub use display::{format_film_list, format_full_list, format_search_results};
pub use error::CatalogError;
pub use film::{Film, MAX_RATING, MIN_RATING};
pub use query::{CappedResults, RESULT_LIMIT, SearchKind, search, unique_categories};
pub use sort::{SortKey, SortOrder, merge_sort, sort_films};
pub use user::{Role, User};
