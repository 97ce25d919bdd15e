//! The in-memory film catalog and its backing store.

use filmmate_core::query::{self, SearchKind};
use filmmate_core::{CatalogError, Film, SortKey};

use crate::error::StorageError;
use crate::store::RecordStore;

/// Every film known to the running process.
///
/// The catalog owns its films; queries hand out borrows into them, so an
/// edit made through [`Catalog::find_mut`] is seen by every later read.
///
/// `Catalog` has no internal locking. It is meant to be driven by a single
/// thread; sharing it across threads requires external synchronisation.
pub struct Catalog<S> {
    films: Vec<Film>,
    store: S,
}

impl<S: RecordStore<Film>> Catalog<S> {
    /// Load the catalog from `store`.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let films = store.load()?;
        log::debug!("Catalog opened with {} films", films.len());
        Ok(Self { films, store })
    }

    /// Persist the current films.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        self.store.save(&self.films)
    }

    /// Persist, or run `undo` on the films if saving fails.
    ///
    /// Keeps memory and disk in agreement when a write is refused.
    pub(crate) fn persist_or_undo(
        &mut self,
        undo: impl FnOnce(&mut Vec<Film>),
    ) -> Result<(), StorageError> {
        match self.store.save(&self.films) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("Save failed, reverting change: {e}");
                undo(&mut self.films);
                Err(e)
            }
        }
    }
}

impl<S> Catalog<S> {
    /// Build a catalog from films already in memory.
    pub fn with_films(films: Vec<Film>, store: S) -> Self {
        Self { films, store }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Film whose title matches exactly, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Film> {
        query::find_by_title(&self.films, title)
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Film> {
        self.films.iter_mut().find(|f| f.title_matches(title))
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.films.iter().position(|f| f.title_matches(title))
    }

    pub(crate) fn films_mut(&mut self) -> &mut Vec<Film> {
        &mut self.films
    }

    pub fn search(&self, kind: SearchKind, text: &str) -> Result<Vec<&Film>, CatalogError> {
        query::search(&self.films, kind, text)
    }

    pub fn sorted(&self, key: SortKey, ascending: bool) -> Vec<&Film> {
        filmmate_core::sort_films(&self.films, key, ascending)
    }

    pub fn categories(&self) -> Vec<&str> {
        query::unique_categories(&self.films)
    }
}
