//! Storage, accounts and catalog mutations for FilmMate.
//!
//! Builds on `filmmate-core`: the [`Catalog`] owns the films and the store
//! they persist to, [`ops`] implements the add/delete/update/rate flows,
//! [`Accounts`] handles registration and login, and [`settings`] locates the
//! data directory.

pub mod catalog;
pub mod error;
pub mod ops;
pub mod settings;
pub mod store;
pub mod users;

pub use catalog::Catalog;
pub use error::{OperationError, StorageError};
pub use ops::{
    Added, DELETE_TOKEN, DeleteConfirmation, DeleteOutcome, FilmUpdate, NewFilm, add_film,
    current_year, delete_film, rate_film, update_film,
};
pub use settings::{DataPaths, resolve_data_dir};
pub use store::{FilmFileStore, MemoryStore, RecordStore, UserFileStore};
pub use users::{Accounts, hash_password};
