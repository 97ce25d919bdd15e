//! Flat-file persistence for films and accounts.
//!
//! Each record is one `;`-separated line. A [`LineCodec`] maps records to
//! and from lines; [`TextFileStore`] reads and rewrites whole files with it,
//! and [`MemoryStore`] keeps records in memory for tests and dry runs.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use filmmate_core::{Film, Role, User};

use crate::error::StorageError;

/// Field separator used in every data file.
pub const FIELD_SEPARATOR: char = ';';

/// Somewhere a list of records is loaded from and saved back to.
pub trait RecordStore<T> {
    /// Read every record. A missing backing file yields an empty list.
    fn load(&self) -> Result<Vec<T>, StorageError>;

    /// Replace the stored records with `records`.
    fn save(&mut self, records: &[T]) -> Result<(), StorageError>;
}

/// Conversion between a record and one line of a data file.
pub trait LineCodec {
    type Record;

    /// Decode a line.
    ///
    /// `Ok(None)` skips the line silently (wrong field count); `Err` skips
    /// it with a warning (fields present but malformed).
    fn decode(line: &str) -> Result<Option<Self::Record>, String>;

    fn encode(record: &Self::Record) -> String;
}

/// `<title>;<category>;<average>;<year>`
///
/// Only the average survives a round trip: on load it becomes the film's
/// single initial rating.
pub struct FilmCodec;

impl LineCodec for FilmCodec {
    type Record = Film;

    fn decode(line: &str) -> Result<Option<Film>, String> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [title, category, average, year] = fields.as_slice() else {
            return Ok(None);
        };
        let average: f64 = average
            .trim()
            .parse()
            .map_err(|_| format!("bad rating '{average}'"))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| format!("bad year '{year}'"))?;
        Ok(Some(Film::new(*title, *category, average, year)))
    }

    fn encode(film: &Film) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            film.title(),
            film.category(),
            film.average_rating(),
            film.year(),
            sep = FIELD_SEPARATOR,
        )
    }
}

/// `<username>;<sha256-hex>;<admin|user>`
pub struct UserCodec;

impl LineCodec for UserCodec {
    type Record = User;

    fn decode(line: &str) -> Result<Option<User>, String> {
        let mut fields = line.split(FIELD_SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(hash), Some(role)) => Ok(Some(User::new(
                name,
                hash,
                Role::from_storage_name(role),
            ))),
            _ => Ok(None),
        }
    }

    fn encode(user: &User) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            user.username,
            user.password_hash,
            user.role.storage_name(),
            sep = FIELD_SEPARATOR,
        )
    }
}

/// Decode every line of `contents`, skipping the ones the codec rejects.
pub fn decode_lines<C: LineCodec>(contents: &str, source: &Path) -> Vec<C::Record> {
    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        match C::decode(line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {
                log::debug!("{}:{}: wrong field count, skipped", source.display(), idx + 1);
            }
            Err(e) => {
                log::warn!("Skipping malformed line {} in {}: {e}", idx + 1, source.display());
            }
        }
    }
    records
}

/// Records kept in a text file, one per line.
pub struct TextFileStore<C> {
    path: PathBuf,
    _codec: PhantomData<C>,
}

impl<C> TextFileStore<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _codec: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<C: LineCodec> RecordStore<C::Record> for TextFileStore<C> {
    fn load(&self) -> Result<Vec<C::Record>, StorageError> {
        if !self.path.exists() {
            log::debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let records = decode_lines::<C>(&contents, &self.path);
        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&mut self, records: &[C::Record]) -> Result<(), StorageError> {
        let mut out = String::new();
        for record in records {
            out.push_str(&C::encode(record));
            out.push('\n');
        }

        // Write atomically
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("txt.tmp");
        std::fs::write(&tmp, out).map_err(|e| StorageError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        log::debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Film file store.
pub type FilmFileStore = TextFileStore<FilmCodec>;

/// Users file store.
pub type UserFileStore = TextFileStore<UserCodec>;

/// In-memory store that counts how often it was saved.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
    saves: usize,
    fail_saves: bool,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            saves: 0,
            fail_saves: false,
        }
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Records as of the last successful save.
    pub fn records(&self) -> &[T] {
        &self.records
    }
}

impl<T: Clone> RecordStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[T]) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::io(
                "<memory>",
                std::io::Error::other("save disabled"),
            ));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_line_decodes() {
        let film = FilmCodec::decode("Inception;Sci-Fi;8.5;2010").unwrap().unwrap();
        assert_eq!(film.title(), "Inception");
        assert_eq!(film.category(), "Sci-Fi");
        assert_eq!(film.year(), 2010);
        assert_eq!(film.ratings(), &[8]);
    }

    #[test]
    fn film_line_with_zero_average_has_no_ratings() {
        let film = FilmCodec::decode("Blank;Drama;0;2001").unwrap().unwrap();
        assert!(film.ratings().is_empty());
    }

    #[test]
    fn film_line_with_wrong_field_count_is_skipped() {
        assert_eq!(FilmCodec::decode("Inception;Sci-Fi;8.5").unwrap(), None);
        assert_eq!(FilmCodec::decode("A;B;8;2010;extra").unwrap(), None);
        assert_eq!(FilmCodec::decode("").unwrap(), None);
    }

    #[test]
    fn film_line_with_bad_numbers_is_an_error() {
        assert!(FilmCodec::decode("Inception;Sci-Fi;great;2010").is_err());
        assert!(FilmCodec::decode("Inception;Sci-Fi;8;soon").is_err());
    }

    #[test]
    fn film_encodes_average() {
        let mut film = Film::new("Avatar", "Sci-Fi", 8.0, 2009);
        assert_eq!(FilmCodec::encode(&film), "Avatar;Sci-Fi;8;2009");
        film.add_rating(9);
        assert_eq!(FilmCodec::encode(&film), "Avatar;Sci-Fi;8.5;2009");
    }

    #[test]
    fn user_line_decodes_roles() {
        let admin = UserCodec::decode("root;abc;admin").unwrap().unwrap();
        assert_eq!(admin.role, Role::Administrator);
        let viewer = UserCodec::decode("bob;abc;user").unwrap().unwrap();
        assert_eq!(viewer.role, Role::Viewer);
        let odd = UserCodec::decode("eve;abc;Admin;extra").unwrap().unwrap();
        assert_eq!(odd.role, Role::Viewer);
    }

    #[test]
    fn short_user_line_is_skipped() {
        assert_eq!(UserCodec::decode("bob;abc").unwrap(), None);
    }

    #[test]
    fn decode_lines_skips_bad_lines() {
        let text = "A;x;7;2000\nbroken\nB;y;oops;2001\r\nC;z;9;2002\n";
        let films = decode_lines::<FilmCodec>(text, Path::new("films.txt"));
        let titles: Vec<&str> = films.iter().map(|f| f.title()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        store.save(&[1, 2, 3]).unwrap();
        store.save(&[4]).unwrap();
        assert_eq!(store.saves(), 2);
        assert_eq!(store.load().unwrap(), vec![4]);
    }

    #[test]
    fn failing_memory_store_keeps_old_records() {
        let mut store = MemoryStore::with_records(vec![1]).failing();
        assert!(store.save(&[2]).is_err());
        assert_eq!(store.records(), &[1]);
        assert_eq!(store.saves(), 0);
    }
}
