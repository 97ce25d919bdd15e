//! Account registration, login and role changes.

use sha2::{Digest, Sha256};

use filmmate_core::validate::require_non_blank;
use filmmate_core::{CatalogError, Role, User};

use crate::error::{OperationError, StorageError};
use crate::store::{FIELD_SEPARATOR, RecordStore};

/// Lowercase hex SHA-256 of the UTF-8 password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Every registered account plus the store it came from.
pub struct Accounts<S> {
    users: Vec<User>,
    store: S,
}

impl<S: RecordStore<User>> Accounts<S> {
    pub fn open(store: S) -> Result<Self, StorageError> {
        let users = store.load()?;
        log::debug!("Loaded {} accounts", users.len());
        Ok(Self { users, store })
    }

    /// Register a new Viewer account.
    ///
    /// Names are unique ignoring case, so "Ana" blocks "ana".
    pub fn register(&mut self, username: &str, password: &str) -> Result<&User, OperationError> {
        self.check_username(username)?;
        self.users
            .push(User::new(username, hash_password(password), Role::Viewer));
        if let Err(e) = self.store.save(&self.users) {
            self.users.pop();
            return Err(e.into());
        }
        log::debug!("Registered user '{username}'");
        Ok(&self.users[self.users.len() - 1])
    }

    /// Change the role of the account named exactly `username`.
    ///
    /// Returns the previous role.
    pub fn set_role(&mut self, username: &str, role: Role) -> Result<Role, OperationError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.username == username)
            .ok_or_else(|| CatalogError::not_found(format!("No user named '{username}'.")))?;
        let previous = std::mem::replace(&mut self.users[idx].role, role);
        if previous == role {
            return Ok(previous);
        }
        if let Err(e) = self.store.save(&self.users) {
            self.users[idx].role = previous;
            return Err(e.into());
        }
        Ok(previous)
    }
}

impl<S> Accounts<S> {
    pub fn with_users(users: Vec<User>, store: S) -> Self {
        Self { users, store }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check that `username` could be registered.
    ///
    /// Lets an interactive caller reject a taken name before asking for the
    /// password. [`Accounts::register`] runs the same check again.
    pub fn check_username(&self, username: &str) -> Result<(), CatalogError> {
        require_non_blank(username, "Username")?;
        if username.contains(FIELD_SEPARATOR) {
            return Err(CatalogError::invalid_input(format!(
                "Username must not contain '{FIELD_SEPARATOR}'."
            )));
        }
        if self.users.iter().any(|u| u.name_taken_by(username)) {
            return Err(CatalogError::duplicate("User already exists!"));
        }
        Ok(())
    }

    /// Account whose name matches exactly and whose password hashes to the
    /// stored digest.
    pub fn login(&self, username: &str, password: &str) -> Option<&User> {
        let hash = hash_password(password);
        self.users
            .iter()
            .find(|u| u.username == username && u.password_hash == hash)
    }
}
