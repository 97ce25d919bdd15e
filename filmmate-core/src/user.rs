//! Account identity types.
//!
//! A role is plain data. Which catalog operations each role may run is
//! decided by the menu that dispatches them, not by the role itself.

use std::fmt;
use std::str::FromStr;

/// The two kinds of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// May add, update and delete films as well as browse them
    Administrator,
    /// May browse, search, sort and rate films
    #[default]
    Viewer,
}

impl Role {
    /// Token written to the users file.
    pub fn storage_name(&self) -> &'static str {
        match self {
            Self::Administrator => "admin",
            Self::Viewer => "user",
        }
    }

    /// Role for a token read from the users file.
    ///
    /// Only the exact lowercase `admin` is an administrator; anything else
    /// is a viewer.
    pub fn from_storage_name(token: &str) -> Self {
        if token == "admin" {
            Self::Administrator
        } else {
            Self::Viewer
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Viewer => "Viewer",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Role`.
#[derive(Debug, Clone)]
pub struct RoleParseError(pub String);

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: '{}' (expected admin or viewer)", self.0)
    }
}

impl std::error::Error for RoleParseError {}

impl FromStr for Role {
    type Err = RoleParseError;

    /// Lenient, case-insensitive parse for command-line input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "administrator" => Ok(Self::Administrator),
            "user" | "viewer" => Ok(Self::Viewer),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// Lowercase hex SHA-256 digest of the password
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }

    /// Case-insensitive name comparison used when checking for duplicates.
    pub fn name_taken_by(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_names_round_trip() {
        for role in [Role::Administrator, Role::Viewer] {
            assert_eq!(Role::from_storage_name(role.storage_name()), role);
        }
    }

    #[test]
    fn only_exact_admin_token_is_administrator() {
        assert_eq!(Role::from_storage_name("admin"), Role::Administrator);
        assert_eq!(Role::from_storage_name("Admin"), Role::Viewer);
        assert_eq!(Role::from_storage_name("ADMIN"), Role::Viewer);
        assert_eq!(Role::from_storage_name(""), Role::Viewer);
        assert_eq!(Role::from_storage_name("root"), Role::Viewer);
    }

    #[test]
    fn cli_parse_is_lenient() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!("viewer".parse::<Role>().unwrap(), Role::Viewer);
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn duplicate_check_ignores_case() {
        let user = User::new("User1", "hash", Role::Viewer);
        assert!(user.name_taken_by("user1"));
        assert!(!user.name_taken_by("user2"));
    }
}
