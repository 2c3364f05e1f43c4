//! # User Roles
//!
//! Defines the closed set of user roles. A user holds exactly one role;
//! there is no hierarchy or inheritance between roles, and each role's
//! permission grant (in `imtr-access`) is declared independently.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The six user roles of the IMTR platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Teaching staff.
    Lecturer,
    /// Enrolled student.
    Student,
    /// Finance office staff.
    Finance,
    /// Library staff.
    Librarian,
    /// IT support staff.
    It,
}

/// Total number of roles. Used for compile-time assertions.
pub const ROLE_COUNT: usize = 6;

impl Role {
    /// Returns all six roles in canonical order.
    pub fn all_roles() -> &'static [Role] {
        &[
            Self::Admin,
            Self::Lecturer,
            Self::Student,
            Self::Finance,
            Self::Librarian,
            Self::It,
        ]
    }

    /// Returns the SCREAMING_SNAKE_CASE string identifier for this role,
    /// matching the serde serialization format and the values stored in
    /// the users table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Lecturer => "LECTURER",
            Self::Student => "STUDENT",
            Self::Finance => "FINANCE",
            Self::Librarian => "LIBRARIAN",
            Self::It => "IT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    /// Parse a role from its stored string form.
    ///
    /// Accepts the same identifiers produced by [`Role::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "LECTURER" => Ok(Self::Lecturer),
            "STUDENT" => Ok(Self::Student),
            "FINANCE" => Ok(Self::Finance),
            "LIBRARIAN" => Ok(Self::Librarian),
            "IT" => Ok(Self::It),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_count() {
        assert_eq!(Role::all_roles().len(), ROLE_COUNT);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for role in Role::all_roles() {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(*role, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("admin".parse::<Role>().is_err()); // case-sensitive
        assert!("REGISTRAR".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for role in Role::all_roles() {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for role in Role::all_roles() {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
