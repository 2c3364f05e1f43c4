//! # Error Types
//!
//! Errors reported at the string boundary of the core vocabulary types.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Typed code cannot produce these: a `Role` or `IdentifierKind` value is
//! valid by construction. Only `FromStr` parsing of externally supplied
//! tokens can fail.

use thiserror::Error;

/// Parse failure for one of the closed vocabulary types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string names no known identifier kind.
    #[error("unknown identifier kind: {0:?}")]
    UnknownIdentifierKind(String),

    /// The string names no known role.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// The string names no known permission token.
    #[error("unknown permission: {0:?}")]
    UnknownPermission(String),
}
