//! # imtr-core — Foundational Types for the IMTR Platform
//!
//! This crate defines the type-system primitives shared by every other
//! crate in the workspace: the closed set of identifier kinds with their
//! format metadata, the closed set of user roles, the permission token
//! vocabulary, and the clock abstraction behind all wall-clock reads.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for closed sets.** `IdentifierKind`, `Role`, and
//!    `Permission` are enums, not free-form strings. An unsupported kind
//!    or permission is a compile error in typed code; only the string
//!    boundary (`FromStr`) can observe unknown tokens, and it reports them
//!    as `ValidationError`.
//!
//! 2. **Format metadata lives with the kind.** Every `IdentifierKind`
//!    describes its own textual layout via [`KindFormat`], so generation
//!    and validation drive off one description and cannot drift apart.
//!
//! 3. **No ambient wall-clock reads.** Anything that needs the current
//!    time takes a [`Clock`], making year-stamped identifiers fully
//!    testable with [`FixedClock`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `imtr-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod clock;
pub mod error;
pub mod kind;
pub mod permission;
pub mod role;

// Re-export primary types for ergonomic imports.
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ValidationError;
pub use kind::{IdentifierKind, KindFormat, IDENTIFIER_KIND_COUNT};
pub use permission::Permission;
pub use role::{Role, ROLE_COUNT};
