//! # imtr-access — Role-Permission Resolver
//!
//! The single authoritative mapping from [`Role`](imtr_core::Role) to its
//! granted [`Permission`](imtr_core::Permission) set, plus the boolean
//! membership queries that route guards and UI checks ask.
//!
//! ## Design
//!
//! - **One table.** Every consumer (server-side guard, client-facing
//!   capability listing) reads the same static declaration in
//!   [`table`]. There is no second copy to drift from.
//! - **No hierarchy.** Each role's grant is declared independently;
//!   no role inherits from another.
//! - **Predicates never fail.** Unknown role or permission strings at
//!   the untyped boundary answer "not granted" (empty slice / `false`),
//!   matching what existing callers expect.
//! - Checks emit `tracing` events at debug level.

pub mod actor;
pub mod query;
pub mod table;

// Re-export primary types for ergonomic imports.
pub use actor::Actor;
pub use query::{
    has_any_permission, has_permission, has_permission_named, permissions_for_name,
};
pub use table::permissions_for;
