//! # imtr-ident — Identifier Engine
//!
//! Generation, validation, and sequence extraction for every identifier
//! kind the platform issues, plus the random token generators (sessions,
//! API keys, M-Pesa references, temporary passwords, verification codes).
//!
//! ## Design
//!
//! - Generation and validation both drive off
//!   [`IdentifierKind::format()`](imtr_core::IdentifierKind::format), so a
//!   freshly generated identifier always validates against its own kind.
//! - [`validate`] and [`extract_sequence`] are predicates: they never
//!   error, they answer `false`/`None`.
//! - The module performs no uniqueness checks and no persistence. The
//!   caller reserves sequence numbers; this crate only formats them.
//! - Sequence numbers are `u32`; values too wide for a kind's padded
//!   field are rejected with [`IdentError::SequenceOutOfRange`] so that
//!   every accepted input round-trips through [`validate`].
//! - Passwords and verification codes are low-entropy conveniences drawn
//!   from the thread RNG, not secrets. Webhook signing lives in
//!   `imtr-crypto`.

pub mod error;
pub mod extract;
pub mod generate;
pub mod token;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use error::IdentError;
pub use extract::extract_sequence;
pub use generate::Generator;
pub use token::{api_key, session_id, temp_password, uuid_v4, verification_code};
pub use validate::validate;
