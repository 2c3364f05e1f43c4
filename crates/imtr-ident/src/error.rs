//! # Identifier Generation Errors
//!
//! Generation is total over its valid input domain; these errors mark
//! the edges of that domain. Validation never produces them.

use imtr_core::IdentifierKind;
use thiserror::Error;

/// Error from identifier generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// The sequence number does not fit the kind's zero-padded field.
    /// Formatting it anyway would produce an identifier the kind's own
    /// validator rejects.
    #[error("sequence {sequence} out of range for {kind} (max {max})")]
    SequenceOutOfRange {
        /// The kind being generated.
        kind: IdentifierKind,
        /// The rejected sequence number.
        sequence: u32,
        /// Largest sequence the padded field can hold.
        max: u32,
    },

    /// Course codes need a subject name; use `Generator::course_code`.
    #[error("course codes require a subject name")]
    MissingSubject,

    /// The subject name does not yield three ASCII letters for the
    /// course prefix.
    #[error("subject {0:?} does not yield a 3-letter course prefix")]
    InvalidSubject(String),
}
