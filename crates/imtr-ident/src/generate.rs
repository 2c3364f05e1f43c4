//! # Identifier Generation
//!
//! Renders the format described by each kind's [`KindFormat`] into a
//! concrete identifier string. The caller supplies the sequence number
//! and has already reserved it; nothing here checks uniqueness.
//!
//! Year-stamped kinds and M-Pesa references read the clock, so the
//! generator is parameterized over [`Clock`]. Production code uses
//! [`Generator::system()`]; tests pin the clock with
//! [`FixedClock`](imtr_core::FixedClock).

use imtr_core::{Clock, IdentifierKind, KindFormat, SystemClock};

use crate::error::IdentError;
use crate::token;

/// Formats identifiers for every [`IdentifierKind`].
#[derive(Debug, Clone)]
pub struct Generator<C: Clock = SystemClock> {
    clock: C,
}

impl Generator<SystemClock> {
    /// A generator on the system clock.
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for Generator<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> Generator<C> {
    /// A generator on the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generate an identifier of `kind` for a reserved `sequence` number.
    ///
    /// Session, API-key, and M-Pesa identifiers carry no sequence; for
    /// those kinds the sequence argument is not embedded and the
    /// dedicated generator is invoked instead. Course codes need a
    /// subject name and are produced by [`Generator::course_code`].
    ///
    /// # Errors
    ///
    /// - [`IdentError::SequenceOutOfRange`] if `sequence` does not fit
    ///   the kind's padded field.
    /// - [`IdentError::MissingSubject`] for [`IdentifierKind::Course`].
    pub fn generate(&self, kind: IdentifierKind, sequence: u32) -> Result<String, IdentError> {
        match kind.format() {
            KindFormat::Sequential { prefix, dashed, width } => {
                check_width(kind, sequence, width)?;
                if dashed {
                    Ok(format!("{prefix}-{sequence:0width$}"))
                } else {
                    Ok(format!("{prefix}{sequence:0width$}"))
                }
            }
            KindFormat::YearStamped { prefix, width } => {
                check_width(kind, sequence, width)?;
                let year = self.clock.year();
                Ok(format!("{prefix}-{year:04}-{sequence:0width$}"))
            }
            KindFormat::SubjectCode { .. } => Err(IdentError::MissingSubject),
            KindFormat::UuidHex { prefix } => Ok(token::uuid_hex_token(prefix)),
            KindFormat::TimestampRandom { prefix } => Ok(self.timestamp_reference(prefix)),
        }
    }

    /// Generate a course code: the first three letters of the subject
    /// name, upper-cased, followed by the 3-digit zero-padded sequence.
    ///
    /// `"Meteorology", 7` yields `"MET007"`.
    ///
    /// # Errors
    ///
    /// - [`IdentError::InvalidSubject`] if the subject does not begin
    ///   with three ASCII letters.
    /// - [`IdentError::SequenceOutOfRange`] if `sequence > 999`.
    pub fn course_code(&self, subject: &str, sequence: u32) -> Result<String, IdentError> {
        let width = match IdentifierKind::Course.format() {
            KindFormat::SubjectCode { width } => width,
            // Course is SubjectCode by definition; other arms are unreachable.
            _ => 3,
        };
        check_width(IdentifierKind::Course, sequence, width)?;

        let prefix: String = subject.chars().take(3).collect();
        if prefix.len() != 3 || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(IdentError::InvalidSubject(subject.to_string()));
        }
        Ok(format!("{}{sequence:0width$}", prefix.to_uppercase()))
    }

    /// Generate an M-Pesa transaction reference: `MP` + the current
    /// `YYYYMMDDHHmmss` timestamp + 6 random uppercase alphanumerics.
    pub fn mpesa_reference(&self) -> String {
        self.timestamp_reference("MP")
    }

    fn timestamp_reference(&self, prefix: &str) -> String {
        let stamp = self.clock.now().format("%Y%m%d%H%M%S");
        format!("{prefix}{stamp}{}", token::random_upper_alphanumeric(6))
    }
}

/// Reject sequences wider than the padded field.
fn check_width(kind: IdentifierKind, sequence: u32, width: usize) -> Result<(), IdentError> {
    let max = 10u32.pow(width as u32) - 1;
    if sequence > max {
        return Err(IdentError::SequenceOutOfRange { kind, sequence, max });
    }
    Ok(())
}
