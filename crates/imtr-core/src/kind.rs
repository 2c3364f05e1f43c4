//! # Identifier Kinds — Single Source of Truth
//!
//! Defines the `IdentifierKind` enum with all 16 identifier categories
//! issued by the platform, together with the format metadata that both
//! the generator and the validator drive off. One description per kind
//! means the two can never disagree on layout.
//!
//! Every `match` on `IdentifierKind` must be exhaustive: adding a kind
//! forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// All identifier categories issued by the IMTR platform.
///
/// Each kind owns a fixed textual layout, described by [`KindFormat`].
/// Sequence-bearing kinds embed a caller-supplied, zero-padded sequence
/// number; the remaining kinds derive their body from a UUID or the
/// current timestamp.
///
/// # Kinds
///
/// | # | Kind | Example |
/// |---|------|---------|
/// |  1 | Student | `STU000042` |
/// |  2 | Lecturer | `LEC000007` |
/// |  3 | Course | `MET007` |
/// |  4 | Invoice | `INV-2026-000003` |
/// |  5 | Payment | `PAY-2026-000019` |
/// |  6 | Library | `LIB-000114` |
/// |  7 | Research | `RES-2026-000002` |
/// |  8 | Exam | `EXM-2026-000051` |
/// |  9 | Admission | `ADM-2026-001204` |
/// | 10 | Clearance | `CLR-2026-000033` |
/// | 11 | Transcript | `TRN-2026-000090` |
/// | 12 | Notification | `NOT-000123` |
/// | 13 | Audit | `AUD-004501` |
/// | 14 | Session | `SES-` + 32 uppercase hex |
/// | 15 | ApiKey | `IMTR-` + 32 uppercase hex |
/// | 16 | MpesaReference | `MP20260115120000A1B2C3` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Student registration number.
    Student,
    /// Lecturer staff number.
    Lecturer,
    /// Course code derived from the subject name.
    Course,
    /// Fee invoice number, year-stamped.
    Invoice,
    /// Payment receipt number, year-stamped.
    Payment,
    /// Library membership number.
    Library,
    /// Research project number, year-stamped.
    Research,
    /// Examination sitting number, year-stamped.
    Exam,
    /// Admission letter number, year-stamped.
    Admission,
    /// Clearance certificate number, year-stamped.
    Clearance,
    /// Academic transcript number, year-stamped.
    Transcript,
    /// Notification reference.
    Notification,
    /// Audit log entry reference.
    Audit,
    /// Login session token.
    Session,
    /// Integration API key.
    ApiKey,
    /// M-Pesa transaction reference.
    MpesaReference,
}

/// Total number of identifier kinds. Used for compile-time assertions.
pub const IDENTIFIER_KIND_COUNT: usize = 16;

/// Textual layout of one identifier kind.
///
/// Returned by [`IdentifierKind::format()`]. The generator renders this
/// description and the validator checks against it, so the two agree
/// bit-for-bit by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFormat {
    /// `prefix` + zero-padded sequence, optionally dash-separated
    /// (`STU000042` vs `LIB-000114`).
    Sequential {
        /// Fixed alphabetic prefix.
        prefix: &'static str,
        /// Whether a `-` separates prefix and sequence.
        dashed: bool,
        /// Digits in the zero-padded sequence.
        width: usize,
    },
    /// `prefix` + `-YYYY-` + zero-padded sequence (`INV-2026-000003`).
    YearStamped {
        /// Fixed alphabetic prefix.
        prefix: &'static str,
        /// Digits in the zero-padded sequence.
        width: usize,
    },
    /// Three uppercase letters from the subject name + zero-padded
    /// sequence (`MET007`).
    SubjectCode {
        /// Digits in the zero-padded sequence.
        width: usize,
    },
    /// `prefix` + 32 uppercase hex characters from a v4 UUID.
    UuidHex {
        /// Fixed prefix, including its trailing dash.
        prefix: &'static str,
    },
    /// `MP` + 14-digit `YYYYMMDDHHmmss` timestamp + 6 random
    /// uppercase alphanumerics.
    TimestampRandom {
        /// Fixed alphabetic prefix.
        prefix: &'static str,
    },
}

impl IdentifierKind {
    /// Returns all 16 identifier kinds in canonical order.
    pub fn all_kinds() -> &'static [IdentifierKind] {
        &[
            Self::Student,
            Self::Lecturer,
            Self::Course,
            Self::Invoice,
            Self::Payment,
            Self::Library,
            Self::Research,
            Self::Exam,
            Self::Admission,
            Self::Clearance,
            Self::Transcript,
            Self::Notification,
            Self::Audit,
            Self::Session,
            Self::ApiKey,
            Self::MpesaReference,
        ]
    }

    /// Returns the snake_case string identifier for this kind.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Lecturer => "lecturer",
            Self::Course => "course",
            Self::Invoice => "invoice",
            Self::Payment => "payment",
            Self::Library => "library",
            Self::Research => "research",
            Self::Exam => "exam",
            Self::Admission => "admission",
            Self::Clearance => "clearance",
            Self::Transcript => "transcript",
            Self::Notification => "notification",
            Self::Audit => "audit",
            Self::Session => "session",
            Self::ApiKey => "api_key",
            Self::MpesaReference => "mpesa_reference",
        }
    }

    /// Returns the textual layout of this kind.
    pub fn format(&self) -> KindFormat {
        match self {
            Self::Student => KindFormat::Sequential { prefix: "STU", dashed: false, width: 6 },
            Self::Lecturer => KindFormat::Sequential { prefix: "LEC", dashed: false, width: 6 },
            Self::Course => KindFormat::SubjectCode { width: 3 },
            Self::Invoice => KindFormat::YearStamped { prefix: "INV", width: 6 },
            Self::Payment => KindFormat::YearStamped { prefix: "PAY", width: 6 },
            Self::Library => KindFormat::Sequential { prefix: "LIB", dashed: true, width: 6 },
            Self::Research => KindFormat::YearStamped { prefix: "RES", width: 6 },
            Self::Exam => KindFormat::YearStamped { prefix: "EXM", width: 6 },
            Self::Admission => KindFormat::YearStamped { prefix: "ADM", width: 6 },
            Self::Clearance => KindFormat::YearStamped { prefix: "CLR", width: 6 },
            Self::Transcript => KindFormat::YearStamped { prefix: "TRN", width: 6 },
            Self::Notification => KindFormat::Sequential { prefix: "NOT", dashed: true, width: 6 },
            Self::Audit => KindFormat::Sequential { prefix: "AUD", dashed: true, width: 6 },
            Self::Session => KindFormat::UuidHex { prefix: "SES-" },
            Self::ApiKey => KindFormat::UuidHex { prefix: "IMTR-" },
            Self::MpesaReference => KindFormat::TimestampRandom { prefix: "MP" },
        }
    }

    /// Whether this kind embeds the 4-digit calendar year.
    pub fn has_year(&self) -> bool {
        matches!(self.format(), KindFormat::YearStamped { .. })
    }

    /// Digits in the zero-padded sequence suffix, for sequence-bearing
    /// kinds. `None` for session, API key, and M-Pesa references, whose
    /// bodies are not caller-supplied sequences.
    pub fn sequence_width(&self) -> Option<usize> {
        match self.format() {
            KindFormat::Sequential { width, .. }
            | KindFormat::YearStamped { width, .. }
            | KindFormat::SubjectCode { width } => Some(width),
            KindFormat::UuidHex { .. } | KindFormat::TimestampRandom { .. } => None,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    /// Parse an identifier kind from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by
    /// [`IdentifierKind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "lecturer" => Ok(Self::Lecturer),
            "course" => Ok(Self::Course),
            "invoice" => Ok(Self::Invoice),
            "payment" => Ok(Self::Payment),
            "library" => Ok(Self::Library),
            "research" => Ok(Self::Research),
            "exam" => Ok(Self::Exam),
            "admission" => Ok(Self::Admission),
            "clearance" => Ok(Self::Clearance),
            "transcript" => Ok(Self::Transcript),
            "notification" => Ok(Self::Notification),
            "audit" => Ok(Self::Audit),
            "session" => Ok(Self::Session),
            "api_key" => Ok(Self::ApiKey),
            "mpesa_reference" => Ok(Self::MpesaReference),
            other => Err(ValidationError::UnknownIdentifierKind(other.to_string())),
        }
    }
}
