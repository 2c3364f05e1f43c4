//! # Identifier Validation
//!
//! A pure predicate over identifier strings. Checks the exact layout
//! described by each kind's [`KindFormat`]; a string generated for a
//! kind always validates against that kind.
//!
//! Validation is a predicate, not a parser: malformed input answers
//! `false`, never an error.

use imtr_core::{IdentifierKind, KindFormat};

/// Does `identifier` match the exact layout of `kind`?
pub fn validate(identifier: &str, kind: IdentifierKind) -> bool {
    match kind.format() {
        KindFormat::Sequential { prefix, dashed, width } => {
            let Some(rest) = identifier.strip_prefix(prefix) else {
                return false;
            };
            let rest = if dashed {
                match rest.strip_prefix('-') {
                    Some(r) => r,
                    None => return false,
                }
            } else {
                rest
            };
            rest.len() == width && all_digits(rest)
        }
        KindFormat::YearStamped { prefix, width } => {
            let Some(rest) = identifier.strip_prefix(prefix) else {
                return false;
            };
            let mut parts = rest.split('-');
            // Leading empty part: the layout is "-YYYY-NNNNNN" after the prefix.
            let (Some(""), Some(year), Some(seq), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                return false;
            };
            year.len() == 4 && all_digits(year) && seq.len() == width && all_digits(seq)
        }
        KindFormat::SubjectCode { width } => {
            // ASCII check first: split_at indexes by byte.
            if !identifier.is_ascii() || identifier.len() != 3 + width {
                return false;
            }
            let (letters, digits) = identifier.split_at(3);
            letters.chars().all(|c| c.is_ascii_uppercase()) && all_digits(digits)
        }
        KindFormat::UuidHex { prefix } => {
            let Some(body) = identifier.strip_prefix(prefix) else {
                return false;
            };
            body.len() == 32 && body.chars().all(is_upper_hex)
        }
        KindFormat::TimestampRandom { prefix } => {
            let Some(body) = identifier.strip_prefix(prefix) else {
                return false;
            };
            if !body.is_ascii() || body.len() != 20 {
                return false;
            }
            let (stamp, random) = body.split_at(14);
            all_digits(stamp)
                && random
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_upper_hex(c: char) -> bool {
    c.is_ascii_digit() || ('A'..='F').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_pattern() {
        assert!(validate("STU000042", IdentifierKind::Student));
        assert!(!validate("STU42", IdentifierKind::Student));
        assert!(!validate("STU0000042", IdentifierKind::Student)); // 7 digits
        assert!(!validate("stu000042", IdentifierKind::Student));
        assert!(!validate("LEC000042", IdentifierKind::Student));
        assert!(!validate("", IdentifierKind::Student));
    }

    #[test]
    fn test_course_pattern() {
        assert!(validate("MET007", IdentifierKind::Course));
        assert!(validate("PHY101", IdentifierKind::Course));
        assert!(!validate("MET07", IdentifierKind::Course));
        assert!(!validate("MeT007", IdentifierKind::Course));
        assert!(!validate("METE07", IdentifierKind::Course));
        assert!(!validate("123456", IdentifierKind::Course));
    }

    #[test]
    fn test_year_stamped_pattern() {
        assert!(validate("INV-2026-000003", IdentifierKind::Invoice));
        assert!(validate("PAY-1999-999999", IdentifierKind::Payment));
        assert!(!validate("INV-26-000003", IdentifierKind::Invoice)); // 2-digit year
        assert!(!validate("INV-2026-03", IdentifierKind::Invoice)); // short sequence
        assert!(!validate("INV2026000003", IdentifierKind::Invoice)); // no dashes
        assert!(!validate("INV-2026-000003-01", IdentifierKind::Invoice)); // extra part
        assert!(!validate("PAY-2026-000003", IdentifierKind::Invoice)); // wrong prefix
    }

    #[test]
    fn test_dashed_sequential_pattern() {
        assert!(validate("LIB-000114", IdentifierKind::Library));
        assert!(validate("NOT-000123", IdentifierKind::Notification));
        assert!(validate("AUD-004501", IdentifierKind::Audit));
        assert!(!validate("LIB000114", IdentifierKind::Library)); // missing dash
        assert!(!validate("NOT-123", IdentifierKind::Notification));
    }

    #[test]
    fn test_session_and_api_key_patterns() {
        assert!(validate(
            "SES-0123456789ABCDEF0123456789ABCDEF",
            IdentifierKind::Session
        ));
        assert!(validate(
            "IMTR-0123456789ABCDEF0123456789ABCDEF",
            IdentifierKind::ApiKey
        ));
        // Lowercase hex is rejected.
        assert!(!validate(
            "SES-0123456789abcdef0123456789abcdef",
            IdentifierKind::Session
        ));
        // Hex only, no G-Z.
        assert!(!validate(
            "SES-0123456789ABCDEF0123456789ABCDEG",
            IdentifierKind::Session
        ));
        assert!(!validate("SES-0123", IdentifierKind::Session));
    }

    #[test]
    fn test_mpesa_pattern() {
        assert!(validate("MP20260807093000A1B2C3", IdentifierKind::MpesaReference));
        assert!(!validate("MP2026080709300A1B2C3", IdentifierKind::MpesaReference)); // 13-digit stamp
        assert!(!validate("MP20260807093000a1b2c3", IdentifierKind::MpesaReference)); // lowercase
        assert!(!validate("MX20260807093000A1B2C3", IdentifierKind::MpesaReference));
    }

    #[test]
    fn test_cross_kind_mismatch() {
        // A valid identifier of one kind does not validate as another.
        assert!(!validate("STU000042", IdentifierKind::Lecturer));
        assert!(!validate("LIB-000114", IdentifierKind::Notification));
        assert!(!validate("INV-2026-000003", IdentifierKind::Payment));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!validate("STU00004\u{0662}", IdentifierKind::Student)); // Arabic-Indic digit
        assert!(!validate("ST\u{00da}000042", IdentifierKind::Student));
    }
}
