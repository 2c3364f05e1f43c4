//! # Sequence Extraction
//!
//! Best-effort recovery of the sequence number from an identifier's
//! trailing digits. Deliberately format-agnostic: no prefix check, so a
//! foreign string that happens to end in six digits also "succeeds".
//! Callers that need a validated parse pair this with
//! [`validate`](crate::validate).

/// Parse the final six digits of `identifier`'s trailing digit run.
///
/// Returns `None` when fewer than six digits end the string. A run
/// longer than six contributes only its last six, mirroring the
/// `\d{6}$` semantics the route handlers have always relied on.
pub fn extract_sequence(identifier: &str) -> Option<u32> {
    let trailing_digits = identifier
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if trailing_digits < 6 {
        return None;
    }
    // The last 6 chars are ASCII digits, so byte indexing is safe.
    identifier[identifier.len() - 6..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_from_generated_forms() {
        assert_eq!(extract_sequence("STU000042"), Some(42));
        assert_eq!(extract_sequence("NOT-000123"), Some(123));
        assert_eq!(extract_sequence("INV-2026-000003"), Some(3));
        assert_eq!(extract_sequence("LIB-999999"), Some(999_999));
    }

    #[test]
    fn test_no_trailing_digits() {
        assert_eq!(extract_sequence("no-digits-here"), None);
        assert_eq!(extract_sequence(""), None);
        assert_eq!(extract_sequence("STU00004X"), None);
    }

    #[test]
    fn test_short_trailing_run() {
        assert_eq!(extract_sequence("MET007"), None); // 3 digits only
        assert_eq!(extract_sequence("ABC12345"), None); // 5 digits
    }

    #[test]
    fn test_long_run_takes_last_six() {
        // 7 trailing digits: the last 6 win, lenient by design.
        assert_eq!(extract_sequence("STU0000042"), Some(42));
        assert_eq!(extract_sequence("1234567"), Some(234_567));
    }

    #[test]
    fn test_foreign_string_with_six_digits() {
        // No prefix check: this is the documented leniency.
        assert_eq!(extract_sequence("completely-unrelated-123456"), Some(123_456));
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        assert_eq!(extract_sequence("STU00004\u{0662}"), None);
    }
}
