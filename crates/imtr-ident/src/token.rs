//! # Random Token Generators
//!
//! Tokens with no caller-supplied sequence: session IDs, API keys, raw
//! UUIDs, temporary passwords, and verification codes.
//!
//! Passwords and codes are drawn from the thread RNG and are deliberately
//! low-entropy: they are one-time conveniences a user replaces or redeems
//! immediately, not durable secrets.

use rand::Rng;
use uuid::Uuid;

/// Characters a temporary password or M-Pesa suffix is drawn from.
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a temporary password.
const TEMP_PASSWORD_LEN: usize = 10;

/// Digits in a verification code.
const VERIFICATION_CODE_LEN: usize = 6;

/// A new lowercase hyphenated v4 UUID.
pub fn uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

/// A new session token: `SES-` + 32 uppercase hex characters.
pub fn session_id() -> String {
    uuid_hex_token("SES-")
}

/// A new API key: `IMTR-` + 32 uppercase hex characters.
pub fn api_key() -> String {
    uuid_hex_token("IMTR-")
}

/// A temporary password: 10 characters drawn uniformly from `[A-Z0-9]`.
pub fn temp_password() -> String {
    random_upper_alphanumeric(TEMP_PASSWORD_LEN)
}

/// A verification code: 6 independently random decimal digits.
/// Leading zeros are possible; the code is a string, not a number.
pub fn verification_code() -> String {
    let mut rng = rand::thread_rng();
    (0..VERIFICATION_CODE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// `prefix` + the 32 hex characters of a v4 UUID, upper-cased.
pub(crate) fn uuid_hex_token(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{prefix}{hex}")
}

/// `len` characters drawn uniformly from `[A-Z0-9]`.
pub(crate) fn random_upper_alphanumeric(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(UPPER_ALPHANUMERIC[rng.gen_range(0..UPPER_ALPHANUMERIC.len())]))
        .collect()
}
