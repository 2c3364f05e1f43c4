//! # Webhook Signatures
//!
//! HMAC-SHA256 over the raw payload bytes, keyed by the shared secret
//! the receiving integration was configured with. The signature travels
//! hex-encoded in a header; receivers recompute and compare.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign `payload` with `secret`, returning the lowercase hex HMAC-SHA256.
pub fn sign_webhook(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a hex `signature` over `payload` in constant time.
///
/// Malformed hex answers `false`, never an error.
pub fn verify_webhook(secret: &[u8], payload: &[u8], signature: &str) -> bool {
    let provided = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    // Constant-time comparison via the hmac crate.
    mac.verify_slice(&provided).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_round_trip() {
        let secret = b"shared-secret";
        let payload = br#"{"event":"fees.invoice.created","id":"INV-2026-000003"}"#;
        let signature = sign_webhook(secret, payload);
        assert!(verify_webhook(secret, payload, &signature));
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = sign_webhook(b"k", b"payload");
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signing_is_deterministic() {
        assert_eq!(sign_webhook(b"k", b"payload"), sign_webhook(b"k", b"payload"));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let signature = sign_webhook(b"k", b"payload");
        assert!(!verify_webhook(b"k", b"payload2", &signature));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let signature = sign_webhook(b"k", b"payload");
        assert!(!verify_webhook(b"other", b"payload", &signature));
    }

    #[test]
    fn test_malformed_hex_rejected() {
        assert!(!verify_webhook(b"k", b"payload", "not-hex"));
        assert!(!verify_webhook(b"k", b"payload", ""));
        assert!(!verify_webhook(b"k", b"payload", "abc")); // odd length
    }

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?".
        let signature = sign_webhook(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
