//! crypto/kdf.rs
//! HKDF-SHA-256 key schedule: derives the Content Encryption Key and nonce
//! seed from (IKM, salt) per RFC 8188 §2.1 / RFC 5869.
//!
//! Design:
//! - HKDF-Extract(salt, IKM) -> PRK
//! - HKDF-Expand(PRK, info) -> CEK (16 B) / NS (12 B)
//!
//! Industry notes:
//! - Mirrors TLS 1.3/QUIC key schedules: derive traffic keys via HKDF rather
//!   than using IKM directly for AEAD.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::constants::{CEK_INFO, CEK_LEN, NONCE_INFO, NONCE_LEN};

/// Derive the 16-byte Content Encryption Key from IKM and salt.
#[inline]
pub fn derive_cek(ikm: &[u8; 16], salt: &[u8; 16]) -> [u8; CEK_LEN] {
    let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
    let mut cek = [0u8; CEK_LEN];
    // Info length and output length are both fixed and within HKDF's
    // 255*HashLen ceiling, so this can only fail on a programmer error.
    hk.expand(CEK_INFO, &mut cek)
        .expect("CEK_LEN is within HKDF-SHA-256's output ceiling");
    cek
}

/// Derive the 12-byte nonce seed from IKM and salt.
#[inline]
pub fn derive_nonce_seed(ikm: &[u8; 16], salt: &[u8; 16]) -> [u8; NONCE_LEN] {
    let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
    let mut ns = [0u8; NONCE_LEN];
    hk.expand(NONCE_INFO, &mut ns)
        .expect("NONCE_LEN is within HKDF-SHA-256's output ceiling");
    ns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_inputs() {
        let ikm = [0x11u8; 16];
        let salt = [0x22u8; 16];
        assert_eq!(derive_cek(&ikm, &salt), derive_cek(&ikm, &salt));
        assert_eq!(
            derive_nonce_seed(&ikm, &salt),
            derive_nonce_seed(&ikm, &salt)
        );
    }

    #[test]
    fn different_salt_changes_output() {
        let ikm = [0x11u8; 16];
        assert_ne!(derive_cek(&ikm, &[1; 16]), derive_cek(&ikm, &[2; 16]));
        assert_ne!(
            derive_nonce_seed(&ikm, &[1; 16]),
            derive_nonce_seed(&ikm, &[2; 16])
        );
    }

    #[test]
    fn cek_and_ns_are_independent() {
        let ikm = [0x33u8; 16];
        let salt = [0x44u8; 16];
        let cek = derive_cek(&ikm, &salt);
        let ns = derive_nonce_seed(&ikm, &salt);
        // Different info strings must not collide even on overlapping byte
        // ranges of the HKDF output stream.
        assert_ne!(&cek[..], &ns[..12]);
    }
}
