//! crypto/mod.rs
//! HKDF key schedule, nonce derivation, and AES-128-GCM for one message.

pub mod aead;
pub mod kdf;
pub mod nonce;

use zeroize::Zeroize;

use crate::constants::{CEK_LEN, NONCE_LEN};
use aead::Aead128Gcm;

/// Owns the Content Encryption Key and nonce seed for one message.
///
/// IKM and salt are borrowed only long enough to derive CEK/NS and are never
/// retained; CEK and NS themselves are zeroized when the schedule is
/// dropped.
pub struct KeySchedule {
    cek: [u8; CEK_LEN],
    ns: [u8; NONCE_LEN],
    aead: Aead128Gcm,
}

impl KeySchedule {
    pub fn derive(ikm: &[u8; 16], salt: &[u8; 16]) -> Self {
        let cek = kdf::derive_cek(ikm, salt);
        let ns = kdf::derive_nonce_seed(ikm, salt);
        let aead = Aead128Gcm::new(&cek);
        KeySchedule { cek, ns, aead }
    }

    /// Nonce for record sequence number `seq`.
    pub fn nonce_for(&self, seq: u64) -> [u8; NONCE_LEN] {
        nonce::derive_nonce(&self.ns, seq)
    }

    pub fn aead(&self) -> &Aead128Gcm {
        &self.aead
    }
}

impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.cek.zeroize();
        self.ns.zeroize();
    }
}
