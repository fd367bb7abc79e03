//! crypto/aead.rs
//! AES-128-GCM record sealing/opening with empty AAD (RFC 8188 §2).
//!
//! Design notes:
//! - One cipher suite only: this content coding never negotiates.
//! - Tag verification is constant-time and fails closed: `open` returns a
//!   single `AuthenticationFailed` with no partial plaintext on mismatch.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Nonce};

use crate::constants::CEK_LEN;
use crate::error::RecordError;

/// A constructed AES-128-GCM instance bound to one message's Content
/// Encryption Key.
pub struct Aead128Gcm(Aes128Gcm);

impl Aead128Gcm {
    pub fn new(cek: &[u8; CEK_LEN]) -> Self {
        Aead128Gcm(Aes128Gcm::new_from_slice(cek).expect("CEK_LEN matches AES-128's key size"))
    }

    /// Seal `plaintext` (already delimiter-padded) under `nonce` with empty
    /// AAD, returning `ciphertext ‖ tag`.
    pub fn seal(&self, nonce: &[u8; 12], plaintext: &[u8]) -> Vec<u8> {
        self.0
            .encrypt(Nonce::from_slice(nonce), Payload { msg: plaintext, aad: &[] })
            .expect("AES-128-GCM encryption cannot fail for valid nonce/key lengths")
    }

    /// Open `ciphertext_and_tag` under `nonce` with empty AAD.
    pub fn open(&self, nonce: &[u8; 12], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, RecordError> {
        self.0
            .decrypt(
                Nonce::from_slice(nonce),
                Payload { msg: ciphertext_and_tag, aad: &[] },
            )
            .map_err(|_| RecordError::AuthenticationFailed)
    }
}
