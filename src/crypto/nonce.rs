//! crypto/nonce.rs
//! Per-record nonce derivation from the nonce seed and record sequence
//! number (RFC 8188 §2.1).
//!
//! Design:
//! - Base IV: the 12-byte nonce seed (NS) derived by `kdf::derive_nonce_seed`.
//! - Counter: XOR the low 8 bytes (positions 4..12) with the record sequence
//!   number in big-endian. This keeps a fixed 4-byte static prefix and a
//!   varying 8-byte tail, giving up to 2^64 unique nonces per message.
//!
//! Security notes:
//! - Never reuse a (NS, sequence_number) pair; NS is scoped to one message,
//!   so the sequence number alone must never repeat within that message.

use crate::constants::NONCE_LEN;

/// Derive the 96-bit nonce for record `seq` from the message's nonce seed.
///
/// `nonce_i = NS XOR (0..0 ‖ seq as big-endian u64)`, i.e. the first 4 bytes
/// of `ns` pass through unchanged and the last 8 are XORed with `seq`.
#[inline]
pub fn derive_nonce(ns: &[u8; NONCE_LEN], seq: u64) -> [u8; NONCE_LEN] {
    let mut nonce = *ns;
    let ctr = seq.to_be_bytes();
    for j in 0..8 {
        nonce[4 + j] ^= ctr[j];
    }
    nonce
}
