//! aes128gcm-codec
//!
//! A bit-exact implementation of RFC 8188's `aes128gcm` Encrypted
//! Content-Encoding: HKDF-SHA-256 key schedule, per-record nonce derivation,
//! AES-128-GCM record sealing, and a streaming driver on top. Pure Rust, no
//! I/O, no FFI.

#![forbid(unsafe_code)]

pub mod constants;
pub mod crypto;
pub mod error;
pub mod header;
pub mod record;
pub mod stream;

pub mod prelude {
    pub use crate::error::{ConfigurationError, HeaderError, RecordError, StreamError};
    pub use crate::stream::{Decoder, Encoder};
    pub use crate::{decode, encode};
}

use constants::{IKM_LEN, SALT_LEN};
use error::StreamError;
use stream::{Decoder, Encoder};

/// Encrypt `plaintext` in one call: derive keys from `ikm`/`salt`, seal it
/// into records of size `rs`, and return `header ‖ records`.
pub fn encode(plaintext: &[u8], ikm: &[u8; IKM_LEN], salt: &[u8; SALT_LEN], rs: u32) -> Result<Vec<u8>, StreamError> {
    let mut enc = Encoder::new(ikm, salt, rs)?;
    let mut out = enc.header().to_vec();
    out.extend(enc.write(plaintext)?);
    out.extend(enc.finish()?);
    Ok(out)
}

/// Decrypt a complete `header ‖ records` byte string produced by [`encode`].
pub fn decode(ciphertext: &[u8], ikm: &[u8; IKM_LEN]) -> Result<Vec<u8>, StreamError> {
    let mut dec = Decoder::new(ikm);
    let plaintext = dec.push(ciphertext)?;
    dec.finish()?;
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shot_round_trip() {
        let ikm = [9u8; IKM_LEN];
        let salt = [8u8; SALT_LEN];
        let wire = encode(b"a short secret", &ikm, &salt, 32).unwrap();
        let plaintext = decode(&wire, &ikm).unwrap();
        assert_eq!(plaintext, b"a short secret");
    }

    #[test]
    fn single_shot_round_trip_empty_plaintext() {
        let ikm = [1u8; IKM_LEN];
        let salt = [2u8; SALT_LEN];
        let wire = encode(b"", &ikm, &salt, 18).unwrap();
        let plaintext = decode(&wire, &ikm).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn wrong_ikm_fails_closed() {
        let salt = [2u8; SALT_LEN];
        let wire = encode(b"top secret", &[1u8; IKM_LEN], &salt, 32).unwrap();
        let err = decode(&wire, &[0u8; IKM_LEN]).unwrap_err();
        assert_eq!(err, StreamError::AuthenticationFailed);
    }
}
