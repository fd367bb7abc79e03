//! constants.rs
//! Fixed sizes and wire-format literals for the `aes128gcm` content coding
//! (RFC 8188).
//!
//! Industry notes:
//! - Field widths here are normative, not tunable: RFC 8188 fixes every one
//!   of these at a specific byte count. Unlike a home-grown envelope format,
//!   there is no "default" to pick, only the published value.

/// Input keying material length, in bytes.
pub const IKM_LEN: usize = 16;

/// Salt length, in bytes.
pub const SALT_LEN: usize = 16;

/// Content Encryption Key length, in bytes (AES-128).
pub const CEK_LEN: usize = 16;

/// Nonce seed / per-record nonce length, in bytes.
pub const NONCE_LEN: usize = 12;

/// AEAD authentication tag length, in bytes.
pub const TAG_LEN: usize = 16;

/// Fixed header prefix length (salt ‖ rs ‖ idlen), before the key-ID.
pub const HEADER_MIN_LEN: usize = SALT_LEN + 4 + 1;

/// Smallest `rs` that can carry at least one plaintext byte: tag(16) +
/// delimiter(1) + 1 byte of data.
pub const RS_MIN: usize = 18;

/// Smallest a sealed record can ever be: tag(16) + delimiter(1), zero data
/// bytes.
pub const RECORD_MIN_LEN: usize = TAG_LEN + 1;

/// Non-terminal record delimiter: "more records follow".
pub const DELIM_CONTINUATION: u8 = 0x01;

/// Terminal record delimiter: "this is the last record".
pub const DELIM_LAST: u8 = 0x02;

/// HKDF-Expand info string for the Content Encryption Key (RFC 8188 §2.1).
pub const CEK_INFO: &[u8] = b"Content-Encoding: aes128gcm\x00";

/// HKDF-Expand info string for the nonce seed (RFC 8188 §2.1).
pub const NONCE_INFO: &[u8] = b"Content-Encoding: nonce\x00";
