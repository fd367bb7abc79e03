//! record/mod.rs
//! One `aes128gcm` record: delimiter-padded plaintext sealed with AES-128-GCM
//! under a sequence-derived nonce (RFC 8188 §2).
//!
//! A record's plaintext is `data ‖ zero-padding ‖ delimiter`, where the
//! delimiter is `0x01` for every record but the last and `0x02` for the
//! last. This codec never emits the optional zero-padding, but a decoder
//! must still strip it: it scans from the end of the opened plaintext,
//! discarding trailing zero bytes until it finds the delimiter.

use crate::constants::{DELIM_CONTINUATION, DELIM_LAST};
use crate::crypto::KeySchedule;
use crate::error::RecordError;

/// Seal one record's `data` under `ks`'s key at sequence `seq`.
///
/// `is_last` selects the delimiter: `0x02` for the stream's final record,
/// `0x01` otherwise.
pub fn encrypt_record(ks: &KeySchedule, seq: u64, data: &[u8], is_last: bool) -> Vec<u8> {
    let mut plaintext = Vec::with_capacity(data.len() + 1);
    plaintext.extend_from_slice(data);
    plaintext.push(if is_last { DELIM_LAST } else { DELIM_CONTINUATION });

    let nonce = ks.nonce_for(seq);
    ks.aead().seal(&nonce, &plaintext)
}

/// Open one record, returning its data and whether it was the stream's
/// final record.
///
/// Trailing zero bytes are padding and are stripped before the delimiter is
/// read. A plaintext with no non-zero delimiter byte is `PaddingInvalid`.
pub fn decrypt_record(
    ks: &KeySchedule,
    seq: u64,
    record: &[u8],
) -> Result<(Vec<u8>, bool), RecordError> {
    let nonce = ks.nonce_for(seq);
    let mut plaintext = ks.aead().open(&nonce, record)?;

    while let Some(0) = plaintext.last() {
        plaintext.pop();
    }

    match plaintext.pop() {
        Some(DELIM_CONTINUATION) => Ok((plaintext, false)),
        Some(DELIM_LAST) => Ok((plaintext, true)),
        _ => Err(RecordError::PaddingInvalid),
    }
}
