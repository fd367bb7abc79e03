//! header/encode.rs
//! Header encoding: `salt ‖ rs (BE u32) ‖ idlen (u8) ‖ keyid`.

use byteorder::{BigEndian, WriteBytesExt};

use super::types::Header;

/// Serialize a header into its wire bytes.
///
/// `idlen` is capped at 255 by construction: callers are expected to keep
/// `key_id` within that bound (this system always uses an empty key-ID).
pub fn encode_header(h: &Header) -> Vec<u8> {
    let mut out = Vec::with_capacity(h.encoded_len());
    out.extend_from_slice(&h.salt);
    out.write_u32::<BigEndian>(h.record_size)
        .expect("writing to a Vec cannot fail");
    out.write_u8(h.key_id.len() as u8)
        .expect("writing to a Vec cannot fail");
    out.extend_from_slice(&h.key_id);
    out
}
