//! header/decode.rs
//! Header decoding: `salt ‖ rs (BE u32) ‖ idlen (u8) ‖ keyid`.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{HEADER_MIN_LEN, RS_MIN, SALT_LEN};
use crate::error::HeaderError;

use super::types::Header;

/// Total header length once `idlen` is known: `21 + idlen`.
///
/// `buf` must contain at least `HEADER_MIN_LEN` bytes; the key-ID length
/// byte lives at offset 20.
pub fn total_len(buf: &[u8]) -> usize {
    debug_assert!(buf.len() >= HEADER_MIN_LEN);
    HEADER_MIN_LEN + buf[SALT_LEN + 4] as usize
}

/// Decode a complete header from `buf`.
///
/// `buf` must be at least `total_len(buf)` bytes; callers driving a stream
/// should buffer to `HEADER_MIN_LEN` bytes first, read `total_len`, then
/// buffer to that length before calling this function. A short buffer here
/// is reported as `HeaderTruncated`.
pub fn decode_header(buf: &[u8]) -> Result<Header, HeaderError> {
    if buf.len() < HEADER_MIN_LEN {
        return Err(HeaderError::HeaderTruncated {
            have: buf.len(),
            need: HEADER_MIN_LEN,
        });
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&buf[..SALT_LEN]);

    let record_size = BigEndian::read_u32(&buf[SALT_LEN..SALT_LEN + 4]);
    let idlen = buf[SALT_LEN + 4] as usize;
    let need = HEADER_MIN_LEN + idlen;

    if buf.len() < need {
        return Err(HeaderError::HeaderTruncated {
            have: buf.len(),
            need,
        });
    }

    if record_size == 0 {
        return Err(HeaderError::RecordSizeZero);
    }
    if (record_size as usize) < RS_MIN {
        return Err(HeaderError::RecordSizeTooSmall { rs: record_size });
    }

    let key_id = buf[HEADER_MIN_LEN..need].to_vec();

    Ok(Header { salt, record_size, key_id })
}
