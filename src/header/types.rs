//! header/types.rs
//! The `aes128gcm` header struct (RFC 8188 §2.1): `salt ‖ rs ‖ idlen ‖ keyid`.

use crate::constants::{HEADER_MIN_LEN, RS_MIN, SALT_LEN};
use crate::error::HeaderError;

/// A parsed or to-be-encoded `aes128gcm` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub salt: [u8; SALT_LEN],
    pub record_size: u32,
    pub key_id: Vec<u8>,
}

impl Header {
    /// Total encoded length of this header: `21 + idlen`.
    pub fn encoded_len(&self) -> usize {
        HEADER_MIN_LEN + self.key_id.len()
    }

    /// Construct a header for encoding, rejecting a record size below the
    /// 18-byte floor at construction time rather than at first-write time.
    pub fn new(salt: [u8; SALT_LEN], record_size: u32, key_id: Vec<u8>) -> Result<Self, HeaderError> {
        if record_size == 0 {
            return Err(HeaderError::RecordSizeZero);
        }
        if (record_size as usize) < RS_MIN {
            return Err(HeaderError::RecordSizeTooSmall { rs: record_size });
        }
        Ok(Header { salt, record_size, key_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_record_size_below_floor() {
        assert_eq!(
            Header::new([0; SALT_LEN], 17, vec![]),
            Err(HeaderError::RecordSizeTooSmall { rs: 17 })
        );
    }

    #[test]
    fn rejects_zero_record_size() {
        assert_eq!(
            Header::new([0; SALT_LEN], 0, vec![]),
            Err(HeaderError::RecordSizeZero)
        );
    }

    #[test]
    fn accepts_minimum_record_size() {
        let h = Header::new([0; SALT_LEN], 18, vec![]).unwrap();
        assert_eq!(h.encoded_len(), HEADER_MIN_LEN);
    }
}
