//! stream/encoder.rs
//! The encoder session: buffers plaintext to `rs`-sized chunks and seals
//! each as a record, holding back one delimiter's worth of data until
//! `finish` so the terminal record is always known when it is sealed.

use crate::constants::{IKM_LEN, RS_MIN, SALT_LEN, TAG_LEN};
use crate::crypto::KeySchedule;
use crate::error::{ConfigurationError, StreamError};
use crate::header::{encode_header, Header};
use crate::record::encrypt_record;

/// One encoding session for one message.
///
/// `header()` is available immediately after construction; `write` may be
/// called any number of times with plaintext of any size (including zero),
/// and `finish` seals whatever remains as the terminal (`0x02`) record.
/// Calling `write` or `finish` again after `finish` has run is
/// `StreamError::WriteAfterClose`.
pub struct Encoder {
    ks: KeySchedule,
    header_bytes: Vec<u8>,
    data_per_record: usize,
    buffer: Vec<u8>,
    seq: u64,
    closed: bool,
}

impl Encoder {
    /// Begin a session with key material `ikm`, a fresh random `salt`, and
    /// record size `rs` (must be at least `RS_MIN`).
    pub fn new(ikm: &[u8; IKM_LEN], salt: &[u8; SALT_LEN], rs: u32) -> Result<Self, StreamError> {
        if (rs as usize) < RS_MIN {
            return Err(StreamError::from(ConfigurationError::RecordSizeTooSmall { rs }));
        }

        let header = Header::new(*salt, rs, Vec::new())?;
        let header_bytes = encode_header(&header);
        let ks = KeySchedule::derive(ikm, salt);

        Ok(Encoder {
            ks,
            header_bytes,
            data_per_record: rs as usize - TAG_LEN - 1,
            buffer: Vec::new(),
            seq: 0,
            closed: false,
        })
    }

    /// The wire-format header for this session; constant for its lifetime.
    pub fn header(&self) -> &[u8] {
        &self.header_bytes
    }

    /// Buffer `chunk` and seal every full record it completes.
    ///
    /// A record is flushed as soon as `data_per_record` bytes are
    /// available, so a plaintext whose length is an exact multiple of
    /// `data_per_record` ends in an empty zero-plaintext terminal record
    /// rather than folding its last bytes into an oversized one.
    pub fn write(&mut self, chunk: &[u8]) -> Result<Vec<u8>, StreamError> {
        if self.closed {
            return Err(StreamError::WriteAfterClose);
        }

        self.buffer.extend_from_slice(chunk);
        let mut output = Vec::new();

        while self.buffer.len() >= self.data_per_record {
            let data: Vec<u8> = self.buffer.drain(..self.data_per_record).collect();
            output.extend_from_slice(&self.seal(&data, false)?);
        }

        Ok(output)
    }

    /// Seal whatever plaintext remains as the terminal record and close the
    /// session.
    pub fn finish(&mut self) -> Result<Vec<u8>, StreamError> {
        if self.closed {
            return Err(StreamError::WriteAfterClose);
        }
        self.closed = true;

        let data = std::mem::take(&mut self.buffer);
        self.seal(&data, true)
    }

    fn seal(&mut self, data: &[u8], is_last: bool) -> Result<Vec<u8>, StreamError> {
        let record = encrypt_record(&self.ks, self.seq, data, is_last);
        self.seq = self.seq.checked_add(1).ok_or(StreamError::SequenceOverflow)?;
        Ok(record)
    }
}
