//! stream/decoder.rs
//! The decoder session: parses the header once, then opens records as soon
//! as their boundary can be established unambiguously.
//!
//! A record's boundary is always knowable without buffering the whole
//! stream: once more than `rs` bytes are buffered, the first `rs` bytes must
//! be a complete non-terminal record (the encoder never emits an
//! oversized one). Once `rs` or fewer bytes remain, the AEAD tag itself
//! settles the question — attempting to open the whole remainder either
//! authenticates (a real boundary) or fails because more bytes are still
//! in flight. `finish` turns that second case from "keep waiting" into a
//! hard failure by asserting no further bytes are coming.

use crate::constants::{HEADER_MIN_LEN, IKM_LEN, RECORD_MIN_LEN};
use crate::crypto::KeySchedule;
use crate::error::StreamError;
use crate::header::{self, Header};
use crate::record::decrypt_record;

/// One decoding session for one message.
///
/// `push` may be called any number of times with arbitrarily sized
/// ciphertext chunks, in order; `finish` must be called exactly once after
/// the last chunk to confirm the stream ended on a terminal record with no
/// trailing bytes.
pub struct Decoder {
    ikm: [u8; IKM_LEN],
    header: Option<Header>,
    ks: Option<KeySchedule>,
    rs: usize,
    buffer: Vec<u8>,
    seq: u64,
    done: bool,
    poisoned: bool,
}

impl Decoder {
    pub fn new(ikm: &[u8; IKM_LEN]) -> Self {
        Decoder {
            ikm: *ikm,
            header: None,
            ks: None,
            rs: 0,
            buffer: Vec::new(),
            seq: 0,
            done: false,
            poisoned: false,
        }
    }

    /// Feed the next chunk of ciphertext, returning any plaintext it
    /// completes.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<u8>, StreamError> {
        if self.poisoned {
            return Err(StreamError::ReadAfterClose);
        }
        if self.done {
            if chunk.is_empty() {
                return Ok(Vec::new());
            }
            self.poisoned = true;
            return Err(StreamError::TrailingGarbage);
        }

        let result = self.ingest(chunk, false);
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// Assert that the stream ended on a terminal record with nothing left
    /// over. Idempotent once it has succeeded.
    pub fn finish(&mut self) -> Result<(), StreamError> {
        if self.poisoned {
            return Err(StreamError::ReadAfterClose);
        }
        if self.done {
            return Ok(());
        }

        match self.ingest(&[], true) {
            Ok(_) if self.done => Ok(()),
            Ok(_) => {
                self.poisoned = true;
                Err(StreamError::UnexpectedEndOfStream)
            }
            Err(e) => {
                self.poisoned = true;
                Err(e)
            }
        }
    }

    fn ingest(&mut self, chunk: &[u8], at_eof: bool) -> Result<Vec<u8>, StreamError> {
        self.buffer.extend_from_slice(chunk);
        let mut output = Vec::new();

        if self.header.is_none() {
            if self.buffer.len() < HEADER_MIN_LEN {
                return if at_eof {
                    Err(StreamError::UnexpectedEndOfStream)
                } else {
                    Ok(output)
                };
            }
            let need = header::total_len(&self.buffer);
            if self.buffer.len() < need {
                return if at_eof {
                    Err(StreamError::UnexpectedEndOfStream)
                } else {
                    Ok(output)
                };
            }

            let h = header::decode_header(&self.buffer[..need])?;
            self.rs = h.record_size as usize;
            self.ks = Some(KeySchedule::derive(&self.ikm, &h.salt));
            self.header = Some(h);
            self.buffer.drain(..need);
        }

        let ks = self.ks.as_ref().expect("ks is set once header is parsed");

        loop {
            if self.buffer.is_empty() {
                break;
            }
            let take = self.buffer.len().min(self.rs);
            if take < RECORD_MIN_LEN {
                return if at_eof {
                    Err(StreamError::UnexpectedEndOfStream)
                } else {
                    Ok(output)
                };
            }

            match decrypt_record(ks, self.seq, &self.buffer[..take]) {
                Ok((data, is_last)) => {
                    output.extend_from_slice(&data);
                    self.buffer.drain(..take);
                    self.seq = self
                        .seq
                        .checked_add(1)
                        .ok_or(StreamError::SequenceOverflow)?;

                    if is_last {
                        self.done = true;
                        if !self.buffer.is_empty() {
                            return Err(StreamError::TrailingGarbage);
                        }
                        break;
                    }
                }
                Err(e) => {
                    if take < self.rs && !at_eof {
                        break;
                    }
                    return Err(e.into());
                }
            }
        }

        Ok(output)
    }
}
