//! error.rs
//! The closed error taxonomy for the `aes128gcm` codec.
//!
//! Design:
//! - Each lower layer (`header`, `record`, `crypto`) owns a small error type
//!   with its own `Display`/`std::error::Error` impl; this module aggregates
//!   them into the single `StreamError` every public API call returns.
//! - `AuthenticationFailed` and `PaddingInvalid` must be indistinguishable at
//!   the API boundary (no padding-oracle distinctions): their `Display`
//!   strings are identical even though the variants themselves stay
//!   distinct for internal tests.

use std::fmt;

/// Errors from the header codec (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer than `21 + idlen` bytes were available before EOF.
    HeaderTruncated { have: usize, need: usize },
    /// Parsed `rs` is zero.
    RecordSizeZero,
    /// Parsed `rs` is below the 18-byte floor.
    RecordSizeTooSmall { rs: u32 },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            HeaderTruncated { have, need } => {
                write!(f, "header truncated: have {have} bytes, need {need}")
            }
            RecordSizeZero => write!(f, "record size is zero"),
            RecordSizeTooSmall { rs } => {
                write!(f, "record size {rs} is smaller than the minimum of 18")
            }
        }
    }
}

impl std::error::Error for HeaderError {}

/// Errors from a single record's AEAD open + padding strip (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// GCM tag verification failed.
    AuthenticationFailed,
    /// Decrypted record had no valid `0x01`/`0x02` delimiter.
    PaddingInvalid,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately identical text for both variants: callers must not be
        // able to distinguish a tag failure from a padding failure by reading
        // the error message.
        match self {
            RecordError::AuthenticationFailed | RecordError::PaddingInvalid => {
                write!(f, "decryption failed")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// The full public error type returned by every encoder/decoder call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Bad constructor arguments: `rs < 18`, or IKM/salt not 16 bytes.
    ConfigurationError(ConfigurationError),
    /// Header could not be parsed.
    Header(HeaderError),
    /// A record failed to decrypt (tag mismatch).
    AuthenticationFailed,
    /// A record's padding/delimiter was invalid.
    PaddingInvalid,
    /// Input ended without a terminal (`0x02`) record.
    UnexpectedEndOfStream,
    /// Bytes remained after the terminal record.
    TrailingGarbage,
    /// `write`/`finish` called on an encoder that already emitted its
    /// terminal record.
    WriteAfterClose,
    /// `push`/`finish` called on a decoder that already saw its terminal
    /// record and trailing bytes, or otherwise poisoned.
    ReadAfterClose,
    /// The 64-bit record sequence counter would overflow.
    SequenceOverflow,
}

/// Reasons a session failed to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `rs` is below the 18-byte floor.
    RecordSizeTooSmall { rs: u32 },
    /// IKM was not exactly 16 bytes.
    InvalidIkmLen { actual: usize },
    /// Salt was not exactly 16 bytes.
    InvalidSaltLen { actual: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigurationError::*;
        match self {
            RecordSizeTooSmall { rs } => {
                write!(f, "record size {rs} is smaller than the minimum of 18")
            }
            InvalidIkmLen { actual } => {
                write!(f, "invalid IKM length: expected 16, got {actual}")
            }
            InvalidSaltLen { actual } => {
                write!(f, "invalid salt length: expected 16, got {actual}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StreamError::*;
        match self {
            ConfigurationError(e) => write!(f, "configuration error: {e}"),
            Header(e) => write!(f, "{e}"),
            // Same rule as RecordError::Display: no oracle distinction.
            AuthenticationFailed | PaddingInvalid => write!(f, "decryption failed"),
            UnexpectedEndOfStream => write!(f, "unexpected end of stream"),
            TrailingGarbage => write!(f, "trailing garbage after terminal record"),
            WriteAfterClose => write!(f, "write called after encoder was closed"),
            ReadAfterClose => write!(f, "read called after decoder was closed"),
            SequenceOverflow => write!(f, "record sequence counter overflowed"),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<ConfigurationError> for StreamError {
    fn from(e: ConfigurationError) -> Self {
        StreamError::ConfigurationError(e)
    }
}

impl From<HeaderError> for StreamError {
    fn from(e: HeaderError) -> Self {
        StreamError::Header(e)
    }
}

impl From<RecordError> for StreamError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::AuthenticationFailed => StreamError::AuthenticationFailed,
            RecordError::PaddingInvalid => StreamError::PaddingInvalid,
        }
    }
}
