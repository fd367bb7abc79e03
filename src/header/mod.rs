//! header/mod.rs
//! The `aes128gcm` header: `salt(16) ‖ rs(4, BE) ‖ idlen(1) ‖ keyid(idlen)`.
//!
//! This is the only header this codec speaks: one salt, one record size, one
//! optional opaque key identifier. There is no version byte, no flags, no
//! algorithm negotiation — RFC 8188 fixes the cipher suite, so the header
//! carries only what varies per message.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::{decode_header, total_len};
pub use encode::encode_header;
pub use types::Header;
