//! Encoded TLV value container
//!
//! Every value the generator produces is a single primitive BER TLV triplet
//! with a one-byte tag and a short-form length:
//!
//! ```text
//! +-----+--------+---------------------+
//! | tag | length | content (length B)  |
//! +-----+--------+---------------------+
//!   1B     1B        0..=127 bytes
//! ```
//!
//! Long-form lengths are never produced, which caps content at 127 bytes.

use crate::error::{FuzzError, FuzzResult};
use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Largest content length expressible with a short-form length byte
pub const MAX_SHORT_LENGTH: usize = 0x7F;

/// A single tag/length/content byte sequence
///
/// Invariants (checked by both constructors):
/// - `bytes.len() >= 2`
/// - `bytes[1] == bytes.len() - 2`
/// - `bytes[1] <= 127`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedValue {
    bytes: Bytes,
}

impl EncodedValue {
    /// Assemble a value from an already-encoded tag byte and content
    ///
    /// # Errors
    /// Returns `FuzzError::InvalidData` if `content` does not fit a
    /// short-form length.
    pub fn new(tag: u8, content: &[u8]) -> FuzzResult<Self> {
        if content.len() > MAX_SHORT_LENGTH {
            return Err(FuzzError::InvalidData(format!(
                "Content of {} bytes exceeds short-form limit of {}",
                content.len(),
                MAX_SHORT_LENGTH
            )));
        }

        let mut buf = BytesMut::with_capacity(2 + content.len());
        buf.put_u8(tag);
        buf.put_u8(content.len() as u8);
        buf.put_slice(content);

        Ok(Self { bytes: buf.freeze() })
    }

    /// Wrap raw bytes, such as a corpus file read back from disk, checking
    /// the framing invariants
    ///
    /// Only the framing is checked; the tag byte may be anything and the
    /// content is not interpreted.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> FuzzResult<Self> {
        let bytes = bytes.into();
        if bytes.len() < 2 {
            return Err(FuzzError::InvalidData(format!(
                "Encoded value needs at least 2 bytes, got {}",
                bytes.len()
            )));
        }

        let length = bytes[1];
        if length & 0x80 != 0 {
            return Err(FuzzError::InvalidData(format!(
                "Long-form length byte 0x{:02X} is not supported",
                length
            )));
        }

        if length as usize != bytes.len() - 2 {
            return Err(FuzzError::InvalidData(format!(
                "Length byte says {} content bytes, found {}",
                length,
                bytes.len() - 2
            )));
        }

        Ok(Self { bytes })
    }

    /// Tag byte
    pub fn tag(&self) -> u8 {
        self.bytes[0]
    }

    /// Length byte (always equal to `content().len()`)
    pub fn length(&self) -> u8 {
        self.bytes[1]
    }

    pub fn content(&self) -> &[u8] {
        &self.bytes[2..]
    }

    /// The complete encoding, tag first
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total encoded length including tag and length bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// An encoded value always carries at least tag and length
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for EncodedValue {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedValue(tag=0x{:02X}, len={}, content=", self.tag(), self.length())?;
        for b in self.content() {
            write!(f, "{:02X}", b)?;
        }
        f.write_str(")")
    }
}
