//! Character sets for restricted ASN.1 string types

use crate::error::{FuzzError, FuzzResult};
use std::fmt;

/// Alphabet of NumericString (X.680 41.2)
const NUMERIC_BYTES: &[u8] = b"0123456789 ";

/// Alphabet of PrintableString (X.680 41.4)
const PRINTABLE_BYTES: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890 '()+,-./:=?";

/// IA5 is the 7-bit ASCII repertoire: every code point 0..=127
const IA5_BYTES: &[u8; 128] = &{
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// An ordered, non-empty set of bytes that string content is drawn from
///
/// Order matters: generators index into the alphabet, so two charsets with
/// the same members but a different order yield different (equally valid)
/// sequences from the same entropy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    name: &'static str,
    bytes: &'static [u8],
}

impl Charset {
    /// NumericString: digits and space (11 bytes)
    pub const NUMERIC: Charset = Charset {
        name: "numeric",
        bytes: NUMERIC_BYTES,
    };

    /// PrintableString: letters, digits, space and `'()+,-./:=?` (74 bytes)
    pub const PRINTABLE: Charset = Charset {
        name: "printable",
        bytes: PRINTABLE_BYTES,
    };

    /// IA5String: all 128 ASCII code points
    pub const IA5: Charset = Charset {
        name: "ia5",
        bytes: IA5_BYTES,
    };

    /// Create a custom charset
    ///
    /// # Errors
    /// Returns `FuzzError::InvalidData` if `bytes` is empty, since no index
    /// can be drawn from an empty alphabet.
    pub fn new(name: &'static str, bytes: &'static [u8]) -> FuzzResult<Self> {
        if bytes.is_empty() {
            return Err(FuzzError::InvalidData(format!(
                "Charset '{}' must not be empty",
                name
            )));
        }
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: construction rejects empty alphabets
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `index` in alphabet order
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.bytes.contains(&byte)
    }

    /// Check that every byte of `content` belongs to this charset
    pub fn contains_all(&self, content: &[u8]) -> bool {
        content.iter().all(|b| self.contains(*b))
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Charset")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
