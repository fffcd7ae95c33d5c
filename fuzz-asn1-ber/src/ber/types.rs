//! BER identifier and length octets

use fuzz_asn1_core::{FuzzError, FuzzResult, MAX_SHORT_LENGTH};

/// Highest tag number that fits the low-tag-number form
pub const MAX_LOW_TAG_NUMBER: u8 = 30;

/// BER Tag Class
///
/// ASN.1 defines four tag classes:
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-specific types
/// - **Context-specific**: Context-dependent types (used in SEQUENCE/SET)
/// - **Private**: Private/implementation-specific types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerTagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl BerTagClass {
    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// Single-octet BER identifier
///
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// Only the low-tag-number form (0-30) is produced; every universal type
/// the generator emits lives in that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerTag {
    class: BerTagClass,
    constructed: bool,
    number: u8,
}

impl BerTag {
    /// Create a new BER tag
    ///
    /// # Errors
    /// Returns `FuzzError::InvalidData` for tag numbers above 30, which
    /// would need the multi-octet high-tag-number form.
    pub fn new(class: BerTagClass, constructed: bool, number: u8) -> FuzzResult<Self> {
        if number > MAX_LOW_TAG_NUMBER {
            return Err(FuzzError::InvalidData(format!(
                "Tag number {} needs the high-tag-number form",
                number
            )));
        }
        Ok(Self {
            class,
            constructed,
            number,
        })
    }

    /// Create a Universal class tag
    pub fn universal(constructed: bool, number: u8) -> FuzzResult<Self> {
        Self::new(BerTagClass::Universal, constructed, number)
    }

    pub fn class(&self) -> BerTagClass {
        self.class
    }

    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Encode to the identifier octet
    pub fn encode(&self) -> u8 {
        let constructed_bit = if self.constructed { 0x20 } else { 0x00 };
        self.class.to_bits() | constructed_bit | (self.number & 0x1F)
    }
}

/// Short-form BER length octet
///
/// ```text
/// Byte: 0 L L L L L L L
/// ```
///
/// Long-form lengths are not produced, so a `BerLength` always encodes to a
/// single octet in `0..=127`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerLength(u8);

impl BerLength {
    /// Create a short-form length
    ///
    /// # Errors
    /// Returns `FuzzError::InvalidData` if `length` exceeds 127.
    pub fn short(length: usize) -> FuzzResult<Self> {
        if length > MAX_SHORT_LENGTH {
            return Err(FuzzError::InvalidData(format!(
                "Length {} does not fit the short form (max {})",
                length, MAX_SHORT_LENGTH
            )));
        }
        Ok(Self(length as u8))
    }

    /// Encode to the length octet (bit 8 clear)
    pub fn encode(&self) -> u8 {
        self.0
    }
}
