//! Catalogue of the ASN.1 universal types the generator can produce

use crate::error::{FuzzError, FuzzResult};
use std::fmt;
use std::str::FromStr;

/// ASN.1 universal type supported by the generator
///
/// The discriminant of each variant is its universal tag number, which for
/// primitive universal types (class 00, P/C bit 0) is also the full
/// single-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum UniversalType {
    Boolean = 0x01,
    Integer = 0x02,
    BitString = 0x03,
    OctetString = 0x04,
    Null = 0x05,
    ObjectIdentifier = 0x06,
    Real = 0x09,
    Enumerated = 0x0A,
    NumericString = 0x12,
    PrintableString = 0x13,
    Ia5String = 0x16,
}

impl UniversalType {
    /// All supported types, in tag order
    pub const ALL: [UniversalType; 11] = [
        UniversalType::Boolean,
        UniversalType::Integer,
        UniversalType::BitString,
        UniversalType::OctetString,
        UniversalType::Null,
        UniversalType::ObjectIdentifier,
        UniversalType::Real,
        UniversalType::Enumerated,
        UniversalType::NumericString,
        UniversalType::PrintableString,
        UniversalType::Ia5String,
    ];

    /// Universal tag number (and primitive tag byte)
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Lower-case identifier used in output file names (`rand_<slug>_<n>.asn1`)
    pub fn slug(self) -> &'static str {
        match self {
            UniversalType::Boolean => "boolean",
            UniversalType::Integer => "integer",
            UniversalType::BitString => "bitstring",
            UniversalType::OctetString => "octetstring",
            UniversalType::Null => "null",
            UniversalType::ObjectIdentifier => "objectidentifier",
            UniversalType::Real => "real",
            UniversalType::Enumerated => "enumerated",
            UniversalType::NumericString => "numericstring",
            UniversalType::PrintableString => "printablestring",
            UniversalType::Ia5String => "ia5string",
        }
    }

    /// ASN.1 notation name
    pub fn name(self) -> &'static str {
        match self {
            UniversalType::Boolean => "BOOLEAN",
            UniversalType::Integer => "INTEGER",
            UniversalType::BitString => "BIT STRING",
            UniversalType::OctetString => "OCTET STRING",
            UniversalType::Null => "NULL",
            UniversalType::ObjectIdentifier => "OBJECT IDENTIFIER",
            UniversalType::Real => "REAL",
            UniversalType::Enumerated => "ENUMERATED",
            UniversalType::NumericString => "NumericString",
            UniversalType::PrintableString => "PrintableString",
            UniversalType::Ia5String => "IA5String",
        }
    }
}

impl fmt::Display for UniversalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UniversalType {
    type Err = FuzzError;

    /// Parse a slug, ignoring case, surrounding whitespace, `-` and `_`
    /// (so `ia5-string`, `IA5String` and `octet_string` are all accepted).
    fn from_str(s: &str) -> FuzzResult<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.slug() == normalized)
            .ok_or_else(|| FuzzError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_match_x690() {
        assert_eq!(UniversalType::Boolean.tag(), 0x01);
        assert_eq!(UniversalType::Null.tag(), 0x05);
        assert_eq!(UniversalType::Real.tag(), 0x09);
        assert_eq!(UniversalType::Enumerated.tag(), 0x0A);
        assert_eq!(UniversalType::NumericString.tag(), 0x12);
        assert_eq!(UniversalType::PrintableString.tag(), 0x13);
        assert_eq!(UniversalType::Ia5String.tag(), 0x16);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("integer".parse::<UniversalType>().unwrap(), UniversalType::Integer);
        assert_eq!("IA5String".parse::<UniversalType>().unwrap(), UniversalType::Ia5String);
        assert_eq!(" octet_string ".parse::<UniversalType>().unwrap(), UniversalType::OctetString);
        assert_eq!("object-identifier".parse::<UniversalType>().unwrap(), UniversalType::ObjectIdentifier);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "sequence".parse::<UniversalType>().unwrap_err();
        assert!(matches!(err, FuzzError::UnknownType(ref s) if s == "sequence"));
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = UniversalType::ALL.iter().map(|t| t.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), UniversalType::ALL.len());
    }
}
