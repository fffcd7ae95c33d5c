//! Randomized BER encoder
//!
//! Produces one primitive TLV per call for each supported universal type.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use fuzz_asn1_ber::{BerEncoding, EncodingRuleset};
//!
//! let ber = BerEncoding::default();
//! let value = ber.random_integer()?;
//! assert_eq!(value.tag(), 0x02);
//! # Ok::<(), fuzz_asn1_core::FuzzError>(())
//! ```
//!
//! # Known limitations
//!
//! - Lengths are always short form, so content never exceeds 127 bytes.
//! - INTEGER and ENUMERATED content is not minimal unless
//!   [`BerOptions::minimal_integers`] is set (X.690 8.3.2).
//! - The BIT STRING unused-bits octet is any byte unless
//!   [`BerOptions::constrain_unused_bits`] is set (X.690 8.6.2.2).
//! - OBJECT IDENTIFIER and REAL content is random and not structurally valid.

use crate::ber::types::{BerLength, BerTag};
use crate::content::ContentGenerator;
use crate::ruleset::EncodingRuleset;
use fuzz_asn1_core::{Charset, EncodedValue, FuzzResult, UniversalType};

/// Knobs that trade fuzz breadth for structural plausibility
///
/// The defaults keep every knob off, which yields the broadest (and least
/// conformant) output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BerOptions {
    /// Strip redundant leading octets from INTEGER/ENUMERATED content
    pub minimal_integers: bool,
    /// Keep the BIT STRING unused-bits octet in `0..=7`
    pub constrain_unused_bits: bool,
}

/// Check the X.690 8.3.2 minimal-encoding rule for INTEGER content
///
/// With more than one content octet, the first octet and bit 8 of the second
/// must not be all zeros or all ones. Content of zero or one octet passes.
pub fn is_minimal_integer(content: &[u8]) -> bool {
    match content {
        [0x00, second, ..] => second & 0x80 != 0,
        [0xFF, second, ..] => second & 0x80 == 0,
        _ => true,
    }
}

/// Drop leading octets until `content` satisfies [`is_minimal_integer`]
///
/// The two's complement value is unchanged. Empty content stays empty.
pub fn minimize_integer(content: &[u8]) -> &[u8] {
    let mut start = 0;
    while !is_minimal_integer(&content[start..]) {
        start += 1;
    }
    &content[start..]
}

/// BER encoding ruleset with randomized content
#[derive(Debug, Clone, Default)]
pub struct BerEncoding {
    content: ContentGenerator,
    options: BerOptions,
}

impl BerEncoding {
    pub fn new(content: ContentGenerator, options: BerOptions) -> Self {
        Self { content, options }
    }

    /// Encode a TLV (Tag-Length-Value) triplet for a universal primitive type
    ///
    /// # Encoding Process
    /// 1. Encode tag
    /// 2. Check the length fits the short form
    /// 3. Frame tag, length and value bytes
    fn encode_tlv(&self, ty: UniversalType, value: &[u8]) -> FuzzResult<EncodedValue> {
        let tag = BerTag::universal(false, ty.tag())?;
        BerLength::short(value.len())?;

        let encoded = EncodedValue::new(tag.encode(), value)?;
        log::debug!("generated {}: {:?}", ty, encoded);
        Ok(encoded)
    }

    fn integer_like(&self, ty: UniversalType) -> FuzzResult<EncodedValue> {
        let content = self.content.random_content()?;
        if self.options.minimal_integers {
            self.encode_tlv(ty, minimize_integer(&content))
        } else {
            self.encode_tlv(ty, &content)
        }
    }

    fn unconstrained(&self, ty: UniversalType) -> FuzzResult<EncodedValue> {
        let content = self.content.random_content()?;
        self.encode_tlv(ty, &content)
    }

    fn restricted_string(&self, ty: UniversalType, charset: &Charset) -> FuzzResult<EncodedValue> {
        let content = self.content.random_content_from_charset(charset)?;
        self.encode_tlv(ty, &content)
    }
}

impl EncodingRuleset for BerEncoding {
    fn name(&self) -> &'static str {
        "ber"
    }

    /// `01 01 xx`: any non-zero `xx` is TRUE, so the byte is left unbiased
    fn random_boolean(&self) -> FuzzResult<EncodedValue> {
        let value = self.content.random_byte()?;
        self.encode_tlv(UniversalType::Boolean, &[value])
    }

    fn random_integer(&self) -> FuzzResult<EncodedValue> {
        self.integer_like(UniversalType::Integer)
    }

    /// Primitive form only. The first content octet is the unused-bits count.
    fn random_bit_string(&self) -> FuzzResult<EncodedValue> {
        let mut content = self.content.random_content()?;
        if self.options.constrain_unused_bits {
            match content.as_mut_slice() {
                // no bits follow, so nothing may be unused
                [only] => *only = 0,
                [first, ..] => *first &= 0x07,
                [] => {}
            }
        }
        self.encode_tlv(UniversalType::BitString, &content)
    }

    fn random_octet_string(&self) -> FuzzResult<EncodedValue> {
        self.unconstrained(UniversalType::OctetString)
    }

    /// Always `05 00`
    fn random_null(&self) -> FuzzResult<EncodedValue> {
        self.encode_tlv(UniversalType::Null, &[])
    }

    fn random_object_identifier(&self) -> FuzzResult<EncodedValue> {
        self.unconstrained(UniversalType::ObjectIdentifier)
    }

    fn random_real(&self) -> FuzzResult<EncodedValue> {
        self.unconstrained(UniversalType::Real)
    }

    fn random_enumerated(&self) -> FuzzResult<EncodedValue> {
        self.integer_like(UniversalType::Enumerated)
    }

    fn random_numeric_string(&self) -> FuzzResult<EncodedValue> {
        self.restricted_string(UniversalType::NumericString, &Charset::NUMERIC)
    }

    fn random_printable_string(&self) -> FuzzResult<EncodedValue> {
        self.restricted_string(UniversalType::PrintableString, &Charset::PRINTABLE)
    }

    fn random_ia5_string(&self) -> FuzzResult<EncodedValue> {
        self.restricted_string(UniversalType::Ia5String, &Charset::IA5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::FailingEntropy;
    use fuzz_asn1_core::{FuzzError, MAX_SHORT_LENGTH};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn seeded(seed: u64) -> BerEncoding {
        BerEncoding::new(ContentGenerator::seeded(seed), BerOptions::default())
    }

    fn assert_framing(value: &EncodedValue) {
        let bytes = value.as_bytes();
        assert!(bytes.len() >= 2);
        assert_eq!(bytes[1] as usize, bytes.len() - 2);
        assert!(bytes[1] as usize <= MAX_SHORT_LENGTH);
    }

    #[test]
    fn test_every_type_has_its_tag() {
        let ber = seeded(1);
        for ty in UniversalType::ALL {
            for _ in 0..50 {
                let value = ber.generate(ty).unwrap();
                assert_eq!(value.tag(), ty.tag(), "{}", ty);
                assert_framing(&value);
            }
        }
    }

    #[test]
    fn test_null_is_constant() {
        let ber = BerEncoding::default();
        for _ in 0..100 {
            assert_eq!(ber.random_null().unwrap().as_bytes(), &[0x05, 0x00]);
        }
    }

    #[test]
    fn test_boolean_shape() {
        let ber = seeded(2);
        let mut contents = HashSet::new();
        for _ in 0..200 {
            let value = ber.random_boolean().unwrap();
            assert_eq!(value.len(), 3);
            assert_eq!(&value.as_bytes()[..2], &[0x01, 0x01]);
            contents.insert(value.as_bytes()[2]);
        }
        // both FALSE and a spread of TRUE encodings are reachable
        assert!(contents.len() > 50);
    }

    #[test]
    fn test_restricted_strings_respect_charsets() {
        let ber = seeded(3);
        for _ in 0..100 {
            let numeric = ber.random_numeric_string().unwrap();
            assert!(Charset::NUMERIC.contains_all(numeric.content()));

            let printable = ber.random_printable_string().unwrap();
            assert!(Charset::PRINTABLE.contains_all(printable.content()));

            let ia5 = ber.random_ia5_string().unwrap();
            assert!(ia5.content().iter().all(|b| *b <= 0x7F));
        }
    }

    #[test]
    fn test_integers_are_nondeterministic() {
        let ber = BerEncoding::default();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let value = ber.random_integer().unwrap();
            if value.content().len() > 4 {
                assert!(seen.insert(value.as_bytes().to_vec()), "duplicate {:?}", value);
            }
        }
    }

    #[test]
    fn test_integer_lengths_spread() {
        let ber = seeded(4);
        let mut buckets = [0usize; 4];
        for _ in 0..1000 {
            let value = ber.random_integer().unwrap();
            assert_framing(&value);
            buckets[value.content().len() / 32] += 1;
        }
        // 250 expected per quarter of [0, 127]
        for count in buckets {
            assert!((150..=350).contains(&count), "{:?}", buckets);
        }
    }

    #[test]
    fn test_is_minimal_integer() {
        assert!(is_minimal_integer(&[]));
        assert!(is_minimal_integer(&[0x00]));
        assert!(is_minimal_integer(&[0xFF]));
        assert!(is_minimal_integer(&[0x00, 0x80]));
        assert!(is_minimal_integer(&[0xFF, 0x7F]));
        assert!(!is_minimal_integer(&[0x00, 0x7F]));
        assert!(!is_minimal_integer(&[0xFF, 0x80]));
    }

    #[test]
    fn test_minimize_integer() {
        assert_eq!(minimize_integer(&[0x00, 0x00, 0x7F]), &[0x7F]);
        assert_eq!(minimize_integer(&[0xFF, 0xFF, 0x80, 0x01]), &[0x80, 0x01]);
        assert_eq!(minimize_integer(&[0x00, 0x80]), &[0x00, 0x80]);
        assert_eq!(minimize_integer(&[]), &[] as &[u8]);
    }

    #[test]
    fn test_minimal_integers_option() {
        let ber = BerEncoding::new(
            ContentGenerator::seeded(5),
            BerOptions {
                minimal_integers: true,
                ..BerOptions::default()
            },
        );
        for _ in 0..200 {
            assert!(is_minimal_integer(ber.random_integer().unwrap().content()));
            assert!(is_minimal_integer(ber.random_enumerated().unwrap().content()));
        }
    }

    #[test]
    fn test_unconstrained_unused_bits_by_default() {
        let ber = seeded(6);
        let out_of_range = (0..200)
            .filter_map(|_| ber.random_bit_string().unwrap().content().first().copied())
            .any(|b| b > 7);
        assert!(out_of_range);
    }

    #[test]
    fn test_constrain_unused_bits_option() {
        let ber = BerEncoding::new(
            ContentGenerator::seeded(7),
            BerOptions {
                constrain_unused_bits: true,
                ..BerOptions::default()
            },
        );
        for _ in 0..200 {
            let value = ber.random_bit_string().unwrap();
            match value.content() {
                [] => {}
                [only] => assert_eq!(*only, 0),
                [first, ..] => assert!(*first <= 7),
            }
        }
    }

    #[test]
    fn test_encode_tlv_frames_value() {
        let ber = BerEncoding::default();
        let value = ber.encode_tlv(UniversalType::OctetString, b"Hello").unwrap();
        assert_eq!(value, EncodedValue::new(0x04, b"Hello").unwrap());
        assert_eq!(value.as_bytes(), &[0x04, 0x05, b'H', b'e', b'l', b'l', b'o']);

        let max = ber.encode_tlv(UniversalType::Integer, &[0xAA; 127]).unwrap();
        assert_eq!(max.length(), 127);
        assert!(matches!(
            ber.encode_tlv(UniversalType::Integer, &[0xAA; 128]),
            Err(FuzzError::InvalidData(_))
        ));
    }

    #[test]
    fn test_entropy_failure_is_typed() {
        let ber = BerEncoding::new(
            ContentGenerator::new(Arc::new(FailingEntropy)),
            BerOptions::default(),
        );
        assert!(matches!(ber.random_boolean(), Err(FuzzError::Entropy(_))));
        assert!(matches!(ber.random_integer(), Err(FuzzError::Entropy(_))));
        assert!(matches!(ber.random_ia5_string(), Err(FuzzError::Entropy(_))));
        // NULL draws nothing, so it still succeeds
        assert!(ber.random_null().is_ok());
    }
}
