//! Randomized ASN.1 value generation for decoder fuzzing
//!
//! This crate assembles structurally plausible BER encodings of ASN.1
//! universal types from random content:
//!
//! - [`entropy`]: cryptographically secure, fallible randomness sources
//! - [`content`]: random payloads, free-form or drawn from a charset
//! - [`ber`]: BER tag/length octets and the per-type TLV rules
//! - [`ruleset`]: the capability trait and by-name ruleset selection
//!
//! # TODO
//!
//! - [ ] Long-form lengths (content above 127 bytes)
//! - [ ] Constructed BIT STRING / OCTET STRING encodings
//! - [ ] Targeted REAL special values (PLUS-INFINITY 0x40, MINUS-INFINITY 0x41)
//! - [ ] DER and CER rulesets

pub mod ber;
pub mod content;
pub mod entropy;
pub mod ruleset;

pub use ber::{BerEncoding, BerLength, BerOptions, BerTag, BerTagClass};
pub use content::ContentGenerator;
pub use entropy::{EntropySource, SeededEntropy, SystemEntropy};
pub use ruleset::{EncodingRuleset, Ruleset, RulesetKind};
