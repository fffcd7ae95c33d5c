//! Core types and utilities for the ASN.1 fuzz value generator
//!
//! This crate provides the error taxonomy, the catalogue of supported ASN.1
//! universal types, the character sets used by restricted string types and the
//! `EncodedValue` TLV container shared by every encoding ruleset.

pub mod error;
pub mod universal_type;
pub mod charset;
pub mod encoded_value;

pub use error::{FuzzError, FuzzResult};
pub use universal_type::UniversalType;
pub use charset::Charset;
pub use encoded_value::{EncodedValue, MAX_SHORT_LENGTH};
