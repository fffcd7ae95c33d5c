//! BER (Basic Encoding Rules) value generation
//!
//! Each ASN.1 value is encoded as a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//! Where:
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-30)
//!
//! All generated values are universal and primitive, so the tag byte equals
//! the universal tag number.
//!
//! ## Length Encoding
//!
//! Only the short form is produced: one byte, bit 8 clear, bits 7-1 holding
//! the content length (0-127).

pub mod encoder;
pub mod types;

pub use encoder::{is_minimal_integer, minimize_integer, BerEncoding, BerOptions};
pub use types::{BerLength, BerTag, BerTagClass};
