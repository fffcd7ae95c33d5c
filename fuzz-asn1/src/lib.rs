//! fuzz-asn1 - random ASN.1 data for decoder fuzzing
//!
//! This library drives the value generators and writes their output to disk.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `fuzz-asn1-core`: Core types, error handling, charsets
//! - `fuzz-asn1-ber`: Entropy, content generation, BER TLV rules, ruleset selection
//! - `fuzz-asn1`: Run configuration, output writer, command line
//!
//! # Usage
//!
//! ```no_run
//! use fuzz_asn1::{run, GenerationConfig, GenerationMode};
//! use fuzz_asn1::model::UniversalType;
//!
//! let config = GenerationConfig {
//!     mode: GenerationMode::Bulk { types: vec![UniversalType::Integer], count: 100 },
//!     ..GenerationConfig::default()
//! };
//! let report = run(&config)?;
//! println!("{}", report);
//! # Ok::<(), fuzz_asn1::model::FuzzError>(())
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod writer;

pub use config::{bulk_file_name, FailurePolicy, GenerationConfig, GenerationMode, Job};
pub use driver::{run, run_with, GenerationReport};
pub use writer::OutputWriter;

// Re-export core types
pub mod model {
    pub use fuzz_asn1_core::*;
}

// Re-export the generators
pub mod ber {
    pub use fuzz_asn1_ber::*;
}
