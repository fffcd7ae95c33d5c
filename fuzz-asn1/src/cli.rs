//! Command line arguments
//!
//! [`Args`] is parsed by clap and converted into a [`GenerationConfig`].

use crate::config::{
    DEFAULT_FILE_NAME, DEFAULT_OUT_DIR, DEFAULT_SINGLE_TYPE, FailurePolicy, GenerationConfig,
    GenerationMode,
};
use anyhow::{bail, Result};
use clap::Parser;
use fuzz_asn1_ber::BerOptions;
use fuzz_asn1_core::UniversalType;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fuzz-asn1", author, version, about = "generate random asn.1 data")]
pub struct Args {
    /// Which encoding ruleset should we use? (case-insensitive)
    #[arg(short = 'e', long, default_value = "ber")]
    pub encoding: String,

    /// Output directory, created if missing
    #[arg(short = 'o', long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Bulk mode: generate N values of each selected type as rand_<type>_<n>.asn1
    #[arg(short = 'c', long, value_name = "N")]
    pub count: Option<usize>,

    /// Type to generate (repeatable). Bulk mode defaults to every type,
    /// single mode to ia5string.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<UniversalType>,

    /// File written in single mode
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Generate bulk samples on all cores
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Log and skip samples whose randomness could not be read instead of aborting
    #[arg(long, default_value_t = false)]
    pub skip_failed: bool,

    /// Emit only minimally encoded INTEGER/ENUMERATED content
    #[arg(long, default_value_t = false)]
    pub minimal_integers: bool,

    /// Keep the BIT STRING unused-bits octet within 0..=7
    #[arg(long, default_value_t = false)]
    pub constrain_unused_bits: bool,

    /// Seed a deterministic generator for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Args {
    pub fn into_config(self) -> Result<GenerationConfig> {
        let mode = match self.count {
            Some(count) => GenerationMode::Bulk {
                types: if self.types.is_empty() {
                    UniversalType::ALL.to_vec()
                } else {
                    self.types
                },
                count,
            },
            None => {
                if self.types.len() > 1 {
                    bail!("single mode takes at most one --type; use --count for several types");
                }
                GenerationMode::Single {
                    ty: self.types.first().copied().unwrap_or(DEFAULT_SINGLE_TYPE),
                    file_name: self.file_name,
                }
            }
        };

        Ok(GenerationConfig {
            encoding: self.encoding,
            out_dir: self.out_dir,
            mode,
            parallel: self.parallel,
            failure_policy: if self.skip_failed {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
            ber_options: BerOptions {
                minimal_integers: self.minimal_integers,
                constrain_unused_bits: self.constrain_unused_bits,
            },
            seed: self.seed,
        })
    }
}
