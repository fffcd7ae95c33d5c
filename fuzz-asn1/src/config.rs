//! Generation run configuration

use fuzz_asn1_ber::{BerOptions, ContentGenerator, RulesetKind};
use fuzz_asn1_core::UniversalType;
use std::path::PathBuf;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "tmp";

/// Default file name in single-value mode
pub const DEFAULT_FILE_NAME: &str = "output.asn1";

/// Type generated in single-value mode when none is requested
pub const DEFAULT_SINGLE_TYPE: UniversalType = UniversalType::Ia5String;

/// File name for the `index`-th bulk sample of `ty`: `rand_<slug>_<index>.asn1`
pub fn bulk_file_name(ty: UniversalType, index: usize) -> String {
    format!("rand_{}_{}.asn1", ty.slug(), index)
}

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    /// One value written to a fixed file name
    Single { ty: UniversalType, file_name: String },
    /// `count` values of each type, written as `rand_<slug>_<index>.asn1`
    Bulk { types: Vec<UniversalType>, count: usize },
}

/// What to do when a single sample cannot be generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure
    #[default]
    Abort,
    /// Log entropy failures, count them and move on (I/O errors still abort)
    Skip,
}

/// One file to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub ty: UniversalType,
    pub file_name: String,
}

/// Full description of a generation run
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Ruleset name, matched case-insensitively
    pub encoding: String,
    pub out_dir: PathBuf,
    pub mode: GenerationMode,
    pub parallel: bool,
    pub failure_policy: FailurePolicy,
    pub ber_options: BerOptions,
    /// Seed for reproducible output; `None` uses the OS CSPRNG
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            encoding: RulesetKind::Ber.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            mode: GenerationMode::Single {
                ty: DEFAULT_SINGLE_TYPE,
                file_name: DEFAULT_FILE_NAME.to_string(),
            },
            parallel: false,
            failure_policy: FailurePolicy::default(),
            ber_options: BerOptions::default(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Expand the mode into the list of files to produce
    pub fn jobs(&self) -> Vec<Job> {
        match &self.mode {
            GenerationMode::Single { ty, file_name } => vec![Job {
                ty: *ty,
                file_name: file_name.clone(),
            }],
            GenerationMode::Bulk { types, count } => types
                .iter()
                .flat_map(|ty| {
                    (0..*count).map(move |index| Job {
                        ty: *ty,
                        file_name: bulk_file_name(*ty, index),
                    })
                })
                .collect(),
        }
    }

    /// Content generator matching the seed setting
    pub fn content_generator(&self) -> ContentGenerator {
        match self.seed {
            Some(seed) => ContentGenerator::seeded(seed),
            None => ContentGenerator::system(),
        }
    }

    /// Whether jobs should actually run in parallel
    ///
    /// A seeded run stays sequential so the same seed maps to the same files.
    pub fn runs_in_parallel(&self) -> bool {
        self.parallel && self.seed.is_none()
    }
}
