//! Generation driver
//!
//! Turns a [`GenerationConfig`] into files on disk through an injected
//! [`EncodingRuleset`].

use crate::config::{FailurePolicy, GenerationConfig, Job};
use crate::writer::OutputWriter;
use fuzz_asn1_ber::{EncodingRuleset, Ruleset};
use fuzz_asn1_core::FuzzResult;
use rayon::prelude::*;
use std::fmt;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written
    pub written: usize,
    /// Samples dropped under [`FailurePolicy::Skip`]
    pub skipped: usize,
    /// Total encoded bytes written
    pub bytes: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} skipped, {} bytes",
            self.written, self.skipped, self.bytes
        )
    }
}

enum Outcome {
    Written(usize),
    Skipped,
}

/// Select the ruleset named in `config` and run it
///
/// The ruleset is resolved before the output directory is touched, so an
/// unknown name fails without creating or writing anything.
pub fn run(config: &GenerationConfig) -> FuzzResult<GenerationReport> {
    let ruleset = Ruleset::from_name(
        &config.encoding,
        config.ber_options,
        config.content_generator(),
    )?;
    run_with(&ruleset, config)
}

/// Run `config` against an already constructed ruleset
pub fn run_with<R>(ruleset: &R, config: &GenerationConfig) -> FuzzResult<GenerationReport>
where
    R: EncodingRuleset + ?Sized,
{
    let writer = OutputWriter::create(&config.out_dir)?;
    let jobs = config.jobs();
    let parallel = config.runs_in_parallel();

    if config.parallel && !parallel {
        log::warn!("seeded run requested in parallel; generating sequentially");
    }
    log::info!(
        "generating {} value(s) with ruleset '{}' into {}",
        jobs.len(),
        ruleset.name(),
        writer.dir().display()
    );

    let outcomes: Vec<Outcome> = if parallel {
        jobs.par_iter()
            .map(|job| run_job(ruleset, &writer, job, config.failure_policy))
            .collect::<FuzzResult<_>>()?
    } else {
        jobs.iter()
            .map(|job| run_job(ruleset, &writer, job, config.failure_policy))
            .collect::<FuzzResult<_>>()?
    };

    let report = outcomes
        .into_iter()
        .fold(GenerationReport::default(), |mut report, outcome| {
            match outcome {
                Outcome::Written(bytes) => {
                    report.written += 1;
                    report.bytes += bytes;
                }
                Outcome::Skipped => report.skipped += 1,
            }
            report
        });

    log::info!("generation finished: {}", report);
    Ok(report)
}

fn run_job<R>(
    ruleset: &R,
    writer: &OutputWriter,
    job: &Job,
    policy: FailurePolicy,
) -> FuzzResult<Outcome>
where
    R: EncodingRuleset + ?Sized,
{
    let value = match ruleset.generate(job.ty) {
        Ok(value) => value,
        Err(e) if policy == FailurePolicy::Skip && e.is_sample_local() => {
            log::warn!("skipping {}: {}", job.file_name, e);
            return Ok(Outcome::Skipped);
        }
        Err(e) => return Err(e),
    };

    writer.write(&job.file_name, &value)?;
    Ok(Outcome::Written(value.len()))
}
