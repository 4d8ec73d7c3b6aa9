//! Compare command
//!
//! Usage: diffcompact compare [EXPECTED] [ACTUAL] [--context <N>] [--json]

use clap::Args;
use diffcompact_core::errors::ExError;
use diffcompact_core::{
    log_op_end, log_op_error, log_op_start, CompactorConfig, DiffCompactError,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Expected value (absent when neither this nor --expected-file is given)
    pub expected: Option<String>,

    /// Actual value (absent when neither this nor --actual-file is given)
    pub actual: Option<String>,

    /// Read the expected value from a file
    #[arg(long, value_name = "FILE")]
    pub expected_file: Option<PathBuf>,

    /// Read the actual value from a file
    #[arg(long, value_name = "FILE")]
    pub actual_file: Option<PathBuf>,

    /// Characters of unchanged context to keep around the difference
    #[arg(short, long)]
    pub context: Option<usize>,

    /// Message placed in front of the comparison
    #[arg(short, long)]
    pub message: Option<String>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the plain message
    #[arg(long)]
    pub json: bool,
}

/// Result of a comparison that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Equal,
    Different,
}

impl CompareOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CompareOutcome::Equal => 0,
            CompareOutcome::Different => 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    equal: bool,
    message: &'a str,
    context_length: usize,
    prefix_len: Option<usize>,
    suffix_len: Option<usize>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<CompareOutcome, ExError> {
    let started = Instant::now();
    log_op_start!("compare");

    match run(args) {
        Ok(outcome) => {
            log_op_end!(
                "compare",
                duration_ms = started.elapsed().as_millis() as u64,
                equal = outcome == CompareOutcome::Equal
            );
            Ok(outcome)
        }
        Err(err) => {
            log_op_error!(
                "compare",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(ExError::from(err).with_op("compare"))
        }
    }
}

fn run(args: CompareArgs) -> Result<CompareOutcome, DiffCompactError> {
    let config = resolve_config(&args)?;
    let expected = resolve_side("expected", args.expected, args.expected_file.as_deref())?;
    let actual = resolve_side("actual", args.actual, args.actual_file.as_deref())?;

    let compactor = config.compactor();
    let compaction = compactor.compaction(expected.as_deref(), actual.as_deref());
    let message = diffcompact_core::compactor::format_message(
        config.message_prefix.as_deref(),
        compaction.rendered_expected(),
        compaction.rendered_actual(),
    );

    let outcome = if expected == actual {
        CompareOutcome::Equal
    } else {
        CompareOutcome::Different
    };

    if args.json {
        let offsets = compaction.offsets();
        let report = CompareReport {
            equal: outcome == CompareOutcome::Equal,
            message: &message,
            context_length: compactor.context_length(),
            prefix_len: offsets.map(|o| o.prefix),
            suffix_len: offsets.map(|o| o.suffix),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            DiffCompactError::Serialization {
                reason: e.to_string(),
            }
        })?;
        println!("{}", json);
    } else {
        println!("{}", message);
    }

    Ok(outcome)
}

/// Layer the configuration: defaults, config file, environment, then flags.
fn resolve_config(args: &CompareArgs) -> Result<CompactorConfig, DiffCompactError> {
    let base = match &args.config {
        Some(path) => CompactorConfig::from_file(path)?,
        None => CompactorConfig::default(),
    };
    let mut config = base.with_env_overrides()?;

    if let Some(context) = args.context {
        config.context_length = context;
    }
    if let Some(message) = &args.message {
        config.message_prefix = Some(message.clone());
    }
    Ok(config)
}

fn resolve_side(
    side: &str,
    inline: Option<String>,
    file: Option<&Path>,
) -> Result<Option<String>, DiffCompactError> {
    match (inline, file) {
        (Some(_), Some(path)) => Err(DiffCompactError::InvalidInput {
            reason: format!(
                "{} given both inline and via file {}",
                side,
                path.display()
            ),
        }),
        (Some(value), None) => Ok(Some(value)),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| DiffCompactError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        (None, None) => Ok(None),
    }
}
