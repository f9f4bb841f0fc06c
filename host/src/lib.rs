use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use claim_verifier_core::{verify_default_table, verify_table, VerificationJournal, VerifyError};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub table_path: PathBuf,
}

/// Verifies the table at `opts.table_path` against the built-in Dumer91 parameters.
pub fn run(opts: &RunOptions) -> Result<VerificationJournal> {
    let raw = read_table(opts)?;
    finish(opts, verify_default_table(&raw))
}

pub fn run_with_params(
    opts: &RunOptions,
    optimizer_params: &[(f64, f64)],
) -> Result<VerificationJournal> {
    let raw = read_table(opts)?;
    finish(opts, verify_table(&raw, optimizer_params))
}

fn read_table(opts: &RunOptions) -> Result<String> {
    let raw = fs::read_to_string(&opts.table_path)
        .with_context(|| format!("failed to read table: {}", opts.table_path.display()))?;
    tracing::debug!("read {} bytes from {}", raw.len(), opts.table_path.display());
    Ok(raw)
}

fn finish(
    opts: &RunOptions,
    outcome: Result<VerificationJournal, VerifyError>,
) -> Result<VerificationJournal> {
    let journal = match outcome {
        Ok(journal) => journal,
        Err(err) => {
            log_failure(&err);
            return Err(err).with_context(|| {
                format!("verification failed for {}", opts.table_path.display())
            });
        }
    };

    for report in &journal.rows {
        tracing::debug!(
            "row {}: R={} s={} bound_S={:.9} sub_cost={:.9} slack={:.3e}",
            report.row,
            report.params.rate,
            report.params.s,
            report.bound_expected_size,
            report.sub_problem_cost,
            report.slack
        );
    }
    if let (Some(row), Some(slack)) = (journal.tightest_row, journal.min_slack) {
        tracing::info!(
            "verified {} rows; tightest row {} with slack {:.3e}",
            journal.rows_checked,
            row,
            slack
        );
    }

    Ok(journal)
}

fn log_failure(err: &VerifyError) {
    match err.row() {
        Some(row) => tracing::error!("stopped at row {}: {}", row, err),
        None => tracing::error!("{}", err),
    }
}
