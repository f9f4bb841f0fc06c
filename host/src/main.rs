use std::path::PathBuf;

use anyhow::Result;
use claim_verifier_core::constants::DEFAULT_TABLE_FILE;
use clap::Parser;
use host::{run, RunOptions};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "verify-claim")]
#[command(
    about = "Check that RLPN + Dumer86 parameters satisfy bound_S + (1 - s)·Dumer91 <= s on every row"
)]
struct Cli {
    /// Semicolon-delimited parameter table (R;claimed;s;u;w;t) with one header row
    #[arg(long, default_value = DEFAULT_TABLE_FILE)]
    table: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { table } = Cli::parse();
    tracing::debug!("table path: {}", table.display());

    run(&RunOptions { table_path: table })?;
    Ok(())
}
