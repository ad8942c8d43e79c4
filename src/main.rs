mod cli;

use clap::Parser;
use cli::Cli;
use diff_panes::config::Config;
use diff_panes::report::Report;
use diff_panes::sync::DiffSyncController;
use diff_panes::transform::TransformError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum CliError {
    #[error("Cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::default();

    let mut session =
        DiffSyncController::new(read(&cli.left)?, read(&cli.right)?, config.sync_options());
    if let Some(transform) = cli.transform {
        session.apply_transform(transform, config.settings.transform_both_sides)?;
        session.flush();
    }
    info!(
        "Compared {:?} and {:?}: {} rows",
        cli.left,
        cli.right,
        session.rows().len()
    );

    let report = Report::new(session.diff_result());
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
