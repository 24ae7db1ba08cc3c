#![allow(clippy::exit)]

use std::io::Write as _;

use anyhow::{Context as _, Result};
use backer_track_cli::{app, cli::Cli, cli::write_completions, output::Output, timing};
use clap::Parser as _;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // A `.env` in the working directory may carry BACKER_EMAIL / BACKER_NUMBER.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut stdout = std::io::stdout().lock();
        write_completions(shell, &mut stdout);
        stdout.flush().context("Failed to write completions")?;
        return Ok(());
    }

    timing::init_tracing(cli.verbose, cli.timing);
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut out = Output::stdio();
    let code = app::run(&cli, &mut out).await;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
