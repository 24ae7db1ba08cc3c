use std::io::Write;

use backer_track_business::DEFAULT_SKU;
use clap::{CommandFactory as _, Parser};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "backer-track", version)]
#[command(about = "Look up a backer's order items and shipping status", long_about = None)]
pub struct Cli {
    /// Email address used for the pledge
    #[arg(long, env = "BACKER_EMAIL", hide_env_values = true)]
    pub email: Option<String>,

    /// Backer number from the crowdfunding survey
    #[arg(long, env = "BACKER_NUMBER", hide_env_values = true)]
    pub backer: Option<String>,

    /// SKU to highlight in the summary line and table
    #[arg(long, default_value = DEFAULT_SKU)]
    pub sku: String,

    /// Print the parsed response as pretty JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Override the tracking endpoint
    #[arg(long, env = "BACKER_TRACK_URL", hide = true)]
    pub url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Show timing/latency information
    #[arg(long)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Writes the completion script for `shell` into `writer`.
pub fn write_completions(shell: Shell, writer: &mut impl Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    clap_complete::generate(shell, &mut cmd, bin_name, writer);
}
