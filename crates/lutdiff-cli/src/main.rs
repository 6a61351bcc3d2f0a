//! lutdiff - correction profiles between camera color profiles
//!
//! Builds a profile that makes footage shot with one camera profile look
//! like it was shot with another.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lutdiff_core::TonePoint;
use std::path::PathBuf;

mod commands;
mod sink;

#[derive(Parser)]
#[command(name = "lutdiff")]
#[command(author, version, about = "Generate correction profiles between camera color profiles")]
#[command(long_about = "
lutdiff generates a LUT profile that transforms the colors in the start profile
to the colors in the target profile, essentially producing a \"correction
profile\" that will make footage shot with the start profile look like it was
shot with the target profile.

Examples:
  lutdiff json start.json target.json                 # Print correction profile
  lutdiff json start.json target.json -o fix.json
  lutdiff json a.json b.json -i 0,0 -i 1,1            # Ignore tone curve end points
  lutdiff dcp start.xml target.xml -s -o fix.xml      # Leave the tone curve alone
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff two flat JSON profiles
    #[command(visible_alias = "j")]
    Json(DiffArgs),

    /// Diff two dcpTool XML profiles
    #[command(visible_alias = "d")]
    Dcp(DcpArgs),
}

/// Arguments shared by every pipeline.
#[derive(Args)]
struct DiffArgs {
    /// Start profile
    start: PathBuf,

    /// Target profile
    target: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tone curve sample to ignore, as H,V (repeatable)
    #[arg(short = 'i', long = "ignore-tone-curve", value_name = "H,V", allow_hyphen_values = true)]
    ignore_tone_curve: Vec<TonePoint>,
}

/// Arguments for the `dcp` command.
#[derive(Args)]
struct DcpArgs {
    #[command(flatten)]
    diff: DiffArgs,

    /// Copy the start tone curve instead of diffing it
    #[arg(short, long)]
    skip_tone_curve: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let filter = match verbose {
        0 => tracing::level_filters::LevelFilter::WARN,
        1 => tracing::level_filters::LevelFilter::DEBUG,
        2.. => tracing::level_filters::LevelFilter::TRACE,
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Json(args) => commands::json::run(args),
        Commands::Dcp(args) => commands::dcp::run(args),
    }
}
