//! CLI command implementations

pub mod dcp;
pub mod json;

use crate::DiffArgs;
use crate::sink::Sink;
use anyhow::{Context, Result};
use lutdiff_core::{ColorProfile, DiffOptions, ProfileCodec};
use std::path::Path;
use tracing::{debug, info};

/// Load a profile document from path
pub fn load_profile<P: ProfileCodec>(path: &Path) -> Result<P> {
    lutdiff_core::read_profile(path)
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Diff the start and target documents named in `args` and emit the result.
pub fn run_diff<P>(args: &DiffArgs, options: &DiffOptions) -> Result<()>
where
    P: ColorProfile + ProfileCodec,
{
    let start: P = load_profile(&args.start)?;
    let target: P = load_profile(&args.target)?;
    debug!(
        start = %args.start.display(),
        target = %args.target.display(),
        format = P::FORMAT,
        ignored = options.ignore_tone_curve.len(),
        skip_tone_curve = options.skip_tone_curve,
        "loaded profiles"
    );

    let result = lutdiff_core::diff(&start, &target, options).with_context(|| {
        format!(
            "Cannot diff {} against {}",
            args.start.display(),
            args.target.display()
        )
    })?;
    info!(name = result.name(), "built correction profile");

    let sink = Sink::from_output(args.output.as_deref());
    sink.write_profile(&result).with_context(|| format!("Failed to write to {}", sink))?;
    Ok(())
}

/// Turn parsed CLI exclusions into diff options.
pub fn diff_options(args: &DiffArgs) -> DiffOptions {
    DiffOptions::new().ignore_all(args.ignore_tone_curve.iter().copied())
}
