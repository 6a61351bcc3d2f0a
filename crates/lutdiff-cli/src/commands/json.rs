//! Flat JSON profile diff command

use crate::DiffArgs;
use anyhow::Result;
use lutdiff_core::Profile;

/// The JSON pipeline always diffs the tone curve.
pub fn run(args: DiffArgs) -> Result<()> {
    let options = super::diff_options(&args);
    super::run_diff::<Profile>(&args, &options)
}
