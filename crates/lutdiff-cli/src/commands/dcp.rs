//! dcpTool XML profile diff command

use crate::DcpArgs;
use anyhow::Result;
use lutdiff_core::DcpData;

pub fn run(args: DcpArgs) -> Result<()> {
    let options = super::diff_options(&args.diff).skip_tone_curve(args.skip_tone_curve);
    super::run_diff::<DcpData>(&args.diff, &options)
}
