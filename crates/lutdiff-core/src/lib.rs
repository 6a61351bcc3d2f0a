//! # lutdiff-core
//!
//! Correction profiles for camera color profiles.
//!
//! Given a *start* and a *target* camera profile, [`diff`] produces a third
//! profile whose look table and tone curve hold the step needed to move
//! imagery from the start calibration to the target calibration.
//!
//! # Profile Formats
//!
//! - [`Profile`] - flat JSON profile ([`profile`] module)
//! - [`DcpData`] - dcpTool XML dump of a `.dcp` profile ([`dcp`] module)
//!
//! Both implement [`ColorProfile`] (what the diff engine reads and writes)
//! and [`ProfileCodec`] (decoding and indented encoding).
//!
//! # Usage
//!
//! ```rust,no_run
//! use lutdiff_core::{DcpData, DiffOptions, ProfileCodec, TonePoint, diff, read_profile};
//!
//! let start: DcpData = read_profile("start.xml").unwrap();
//! let target: DcpData = read_profile("target.xml").unwrap();
//!
//! let options = DiffOptions::new().ignore(TonePoint::new(0.0, 0.0));
//! let correction = diff(&start, &target, &options).unwrap();
//! println!("{}", correction.encode().unwrap());
//! ```
//!
//! # What Gets Diffed
//!
//! - Look table: every cell, all six fields, as `target - start`
//! - Tone curve: after exclusion filtering, both coordinates (optional)
//! - Matrices and metadata: copied from the start profile, never diffed
//!
//! # Dependencies
//!
//! - [`serde`] / [`serde_json`] - JSON profiles
//! - [`quick_xml`] - dcpData documents
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod curve;
pub mod dcp;
pub mod diff;
mod error;
mod lookup;
pub mod profile;

pub use codec::{ProfileCodec, read_profile, write_profile};
pub use curve::{TonePoint, ToneSample, filter as filter_tone_curve};
pub use dcp::{
    DcpData, DcpLookTable, DcpLookTableElement, DcpMatrix, DcpToneCurve, DcpToneCurveElement,
};
pub use diff::{ColorProfile, DiffOptions, diff, diff_documents};
pub use error::{ProfileError, ProfileResult};
pub use lookup::{LookupEntry, LookupRow};
pub use profile::Profile;
