//! Correction profile computation.
//!
//! [`diff`] turns a *start* and a *target* profile into a correction
//! profile: a copy of the start profile whose look table and tone curve hold
//! the per-element step from start to target. Matrices and metadata are
//! carried over from the start profile untouched.
//!
//! The algorithm is written once against [`ColorProfile`], which both
//! document models implement.
//!
//! # Example
//!
//! ```rust
//! use lutdiff_core::{DiffOptions, LookupRow, Profile, diff};
//!
//! let mut start = Profile::default();
//! start.profile_name = "A".into();
//! start.profile_look_table = vec![LookupRow {
//!     sat_scale: 1.0,
//!     val_scale: 1.0,
//!     ..Default::default()
//! }];
//!
//! let mut target = start.clone();
//! target.profile_name = "B".into();
//! target.profile_look_table[0].hue_shift = 5.0;
//!
//! let result = diff(&start, &target, &DiffOptions::default()).unwrap();
//! assert_eq!(result.profile_name, "Correct A to B");
//! assert_eq!(result.profile_look_table[0].hue_shift, 5.0);
//! assert_eq!(result.profile_look_table[0].sat_scale, 0.0);
//! ```

use crate::curve::{self, TonePoint, ToneSample};
use crate::lookup::LookupEntry;
use crate::{ProfileError, ProfileResult};
use tracing::debug;

/// Accessors the diff engine needs from a profile document.
pub trait ColorProfile: Clone {
    /// Look table element type.
    type Entry: LookupEntry;
    /// Tone curve sample type.
    type Sample: ToneSample;

    /// Profile name.
    fn name(&self) -> &str;

    /// Replaces the profile name.
    fn set_name(&mut self, name: String);

    /// Look table elements in document order.
    fn lookup_table(&self) -> &[Self::Entry];

    /// Mutable look table elements. The table length never changes.
    fn lookup_table_mut(&mut self) -> &mut [Self::Entry];

    /// Tone curve samples in document order.
    fn tone_curve(&self) -> &[Self::Sample];

    /// Replaces the tone curve.
    fn set_tone_curve(&mut self, curve: Vec<Self::Sample>);

    /// Returns an independent copy sharing no state with `self`.
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// Options controlling [`diff`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffOptions {
    /// Leave the tone curve as the start profile's values.
    pub skip_tone_curve: bool,
    /// Tone curve samples to drop before diffing.
    pub ignore_tone_curve: Vec<TonePoint>,
}

impl DiffOptions {
    /// Creates default options: diff everything, exclude nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the tone curve is skipped.
    pub fn skip_tone_curve(mut self, skip: bool) -> Self {
        self.skip_tone_curve = skip;
        self
    }

    /// Adds one tone curve exclusion.
    pub fn ignore(mut self, point: TonePoint) -> Self {
        self.ignore_tone_curve.push(point);
        self
    }

    /// Adds several tone curve exclusions.
    pub fn ignore_all(mut self, points: impl IntoIterator<Item = TonePoint>) -> Self {
        self.ignore_tone_curve.extend(points);
        self
    }
}

/// Computes the correction profile taking `start` to `target`.
///
/// Neither input is modified. Fails without a partial result when the look
/// tables, or the filtered tone curves, differ in length.
pub fn diff<P: ColorProfile>(start: &P, target: &P, options: &DiffOptions) -> ProfileResult<P> {
    let mut result = start.deep_copy();
    result.set_name(format!("Correct {} to {}", start.name(), target.name()));

    let start_len = result.lookup_table().len();
    let target_len = target.lookup_table().len();
    if start_len != target_len {
        return Err(ProfileError::LookupTableLengthMismatch {
            start: start_len,
            target: target_len,
        });
    }
    debug!(entries = start_len, "diffing look table");

    for (entry, other) in result
        .lookup_table_mut()
        .iter_mut()
        .zip(target.lookup_table())
    {
        let delta = entry.row().delta_to(&other.row());
        entry.set_row(delta);
    }

    if options.skip_tone_curve {
        debug!("tone curve skipped");
        return Ok(result);
    }

    let curve_a = curve::filter(result.tone_curve(), &options.ignore_tone_curve);
    let curve_b = curve::filter(target.tone_curve(), &options.ignore_tone_curve);
    if curve_a.len() != curve_b.len() {
        return Err(ProfileError::ToneCurveLengthMismatch {
            start: curve_a.len(),
            target: curve_b.len(),
        });
    }
    debug!(
        samples = curve_a.len(),
        excluded = result.tone_curve().len() - curve_a.len(),
        "diffing tone curve"
    );

    let diffed = curve_a
        .into_iter()
        .zip(&curve_b)
        .enumerate()
        .map(|(i, (mut sample, other))| {
            let delta = sample.point().delta_to(&other.point());
            sample.set_point(i, delta);
            sample
        })
        .collect();
    result.set_tone_curve(diffed);

    Ok(result)
}

/// Like [`diff`], but the target document may be absent.
///
/// Returns [`ProfileError::MissingInput`] when `target` is `None`.
pub fn diff_documents<P: ColorProfile>(
    start: &P,
    target: Option<&P>,
    options: &DiffOptions,
) -> ProfileResult<P> {
    let target = target.ok_or(ProfileError::MissingInput("target"))?;
    diff(start, target, options)
}
