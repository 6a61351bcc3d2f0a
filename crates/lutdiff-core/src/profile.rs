//! Flat JSON camera profile.
//!
//! The JSON profile stores matrices as lists of 3-wide rows, the look table
//! as a list of named rows and the tone curve as `[H, V]` pairs:
//!
//! ```json
//! {
//!   "UniqueCameraModel": "Canon EOS R5",
//!   "ProfileName": "Standard",
//!   "CalibrationIlluminant1": "StdA",
//!   "ColorMatrix1": [[0.7, -0.2, -0.1], [-0.4, 1.2, 0.2], [-0.1, 0.2, 0.6]],
//!   "ProfileLookTableDims": [1, 1, 1],
//!   "ProfileLookTable": [
//!     {"HueDiv": 0, "SatDiv": 0, "ValDiv": 0, "HueShift": 0, "SatScale": 1, "ValScale": 1}
//!   ],
//!   "ProfileToneCurve": [[0, 0], [1, 1]]
//! }
//! ```
//!
//! Missing keys decode to their zero value; unknown keys are ignored.

use crate::codec::ProfileCodec;
use crate::curve::TonePoint;
use crate::diff::ColorProfile;
use crate::lookup::LookupRow;
use crate::{ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};

/// A camera profile in the flat JSON layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Profile {
    /// Camera model the profile is bound to.
    pub unique_camera_model: String,
    /// Profile name.
    pub profile_name: String,
    /// Copyright notice.
    pub profile_copyright: String,
    /// Embed policy.
    pub profile_embed_policy: String,
    /// Calibration signature.
    pub profile_calibration_signature: String,
    /// First calibration illuminant.
    pub calibration_illuminant1: String,
    /// Second calibration illuminant.
    pub calibration_illuminant2: String,
    /// Color matrix for the first illuminant.
    pub color_matrix1: Vec<[f64; 3]>,
    /// Color matrix for the second illuminant.
    pub color_matrix2: Vec<[f64; 3]>,
    /// Forward matrix for the first illuminant.
    pub forward_matrix1: Vec<[f64; 3]>,
    /// Forward matrix for the second illuminant.
    pub forward_matrix2: Vec<[f64; 3]>,
    /// Black render policy.
    pub default_black_render: String,
    /// Baseline exposure offset in stops.
    pub baseline_exposure_offset: f64,
    /// Hue, saturation and value division counts of the look table.
    pub profile_look_table_dims: Vec<u32>,
    /// Look table encoding.
    pub profile_look_table_encoding: String,
    /// Look table cells.
    pub profile_look_table: Vec<LookupRow>,
    /// Tone curve samples.
    pub profile_tone_curve: Vec<TonePoint>,
}

impl ColorProfile for Profile {
    type Entry = LookupRow;
    type Sample = TonePoint;

    fn name(&self) -> &str {
        &self.profile_name
    }

    fn set_name(&mut self, name: String) {
        self.profile_name = name;
    }

    fn lookup_table(&self) -> &[LookupRow] {
        &self.profile_look_table
    }

    fn lookup_table_mut(&mut self) -> &mut [LookupRow] {
        &mut self.profile_look_table
    }

    fn tone_curve(&self) -> &[TonePoint] {
        &self.profile_tone_curve
    }

    fn set_tone_curve(&mut self, curve: Vec<TonePoint>) {
        self.profile_tone_curve = curve;
    }
}

impl ProfileCodec for Profile {
    const FORMAT: &'static str = "json";

    fn decode(text: &str) -> ProfileResult<Self> {
        if text.trim().is_empty() {
            return Err(ProfileError::MissingInput("input"));
        }
        let profile: Option<Profile> = serde_json::from_str(text)?;
        profile.ok_or(ProfileError::MissingInput("input"))
    }

    fn encode(&self) -> ProfileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
