//! dcpTool XML camera profile (`dcpData`).
//!
//! This is the document dcpTool produces when decompiling a `.dcp` camera
//! profile. Matrices and tables carry their dimensions as attributes and
//! every cell is an `Element`:
//!
//! ```xml
//! <dcpData>
//!   <ProfileName>Adobe Standard</ProfileName>
//!   <CalibrationIlluminant1>17</CalibrationIlluminant1>
//!   <ColorMatrix1 Rows="3" Cols="3">
//!     <Element Row="0" Col="0">0.6722</Element>
//!     <!-- ... -->
//!   </ColorMatrix1>
//!   <LookTable hueDivisions="36" satDivisions="8" valDivisions="16">
//!     <Element HueDiv="0" SatDiv="0" ValDiv="0" HueShift="0" SatScale="1" ValScale="1"/>
//!     <!-- ... -->
//!   </LookTable>
//!   <ToneCurve Size="2">
//!     <Element N="0" h="0" v="0"/>
//!     <Element N="1" h="1" v="1"/>
//!   </ToneCurve>
//! </dcpData>
//! ```
//!
//! Optional sections that are absent in the input stay absent in the output.

use crate::codec::ProfileCodec;
use crate::curve::{TonePoint, ToneSample};
use crate::diff::ColorProfile;
use crate::lookup::{LookupEntry, LookupRow};
use crate::{ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};

/// A camera profile in dcpTool's XML layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename = "dcpData")]
pub struct DcpData {
    /// Profile name.
    #[serde(rename = "ProfileName", default)]
    pub profile_name: String,
    /// First calibration illuminant (EXIF light source code).
    #[serde(rename = "CalibrationIlluminant1", default, skip_serializing_if = "Option::is_none")]
    pub calibration_illuminant1: Option<String>,
    /// Second calibration illuminant.
    #[serde(rename = "CalibrationIlluminant2", default, skip_serializing_if = "Option::is_none")]
    pub calibration_illuminant2: Option<String>,
    /// Color matrix for the first illuminant.
    #[serde(rename = "ColorMatrix1", default, skip_serializing_if = "Option::is_none")]
    pub color_matrix1: Option<DcpMatrix>,
    /// Color matrix for the second illuminant.
    #[serde(rename = "ColorMatrix2", default, skip_serializing_if = "Option::is_none")]
    pub color_matrix2: Option<DcpMatrix>,
    /// Forward matrix for the first illuminant.
    #[serde(rename = "ForwardMatrix1", default, skip_serializing_if = "Option::is_none")]
    pub forward_matrix1: Option<DcpMatrix>,
    /// Forward matrix for the second illuminant.
    #[serde(rename = "ForwardMatrix2", default, skip_serializing_if = "Option::is_none")]
    pub forward_matrix2: Option<DcpMatrix>,
    /// Reduction matrix for the first illuminant.
    #[serde(rename = "ReductionMatrix1", default, skip_serializing_if = "Option::is_none")]
    pub reduction_matrix1: Option<DcpMatrix>,
    /// Reduction matrix for the second illuminant.
    #[serde(rename = "ReductionMatrix2", default, skip_serializing_if = "Option::is_none")]
    pub reduction_matrix2: Option<DcpMatrix>,
    /// Copyright notice.
    #[serde(rename = "Copyright", default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Embed policy.
    #[serde(rename = "EmbedPolicy", default, skip_serializing_if = "Option::is_none")]
    pub embed_policy: Option<String>,
    /// Hue/sat map encoding.
    #[serde(rename = "ProfileHueSatMapEncoding", default, skip_serializing_if = "Option::is_none")]
    pub profile_hue_sat_map_encoding: Option<String>,
    /// Hue/sat map for the first illuminant. Copied, never diffed.
    #[serde(rename = "HueSatDeltas1", default, skip_serializing_if = "Option::is_none")]
    pub hue_sat_deltas1: Option<DcpLookTable>,
    /// Hue/sat map for the second illuminant. Copied, never diffed.
    #[serde(rename = "HueSatDeltas2", default, skip_serializing_if = "Option::is_none")]
    pub hue_sat_deltas2: Option<DcpLookTable>,
    /// Look table.
    #[serde(rename = "LookTable", default, skip_serializing_if = "Option::is_none")]
    pub look_table: Option<DcpLookTable>,
    /// Tone curve.
    #[serde(rename = "ToneCurve", default, skip_serializing_if = "Option::is_none")]
    pub tone_curve: Option<DcpToneCurve>,
    /// Calibration signature.
    #[serde(
        rename = "ProfileCalibrationSignature",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_calibration_signature: Option<String>,
    /// Camera model the profile is restricted to.
    #[serde(
        rename = "UniqueCameraModelRestriction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_camera_model_restriction: Option<String>,
    /// Look table encoding.
    #[serde(rename = "ProfileLookTableEncoding", default, skip_serializing_if = "Option::is_none")]
    pub profile_look_table_encoding: Option<String>,
    /// Baseline exposure offset, kept as written.
    #[serde(rename = "BaselineExposureOffset", default, skip_serializing_if = "Option::is_none")]
    pub baseline_exposure_offset: Option<String>,
    /// Black render policy.
    #[serde(rename = "DefaultBlackRender", default, skip_serializing_if = "Option::is_none")]
    pub default_black_render: Option<String>,
}

/// A matrix with explicit dimensions and addressed cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpMatrix {
    /// Row count.
    #[serde(rename = "@Rows", default)]
    pub rows: u32,
    /// Column count.
    #[serde(rename = "@Cols", default)]
    pub cols: u32,
    /// Cells, in document order.
    #[serde(rename = "Element", default)]
    pub elements: Vec<DcpMatrixElement>,
}

/// One matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpMatrixElement {
    /// Row index.
    #[serde(rename = "@Row", default)]
    pub row: u32,
    /// Column index.
    #[serde(rename = "@Col", default)]
    pub col: u32,
    /// Cell value.
    #[serde(rename = "$text")]
    pub value: f64,
}

/// A hue/sat/val table (`LookTable`, `HueSatDeltas1`, `HueSatDeltas2`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpLookTable {
    /// Hue division count.
    #[serde(rename = "@hueDivisions", default)]
    pub hue_divisions: u32,
    /// Saturation division count.
    #[serde(rename = "@satDivisions", default)]
    pub sat_divisions: u32,
    /// Value division count.
    #[serde(rename = "@valDivisions", default)]
    pub val_divisions: u32,
    /// Cells, in document order.
    #[serde(rename = "Element", default)]
    pub elements: Vec<DcpLookTableElement>,
}

/// One look table cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpLookTableElement {
    /// Hue division index.
    #[serde(rename = "@HueDiv", default)]
    pub hue_div: i32,
    /// Saturation division index.
    #[serde(rename = "@SatDiv", default)]
    pub sat_div: i32,
    /// Value division index.
    #[serde(rename = "@ValDiv", default)]
    pub val_div: i32,
    /// Hue shift in degrees.
    #[serde(rename = "@HueShift", default)]
    pub hue_shift: f64,
    /// Saturation scale factor.
    #[serde(rename = "@SatScale", default)]
    pub sat_scale: f64,
    /// Value scale factor.
    #[serde(rename = "@ValScale", default)]
    pub val_scale: f64,
}

impl LookupEntry for DcpLookTableElement {
    fn row(&self) -> LookupRow {
        LookupRow {
            hue_div: self.hue_div,
            sat_div: self.sat_div,
            val_div: self.val_div,
            hue_shift: self.hue_shift,
            sat_scale: self.sat_scale,
            val_scale: self.val_scale,
        }
    }

    fn set_row(&mut self, row: LookupRow) {
        self.hue_div = row.hue_div;
        self.sat_div = row.sat_div;
        self.val_div = row.val_div;
        self.hue_shift = row.hue_shift;
        self.sat_scale = row.sat_scale;
        self.val_scale = row.val_scale;
    }
}

/// Tone curve with its declared sample count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpToneCurve {
    /// Declared sample count.
    #[serde(rename = "@Size", default)]
    pub size: usize,
    /// Samples, in document order.
    #[serde(rename = "Element", default)]
    pub elements: Vec<DcpToneCurveElement>,
}

/// One numbered tone curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DcpToneCurveElement {
    /// Sample index.
    #[serde(rename = "@N", default)]
    pub n: usize,
    /// Input level.
    #[serde(rename = "@h", default)]
    pub h: f64,
    /// Output level.
    #[serde(rename = "@v", default)]
    pub v: f64,
}

impl ToneSample for DcpToneCurveElement {
    fn point(&self) -> TonePoint {
        TonePoint::new(self.h, self.v)
    }

    fn set_point(&mut self, index: usize, point: TonePoint) {
        self.n = index;
        self.h = point.h;
        self.v = point.v;
    }
}

impl ColorProfile for DcpData {
    type Entry = DcpLookTableElement;
    type Sample = DcpToneCurveElement;

    fn name(&self) -> &str {
        &self.profile_name
    }

    fn set_name(&mut self, name: String) {
        self.profile_name = name;
    }

    fn lookup_table(&self) -> &[DcpLookTableElement] {
        match &self.look_table {
            Some(table) => table.elements.as_slice(),
            None => &[],
        }
    }

    fn lookup_table_mut(&mut self) -> &mut [DcpLookTableElement] {
        match &mut self.look_table {
            Some(table) => table.elements.as_mut_slice(),
            None => &mut [],
        }
    }

    fn tone_curve(&self) -> &[DcpToneCurveElement] {
        match &self.tone_curve {
            Some(curve) => curve.elements.as_slice(),
            None => &[],
        }
    }

    // Size follows the element count so the written curve stays consistent.
    fn set_tone_curve(&mut self, curve: Vec<DcpToneCurveElement>) {
        match &mut self.tone_curve {
            Some(tc) => {
                tc.size = curve.len();
                tc.elements = curve;
            }
            None if curve.is_empty() => {}
            None => {
                self.tone_curve = Some(DcpToneCurve {
                    size: curve.len(),
                    elements: curve,
                });
            }
        }
    }
}

impl ProfileCodec for DcpData {
    const FORMAT: &'static str = "dcp";

    fn decode(text: &str) -> ProfileResult<Self> {
        if text.trim().is_empty() {
            return Err(ProfileError::MissingInput("input"));
        }
        Ok(quick_xml::de::from_str(text)?)
    }

    fn encode(&self) -> ProfileResult<String> {
        let mut buffer = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut buffer);
        ser.indent(' ', 2);
        self.serialize(ser)?;
        Ok(buffer)
    }
}
