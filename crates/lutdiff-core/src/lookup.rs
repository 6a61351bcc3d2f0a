//! Hue/saturation/value look table rows.
//!
//! Both profile formats store the look table as a flat list of grid cells.
//! Each cell names its position in the hue/sat/val grid and carries a hue
//! shift plus saturation and value scale factors. [`LookupRow`] is the
//! format-independent value of one cell; [`LookupEntry`] lets each document
//! model expose its own element type as a row.

use serde::{Deserialize, Serialize};

/// One cell of a hue/sat/val look table.
///
/// Serializes with the flat JSON profile's key names
/// (`HueDiv`, `SatDiv`, `ValDiv`, `HueShift`, `SatScale`, `ValScale`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LookupRow {
    /// Hue division index.
    pub hue_div: i32,
    /// Saturation division index.
    pub sat_div: i32,
    /// Value division index.
    pub val_div: i32,
    /// Hue shift in degrees.
    pub hue_shift: f64,
    /// Saturation scale factor.
    pub sat_scale: f64,
    /// Value scale factor.
    pub val_scale: f64,
}

impl LookupRow {
    /// Returns the element-wise step from `self` to `target`.
    ///
    /// Every field is computed as `(-self) + target`, so applying the result
    /// to this row yields the target row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutdiff_core::LookupRow;
    ///
    /// let start = LookupRow { hue_shift: 1.0, ..Default::default() };
    /// let target = LookupRow { hue_shift: 3.0, ..Default::default() };
    /// assert_eq!(start.delta_to(&target).hue_shift, 2.0);
    /// ```
    pub fn delta_to(&self, target: &LookupRow) -> LookupRow {
        LookupRow {
            hue_div: -self.hue_div + target.hue_div,
            sat_div: -self.sat_div + target.sat_div,
            val_div: -self.val_div + target.val_div,
            hue_shift: -self.hue_shift + target.hue_shift,
            sat_scale: -self.sat_scale + target.sat_scale,
            val_scale: -self.val_scale + target.val_scale,
        }
    }
}

/// A look table element of some document model.
pub trait LookupEntry {
    /// Reads the six numeric fields.
    fn row(&self) -> LookupRow;

    /// Overwrites the six numeric fields.
    fn set_row(&mut self, row: LookupRow);
}

impl LookupEntry for LookupRow {
    #[inline]
    fn row(&self) -> LookupRow {
        *self
    }

    #[inline]
    fn set_row(&mut self, row: LookupRow) {
        *self = row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign() {
        let start = LookupRow {
            hue_div: 2,
            sat_div: 1,
            val_div: 0,
            hue_shift: 1.0,
            sat_scale: 1.0,
            val_scale: 0.5,
        };
        let target = LookupRow {
            hue_div: 2,
            sat_div: 1,
            val_div: 0,
            hue_shift: 3.0,
            sat_scale: 0.25,
            val_scale: 1.0,
        };

        let d = start.delta_to(&target);
        assert_eq!(d.hue_div, 0);
        assert_eq!(d.hue_shift, 2.0);
        assert_eq!(d.sat_scale, -0.75);
        assert_eq!(d.val_scale, 0.5);

        // Reverse direction flips the sign
        assert_eq!(target.delta_to(&start).hue_shift, -2.0);
    }

    #[test]
    fn test_json_keys() {
        let row: LookupRow = serde_json::from_str(
            r#"{"HueDiv":3,"SatDiv":4,"ValDiv":0,"HueShift":-1.5,"SatScale":1.1,"ValScale":0.9}"#,
        )
        .unwrap();
        assert_eq!(row.hue_div, 3);
        assert_eq!(row.sat_div, 4);
        assert_eq!(row.hue_shift, -1.5);

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"HueShift\":-1.5"));
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let row: LookupRow = serde_json::from_str(r#"{"HueShift":2.0}"#).unwrap();
        assert_eq!(row.hue_div, 0);
        assert_eq!(row.sat_scale, 0.0);
        assert_eq!(row.hue_shift, 2.0);
    }
}
