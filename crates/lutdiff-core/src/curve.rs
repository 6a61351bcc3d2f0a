//! Tone curve samples and exclusion filtering.
//!
//! A tone curve maps an input level `H` to an output level `V`. Callers can
//! exclude specific samples from a diff by listing their exact coordinates;
//! [`filter`] drops every sample whose `(H, V)` pair equals one of them.
//!
//! Exclusions are usually given on the command line as `"H,V"` literals,
//! which [`TonePoint`] parses via [`FromStr`]:
//!
//! ```rust
//! use lutdiff_core::TonePoint;
//!
//! let p: TonePoint = "0.25, 0.3".parse().unwrap();
//! assert_eq!(p, TonePoint::new(0.25, 0.3));
//! assert!("0.25".parse::<TonePoint>().is_err());
//! ```

use crate::{ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

/// A tone curve coordinate pair.
///
/// Serializes as a two element array `[H, V]`, the layout used by the flat
/// JSON profile's `ProfileToneCurve`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct TonePoint {
    /// Input level.
    pub h: f64,
    /// Output level.
    pub v: f64,
}

impl TonePoint {
    /// Creates a point from input and output levels.
    #[inline]
    pub const fn new(h: f64, v: f64) -> Self {
        Self { h, v }
    }

    /// Returns the step from `self` to `target`, computed as `(-self) + target`.
    #[inline]
    pub fn delta_to(&self, target: &TonePoint) -> TonePoint {
        TonePoint {
            h: -self.h + target.h,
            v: -self.v + target.v,
        }
    }
}

impl From<[f64; 2]> for TonePoint {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<TonePoint> for [f64; 2] {
    fn from(p: TonePoint) -> Self {
        [p.h, p.v]
    }
}

impl FromStr for TonePoint {
    type Err = ProfileError;

    fn from_str(s: &str) -> ProfileResult<Self> {
        let invalid = || ProfileError::InvalidExclusion(s.to_string());
        let (h, v) = s.split_once(',').ok_or_else(invalid)?;
        let h = h.trim().parse::<f64>().map_err(|_| invalid())?;
        let v = v.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(h, v))
    }
}

/// A tone curve sample of some document model.
pub trait ToneSample: Clone {
    /// Reads the sample's coordinates.
    fn point(&self) -> TonePoint;

    /// Stores new coordinates for the sample at curve position `index`.
    ///
    /// Formats that number their samples record `index` as well.
    fn set_point(&mut self, index: usize, point: TonePoint);
}

impl ToneSample for TonePoint {
    #[inline]
    fn point(&self) -> TonePoint {
        *self
    }

    #[inline]
    fn set_point(&mut self, _index: usize, point: TonePoint) {
        *self = point;
    }
}

/// Returns the samples of `curve` not listed in `exclusions`, in order.
///
/// A sample is dropped when both coordinates compare equal (`==`) to some
/// exclusion pair. The input is left untouched.
pub fn filter<S: ToneSample>(curve: &[S], exclusions: &[TonePoint]) -> Vec<S> {
    curve
        .iter()
        .filter(|sample| {
            let p = sample.point();
            let excluded = exclusions.iter().any(|e| p.h == e.h && p.v == e.v);
            if excluded {
                trace!(h = p.h, v = p.v, "tone curve sample excluded");
            }
            !excluded
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[(f64, f64)]) -> Vec<TonePoint> {
        points.iter().map(|&(h, v)| TonePoint::new(h, v)).collect()
    }

    #[test]
    fn test_filter_exact_match() {
        let c = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let out = filter(&c, &[TonePoint::new(1.0, 1.0)]);
        assert_eq!(out, curve(&[(0.0, 0.0), (2.0, 2.0)]));
        // Input untouched
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_filter_needs_both_coordinates() {
        let c = curve(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]);
        // Matches only on H or only on V: nothing is dropped
        let out = filter(&c, &[TonePoint::new(1.0, 1.0)]);
        assert_eq!(out, c);
    }

    #[test]
    fn test_filter_multiple_and_empty() {
        let c = curve(&[(0.0, 0.0), (0.5, 0.4), (1.0, 1.0)]);
        let out = filter(&c, &[TonePoint::new(0.0, 0.0), TonePoint::new(1.0, 1.0)]);
        assert_eq!(out, curve(&[(0.5, 0.4)]));

        assert_eq!(filter(&c, &[]), c);
        assert!(filter::<TonePoint>(&[], &[TonePoint::new(0.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!("1,2".parse::<TonePoint>().unwrap(), TonePoint::new(1.0, 2.0));
        assert_eq!(" 0.5 , -0.25 ".parse::<TonePoint>().unwrap(), TonePoint::new(0.5, -0.25));
        assert_eq!("1e-3,0".parse::<TonePoint>().unwrap(), TonePoint::new(0.001, 0.0));

        for bad in ["", "1", "1;2", "a,b", "1,2,3", ",1"] {
            match bad.parse::<TonePoint>() {
                Err(ProfileError::InvalidExclusion(s)) => assert_eq!(s, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_layout() {
        let p: TonePoint = serde_json::from_str("[0.25, 0.5]").unwrap();
        assert_eq!(p, TonePoint::new(0.25, 0.5));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[0.25,0.5]");
    }
}
