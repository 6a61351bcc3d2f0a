//! Correction profiles over dcpTool XML documents.

use approx::assert_abs_diff_eq;
use lutdiff_core::{
    ColorProfile, DcpData, DiffOptions, ProfileCodec, ProfileError, TonePoint, diff, read_profile,
    write_profile,
};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> DcpData {
    read_profile(fixture_path(name)).expect("read fixture")
}

#[test]
fn look_table_and_name() {
    let start = load("start.xml");
    let target = load("target.xml");
    let opts = DiffOptions::new().skip_tone_curve(true);

    let result = diff(&start, &target, &opts).unwrap();
    assert_eq!(result.profile_name, "Correct Camera Neutral to Camera Vivid");

    let lt = result.look_table.as_ref().unwrap();
    assert_eq!((lt.hue_divisions, lt.sat_divisions, lt.val_divisions), (2, 2, 1));
    assert_eq!(lt.elements.len(), 4);
    assert_eq!(lt.elements[1].hue_div, 0);
    assert_abs_diff_eq!(lt.elements[1].hue_shift, 2.0);
    assert_abs_diff_eq!(lt.elements[1].sat_scale, -0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(lt.elements[2].val_scale, -0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(lt.elements[3].hue_shift, 1.0);
}

#[test]
fn skip_keeps_start_tone_curve() {
    let start = load("start.xml");
    let target = load("target.xml");

    // Curves differ in length; skipping avoids the mismatch entirely
    let result = diff(&start, &target, &DiffOptions::new().skip_tone_curve(true)).unwrap();
    assert_eq!(result.tone_curve, start.tone_curve);
}

#[test]
fn tone_curve_mismatch_without_skip() {
    let start = load("start.xml");
    let target = load("target.xml");

    let err = diff(&start, &target, &DiffOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        ProfileError::ToneCurveLengthMismatch { start: 4, target: 5 }
    ));
}

#[test]
fn filtered_samples_are_renumbered() {
    let start = load("start.xml");
    let target = load("target.xml");
    let opts = DiffOptions::new().ignore_all([
        TonePoint::new(0.0, 0.0),
        TonePoint::new(1.0, 1.0),
        TonePoint::new(0.75, 0.8),
    ]);

    let result = diff(&start, &target, &opts).unwrap();
    let tc = result.tone_curve.as_ref().unwrap();
    assert_eq!(tc.size, 2);
    assert_eq!(tc.elements.len(), 2);

    assert_eq!(tc.elements[0].n, 0);
    assert_abs_diff_eq!(tc.elements[0].h, 0.0);
    assert_abs_diff_eq!(tc.elements[0].v, -0.05, epsilon = 1e-12);

    assert_eq!(tc.elements[1].n, 1);
    assert_abs_diff_eq!(tc.elements[1].v, -0.05, epsilon = 1e-12);
}

#[test]
fn look_table_length_mismatch() {
    let start = load("start.xml");
    let short = load("short.xml");

    let err = diff(&start, &short, &DiffOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        ProfileError::LookupTableLengthMismatch { start: 4, target: 1 }
    ));
}

#[test]
fn matrices_and_metadata_come_from_start() {
    let start = load("start.xml");
    let target = load("target.xml");

    let result = diff(&start, &target, &DiffOptions::new().skip_tone_curve(true)).unwrap();
    assert_eq!(result.color_matrix1, start.color_matrix1);
    assert_eq!(result.forward_matrix1, start.forward_matrix1);
    assert_eq!(result.reduction_matrix1, start.reduction_matrix1);
    assert_eq!(result.copyright.as_deref(), Some("Copyright 2021 Example"));
    assert_eq!(result.embed_policy.as_deref(), Some("Allow copying"));
    assert_eq!(result.default_black_render.as_deref(), Some("Auto"));
    assert_eq!(result.baseline_exposure_offset.as_deref(), Some("0"));
    assert_eq!(
        result.unique_camera_model_restriction.as_deref(),
        Some("Fujifilm X-T4")
    );
}

#[test]
fn inputs_are_not_modified() {
    let start = load("start.xml");
    let target = load("target.xml");
    let (start_before, target_before) = (start.clone(), target.clone());

    let opts = DiffOptions::new().ignore(TonePoint::new(0.75, 0.8));
    let result = diff(&start, &target, &opts).unwrap();
    assert_eq!(result.tone_curve().len(), 4);

    assert_eq!(start, start_before);
    assert_eq!(target, target_before);
}

#[test]
fn fixture_roundtrip() {
    for name in ["start.xml", "target.xml", "short.xml"] {
        let doc = load(name);
        let text = doc.encode().unwrap();
        assert_eq!(DcpData::decode(&text).unwrap(), doc, "{name}");
    }
}

#[test]
fn result_written_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("correction.xml");

    let start = load("start.xml");
    let target = load("target.xml");
    let opts = DiffOptions::new().ignore(TonePoint::new(0.75, 0.8));
    let result = diff(&start, &target, &opts).unwrap();

    write_profile(&path, &result).unwrap();
    let back: DcpData = read_profile(&path).unwrap();
    assert_eq!(back, result);
}
