// Host-side tests for frame layer sizing.

use gallery_core::aspect::{fit, texture_ratio, FrameAsset};
use gallery_core::{BASE_PHOTO_SIZE, FRAME_WIDTH_FACTOR, OUTER_PADDING, PHOTO_OVERSCAN};
use glam::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn square_image_keeps_base_height() {
    let sizes = fit(1.0);
    assert!(approx(sizes.mat.y, BASE_PHOTO_SIZE));
    assert!(approx(sizes.mat.x, BASE_PHOTO_SIZE));
    assert!(approx(sizes.photo.x, BASE_PHOTO_SIZE));
    // Photo layer is overscanned vertically only
    assert!(approx(sizes.photo.y, BASE_PHOTO_SIZE * PHOTO_OVERSCAN));
}

#[test]
fn landscape_scales_width() {
    let sizes = fit(1.5);
    assert!(approx(sizes.mat.y, BASE_PHOTO_SIZE));
    assert!(approx(sizes.mat.x, BASE_PHOTO_SIZE * 1.5));
}

#[test]
fn portrait_keeps_base_width() {
    let sizes = fit(0.8);
    assert!(approx(sizes.photo.x, BASE_PHOTO_SIZE));
    assert!(approx(sizes.mat.y, BASE_PHOTO_SIZE / 0.8));
    assert!(approx(sizes.photo.y, BASE_PHOTO_SIZE / 0.8 * PHOTO_OVERSCAN));
}

#[test]
fn extreme_ratios_are_clamped() {
    assert_eq!(fit(0.3), fit(0.6));
    assert_eq!(fit(0.0001), fit(0.6));
    assert_eq!(fit(3.0), fit(1.6));
    assert_eq!(fit(100.0), fit(1.6));
}

#[test]
fn outer_frame_is_narrowed() {
    let sizes = fit(1.2);
    assert!(approx(
        sizes.outer.x,
        (sizes.mat.x + OUTER_PADDING) * FRAME_WIDTH_FACTOR
    ));
    assert!(approx(sizes.outer.y, sizes.mat.y + OUTER_PADDING));
    assert!(sizes.outer.x < sizes.outer.y);
}

#[test]
fn fit_is_deterministic_over_range() {
    let mut r = 0.6_f32;
    while r <= 1.6 {
        assert_eq!(fit(r), fit(r), "ratio {}", r);
        r += 0.05;
    }
}

#[test]
fn texture_ratio_rejects_degenerate_sizes() {
    assert_eq!(texture_ratio(800, 600), Some(800.0 / 600.0));
    assert_eq!(texture_ratio(800, 0), None);
    assert_eq!(texture_ratio(0, 600), None);
    assert_eq!(texture_ratio(0, 0), None);
}

#[test]
fn frame_asset_normalizes_to_unit_side() {
    let asset = FrameAsset::normalized(
        "models/frame.glb",
        Vec3::new(-1.0, -2.0, -0.1),
        Vec3::new(3.0, 2.0, 0.1),
    );
    assert!(approx(asset.scale, 0.25));
    assert_eq!(asset.offset, Vec3::new(-1.0, 0.0, 0.0));
}
