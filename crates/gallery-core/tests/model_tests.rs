// Host-side tests for reading frame model bounds out of binary glTF.

use gallery_core::frame_asset_from_glb;
use gallery_core::model::{glb_bounds, ModelError};
use glam::Vec3;

fn glb(json: &str) -> Vec<u8> {
    let mut body = json.as_bytes().to_vec();
    while body.len() % 4 != 0 {
        body.push(b' ');
    }
    let total = 12 + 8 + body.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&body);
    out
}

#[test]
fn bounds_union_over_position_accessors() {
    let bytes = glb(
        r#"{
        "accessors": [
            { "min": [-1.0, -2.0, -0.1], "max": [1.0, 2.0, 0.1] },
            { "min": [0.0, 0.0], "max": [1.0, 1.0] },
            { "min": [-3.0, 0.0, 0.0], "max": [0.0, 4.0, 0.5] }
        ],
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0, "TEXCOORD_0": 1 } } ] },
            { "primitives": [ { "attributes": { "POSITION": 2 } } ] }
        ]
    }"#,
    );
    let (min, max) = glb_bounds(&bytes).unwrap();
    assert_eq!(min, Vec3::new(-3.0, -2.0, -0.1));
    assert_eq!(max, Vec3::new(1.0, 4.0, 0.5));
}

#[test]
fn asset_is_normalized_to_unit_side() {
    let bytes = glb(
        r#"{ "accessors": [ { "min": [0, 0, 0], "max": [4, 2, 1] } ],
             "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ] }"#,
    );
    let asset = frame_asset_from_glb("models/frame.glb", &bytes).unwrap();
    assert_eq!(asset.source, "models/frame.glb");
    assert!((asset.scale - 0.25).abs() < 1e-6);
    assert_eq!(asset.offset, Vec3::new(-2.0, -1.0, -0.5));
}

#[test]
fn rejects_non_glb_and_truncated_files() {
    assert!(matches!(glb_bounds(b"PK\x03\x04"), Err(ModelError::NotGlb)));
    let mut bytes = glb(r#"{ "accessors": [] }"#);
    bytes.truncate(22);
    assert!(matches!(glb_bounds(&bytes), Err(ModelError::Truncated(22))));
}

#[test]
fn model_without_positions_has_no_bounds() {
    let bytes = glb(r#"{ "meshes": [ { "primitives": [ { "attributes": {} } ] } ] }"#);
    assert!(matches!(glb_bounds(&bytes), Err(ModelError::NoBounds)));
}
