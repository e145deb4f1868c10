//! Bounds of the decorative frame model.
//!
//! The model ships as binary glTF. Only the JSON chunk is read: every
//! `POSITION` accessor carries its own `min`/`max`, and their union is the
//! model's bounding box in mesh space.

use crate::aspect::FrameAsset;
use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not a binary glTF file")]
    NotGlb,
    #[error("truncated model ({0} bytes)")]
    Truncated(usize),
    #[error("first chunk is not JSON")]
    MissingJson,
    #[error("model has no position bounds")]
    NoBounds,
    #[error("malformed model json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    accessors: Vec<Accessor>,
    #[serde(default)]
    meshes: Vec<Mesh>,
}

#[derive(Deserialize)]
struct Accessor {
    min: Option<Vec<f32>>,
    max: Option<Vec<f32>>,
}

#[derive(Deserialize)]
struct Mesh {
    #[serde(default)]
    primitives: Vec<Primitive>,
}

#[derive(Deserialize)]
struct Primitive {
    #[serde(default)]
    attributes: std::collections::HashMap<String, usize>,
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let raw = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn vec3(values: &[f32]) -> Option<Vec3> {
    match values {
        [x, y, z, ..] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

/// Axis-aligned bounds of every mesh position in a `.glb` file.
pub fn glb_bounds(bytes: &[u8]) -> Result<(Vec3, Vec3), ModelError> {
    if read_u32(bytes, 0) != Some(GLB_MAGIC) {
        return Err(ModelError::NotGlb);
    }
    let json_len =
        read_u32(bytes, HEADER_LEN).ok_or(ModelError::Truncated(bytes.len()))? as usize;
    if read_u32(bytes, HEADER_LEN + 4) != Some(CHUNK_JSON) {
        return Err(ModelError::MissingJson);
    }
    let start = HEADER_LEN + CHUNK_HEADER_LEN;
    let json = start
        .checked_add(json_len)
        .and_then(|end| bytes.get(start..end))
        .ok_or(ModelError::Truncated(bytes.len()))?;
    let doc: Document = serde_json::from_slice(json)?;

    let mut bounds: Option<(Vec3, Vec3)> = None;
    let positions = doc
        .meshes
        .iter()
        .flat_map(|m| m.primitives.iter())
        .filter_map(|p| p.attributes.get("POSITION"))
        .filter_map(|&i| doc.accessors.get(i));
    for accessor in positions {
        let (Some(min), Some(max)) = (
            accessor.min.as_deref().and_then(vec3),
            accessor.max.as_deref().and_then(vec3),
        ) else {
            continue;
        };
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(min), hi.max(max)),
            None => (min, max),
        });
    }
    bounds.ok_or(ModelError::NoBounds)
}

/// Read a frame model and normalize it for hanging.
pub fn frame_asset_from_glb(source: &str, bytes: &[u8]) -> Result<FrameAsset, ModelError> {
    let (min, max) = glb_bounds(bytes)?;
    log::debug!("[model] {} bounds {:?}..{:?}", source, min, max);
    Ok(FrameAsset::normalized(source, min, max))
}
