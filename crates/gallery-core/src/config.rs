//! Per-museum configuration document.
//!
//! ```json
//! { "layout": "default",
//!   "photos": [ { "image": "https://.../a.jpg", "caption": "Sunset" } ] }
//! ```
//!
//! Parsing is lenient the same way the gallery page has always been: a
//! missing or non-array `photos` means no photos, a missing or empty `layout`
//! means the default museum and a broken photo entry keeps its position with
//! an empty image and caption.

use crate::constants::{ASSET_BASE_URL, DEFAULT_LAYOUT_ID};
use crate::layout::LayoutKind;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no museum id in the page address")]
    MissingMuseumId,
    #[error("no gallery config file given")]
    NoConfigFile,
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed gallery config: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PhotoEntry {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl PhotoEntry {
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            caption: Some(caption.into()),
        }
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }

    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub photos: Vec<PhotoEntry>,
    pub layout: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            layout: DEFAULT_LAYOUT_ID.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let doc: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&doc))
    }

    pub fn from_value(doc: &Value) -> Self {
        let photos = doc
            .get("photos")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| PhotoEntry::deserialize(e).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();
        let layout = doc
            .get("layout")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LAYOUT_ID)
            .to_string();
        Self { photos, layout }
    }

    pub fn layout_kind(&self) -> LayoutKind {
        LayoutKind::from_id(&self.layout)
    }
}

/// Asset folder of one museum.
pub fn museum_folder_url(museum_id: &str) -> String {
    format!("{}/{}", ASSET_BASE_URL, museum_id)
}

pub fn config_url(museum_id: &str) -> String {
    format!("{}/config.json", museum_folder_url(museum_id))
}

/// Validate the `id` query parameter.
pub fn museum_id(query_value: Option<&str>) -> Result<&str, ConfigError> {
    query_value
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ConfigError::MissingMuseumId)
}
