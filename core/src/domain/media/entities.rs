use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Model,
}

impl MediaKind {
    /// Extension used when the uploaded filename carries none.
    pub fn default_extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Model => "glb",
        }
    }

    pub fn default_content_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Model => "model/gltf-binary",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Model => write!(f, "model"),
        }
    }
}

/// A file part received from an admin form, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMedia {
    /// Backend-relative location, `<slug>/<file>`.
    pub key: String,
    /// Public URL stored on the item.
    pub url: String,
}
