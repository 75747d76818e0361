use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::common::generate_uuid_v7;

const BASE64_MARKER: &str = "base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    /// Image picked from the local file system.
    Image,
    /// Still frame grabbed from the live camera preview.
    Camera,
}

impl InputKind {
    pub fn is_image(&self) -> bool {
        matches!(self, InputKind::Image | InputKind::Camera)
    }
}

/// One entry of the meal description. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodInput {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Free text, or base64 image data with an optional data-URI prefix.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<String>,
}

impl FoodInput {
    pub fn text(name: String, portion: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            kind: InputKind::Text,
            value: name,
            portion: portion.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn image(kind: InputKind, base64: String) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            kind,
            value: base64,
            portion: None,
        }
    }

    /// Raw base64 payload with any `data:<mime>;base64,` prefix stripped.
    pub fn image_payload(&self) -> &str {
        match self.value.split_once(BASE64_MARKER) {
            Some((_, payload)) => payload,
            None => &self.value,
        }
    }
}

/// Wraps raw image file bytes as `data:<mime>;base64,...`, with the MIME type
/// sniffed from the file's magic bytes.
pub fn image_data_url(bytes: &[u8]) -> Result<String, FoodInputError> {
    let format = image::guess_format(bytes)
        .map_err(|e| FoodInputError::UnsupportedImage(e.to_string()))?;

    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        general_purpose::STANDARD.encode(bytes)
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodInputError {
    #[error("Too many food inputs, at most {max} are allowed")]
    TooManyInputs { max: usize },

    #[error("Unsupported image file: {0}")]
    UnsupportedImage(String),
}
