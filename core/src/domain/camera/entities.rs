use thiserror::Error;

use crate::domain::food_input::entities::FoodInputError;

/// JPEG quality used for captured stills.
pub const JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Unable to access camera. Please ensure permissions are granted.")]
    PermissionDenied,

    #[error("Camera unavailable: {0}")]
    Unavailable(String),

    #[error("Camera is not streaming")]
    NotStreaming,

    #[error("Invalid video frame: {0}")]
    InvalidFrame(String),

    #[error("Failed to encode frame: {0}")]
    Encoding(String),

    #[error(transparent)]
    InputRejected(#[from] FoodInputError),
}

/// Observable state of the capture flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraState {
    Closed,
    Requesting,
    Streaming,
    Denied(CameraError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    User,
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConstraints {
    pub facing_mode: FacingMode,
}

impl MediaConstraints {
    pub fn rear_camera() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
        }
    }
}

/// One decoded video frame, tightly packed RGB8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}
