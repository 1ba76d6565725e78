use serde::{Deserialize, Serialize};

pub const CAMERA_DENIED_MESSAGE: &str =
    "Unable to access camera. Please ensure you have granted camera permissions.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    #[error("Please select an image file ({name} is {mime})")]
    InvalidFileType { name: String, mime: String },
    #[error("{0}")]
    CameraAccessDenied(String),
}

impl CaptureError {
    pub fn camera_denied() -> Self {
        CaptureError::CameraAccessDenied(CAMERA_DENIED_MESSAGE.to_string())
    }
}

/// Advisory failure produced by the classification simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct AnalysisError {
    pub message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No image selected for analysis.")]
    NoImageSelected,
    #[error("There is no failed analysis to retry.")]
    NothingToRetry,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
