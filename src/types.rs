// Core types for apscan

// Error types
#[derive(Debug, thiserror::Error)]
pub enum ApscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("confidence {0} out of range, expected 0-100")]
    InvalidConfidence(f32),

    #[error("mark {0} out of range, expected 0-100")]
    InvalidMark(u8),
}

pub type Result<T> = std::result::Result<T, ApscanError>;
