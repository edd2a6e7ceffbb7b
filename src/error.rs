//! Error type shared by the pure core and the macOS layer.
//!
//! Nothing in the app is fatal: callers at the platform boundary log these
//! and carry on with whatever in-memory state they still have.

use thiserror::Error;

/// Every failure the app knows how to report.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("application data directory is unavailable")]
    DataDirUnavailable,

    #[error("image data is not PNG")]
    NotPng,

    #[error("image file not found: {0}")]
    ImageNotFound(String),

    #[error("event tap could not be created: {0}")]
    EventTap(String),

    #[error("pasteboard error: {0}")]
    Pasteboard(String),

    #[error("launch at login failed: {0}")]
    LaunchAtLogin(String),
}

pub type Result<T> = std::result::Result<T, ClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }
        assert!(matches!(read_missing(), Err(ClipError::Io(_))));
    }

    #[test]
    fn display_includes_context() {
        let err = ClipError::ImageNotFound("abc.png".into());
        assert_eq!(err.to_string(), "image file not found: abc.png");
    }
}
