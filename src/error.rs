use thiserror::Error;
use trellis_layout::LayoutError;

/// Errors surfaced by document loading and layout.
#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
