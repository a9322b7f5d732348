//! Error types for theme storage and document access.

use thiserror::Error;

/// Errors raised by a [`PreferenceStore`](crate::storage::PreferenceStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store does not exist in this environment
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// I/O error reading or writing a preference file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file is not a JSON object of strings
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend rejected the operation (e.g. quota exceeded)
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Errors raised by a [`ThemeSurface`](crate::surface::ThemeSurface) backend.
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// No document or root element to write to
    #[error("Document unavailable: {0}")]
    Unavailable(String),

    /// The document rejected the operation
    #[error("Document error: {0}")]
    Backend(String),
}

/// Errors returned by [`ThemeController`](crate::controller::ThemeController).
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
