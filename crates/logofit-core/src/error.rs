//! Error types for logofit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogofitError>;

/// Main error type for logofit
#[derive(Debug, Error)]
pub enum LogofitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Font resolution failed: {0}")]
    FontResolution(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogofitError {
    /// Shorthand for [`LogofitError::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for errors the caller caused with bad parameters
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// True when the requested font could not be found or loaded
    pub fn is_font_resolution(&self) -> bool {
        matches!(self, Self::FontResolution(_))
    }
}

/// Font lookup and loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font family not available: {0}")]
    FamilyNotFound(String),

    #[error("Font data unavailable for face: {0}")]
    DataUnavailable(String),
}

/// Measuring and drawing errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid font")]
    InvalidFont,

    #[error("Outline extraction failed for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Path building failed")]
    PathBuildingFailed,

    #[error("Pixmap creation failed")]
    PixmapCreationFailed,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
