//! Canvas to file
//!
//! [`PngExporter`] encodes the straight-alpha canvas as RGBA PNG, and
//! [`write_atomic`] puts the bytes on disk so that a reader sees either the
//! complete image or nothing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageEncoder, RgbaImage};

use logofit_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

/// Encode an RGBA canvas to PNG bytes
pub fn encode_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    let expected = bitmap.width as usize * bitmap.height as usize * 4;
    if bitmap.data.len() != expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer size mismatch: expected {} bytes for {}x{} RGBA, got {}",
            expected,
            bitmap.width,
            bitmap.height,
            bitmap.data.len()
        ))
        .into());
    }

    let img: RgbaImage = ImageBuffer::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
        .ok_or_else(|| ExportError::EncodingFailed("Failed to create image buffer".into()))?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Adaptive,
    );

    encoder
        .write_image(
            img.as_raw(),
            bitmap.width,
            bitmap.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for rendered logos
///
/// ```
/// use logofit_core::Exporter;
/// use logofit_export::PngExporter;
///
/// let exporter = PngExporter::new();
/// assert_eq!(exporter.extension(), "png");
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

/// Write `bytes` to `path`, replacing any existing file in one step.
///
/// The data goes to a hidden sibling first and is renamed into place, so a
/// failure part way through never leaves a truncated image behind.
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let tmp = temp_sibling(path)?;

    let written = fs::File::create(&tmp).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        ExportError::WriteFailed(format!("'{}' does not name a file", path.display()))
    })?;

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}
