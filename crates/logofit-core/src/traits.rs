//! The seams between the stages
//!
//! - [`FontRef`] - raw face data the measurer and renderer both read
//! - [`TextMeasurer`] - ink extents of a string at a given size
//! - [`Renderer`] - draws fitted text onto a canvas
//! - [`Exporter`] - encodes the canvas into file bytes

use crate::{
    error::Result,
    types::{BitmapData, FitResult, RenderRequest, TextExtents},
    Color,
};

/// A loaded font face
///
/// Implementations keep the whole font file in memory; `face_index`
/// selects the face inside a TTC/OTC collection.
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Face inside a collection (0 for single-face files)
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's design grid size
    fn units_per_em(&self) -> u16;

    /// Family name the face was resolved under
    fn family_name(&self) -> &str;
}

/// Measures the visible ink of a string
///
/// Extents follow the cairo convention: y grows downwards and the
/// bearings are relative to the left end of the baseline.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextExtents>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextExtents> {
        (**self).measure(text, font_size)
    }
}

/// Where fitted text becomes pixels
pub trait Renderer: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Draw `request.text` at the fitted size and origin onto a transparent
    /// canvas of exactly `request.canvas_width` x `request.canvas_height`.
    fn render(
        &self,
        font: &dyn FontRef,
        request: &RenderRequest,
        fit: &FitResult,
        foreground: Color,
    ) -> Result<BitmapData>;
}

/// The final step: pixels become file bytes
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encode the canvas
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}
