//! logofit - a line of text, as large as the canvas allows, centered
//!
//! The stages:
//! 1. Validate the [`RenderRequest`]
//! 2. Resolve the font family (bold by default) from the [`FontDatabase`]
//! 3. Shrink the font size until the ink box fits ([`fit::fit_text`])
//! 4. Draw onto a transparent canvas ([`SkiaRenderer`])
//! 5. Encode as PNG and, if asked, write the file in one step
//!
//! ```no_run
//! use logofit::{RenderRequest, TextFitRenderer};
//!
//! let renderer = TextFitRenderer::with_system_fonts();
//! let request = RenderRequest::new("Pi-X", "DejaVu Sans Mono", 500, 100);
//! let fit = renderer.render_to_file(&request, "logo.png")?;
//! println!("drawn at {}px", fit.chosen_font_size);
//! # Ok::<(), logofit::LogofitError>(())
//! ```

use std::path::Path;

pub use logofit_core::{
    error::{self, LogofitError, Result},
    fit,
    types::{BitmapData, FitResult, RenderRequest, TextExtents},
    Color, Exporter, FitOptions, FitStrategy, FontRef, Renderer, TextMeasurer,
};
pub use logofit_export::{write_atomic, PngExporter};
pub use logofit_fontdb::{Font, FontDatabase};
pub use logofit_render_skia::SkiaRenderer;

/// Everything one render produced
#[derive(Debug, Clone)]
pub struct RenderedLogo {
    pub fit: FitResult,
    pub bitmap: BitmapData,
    /// Encoded image
    pub bytes: Vec<u8>,
}

/// Fits, draws and encodes text for a fixed set of fonts and options
pub struct TextFitRenderer {
    fonts: FontDatabase,
    options: FitOptions,
    renderer: Box<dyn Renderer>,
    exporter: Box<dyn Exporter>,
}

impl TextFitRenderer {
    pub fn new(fonts: FontDatabase, options: FitOptions) -> Self {
        Self {
            fonts,
            options,
            renderer: Box::new(SkiaRenderer::new()),
            exporter: Box::new(PngExporter::new()),
        }
    }

    /// Host fonts and environment-configured options
    pub fn with_system_fonts() -> Self {
        Self::new(FontDatabase::system(), FitOptions::from_env())
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_exporter(mut self, exporter: Box<dyn Exporter>) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut FitOptions {
        &mut self.options
    }

    pub fn fonts(&self) -> &FontDatabase {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontDatabase {
        &mut self.fonts
    }

    /// Checks the request and options, then resolves the font
    fn prepare(&self, request: &RenderRequest) -> Result<Font> {
        request.validate()?;
        self.options.validate()?;
        self.fonts.resolve(&request.font_family, self.options.weight)
    }

    /// Size and origin only, nothing is drawn
    pub fn fit(&self, request: &RenderRequest) -> Result<FitResult> {
        let font = self.prepare(request)?;
        fit::fit_text(
            &font,
            &request.text,
            request.canvas_width,
            request.canvas_height,
            &self.options,
        )
    }

    /// Fit, draw and encode in memory
    pub fn render(&self, request: &RenderRequest) -> Result<RenderedLogo> {
        let font = self.prepare(request)?;
        let fit = fit::fit_text(
            &font,
            &request.text,
            request.canvas_width,
            request.canvas_height,
            &self.options,
        )?;

        log::debug!("Rendering with backend: {}", self.renderer.name());
        let bitmap = self
            .renderer
            .render(&font, request, &fit, self.options.foreground)?;

        log::debug!("Exporting with backend: {}", self.exporter.name());
        let bytes = self.exporter.export(&bitmap)?;

        Ok(RenderedLogo { fit, bitmap, bytes })
    }

    /// Render and write the image to `path`.
    ///
    /// On any error no file is created or replaced.
    pub fn render_to_file(&self, request: &RenderRequest, path: impl AsRef<Path>) -> Result<FitResult> {
        let path = path.as_ref();
        let logo = self.render(request)?;
        write_atomic(path, &logo.bytes)?;
        log::info!(
            "Wrote {}x{} {} to {}",
            logo.bitmap.width,
            logo.bitmap.height,
            self.exporter.extension(),
            path.display()
        );
        Ok(logo.fit)
    }
}

/// One-shot render with host fonts and default options, returning PNG bytes
pub fn render(text: &str, font_family: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    let request = RenderRequest::new(text, font_family, width, height);
    // Validate before paying for the system font scan
    request.validate()?;
    Ok(TextFitRenderer::with_system_fonts().render(&request)?.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_renderer() -> TextFitRenderer {
        TextFitRenderer::new(FontDatabase::empty(), FitOptions::default())
    }

    #[test]
    fn invalid_input_checked_before_font_lookup() {
        // The database is empty, so a lookup would be a font error instead
        let renderer = empty_renderer();
        let err = renderer
            .render(&RenderRequest::new("", "Anything", 500, 100))
            .unwrap_err();
        assert!(err.is_invalid_input());

        let err = renderer
            .fit(&RenderRequest::new("AB", "Anything", 0, 100))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn missing_family_is_font_resolution_error() {
        let err = empty_renderer()
            .render(&RenderRequest::new("AB", "Anything", 500, 100))
            .unwrap_err();
        assert!(err.is_font_resolution());
    }

    #[test]
    fn zero_initial_size_is_invalid_input() {
        let mut renderer = empty_renderer();
        renderer.options_mut().initial_size = 0;
        let err = renderer
            .fit(&RenderRequest::new("AB", "Anything", 500, 100))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn one_shot_render_rejects_empty_text() {
        assert!(render("", "Anything", 500, 100).unwrap_err().is_invalid_input());
        assert!(render("AB", "Anything", 500, 0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn defaults_use_skia_and_png() {
        let renderer = empty_renderer();
        assert_eq!(renderer.renderer.name(), "skia");
        assert_eq!(renderer.exporter.mime_type(), "image/png");
        assert_eq!(renderer.options().initial_size, 150);
    }
}
