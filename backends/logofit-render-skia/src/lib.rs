//! Skia Renderer - fitted text onto a transparent canvas via tiny-skia
//!
//! The glyph run is laid out once at the fitted size, flipped from font
//! space (y up) into canvas space (y down), moved to the fitted origin and
//! filled with anti-aliasing. Nothing outside the canvas is kept: text that
//! overflows at size 1 is simply clipped.

use kurbo::{BezPath, PathEl};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use logofit_core::{
    error::{RenderError, Result},
    traits::{FontRef, Renderer},
    types::{BitmapData, FitResult, RenderRequest, MAX_CANVAS_DIMENSION},
    Color,
};
use logofit_fontdb::layout_run;

/// tiny-skia powered rasterizer
pub struct SkiaRenderer {
    /// Largest canvas edge this renderer will allocate
    max_size: u32,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self {
            max_size: MAX_CANVAS_DIMENSION,
        }
    }

    /// Caps the canvas edge below the global limit
    pub fn with_max_size(max_size: u32) -> Self {
        Self {
            max_size: max_size.min(MAX_CANVAS_DIMENSION),
        }
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SkiaRenderer {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn render(
        &self,
        font: &dyn FontRef,
        request: &RenderRequest,
        fit: &FitResult,
        foreground: Color,
    ) -> Result<BitmapData> {
        let (width, height) = (request.canvas_width, request.canvas_height);
        if width == 0 || height == 0 || width > self.max_size || height > self.max_size {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let run = layout_run(font, &request.text, fit.chosen_font_size as f32)?;

        // Fresh pixmaps are fully transparent
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;

        if run.path.elements().is_empty() {
            log::debug!("Skia: {:?} has no ink, canvas stays empty", request.text);
        } else {
            let path = to_skia_path(&run.path)?;

            let mut paint = Paint::default();
            paint.set_color_rgba8(foreground.r, foreground.g, foreground.b, foreground.a);
            paint.anti_alias = true;

            // Flip y (outlines are y-up) then move the baseline start to the origin
            let transform = Transform::from_scale(1.0, -1.0)
                .post_translate(fit.origin_x as f32, fit.origin_y as f32);

            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);

            log::debug!(
                "Skia: drew {} glyphs at size {} from origin ({:.2}, {:.2}) on {}x{}",
                run.glyph_count,
                fit.chosen_font_size,
                fit.origin_x,
                fit.origin_y,
                width,
                height
            );
        }

        Ok(BitmapData {
            width,
            height,
            data: straight_rgba(&pixmap),
        })
    }
}

/// Translate kurbo's path format into tiny-skia's
fn to_skia_path(path: &BezPath) -> Result<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }

    builder
        .finish()
        .ok_or_else(|| RenderError::PathBuildingFailed.into())
}

/// tiny-skia stores premultiplied pixels; PNG wants straight alpha
fn straight_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}
