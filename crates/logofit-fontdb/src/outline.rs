//! Glyph runs as vector paths
//!
//! Measurement and rasterization both go through [`layout_run`], so the ink
//! box the fit search sees is exactly the ink the renderer fills.

use kurbo::{BezPath, Shape};
use skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
    GlyphId, MetadataProvider,
};

use logofit_core::{
    error::{RenderError, Result},
    traits::FontRef,
    types::TextExtents,
};

/// A single line of text laid out along glyph advances
///
/// The path is in pixels with the y axis pointing up and the origin at the
/// left end of the baseline, the way font outlines are drawn.
#[derive(Debug, Clone)]
pub struct GlyphRun {
    pub path: BezPath,
    pub advance: f64,
    pub glyph_count: usize,
}

impl GlyphRun {
    /// Cairo-style ink extents (y axis down)
    pub fn extents(&self) -> TextExtents {
        if self.path.elements().is_empty() {
            return TextExtents::from_ink(0.0, 0.0, 0.0, 0.0, self.advance);
        }

        let bbox = self.path.bounding_box();
        TextExtents::from_ink(bbox.x0, -bbox.y1, bbox.width(), bbox.height(), self.advance)
    }
}

/// Lay `text` out at `font_size` pixels per em without shaping.
///
/// Characters the font does not map fall back to `.notdef`.
pub fn layout_run(font: &dyn FontRef, text: &str, font_size: f32) -> Result<GlyphRun> {
    let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
        .map_err(|_| RenderError::InvalidFont)?;

    let size = Size::new(font_size);
    let location = LocationRef::default();
    let charmap = font_ref.charmap();
    let metrics = font_ref.glyph_metrics(size, location);
    let outlines = font_ref.outline_glyphs();

    let mut path = BezPath::new();
    let mut pen_x = 0.0f64;
    let mut glyph_count = 0;

    for ch in text.chars() {
        let glyph_id = charmap.map(ch).unwrap_or_else(|| {
            log::debug!("'{}' has no glyph in {}, using .notdef", ch, font.family_name());
            GlyphId::NOTDEF
        });

        // Spaces and other blank glyphs have no outline, only an advance
        if let Some(glyph) = outlines.get(glyph_id) {
            let mut pen = PathPen {
                path: &mut path,
                offset_x: pen_x,
            };
            glyph
                .draw(DrawSettings::unhinted(size, location), &mut pen)
                .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id.to_u32()))?;
        }

        pen_x += metrics.advance_width(glyph_id).unwrap_or(0.0) as f64;
        glyph_count += 1;
    }

    Ok(GlyphRun {
        path,
        advance: pen_x,
        glyph_count,
    })
}

/// Collects skrifa outline commands into a kurbo path, shifted to the
/// current pen position
struct PathPen<'a> {
    path: &'a mut BezPath,
    offset_x: f64,
}

impl PathPen<'_> {
    fn pt(&self, x: f32, y: f32) -> (f64, f64) {
        (x as f64 + self.offset_x, y as f64)
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.pt(cx0, cy0), self.pt(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.pt(cx0, cy0), self.pt(cx1, cy1), self.pt(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_has_zero_ink() {
        let run = GlyphRun {
            path: BezPath::new(),
            advance: 12.5,
            glyph_count: 1,
        };
        let extents = run.extents();
        assert_eq!(extents.width, 0.0);
        assert_eq!(extents.height, 0.0);
        assert_eq!(extents.x_advance, 12.5);
    }

    #[test]
    fn extents_flip_the_y_axis() {
        let mut path = BezPath::new();
        path.move_to((2.0, -5.0));
        path.line_to((40.0, -5.0));
        path.line_to((40.0, 70.0));
        path.close_path();
        let run = GlyphRun {
            path,
            advance: 45.0,
            glyph_count: 1,
        };

        let extents = run.extents();
        assert_eq!(extents.x_bearing, 2.0);
        assert_eq!(extents.y_bearing, -70.0);
        assert_eq!(extents.width, 38.0);
        assert_eq!(extents.height, 75.0);
    }

    #[test]
    fn pen_offsets_by_advance() {
        let mut path = BezPath::new();
        let mut pen = PathPen {
            path: &mut path,
            offset_x: 10.0,
        };
        pen.move_to(0.0, 0.0);
        pen.line_to(5.0, 5.0);
        pen.close();
        let bbox = path.bounding_box();
        assert_eq!(bbox.x0, 10.0);
        assert_eq!(bbox.x1, 15.0);
    }
}
