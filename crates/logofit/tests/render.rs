//! End-to-end scenarios: request in, PNG file out

use std::fs;
use std::path::PathBuf;

use logofit::{
    BitmapData, Color, Exporter, FitOptions, FitResult, FitStrategy, FontDatabase, FontRef,
    Renderer, RenderRequest, Result, TextFitRenderer, TextMeasurer,
};

const MONOSPACE: &[&str] = &["DejaVu Sans Mono", "Liberation Mono", "Noto Sans Mono", "Menlo", "Consolas"];

fn monospace_family(db: &FontDatabase) -> Option<String> {
    let families = db.families();
    MONOSPACE
        .iter()
        .find(|c| families.iter().any(|f| f == *c))
        .map(|s| s.to_string())
}

fn renderer_with(options: FitOptions) -> Option<(TextFitRenderer, String)> {
    let fonts = FontDatabase::system();
    let family = monospace_family(&fonts)?;
    Some((TextFitRenderer::new(fonts, options), family))
}

fn temp_output(ext: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("logofit_test_{}.{}", id, ext))
}

#[test]
fn ab_in_monospace_fills_a_500x100_canvas() {
    let Some((renderer, family)) = renderer_with(FitOptions::default()) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };

    let output = temp_output("png");
    let request = RenderRequest::new("AB", family, 500, 100);
    let fit = renderer.render_to_file(&request, &output).unwrap();

    assert!(fit.chosen_font_size <= 150);
    assert!(fit.chosen_font_size >= 1);
    assert!(!fit.overflow);

    let image = image::open(&output).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (500, 100));
    assert!(image.pixels().any(|p| p.0[3] > 0), "some alpha must be painted");
    assert!(image.pixels().any(|p| p.0[3] == 0), "background stays transparent");

    fs::remove_file(&output).unwrap();
}

#[test]
fn chosen_size_is_the_largest_that_fits() {
    let Some((renderer, family)) = renderer_with(FitOptions::default()) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };

    let request = RenderRequest::new("Pi-X", family.as_str(), 500, 100);
    let fit = renderer.fit(&request).unwrap();
    assert!(fit.extents.fits_within(500, 100));

    let font = renderer.fonts().resolve(&family, 700).unwrap();
    if fit.chosen_font_size < 150 {
        let bigger = font
            .measure("Pi-X", (fit.chosen_font_size + 1) as f32)
            .unwrap();
        assert!(!bigger.fits_within(500, 100));
    }
}

#[test]
fn binary_strategy_picks_the_same_size() {
    let Some((linear, family)) = renderer_with(FitOptions::default()) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };
    let binary = TextFitRenderer::new(
        FontDatabase::system(),
        FitOptions::default().with_strategy(FitStrategy::Binary),
    );

    for (text, w, h) in [("Pi-X", 500, 100), ("logofit", 120, 400), ("W", 30, 30)] {
        let request = RenderRequest::new(text, family.as_str(), w, h);
        let a = linear.fit(&request).unwrap();
        let b = binary.fit(&request).unwrap();
        assert_eq!(a.chosen_font_size, b.chosen_font_size, "{} in {}x{}", text, w, h);
        assert!(b.measurements <= a.measurements);
    }
}

#[test]
fn identical_requests_give_identical_bytes() {
    let Some((renderer, family)) = renderer_with(FitOptions::default()) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };

    let request = RenderRequest::new("Pi-X", family, 500, 100);
    let a = renderer.render(&request).unwrap();
    let b = renderer.render(&request).unwrap();
    assert_eq!(a.bitmap, b.bitmap);
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn empty_text_writes_nothing() {
    let renderer = TextFitRenderer::new(FontDatabase::system(), FitOptions::default());
    let output = temp_output("png");

    let err = renderer
        .render_to_file(&RenderRequest::new("", "DejaVu Sans Mono", 500, 100), &output)
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(!output.exists());
}

#[test]
fn zero_width_is_invalid_input() {
    let renderer = TextFitRenderer::new(FontDatabase::empty(), FitOptions::default());
    let err = renderer
        .render(&RenderRequest::new("AB", "DejaVu Sans Mono", 0, 100))
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn unknown_family_writes_nothing() {
    let renderer = TextFitRenderer::new(FontDatabase::system(), FitOptions::default());
    let output = temp_output("png");

    let err = renderer
        .render_to_file(
            &RenderRequest::new("AB", "Logofit Imaginary Grotesk", 500, 100),
            &output,
        )
        .unwrap_err();
    assert!(err.is_font_resolution());
    assert!(!output.exists());
}

#[test]
fn unwritable_path_is_io_error() {
    let Some((renderer, family)) = renderer_with(FitOptions::default()) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };

    let output = std::env::temp_dir()
        .join("logofit_no_such_dir_for_tests")
        .join("logo.png");
    let err = renderer
        .render_to_file(&RenderRequest::new("AB", family, 500, 100), &output)
        .unwrap_err();
    assert!(matches!(err, logofit::LogofitError::Io(_)));
}

/// Paints every pixel, ignoring the font
struct FloodRenderer;

impl Renderer for FloodRenderer {
    fn name(&self) -> &'static str {
        "flood"
    }

    fn render(
        &self,
        _font: &dyn FontRef,
        request: &RenderRequest,
        _fit: &FitResult,
        foreground: Color,
    ) -> Result<BitmapData> {
        let pixels = (request.canvas_width * request.canvas_height) as usize;
        let data = [foreground.r, foreground.g, foreground.b, foreground.a].repeat(pixels);
        Ok(BitmapData {
            width: request.canvas_width,
            height: request.canvas_height,
            data,
        })
    }
}

/// Raw RGBA, no container
struct RawExporter;

impl Exporter for RawExporter {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        Ok(bitmap.data.clone())
    }

    fn extension(&self) -> &'static str {
        "rgba"
    }

    fn mime_type(&self) -> &'static str {
        "application/octet-stream"
    }
}

#[test]
fn injected_backends_and_fonts_are_used() {
    let system = FontDatabase::system();
    let Some(family) = monospace_family(&system) else {
        eprintln!("skipping: no monospace family installed");
        return;
    };
    let font = system.resolve(&family, 700).unwrap();

    let mut renderer = TextFitRenderer::new(FontDatabase::empty(), FitOptions::default())
        .with_renderer(Box::new(FloodRenderer))
        .with_exporter(Box::new(RawExporter));
    renderer.fonts_mut().load_font_data(font.data().to_vec());
    assert!(renderer.fonts().face_count() >= 1);

    let request = RenderRequest::new("AB", font.family_name(), 4, 2);
    let logo = renderer.render(&request).unwrap();

    assert_eq!(logo.bytes.len(), 4 * 2 * 4);
    assert_eq!(&logo.bytes[..4], &[0, 0, 0, 255]);
    assert_eq!(logo.bitmap.painted_pixels(), 8);
}
