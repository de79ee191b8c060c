//! Logofit Core: shrink text until it fits, then center it
//!
//! A logo is a single line of text drawn as large as the canvas allows.
//! This crate holds everything that does not touch font files or pixels:
//!
//! 1. **Request validation** - [`types::RenderRequest`]
//! 2. **Fit search** - [`fit::fit_font_size`] walks the font size down from
//!    the starting value until the measured ink box fits
//! 3. **Centering** - [`fit::center_origin`] turns the ink box into a draw
//!    origin
//!
//! Measuring, drawing and encoding are behind the traits in [`traits`], so
//! the search can be exercised with any [`TextMeasurer`].
//!
//! ```
//! use logofit_core::{fit, types::TextExtents, FitOptions, TextMeasurer};
//!
//! struct Boxy;
//!
//! impl TextMeasurer for Boxy {
//!     fn measure(&self, text: &str, size: f32) -> logofit_core::Result<TextExtents> {
//!         let width = text.chars().count() as f64 * size as f64 * 0.5;
//!         Ok(TextExtents::from_ink(0.0, -(size as f64), width, size as f64, width))
//!     }
//! }
//!
//! let result = fit::fit_text(&Boxy, "AB", 500, 100, &FitOptions::default())?;
//! assert_eq!(result.chosen_font_size, 100);
//! # Ok::<(), logofit_core::LogofitError>(())
//! ```

pub mod config;
pub mod error;
pub mod fit;
pub mod traits;

pub use config::{FitOptions, FitStrategy};
pub use error::{LogofitError, Result};
pub use traits::{Exporter, FontRef, Renderer, TextMeasurer};

/// The data that flows between the stages
pub mod types {
    use serde::Serialize;

    use crate::error::{LogofitError, Result};

    /// Largest canvas edge we are willing to allocate
    pub const MAX_CANVAS_DIMENSION: u32 = 65535;

    /// What the caller wants drawn
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderRequest {
        pub text: String,
        pub font_family: String,
        pub canvas_width: u32,
        pub canvas_height: u32,
    }

    impl RenderRequest {
        pub fn new(
            text: impl Into<String>,
            font_family: impl Into<String>,
            canvas_width: u32,
            canvas_height: u32,
        ) -> Self {
            Self {
                text: text.into(),
                font_family: font_family.into(),
                canvas_width,
                canvas_height,
            }
        }

        /// Reject requests that can never produce an image.
        ///
        /// Runs before any font lookup or drawing.
        pub fn validate(&self) -> Result<()> {
            if self.text.is_empty() {
                return Err(LogofitError::invalid_input("text must not be empty"));
            }
            if self.canvas_width == 0 || self.canvas_height == 0 {
                return Err(LogofitError::invalid_input(format!(
                    "canvas dimensions must be positive, got {}x{}",
                    self.canvas_width, self.canvas_height
                )));
            }
            if self.canvas_width > MAX_CANVAS_DIMENSION || self.canvas_height > MAX_CANVAS_DIMENSION
            {
                return Err(LogofitError::invalid_input(format!(
                    "canvas {}x{} exceeds the {} pixel limit",
                    self.canvas_width, self.canvas_height, MAX_CANVAS_DIMENSION
                )));
            }
            if self.font_family.trim().is_empty() {
                return Err(LogofitError::invalid_input("font family must not be empty"));
            }
            Ok(())
        }
    }

    /// Ink extents of a string, cairo style
    ///
    /// `x_bearing`/`y_bearing` locate the top-left corner of the ink box
    /// relative to the drawing origin (left end of the baseline). The y axis
    /// points down, so text sitting on the baseline has a negative
    /// `y_bearing`.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
    pub struct TextExtents {
        pub x_bearing: f64,
        pub y_bearing: f64,
        pub width: f64,
        pub height: f64,
        pub x_advance: f64,
        pub y_advance: f64,
    }

    impl TextExtents {
        /// Extents of a horizontal run
        pub fn from_ink(
            x_bearing: f64,
            y_bearing: f64,
            width: f64,
            height: f64,
            x_advance: f64,
        ) -> Self {
            Self {
                x_bearing,
                y_bearing,
                width,
                height,
                x_advance,
                y_advance: 0.0,
            }
        }

        /// Whether the ink box fits a `width` x `height` canvas.
        ///
        /// Only a strictly larger box is rejected: text exactly as wide as
        /// the canvas fits.
        pub fn fits_within(&self, width: u32, height: u32) -> bool {
            !(self.width > width as f64 || self.height > height as f64)
        }
    }

    /// The outcome of fitting a request to its canvas
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct FitResult {
        pub chosen_font_size: u32,
        pub origin_x: f64,
        pub origin_y: f64,
        pub extents: TextExtents,
        /// Text still overflows at size 1
        pub overflow: bool,
        /// How many times the text was measured
        pub measurements: u32,
    }

    /// Straight (non-premultiplied) RGBA8 pixels, row major
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// Count of pixels with any coverage
        pub fn painted_pixels(&self) -> usize {
            self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
        }

        /// Alpha of the pixel at (x, y), `None` outside the canvas
        pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let idx = (y as usize * self.width as usize + x as usize) * 4 + 3;
            self.data.get(idx).copied()
        }
    }
}

/// Simple RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LogofitError::invalid_input(format!(
                "invalid color '{}': expected RRGGBB or RRGGBBAA",
                s
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| LogofitError::invalid_input(format!("invalid color '{}'", s)))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}
