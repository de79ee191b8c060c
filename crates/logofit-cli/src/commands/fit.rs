//! Fit command implementation
//!
//! Same search as `render`, but only reports where the text would go.

use anyhow::{Context, Result};

use logofit::{RenderRequest, TextFitRenderer};

use crate::cli::FitArgs;

pub fn run(args: &FitArgs) -> Result<()> {
    let request = RenderRequest::new(args.text.as_str(), args.font.as_str(), args.width, args.height);
    request.validate().context("Invalid fit request")?;

    let renderer = TextFitRenderer::new(super::font_database(&args.font_dirs), args.fit_options());
    let fit = renderer
        .fit(&request)
        .with_context(|| format!("Failed to fit \"{}\" with font '{}'", request.text, request.font_family))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fit)?);
        return Ok(());
    }

    println!("Font size:    {}", fit.chosen_font_size);
    println!("Origin:       ({:.2}, {:.2})", fit.origin_x, fit.origin_y);
    println!(
        "Ink box:      {:.2}×{:.2} (bearing {:.2}, {:.2})",
        fit.extents.width, fit.extents.height, fit.extents.x_bearing, fit.extents.y_bearing
    );
    println!(
        "Measurements: {} ({})",
        fit.measurements,
        renderer.options().strategy
    );
    if fit.overflow {
        println!("Overflow:     yes, clipped at 1px");
    }

    Ok(())
}
