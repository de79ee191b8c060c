//! Render command implementation

use anyhow::{Context, Result};
use serde::Serialize;

use logofit::{Color, FitResult, RenderRequest, TextFitRenderer};

use crate::cli::RenderArgs;

#[derive(Serialize)]
struct RenderReport<'a> {
    output: String,
    text: &'a str,
    font: &'a str,
    width: u32,
    height: u32,
    strategy: &'static str,
    fit: FitResult,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let foreground = Color::from_hex(&args.foreground).context("Invalid --foreground")?;
    let options = args.fit.fit_options().with_foreground(foreground);
    let strategy = options.strategy.as_str();

    let request = RenderRequest::new(
        args.fit.text.as_str(),
        args.fit.font.as_str(),
        args.fit.width,
        args.fit.height,
    );
    request.validate().context("Invalid render request")?;

    let renderer = TextFitRenderer::new(super::font_database(&args.fit.font_dirs), options);
    let fit = renderer
        .render_to_file(&request, &args.output)
        .with_context(|| format!("Failed to render logo to {}", args.output.display()))?;

    if args.fit.json {
        let report = RenderReport {
            output: args.output.display().to_string(),
            text: &request.text,
            font: &request.font_family,
            width: request.canvas_width,
            height: request.canvas_height,
            strategy,
            fit,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✓ Rendered \"{}\" to {}",
            request.text,
            args.output.display()
        );
        println!("  Font: {} at {}px", request.font_family, fit.chosen_font_size);
        println!("  Canvas: {}×{}", request.canvas_width, request.canvas_height);
        if fit.overflow {
            println!("  Warning: text does not fit even at 1px and is clipped");
        }
    }

    Ok(())
}
