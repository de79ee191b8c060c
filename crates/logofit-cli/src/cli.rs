//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logofit::{FitOptions, FitStrategy};

/// logofit - render a line of text as large as the canvas allows
#[derive(Parser, Debug)]
#[command(name = "logofit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG still applies)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to a PNG logo
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Report the fitted size and origin without drawing
    Fit(FitArgs),

    /// List font families that can be resolved
    Fonts(FontsArgs),
}

/// Options shared by every command that fits text
#[derive(Args, Debug)]
pub struct FitArgs {
    /// Text to draw
    #[arg(default_value = "Pi-X")]
    pub text: String,

    /// Font family name
    #[arg(short = 'f', long = "font", default_value = "Segoe UI")]
    pub font: String,

    /// Canvas width in pixels
    #[arg(short = 'W', long = "width", default_value_t = 500)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long = "height", default_value_t = 100)]
    pub height: u32,

    /// Font size the search starts from [default: 150, or LOGOFIT_INITIAL_SIZE]
    #[arg(short = 's', long = "initial-size", value_parser = clap::value_parser!(u32).range(1..))]
    pub initial_size: Option<u32>,

    /// Size search [default: linear, or LOGOFIT_FIT_STRATEGY]
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Extra directory to search for fonts (repeatable)
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,

    /// Print the result as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl FitArgs {
    /// Environment-configured options with command-line flags on top
    pub fn fit_options(&self) -> FitOptions {
        let mut options = FitOptions::from_env();
        if let Some(size) = self.initial_size {
            options.initial_size = size;
        }
        if let Some(strategy) = self.strategy {
            options.strategy = strategy.into();
        }
        options
    }
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub fit: FitArgs,

    /// Output PNG path
    #[arg(short = 'o', long = "output", default_value = "logo.png")]
    pub output: PathBuf,

    /// Text color (RRGGBB or RRGGBBAA)
    #[arg(short = 'c', long = "foreground", default_value = "000000FF")]
    pub foreground: String,
}

/// Arguments for the fonts command
#[derive(Args, Debug)]
pub struct FontsArgs {
    /// Only show families containing this text (case-insensitive)
    #[arg(long = "filter")]
    pub filter: Option<String>,

    /// Extra directory to search for fonts (repeatable)
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Step down one size at a time
    Linear,
    /// Bisect the size range
    Binary,
}

impl From<StrategyArg> for FitStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => FitStrategy::Linear,
            StrategyArg::Binary => FitStrategy::Binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults_match_classic_logo() {
        let cli = Cli::try_parse_from(["logofit", "render"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.fit.text, "Pi-X");
        assert_eq!(args.fit.font, "Segoe UI");
        assert_eq!((args.fit.width, args.fit.height), (500, 100));
        assert_eq!(args.output, PathBuf::from("logo.png"));
    }

    #[test]
    fn flags_override_options() {
        let cli = Cli::try_parse_from([
            "logofit",
            "fit",
            "Hello",
            "--initial-size",
            "80",
            "--strategy",
            "binary",
        ])
        .unwrap();
        let Commands::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        let options = args.fit_options();
        assert_eq!(options.initial_size, 80);
        assert_eq!(options.strategy, FitStrategy::Binary);
    }

    #[test]
    fn zero_initial_size_rejected_by_parser() {
        assert!(Cli::try_parse_from(["logofit", "fit", "--initial-size", "0"]).is_err());
    }
}
