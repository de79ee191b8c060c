//! Subcommand implementations

pub mod fit;
pub mod fonts;
pub mod render;

use std::path::PathBuf;

use logofit::FontDatabase;

/// Host fonts plus directories given on the command line
pub(crate) fn font_database(extra_dirs: &[PathBuf]) -> FontDatabase {
    let mut fonts = FontDatabase::system();
    for dir in extra_dirs {
        if !dir.is_dir() {
            log::warn!("Font directory {} does not exist", dir.display());
            continue;
        }
        fonts.load_fonts_dir(dir);
    }
    fonts
}
