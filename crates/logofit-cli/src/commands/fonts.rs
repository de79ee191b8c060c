//! Fonts command implementation

use anyhow::Result;

use crate::cli::FontsArgs;

pub fn run(args: &FontsArgs) -> Result<()> {
    let fonts = super::font_database(&args.font_dirs);
    let needle = args.filter.as_deref().map(str::to_lowercase);

    let families: Vec<String> = fonts
        .families()
        .into_iter()
        .filter(|family| match &needle {
            Some(n) => family.to_lowercase().contains(n),
            None => true,
        })
        .collect();

    for family in &families {
        println!("{}", family);
    }
    log::info!("{} families from {} faces", families.len(), fonts.face_count());

    Ok(())
}
