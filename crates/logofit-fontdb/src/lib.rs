//! Finding the font a logo asks for, and measuring text with it
//!
//! Logos name fonts by family ("DejaVu Sans Mono", "Segoe UI"), not by
//! path. [`FontDatabase`] indexes the host's fonts (plus any directories in
//! `LOGOFIT_FONT_DIRS`) and resolves a family at a requested weight into a
//! [`Font`], which owns its bytes and measures ink extents.
//!
//! A family that is not installed is an error, never a silent fallback.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use logofit_core::{
    error::{FontLoadError, Result},
    traits::{FontRef, TextMeasurer},
    types::TextExtents,
};

pub mod outline;

pub use outline::{layout_run, GlyphRun};

/// Extra font directories, separated like `PATH`
pub const ENV_FONT_DIRS: &str = "LOGOFIT_FONT_DIRS";

/// A face held in memory, ready to measure and draw
///
/// For TTC collections `face_index` selects the face.
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    family: String,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        let family = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_data_index(data, 0, family)
    }

    /// Wraps raw font bytes, validating that the face parses
    pub fn from_data_index(data: Vec<u8>, face_index: u32, family: impl Into<String>) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            face_index,
            units_per_em,
            family: family.into(),
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Lays the text out as a path; see [`outline::layout_run`]
    pub fn glyph_run(&self, text: &str, font_size: f32) -> Result<GlyphRun> {
        layout_run(self, text, font_size)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family)
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn family_name(&self) -> &str {
        &self.family
    }
}

impl TextMeasurer for Font {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextExtents> {
        Ok(self.glyph_run(text, font_size)?.extents())
    }
}

/// Index of every face we may resolve a family against
pub struct FontDatabase {
    db: fontdb::Database,
}

impl FontDatabase {
    /// No fonts at all; load them explicitly
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    /// Host fonts plus the directories listed in `LOGOFIT_FONT_DIRS`
    pub fn system() -> Self {
        let mut db = Self::empty();
        db.db.load_system_fonts();
        for dir in font_dirs_from_env() {
            db.load_fonts_dir(&dir);
        }
        log::debug!("Font database holds {} faces", db.face_count());
        db
    }

    /// Adds one font file (all faces of a collection)
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.db
            .load_font_file(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        Ok(())
    }

    /// Adds every font found under `dir`, recursively
    pub fn load_fonts_dir(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        let before = self.face_count();
        self.db.load_fonts_dir(dir);
        log::debug!(
            "Loaded {} faces from {}",
            self.face_count() - before,
            dir.display()
        );
    }

    /// Adds a font held in memory. Unparseable data is skipped.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Sorted, de-duplicated family names
    pub fn families(&self) -> Vec<String> {
        self.db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve `family` at the nearest available `weight`.
    ///
    /// Family names match exactly first, then ignoring ASCII case.
    pub fn resolve(&self, family: &str, weight: u16) -> Result<Font> {
        let id = self
            .query(family, weight)
            .or_else(|| {
                let canonical = self.canonical_family(family)?;
                self.query(&canonical, weight)
            })
            .ok_or_else(|| FontLoadError::FamilyNotFound(family.to_string()))?;

        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| FontLoadError::DataUnavailable(family.to_string()))?;

        if let Some(face) = self.db.face(id) {
            log::debug!(
                "Resolved '{}' (weight {}) to {} weight {}",
                family,
                weight,
                face.post_script_name,
                face.weight.0
            );
        }

        Font::from_data_index(data, index, family)
    }

    fn query(&self, family: &str, weight: u16) -> Option<fontdb::ID> {
        self.db.query(&fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            weight: fontdb::Weight(weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })
    }

    fn canonical_family(&self, family: &str) -> Option<String> {
        self.db.faces().find_map(|face| {
            face.families
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(family))
                .map(|(name, _)| name.clone())
        })
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::empty()
    }
}

/// Directories from `LOGOFIT_FONT_DIRS` with `~` and `$VARS` expanded
pub fn font_dirs_from_env() -> Vec<PathBuf> {
    match std::env::var(ENV_FONT_DIRS) {
        Ok(raw) => parse_font_dirs(&raw),
        Err(_) => Vec::new(),
    }
}

/// Split a path list and expand each entry
pub fn parse_font_dirs(raw: &str) -> Vec<PathBuf> {
    std::env::split_paths(raw)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| {
            let s = p.to_string_lossy();
            match shellexpand::full(&s) {
                Ok(expanded) => PathBuf::from(expanded.into_owned()),
                Err(e) => {
                    log::warn!("Cannot expand font dir '{}': {}", s, e);
                    p.clone()
                },
            }
        })
        .collect()
}
