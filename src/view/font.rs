//! Font discovery
//!
//! An explicit `font_path` from the config wins; otherwise the first system
//! monospace face found by fontdb is used.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};

/// Load the font used for all text
pub fn load_font(font_path: Option<&Path>) -> Result<Font> {
    if let Some(path) = font_path {
        match load_from_file(path) {
            Ok(font) => return Ok(font),
            Err(e) => tracing::warn!("Falling back to a system font: {:#}", e),
        }
    }
    load_system_monospace()
}

fn load_from_file(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))
}

fn load_system_monospace() -> Result<Font> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::Monospace, fontdb::Family::SansSerif],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db
        .query(&query)
        .ok_or_else(|| anyhow!("No monospace system font found"))?;

    if let Some(face) = db.face(id) {
        tracing::debug!(family = ?face.families.first(), "using system font");
    }

    db.with_face_data(id, |data, index| {
        Font::from_bytes(
            data.to_vec(),
            FontSettings {
                collection_index: index,
                ..FontSettings::default()
            },
        )
    })
    .ok_or_else(|| anyhow!("System font data is unavailable"))?
    .map_err(|e| anyhow!("Failed to load system font: {}", e))
}
