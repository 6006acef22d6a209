//! Sub-texture metadata loading.

pub mod schema;

use std::path::Path;

use crate::error::{PatchError, Result};
use schema::{AtlasDoc, RawSubTexture};

/// One packed rectangle of the atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTextureEntry {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parse atlas metadata, keeping document order.
pub fn load_from_xml_str(s: &str) -> Result<Vec<SubTextureEntry>> {
    let s = s.strip_prefix('\u{feff}').unwrap_or(s);
    let doc: AtlasDoc = quick_xml::de::from_str(s).map_err(|e| PatchError::Parse(e.to_string()))?;
    doc.sub_textures
        .iter()
        .enumerate()
        .map(|(i, raw)| entry_from_raw(i, raw))
        .collect()
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SubTextureEntry>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
    load_from_xml_str(&data)
}

fn entry_from_raw(index: usize, raw: &RawSubTexture) -> Result<SubTextureEntry> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| PatchError::Parse(format!("SubTexture #{index} has no name")))?
        .to_string();
    let field = |label: &str, value: &Option<String>| -> Result<u32> {
        let text = value
            .as_deref()
            .ok_or_else(|| PatchError::Parse(format!("SubTexture `{name}` is missing `{label}`")))?;
        text.trim().parse::<u32>().map_err(|_| {
            PatchError::Parse(format!("SubTexture `{name}` has non-numeric `{label}`: {:?}", text.trim()))
        })
    };
    Ok(SubTextureEntry {
        x: field("x", &raw.x)?,
        y: field("y", &raw.y)?,
        width: field("width", &raw.width)?,
        height: field("height", &raw.height)?,
        name,
    })
}
