//! Matching configured region names to atlas rectangles.

use crate::atlas::SubTextureEntry;
use crate::error::{PatchError, Result};
use crate::markers::{Marker, MarkerSpec};

/// Axis-aligned box, end-exclusive: `x0 <= x < x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl RegionRect {
    pub fn width(&self) -> u32 { self.x1 - self.x0 }

    pub fn height(&self) -> u32 { self.y1 - self.y0 }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

impl From<&SubTextureEntry> for RegionRect {
    fn from(e: &SubTextureEntry) -> Self {
        Self {
            x0: e.x,
            y0: e.y,
            x1: e.x.saturating_add(e.width),
            y1: e.y.saturating_add(e.height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion<'a> {
    pub name: &'a str,
    pub rect: RegionRect,
    pub marker: &'a Marker,
}

/// Pair every configured marker with its one matching entry, in marker order.
/// Fails unless each configured name occurs exactly once in `entries`.
pub fn resolve_regions<'a>(entries: &[SubTextureEntry], spec: &'a MarkerSpec) -> Result<Vec<ResolvedRegion<'a>>> {
    let mut missing = Vec::new();
    let mut duplicated = Vec::new();
    let mut resolved = Vec::with_capacity(spec.len());

    for (name, marker) in spec.iter() {
        let mut matches = entries.iter().filter(|e| e.name == name);
        match (matches.next(), matches.next()) {
            (Some(entry), None) => {
                let rect = RegionRect::from(entry);
                log::debug!("resolved {name} -> {rect:?}");
                resolved.push(ResolvedRegion { name, rect, marker });
            }
            (Some(_), Some(_)) => duplicated.push(name.to_string()),
            (None, _) => missing.push(name.to_string()),
        }
    }

    if resolved.len() != spec.len() {
        return Err(PatchError::ConfigMismatch { missing, duplicated });
    }
    Ok(resolved)
}
