//! Marker tables: what gets drawn into each named region.

pub mod presets;

use std::path::Path;

use image::Rgba;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{PatchError, Result};

pub use presets::Preset;

/// Replacement drawn into a cleared region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle in this color, outlined at half alpha.
    Color(Rgba<u8>),
    /// Icon file name, looked up in the asset directory.
    Icon(String),
}

impl Marker {
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Marker::Color(Rgba([r, g, b, a])) }

    pub fn icon(file: &str) -> Self { Marker::Icon(file.to_string()) }
}

/// Ordered region name -> marker table. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSpec {
    entries: Vec<(String, Marker)>,
}

impl MarkerSpec {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, marker: Marker) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(PatchError::Config(format!("region `{name}` configured twice")));
        }
        self.entries.push((name, marker));
        Ok(())
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }

    pub fn get(&self, name: &str) -> Option<&Marker> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Marker)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), m))
    }
}

/// Sizing constants of the two marker kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchParams {
    /// Icon edge length as a fraction of the region edge.
    pub icon_scale: f64,
    /// Fraction of the region trimmed from each side before fitting the circle.
    pub circle_inset: f64,
}

impl Default for PatchParams {
    fn default() -> Self { Self { icon_scale: 0.8, circle_inset: 0.25 } }
}

impl PatchParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.icon_scale > 0.0 && self.icon_scale <= 1.0) {
            return Err(PatchError::Config(format!("icon_scale must be in (0, 1], got {}", self.icon_scale)));
        }
        if !(self.circle_inset >= 0.0 && self.circle_inset < 0.5) {
            return Err(PatchError::Config(format!("circle_inset must be in [0, 0.5), got {}", self.circle_inset)));
        }
        Ok(())
    }
}

/// A validated marker table plus sizing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchConfig {
    pub markers: MarkerSpec,
    pub params: PatchParams,
}

impl PatchConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self { markers: preset.markers(), params: PatchParams::default() }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    icon_scale: Option<f64>,
    #[serde(default)]
    circle_inset: Option<f64>,
    markers: serde_yaml::Mapping,
}

pub fn load_config_from_yaml_str(s: &str) -> Result<PatchConfig> {
    let file: ConfigFile = serde_yaml::from_str(s).map_err(|e| PatchError::Config(e.to_string()))?;
    let defaults = PatchParams::default();
    let params = PatchParams {
        icon_scale: file.icon_scale.unwrap_or(defaults.icon_scale),
        circle_inset: file.circle_inset.unwrap_or(defaults.circle_inset),
    };
    params.validate()?;

    let mut markers = MarkerSpec::new();
    for (key, value) in &file.markers {
        let name = key
            .as_str()
            .ok_or_else(|| PatchError::Config(format!("region names must be strings, got {key:?}")))?;
        markers.insert(name, marker_from_value(name, value)?)?;
    }
    if markers.is_empty() {
        return Err(PatchError::Config("marker table is empty".into()));
    }
    Ok(PatchConfig { markers, params })
}

pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<PatchConfig> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
    load_config_from_yaml_str(&data)
}

/// Classify one configured value as a color tuple or an icon file name.
pub fn marker_from_value(name: &str, value: &Value) -> Result<Marker> {
    let invalid = |reason: String| PatchError::InvalidMarker { name: name.to_string(), reason };
    match value {
        Value::String(file) => {
            if file.to_ascii_lowercase().ends_with(".png") && file.len() > ".png".len() {
                Ok(Marker::Icon(file.clone()))
            } else {
                Err(invalid(format!("icon `{file}` is not a .png file name")))
            }
        }
        Value::Sequence(items) => {
            if !(3..=4).contains(&items.len()) {
                return Err(invalid(format!("color needs 3 or 4 channels, got {}", items.len())));
            }
            let mut rgba = [255u8; 4];
            for (slot, item) in rgba.iter_mut().zip(items) {
                *slot = item
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| invalid(format!("channel {item:?} is not an integer in 0..=255")))?;
            }
            Ok(Marker::Color(Rgba(rgba)))
        }
        other => Err(invalid(format!("expected a color list or a .png file name, got {other:?}"))),
    }
}
