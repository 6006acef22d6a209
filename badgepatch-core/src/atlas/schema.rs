use serde::Deserialize;

/// Document root of a sub-texture atlas. The root element's own name is not checked.
#[derive(Debug, Clone, Deserialize)]
pub struct AtlasDoc {
    #[serde(rename = "SubTexture", default)]
    pub sub_textures: Vec<RawSubTexture>,
}

/// One `SubTexture` element as written on disk. Every field may be given either
/// as an attribute or as a child element; values stay textual until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubTexture {
    #[serde(rename = "@name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "@x", alias = "x", default)]
    pub x: Option<String>,
    #[serde(rename = "@y", alias = "y", default)]
    pub y: Option<String>,
    #[serde(rename = "@width", alias = "width", default)]
    pub width: Option<String>,
    #[serde(rename = "@height", alias = "height", default)]
    pub height: Option<String>,
}
