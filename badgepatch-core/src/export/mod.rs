//! Writing the patched atlas (PNG bytes under the engine's `.dds` name) and
//! the untouched metadata copy. Both land together or not at all.

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{PatchError, Result};

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const IMAGE_EXTENSION: &str = "dds";
pub const METADATA_EXTENSION: &str = "xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub image: PathBuf,
    pub metadata: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, output_name: &str) -> Self {
        Self {
            image: out_dir.join(format!("{output_name}.{IMAGE_EXTENSION}")),
            metadata: out_dir.join(format!("{output_name}.{METADATA_EXTENSION}")),
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| PatchError::image("<png encoder>", e))?;
    Ok(buf.into_inner())
}

fn staged(out_dir: &Path, output_name: &str, suffix: &str) -> Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(&format!(".{output_name}."))
        .suffix(suffix)
        .tempfile_in(out_dir)
        .map_err(|e| PatchError::io(out_dir, e))
}

/// Stage both outputs as temp files in `out_dir`, then move them into place.
/// Temp files are removed on any failure; a placed image is removed again if
/// the metadata cannot be placed.
pub fn write_outputs(image: &RgbaImage, source_xml: &Path, out_dir: &Path, output_name: &str) -> Result<OutputPaths> {
    fs::create_dir_all(out_dir).map_err(|e| PatchError::io(out_dir, e))?;
    let paths = OutputPaths::new(out_dir, output_name);

    let png = encode_png(image)?;
    let mut image_tmp = staged(out_dir, output_name, ".png")?;
    image_tmp
        .write_all(&png)
        .and_then(|_| image_tmp.flush())
        .map_err(|e| PatchError::io(image_tmp.path(), e))?;

    let mut metadata_tmp = staged(out_dir, output_name, ".xml")?;
    let mut source = File::open(source_xml).map_err(|e| PatchError::io(source_xml, e))?;
    std::io::copy(&mut source, &mut metadata_tmp).map_err(|e| PatchError::io(source_xml, e))?;
    metadata_tmp.flush().map_err(|e| PatchError::io(metadata_tmp.path(), e))?;

    image_tmp.persist(&paths.image).map_err(|e| PatchError::io(&paths.image, e.error))?;
    if let Err(e) = metadata_tmp.persist(&paths.metadata) {
        let _ = fs::remove_file(&paths.image);
        return Err(PatchError::io(&paths.metadata, e.error));
    }
    log::info!("wrote {} and {}", paths.image.display(), paths.metadata.display());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_png_bytes_under_dds_name_and_copies_xml_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let xml = dir.path().join("atlas.xml");
        let xml_bytes = b"<root>\r\n\t<SubTexture name=\"a\"/>  \n</root>\n";
        fs::write(&xml, xml_bytes).unwrap();
        let out = dir.path().join("out");
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4]));

        let paths = write_outputs(&img, &xml, &out, "battleAtlas").unwrap();

        assert_eq!(paths, OutputPaths::new(&out, "battleAtlas"));
        assert_eq!(listing(&out), ["battleAtlas.dds", "battleAtlas.xml"]);
        assert_eq!(fs::read(&paths.metadata).unwrap(), xml_bytes);
        let dds = fs::read(&paths.image).unwrap();
        assert_eq!(&dds[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory_with_format(&dds, ImageFormat::Png).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn unwritable_output_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let xml = dir.path().join("atlas.xml");
        fs::write(&xml, b"<root/>").unwrap();
        let out = dir.path().join("out");
        fs::write(&out, b"occupied").unwrap();

        let err = write_outputs(&RgbaImage::new(2, 2), &xml, &out, "atlas").unwrap_err();

        assert!(matches!(err, PatchError::Io { ref path, .. } if path == &out));
        assert_eq!(listing(dir.path()), ["atlas.xml", "out"]);
        assert_eq!(fs::read(&out).unwrap(), b"occupied");
    }

    #[test]
    fn missing_source_xml_leaves_no_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let img = RgbaImage::new(2, 2);

        let err = write_outputs(&img, &dir.path().join("absent.xml"), &out, "atlas").unwrap_err();

        assert!(matches!(err, PatchError::Io { .. }));
        assert!(listing(&out).is_empty());
    }
}
