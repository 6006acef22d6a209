//! Icon marker: a scaled icon pasted centred into the region.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use thiserror::Error;

use crate::resolve::RegionRect;

/// Reasons an icon region is left blank. None of these abort a run.
#[derive(Debug, Error)]
pub enum IconSkip {
    #[error("icon file does not exist: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to load icon {}: {source}", path.display())]
    Undecodable { path: PathBuf, #[source] source: image::ImageError },
    #[error("region {width}x{height} is too small for an icon")]
    TooSmall { width: u32, height: u32 },
}

/// Icon size: `scale` of each region edge, truncated, never larger than the region.
pub fn icon_size(rect: RegionRect, scale: f64) -> (u32, u32) {
    let w = (rect.width() as f64 * scale) as u32;
    let h = (rect.height() as f64 * scale) as u32;
    (w.min(rect.width()), h.min(rect.height()))
}

/// Top-left corner that centres an icon of `size` in `rect`.
pub fn icon_origin(rect: RegionRect, size: (u32, u32)) -> (u32, u32) {
    (rect.x0 + (rect.width() - size.0) / 2, rect.y0 + (rect.height() - size.1) / 2)
}

pub fn load_icon(path: &Path) -> Result<DynamicImage, IconSkip> {
    if !path.is_file() {
        return Err(IconSkip::Missing(path.to_path_buf()));
    }
    open_by_content(path).map_err(|source| IconSkip::Undecodable { path: path.to_path_buf(), source })
}

/// Open an image, choosing the decoder from its leading bytes rather than its extension.
pub fn open_by_content(path: &Path) -> image::ImageResult<DynamicImage> {
    image::io::Reader::open(path)?.with_guessed_format()?.decode()
}

/// Resize `icon` and paste it centred in `rect`. Icons with an alpha channel
/// are composited over the destination, others replace it.
pub fn paste_icon(image: &mut RgbaImage, rect: RegionRect, icon: &DynamicImage, scale: f64) -> Result<(), IconSkip> {
    let (w, h) = icon_size(rect, scale);
    if w == 0 || h == 0 {
        return Err(IconSkip::TooSmall { width: rect.width(), height: rect.height() });
    }
    let resized = imageops::resize(&icon.to_rgba8(), w, h, FilterType::Lanczos3);
    let (ox, oy) = icon_origin(rect, (w, h));
    if icon.color().has_alpha() {
        imageops::overlay(image, &resized, ox as i64, oy as i64);
    } else {
        imageops::replace(image, &resized, ox as i64, oy as i64);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    use crate::render::clear::TRANSPARENT;

    fn region() -> RegionRect { RegionRect { x0: 0, y0: 0, x1: 40, y1: 40 } }

    fn close(a: &Rgba<u8>, b: [u8; 4]) -> bool {
        a.0.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 2)
    }

    fn footprint(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in img.enumerate_pixels() {
            if p.0[3] == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }

    #[test]
    fn sizing_truncates_and_centres() {
        assert_eq!(icon_size(region(), 0.8), (32, 32));
        assert_eq!(icon_origin(region(), (32, 32)), (4, 4));
        let odd = RegionRect { x0: 10, y0: 20, x1: 23, y1: 27 };
        assert_eq!(icon_size(odd, 0.8), (10, 5));
        assert_eq!(icon_origin(odd, (10, 5)), (11, 21));
    }

    #[test]
    fn rgba_icon_lands_centred_at_eighty_percent() {
        let icon = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255])));
        let mut img = RgbaImage::from_pixel(40, 40, TRANSPARENT);
        paste_icon(&mut img, region(), &icon, 0.8).unwrap();
        assert_eq!(footprint(&img), Some((4, 4, 35, 35)));
        assert!(close(img.get_pixel(20, 20), [10, 20, 30, 255]));
    }

    #[test]
    fn transparent_icon_pixels_keep_destination() {
        let mut src = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        src.put_pixel(5, 5, Rgba([200, 0, 0, 255]));
        let icon = DynamicImage::ImageRgba8(src);
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([7, 7, 7, 255]));
        paste_icon(&mut img, RegionRect { x0: 0, y0: 0, x1: 10, y1: 10 }, &icon, 1.0).unwrap();
        assert!(close(img.get_pixel(0, 0), [7, 7, 7, 255]));
    }

    #[test]
    fn opaque_icon_replaces_pixels() {
        let icon = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([50, 60, 70])));
        let mut img = RgbaImage::from_pixel(10, 10, TRANSPARENT);
        paste_icon(&mut img, RegionRect { x0: 0, y0: 0, x1: 10, y1: 10 }, &icon, 0.8).unwrap();
        assert!(close(img.get_pixel(5, 5), [50, 60, 70, 255]));
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn tiny_region_is_skipped() {
        let icon = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let mut img = RgbaImage::new(4, 4);
        let err = paste_icon(&mut img, RegionRect { x0: 0, y0: 0, x1: 1, y1: 1 }, &icon, 0.8).unwrap_err();
        assert!(matches!(err, IconSkip::TooSmall { .. }));
    }

    #[test]
    fn missing_icon_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_icon(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, IconSkip::Missing(_)));
    }

    #[test]
    fn icon_format_comes_from_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("bot.png");
        RgbaImage::from_pixel(6, 6, Rgba([1, 2, 3, 255])).save(&png).unwrap();
        let renamed = dir.path().join("bot.dds");
        std::fs::rename(&png, &renamed).unwrap();
        let icon = load_icon(&renamed).unwrap();
        assert_eq!((icon.width(), icon.height()), (6, 6));
    }

    #[test]
    fn undecodable_icon_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_icon(&path), Err(IconSkip::Undecodable { .. })));
    }
}
