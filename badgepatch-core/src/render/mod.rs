//! Pixel patching: every resolved region is cleared, then its marker is drawn.

pub mod clear;
pub mod ellipse;
pub mod icon;

use std::path::Path;

use image::RgbaImage;

use crate::markers::{Marker, PatchParams};
use crate::resolve::ResolvedRegion;

/// Which regions received a marker and which were left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

pub fn patch_regions(
    image: &mut RgbaImage,
    regions: &[ResolvedRegion<'_>],
    params: &PatchParams,
    asset_dir: &Path,
) -> PatchReport {
    let mut report = PatchReport::default();
    for region in regions {
        clear::clear_rect(image, region.rect);
        match region.marker {
            Marker::Color(fill) => {
                ellipse::draw_marker_circle(image, region.rect, *fill, params.circle_inset);
                log::info!("drew circle: {} -> rgba{:?}", region.name, fill.0);
                report.applied.push(region.name.to_string());
            }
            Marker::Icon(file) => {
                let outcome = icon::load_icon(&asset_dir.join(file))
                    .and_then(|img| icon::paste_icon(image, region.rect, &img, params.icon_scale));
                match outcome {
                    Ok(()) => {
                        log::info!("applied icon: {file} -> {}", region.name);
                        report.applied.push(region.name.to_string());
                    }
                    Err(skip) => {
                        log::warn!("{skip}; leaving {} blank", region.name);
                        report.skipped.push(region.name.to_string());
                    }
                }
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    use crate::markers::MarkerSpec;
    use crate::resolve::RegionRect;

    #[test]
    fn missing_icon_leaves_region_cleared_and_others_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = MarkerSpec::new();
        spec.insert("icon", Marker::icon("ghost.png")).unwrap();
        spec.insert("dot", Marker::rgba(0, 193, 0, 255)).unwrap();
        let markers: Vec<_> = spec.iter().collect();
        let regions = [
            ResolvedRegion { name: "icon", rect: RegionRect { x0: 0, y0: 0, x1: 20, y1: 20 }, marker: markers[0].1 },
            ResolvedRegion { name: "dot", rect: RegionRect { x0: 20, y0: 0, x1: 40, y1: 20 }, marker: markers[1].1 },
        ];
        let mut img = RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255]));

        let report = patch_regions(&mut img, &regions, &PatchParams::default(), dir.path());

        assert_eq!(report.applied, ["dot"]);
        assert_eq!(report.skipped, ["icon"]);
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(img.get_pixel(x, y).0[3], 0);
            }
        }
        assert_eq!(*img.get_pixel(30, 10), Rgba([0, 193, 0, 255]));
    }
}
