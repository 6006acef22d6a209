//! Circle marker: a filled ellipse inset into the region, outlined at half alpha.

use image::{Rgba, RgbaImage};

use crate::resolve::RegionRect;

/// Real-valued inset box `(left, top, right, bottom)`; `inset` of each edge is removed per side.
pub fn inset_box(rect: RegionRect, inset: f64) -> (f64, f64, f64, f64) {
    let dx = rect.width() as f64 * inset;
    let dy = rect.height() as f64 * inset;
    (rect.x0 as f64 + dx, rect.y0 as f64 + dy, rect.x1 as f64 - dx, rect.y1 as f64 - dy)
}

/// Same RGB, alpha halved rounding up (255 -> 128).
pub fn outline_color(fill: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = fill.0;
    Rgba([r, g, b, ((a as u16 + 1) / 2) as u8])
}

struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    // Sampled at pixel centres.
    fn covers(&self, px: i64, py: i64) -> bool {
        let nx = (px as f64 + 0.5 - self.cx) / self.rx;
        let ny = (py as f64 + 0.5 - self.cy) / self.ry;
        nx * nx + ny * ny <= 1.0
    }

    fn on_boundary(&self, px: i64, py: i64) -> bool {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .any(|&(ox, oy)| !self.covers(px + ox, py + oy))
    }
}

/// Draw the circle marker for `rect`. Pixels are written, not blended; the
/// ellipse never leaves `rect` or the image.
///
/// Coverage is sampled at pixel centres, so the far (right and bottom) edge of
/// the inset box is excluded: a 40x40 region covers columns 10..=29. Box-inclusive
/// rasterisers such as PIL's `ellipse` reach column 30 and draw one pixel wider.
pub fn draw_marker_circle(image: &mut RgbaImage, rect: RegionRect, fill: Rgba<u8>, inset: f64) {
    let (left, top, right, bottom) = inset_box(rect, inset);
    let ellipse = Ellipse {
        cx: (left + right) / 2.0,
        cy: (top + bottom) / 2.0,
        rx: (right - left) / 2.0,
        ry: (bottom - top) / 2.0,
    };
    if ellipse.rx <= 0.0 || ellipse.ry <= 0.0 {
        return;
    }
    let outline = outline_color(fill);

    let x_start = (left.floor().max(0.0) as u32).max(rect.x0);
    let y_start = (top.floor().max(0.0) as u32).max(rect.y0);
    let x_end = (right.ceil() as u32).min(rect.x1).min(image.width());
    let y_end = (bottom.ceil() as u32).min(rect.y1).min(image.height());

    for y in y_start..y_end {
        for x in x_start..x_end {
            let (px, py) = (x as i64, y as i64);
            if !ellipse.covers(px, py) {
                continue;
            }
            let color = if ellipse.on_boundary(px, py) { outline } else { fill };
            image.put_pixel(x, y, color);
        }
    }
}
