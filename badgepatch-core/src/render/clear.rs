//! Erase pass: wipe a region to fully transparent.

use image::{Rgba, RgbaImage};

use crate::resolve::RegionRect;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Clear `rect` (clipped to the image) to `(0, 0, 0, 0)`.
pub fn clear_rect(image: &mut RgbaImage, rect: RegionRect) {
    let x1 = rect.x1.min(image.width());
    let y1 = rect.y1.min(image.height());
    for y in rect.y0..y1 {
        for x in rect.x0..x1 {
            image.put_pixel(x, y, TRANSPARENT);
        }
    }
}
