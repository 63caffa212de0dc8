use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use crate::draw::{BBox, Canvas, Point};
use crate::error::Result;

pub const BACKGROUND: Rgba<u8> = Rgba([102, 126, 234, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const CIRCLE_OUTLINE_PX: u32 = 2;
const SHACKLE_STROKE_PX: u32 = 3;
// Horizontal overhang of the shackle past the lock body, and its drop below the body's top edge.
const SHACKLE_PAD_PX: i32 = 2;

/// Derived constants for one icon size. Ratios are truncated towards zero,
/// halves and quarters use integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: i32,
    pub radius: i32,
    pub shield_size: i32,
    pub lock_width: i32,
    pub lock_height: i32,
    pub lock_x: i32,
    pub lock_y: i32,
    pub shackle_y: i32,
}

fn scaled(size: u32, ratio: f64) -> i32 {
    (size as f64 * ratio) as i32
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let center = (size / 2) as i32;
        let lock_width = scaled(size, 0.15);
        let lock_height = scaled(size, 0.12);
        let lock_x = center - lock_width / 2;
        let lock_y = center - lock_height / 4;
        Self {
            size,
            center,
            radius: scaled(size, 0.4),
            shield_size: scaled(size, 0.3),
            lock_width,
            lock_height,
            lock_x,
            lock_y,
            shackle_y: lock_y - scaled(size, 0.05),
        }
    }

    pub fn background_box(&self) -> BBox {
        let (c, r) = (self.center, self.radius);
        BBox::new(c - r, c - r, c + r, c + r)
    }

    /// Vertical hexagon: top, upper-left, lower-left, bottom, lower-right, upper-right.
    pub fn shield_points(&self) -> [Point; 6] {
        let c = self.center;
        let half = self.shield_size / 2;
        let quarter = self.shield_size / 4;
        [
            (c, c - half),
            (c - half, c - quarter),
            (c - half, c + quarter),
            (c, c + half),
            (c + half, c + quarter),
            (c + half, c - quarter),
        ]
    }

    pub fn lock_body(&self) -> BBox {
        BBox::new(
            self.lock_x,
            self.lock_y,
            self.lock_x + self.lock_width,
            self.lock_y + self.lock_height,
        )
    }

    pub fn shackle_box(&self) -> BBox {
        BBox::new(
            self.lock_x - SHACKLE_PAD_PX,
            self.shackle_y,
            self.lock_x + self.lock_width + SHACKLE_PAD_PX,
            self.lock_y + SHACKLE_PAD_PX,
        )
    }
}

/// Render the shield-and-lock icon at `size` × `size` on a transparent background.
pub fn render_icon(size: u32) -> RgbaImage {
    let g = IconGeometry::for_size(size);
    let mut canvas = Canvas::new(size);

    canvas.ellipse(g.background_box(), Some(BACKGROUND), Some(WHITE), CIRCLE_OUTLINE_PX);
    canvas.polygon(&g.shield_points(), Some(WHITE), Some(BACKGROUND));
    canvas.rectangle(g.lock_body(), BACKGROUND);
    canvas.arc(g.shackle_box(), 0.0, 180.0, BACKGROUND, SHACKLE_STROKE_PX);

    log::debug!("rendered {size}x{size} icon");
    canvas.into_image()
}

/// Encode as an 8-bit RGBA PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ICON_SIZES;

    #[test]
    fn geometry_truncates_like_integer_math() {
        let g = IconGeometry::for_size(16);
        assert_eq!(g.center, 8);
        assert_eq!(g.radius, 6);
        assert_eq!(g.shield_size, 4);
        assert_eq!((g.lock_width, g.lock_height), (2, 1));
        assert_eq!((g.lock_x, g.lock_y), (7, 8));
        assert_eq!(g.shackle_y, 8);

        let g = IconGeometry::for_size(128);
        assert_eq!(g.radius, 51);
        assert_eq!(g.shield_size, 38);
        assert_eq!((g.lock_width, g.lock_height), (19, 15));
        assert_eq!((g.lock_x, g.lock_y), (55, 61));
        assert_eq!(g.shackle_y, 55);
    }

    #[test]
    fn shield_is_symmetric_about_center() {
        let g = IconGeometry::for_size(48);
        let pts = g.shield_points();
        assert_eq!(pts[0], (24, 17));
        assert_eq!(pts[3], (24, 31));
        for (l, r) in [(1, 5), (2, 4)] {
            assert_eq!(pts[l].1, pts[r].1);
            assert_eq!(g.center - pts[l].0, pts[r].0 - g.center);
        }
    }

    #[test]
    fn shackle_sits_above_lock_body() {
        let g = IconGeometry::for_size(128);
        let body = g.lock_body();
        let shackle = g.shackle_box();
        assert_eq!(shackle.x0, body.x0 - 2);
        assert_eq!(shackle.x1, body.x1 + 2);
        assert_eq!(shackle.y0, body.y0 - 6);
        assert_eq!(shackle.y1, body.y0 + 2);
    }

    #[test]
    fn corners_transparent_center_opaque() {
        for size in ICON_SIZES {
            let img = render_icon(size);
            assert_eq!(img.dimensions(), (size, size));
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x},{y}) at {size}px");
            }
            let c = size / 2;
            for y in c - 1..=c + 1 {
                for x in c - 1..=c + 1 {
                    assert_eq!(img.get_pixel(x, y)[3], 255, "center ({x},{y}) at {size}px");
                }
            }
        }
    }

    #[test]
    fn layers_use_expected_colors() {
        let img = render_icon(128);
        // On the circle but outside the shield.
        assert_eq!(*img.get_pixel(64, 20), BACKGROUND);
        // Outer ring of the circle.
        assert_eq!(*img.get_pixel(13, 64), WHITE);
        // Shield face beside the lock.
        assert_eq!(*img.get_pixel(50, 64), WHITE);
        // Lock body.
        assert_eq!(*img.get_pixel(64, 70), BACKGROUND);
    }

    #[test]
    fn tiny_sizes_render() {
        for size in [1, 2, 3, 5] {
            let img = render_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn png_encoding_roundtrips_pixels() {
        let img = render_icon(32);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(back, img);
    }
}
