//! Minimal raster primitives on top of `image::RgbaImage`.
//!
//! Coverage is decided per pixel: a pixel belongs to a shape when its center
//! lies inside it. There is no anti-aliasing, so output is exact and
//! reproducible. Everything is clipped to the canvas.

use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Integer pixel coordinate. Polygon vertices sit on pixel centers.
pub type Point = (i32, i32);

/// Inclusive pixel box covering `x0..=x1` and `y0..=y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    fn inscribed_ellipse(&self) -> Ellipse {
        Ellipse {
            cx: (self.x0 + self.x1 + 1) as f32 * 0.5,
            cy: (self.y0 + self.y1 + 1) as f32 * 0.5,
            rx: (self.x1 - self.x0 + 1) as f32 * 0.5,
            ry: (self.y1 - self.y0 + 1) as f32 * 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    fn shrink(self, by: f32) -> Self {
        Self { rx: self.rx - by, ry: self.ry - by, ..self }
    }

    fn contains(&self, px: f32, py: f32) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let dx = (px - self.cx) / self.rx;
        let dy = (py - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Clockwise from the +x axis (y grows downwards), in `[0, 360)`.
    fn angle_of(&self, px: f32, py: f32) -> f32 {
        let a = (py - self.cy).atan2(px - self.cx).to_degrees();
        if a < 0.0 { a + 360.0 } else { a }
    }
}

/// Square RGBA drawing surface, fully transparent when created.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self { img: RgbaImage::new(size, size) }
    }

    #[cfg(test)]
    fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i32, y: i32, c: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.img.width() && y < self.img.height() {
            self.img.put_pixel(x, y, c);
        }
    }

    fn clip(lo: i32, hi: i32, limit: u32) -> Range<i32> {
        let limit = i32::try_from(limit).unwrap_or(i32::MAX);
        lo.max(0)..hi.saturating_add(1).min(limit)
    }

    fn rows_cols(&self, b: BBox) -> (Range<i32>, Range<i32>) {
        (
            Self::clip(b.y0, b.y1, self.img.height()),
            Self::clip(b.x0, b.x1, self.img.width()),
        )
    }

    /// Filled rectangle, both corners inclusive.
    pub fn rectangle(&mut self, bbox: BBox, fill: Rgba<u8>) {
        let (rows, cols) = self.rows_cols(bbox);
        for y in rows {
            for x in cols.clone() {
                self.put(x, y, fill);
            }
        }
    }

    /// Ellipse inscribed in `bbox`. The outline is `width` px wide and lies
    /// inside the box; the fill covers the rest.
    pub fn ellipse(&mut self, bbox: BBox, fill: Option<Rgba<u8>>, outline: Option<Rgba<u8>>, width: u32) {
        let outer = bbox.inscribed_ellipse();
        let inner = outer.shrink(width as f32);
        let (rows, cols) = self.rows_cols(bbox);
        for y in rows {
            for x in cols.clone() {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                if !outer.contains(px, py) {
                    continue;
                }
                let color = match outline {
                    Some(o) if width > 0 && !inner.contains(px, py) => Some(o),
                    _ => fill,
                };
                if let Some(c) = color {
                    self.put(x, y, c);
                }
            }
        }
    }

    /// Ring segment of the ellipse inscribed in `bbox`, swept clockwise from
    /// `start` to `end` degrees. Stroke is `width` px wide, at least one.
    pub fn arc(&mut self, bbox: BBox, start: f32, end: f32, color: Rgba<u8>, width: u32) {
        let outer = bbox.inscribed_ellipse();
        let inner = outer.shrink(width.max(1) as f32);
        let (rows, cols) = self.rows_cols(bbox);
        for y in rows {
            for x in cols.clone() {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                if !outer.contains(px, py) || inner.contains(px, py) {
                    continue;
                }
                if in_sweep(outer.angle_of(px, py), start, end) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Convex polygon. The outline is a closed 1 px path through the vertices.
    pub fn polygon(&mut self, points: &[Point], fill: Option<Rgba<u8>>, outline: Option<Rgba<u8>>) {
        if points.is_empty() {
            return;
        }
        if let Some(c) = fill {
            let (rows, cols) = self.rows_cols(bounds_of(points));
            for y in rows {
                for x in cols.clone() {
                    if inside_convex(points, x, y) {
                        self.put(x, y, c);
                    }
                }
            }
        }
        if let Some(c) = outline {
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                self.line(a, b, c);
            }
        }
    }

    /// Bresenham line, both endpoints included.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba<u8>) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

fn in_sweep(angle: f32, start: f32, end: f32) -> bool {
    let span = end - start;
    if span >= 360.0 {
        return true;
    }
    (angle - start).rem_euclid(360.0) <= span
}

fn bounds_of(points: &[Point]) -> BBox {
    let mut b = BBox::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
    for &(x, y) in points {
        b.x0 = b.x0.min(x);
        b.y0 = b.y0.min(y);
        b.x1 = b.x1.max(x);
        b.y1 = b.y1.max(y);
    }
    b
}

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 {
    ax * by - ay * bx
}

// Points on an edge count as inside, so the fill reaches the outline.
fn inside_convex(points: &[Point], px: i32, py: i32) -> bool {
    let mut has_neg = false;
    let mut has_pos = false;
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        let c = cross(
            (x2 - x1) as i64,
            (y2 - y1) as i64,
            (px - x1) as i64,
            (py - y1) as i64,
        );
        if c < 0 {
            has_neg = true;
        } else if c > 0 {
            has_pos = true;
        }
    }
    !(has_neg && has_pos)
}
