// Off-surface frame buffer for flicker-free composition

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::raster;

/// In-memory pixel buffer the engine composes each tick before handing the
/// finished image to a panel in one push.
pub struct Frame {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Allocate a frame, or `None` when the buffer does not fit in memory.
    /// Callers are expected to fall back to direct rendering in that case.
    pub fn try_new(width: i32, height: i32) -> Option<Frame> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let len = (width as usize).checked_mul(height as usize)?;
        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            return None;
        }
        pixels.resize(len, Rgb::BLACK);
        Some(Frame { width, height, pixels })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Read one pixel; `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Rgb) {
        // Out-of-range pixels are clipped, not errors
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

impl Canvas for Frame {
    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, radius: i32, color: Rgb) {
        raster::fill_round_rect(&mut |px, py| self.set(px, py, color), x, y, w, h, radius);
    }

    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        raster::fill_triangle(&mut |px, py| self.set(px, py, color), x0, y0, x1, y1, x2, y2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(Frame::try_new(0, 16).is_none());
        assert!(Frame::try_new(16, -1).is_none());
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut f = Frame::try_new(4, 3).unwrap();
        f.fill(Rgb::WHITE);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(f.pixel(x, y), Some(Rgb::WHITE));
            }
        }
    }

    #[test]
    fn round_rect_rounds_corners_and_fills_center() {
        let mut f = Frame::try_new(20, 20).unwrap();
        f.fill_round_rect(2, 2, 12, 12, 5, Rgb::WHITE);
        // Extreme corner pixel is outside the corner circle
        assert_eq!(f.pixel(2, 2), Some(Rgb::BLACK));
        // Center and edge midpoints are filled
        assert_eq!(f.pixel(8, 8), Some(Rgb::WHITE));
        assert_eq!(f.pixel(8, 2), Some(Rgb::WHITE));
        assert_eq!(f.pixel(2, 8), Some(Rgb::WHITE));
    }

    #[test]
    fn zero_radius_is_a_plain_rectangle() {
        let mut f = Frame::try_new(10, 10).unwrap();
        f.fill_round_rect(1, 1, 4, 4, 0, Rgb::WHITE);
        assert_eq!(f.pixel(1, 1), Some(Rgb::WHITE));
        assert_eq!(f.pixel(4, 4), Some(Rgb::WHITE));
        assert_eq!(f.pixel(5, 5), Some(Rgb::BLACK));
    }

    #[test]
    fn shapes_clip_silently_at_the_edges() {
        let mut f = Frame::try_new(8, 8).unwrap();
        // Pokes past three sides; must neither panic nor wrap around
        f.fill_round_rect(-4, -4, 20, 6, 2, Rgb::WHITE);
        f.fill_triangle(-10, 2, 30, 2, 4, 40, Rgb::WHITE);
        assert_eq!(f.pixel(0, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn triangle_fills_its_half_plane_only() {
        let mut f = Frame::try_new(10, 10).unwrap();
        // Right triangle with the square corner at the origin
        f.fill_triangle(0, 0, 8, 0, 0, 8, Rgb::WHITE);
        assert_eq!(f.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(f.pixel(1, 1), Some(Rgb::WHITE));
        // Far side of the hypotenuse stays untouched
        assert_eq!(f.pixel(7, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut f = Frame::try_new(6, 6).unwrap();
        f.fill_triangle(1, 1, 3, 3, 5, 5, Rgb::WHITE);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(f.pixel(x, y), Some(Rgb::BLACK));
            }
        }
    }
}
