// Drawing boundary between the animation engine and display surfaces

use crate::color::Rgb;
use crate::framebuffer::Frame;

/// Filled-shape surface the eye renderer draws on.
///
/// Implementations clip silently: pixels that land outside the surface are
/// dropped, never an error. The engine relies on this when a half-open eye
/// or an eyelid wedge pokes past the screen edge.
pub trait Canvas {
    /// Flood the whole surface with one color.
    fn fill(&mut self, color: Rgb);

    /// Filled rectangle with quarter-circle corners of the given radius.
    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, radius: i32, color: Rgb);

    /// Filled triangle spanned by three vertices.
    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb);
}

/// A physical display surface.
///
/// Beyond shape drawing (used by the direct rendering fallback), a panel can
/// accept a fully composed frame in one call, which is what the engine does
/// when double buffering is available.
pub trait Panel: Canvas {
    /// Present a composed frame. Called at most once per animation tick.
    fn push_frame(&mut self, frame: &Frame);
}
