// LED matrix panel adapter

use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions};

use crate::canvas::{Canvas, Panel};
use crate::color::Rgb;
use crate::config::PanelConfig;
use crate::framebuffer::Frame;
use crate::raster;

#[inline]
fn led(c: Rgb) -> LedColor {
    LedColor {
        red: c.r,
        green: c.g,
        blue: c.b,
    }
}

/// Chained RGB LED panels as the display surface.
///
/// Composed frames go to the offscreen canvas and flip on vsync. The direct
/// drawing path paints the live canvas instead, which is exactly the
/// tearing-prone fallback the engine expects when no frame buffer exists.
pub struct MatrixPanel {
    matrix: LedMatrix,
    back: Option<LedCanvas>,
    width: i32,
    height: i32,
}

impl MatrixPanel {
    pub fn new(cfg: &PanelConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut options = LedMatrixOptions::new();
        options.set_rows(cfg.rows);
        options.set_cols(cfg.cols);
        options.set_chain_length(cfg.chain);
        options.set_hardware_mapping(&cfg.hardware_mapping);

        let matrix = LedMatrix::new(Some(options), None)?;
        let back = matrix.offscreen_canvas();
        let (width, height) = back.canvas_size();
        log::info!("LED matrix up: {}x{}", width, height);

        Ok(Self {
            matrix,
            back: Some(back),
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Canvas for MatrixPanel {
    fn fill(&mut self, color: Rgb) {
        self.matrix.canvas().fill(&led(color));
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, radius: i32, color: Rgb) {
        let c = led(color);
        let (max_x, max_y) = (self.width, self.height);
        let mut canvas = self.matrix.canvas();
        let mut set = |px: i32, py: i32| {
            if px >= 0 && py >= 0 && px < max_x && py < max_y {
                canvas.set(px, py, &c);
            }
        };
        raster::fill_round_rect(&mut set, x, y, w, h, radius);
    }

    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        let c = led(color);
        let (max_x, max_y) = (self.width, self.height);
        let mut canvas = self.matrix.canvas();
        let mut set = |px: i32, py: i32| {
            if px >= 0 && py >= 0 && px < max_x && py < max_y {
                canvas.set(px, py, &c);
            }
        };
        raster::fill_triangle(&mut set, x0, y0, x1, y1, x2, y2);
    }
}

impl Panel for MatrixPanel {
    fn push_frame(&mut self, frame: &Frame) {
        let Some(mut back) = self.back.take() else {
            return;
        };
        for y in 0..self.height.min(frame.height()) {
            for x in 0..self.width.min(frame.width()) {
                if let Some(c) = frame.pixel(x, y) {
                    back.set(x, y, &led(c));
                }
            }
        }
        // Flip on vsync; the previous front buffer becomes the next back
        self.back = Some(self.matrix.swap(back));
    }
}
