// Color types and palettes for the eye renderer

/// 8-bit RGB color as composed into a frame and pushed to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// Color palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPalette {
    Forest,      // Green
    Fire,        // Red/Orange
    Ocean,       // Blue/Cyan
    Purple,      // Purple/Pink
    Rainbow,     // Multi-color
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette::Forest
    }
}

impl ColorPalette {
    pub fn next(&self) -> Self {
        match self {
            ColorPalette::Forest => ColorPalette::Fire,
            ColorPalette::Fire => ColorPalette::Ocean,
            ColorPalette::Ocean => ColorPalette::Purple,
            ColorPalette::Purple => ColorPalette::Rainbow,
            ColorPalette::Rainbow => ColorPalette::Forest,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColorPalette::Forest => "Forest (Green)",
            ColorPalette::Fire => "Fire (Red/Orange)",
            ColorPalette::Ocean => "Ocean (Blue/Cyan)",
            ColorPalette::Purple => "Purple/Pink",
            ColorPalette::Rainbow => "Rainbow",
        }
    }

    fn anchors(&self) -> [(u8, u8, u8); 6] {
        match self {
            ColorPalette::Forest => [
                (0, 64, 0), (0, 128, 32), (32, 160, 64),
                (64, 192, 96), (96, 224, 128), (128, 255, 160),
            ],
            ColorPalette::Fire => [
                (64, 16, 0), (128, 32, 0), (192, 64, 0),
                (255, 96, 0), (255, 128, 32), (255, 160, 64),
            ],
            ColorPalette::Ocean => [
                (0, 32, 64), (0, 64, 128), (0, 96, 192),
                (32, 128, 255), (64, 160, 255), (128, 192, 255),
            ],
            ColorPalette::Purple => [
                (64, 0, 64), (128, 0, 128), (160, 32, 160),
                (192, 64, 192), (224, 96, 224), (255, 128, 255),
            ],
            ColorPalette::Rainbow => [
                (255, 0, 0), (255, 128, 0), (255, 255, 0),
                (0, 255, 0), (0, 128, 255), (128, 0, 255),
            ],
        }
    }

    /// Sample the palette at a slowly advancing index for a shimmer effect.
    /// Adjacent anchors are blended so the eye color drifts instead of stepping.
    pub fn shimmer(&self, index: f64) -> Rgb {
        let colors = self.anchors();
        let color_len = colors.len() as f64;

        let normalized = index.abs() % (color_len * 10.0); // Scale for smoother transitions
        let base = (normalized / 10.0) as usize % colors.len();
        let next = (base + 1) % colors.len();
        let blend = (normalized / 10.0) - (base as f64);

        let (r1, g1, b1) = colors[base];
        let (r2, g2, b2) = colors[next];

        // Linear interpolation between adjacent colors
        let r = r1 as f64 + (r2 as f64 - r1 as f64) * blend;
        let g = g1 as f64 + (g2 as f64 - g1 as f64) * blend;
        let b = b1 as f64 + (b2 as f64 - b1 as f64) * blend;

        Rgb::new(r as u8, g as u8, b as u8)
    }
}
