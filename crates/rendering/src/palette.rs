//! Dashboard colour palette.
//!
//! Project colours (dark teal, vibrant green, white) complemented by the
//! partner logo blues.

/// An opaque 8-bit RGB colour, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS/SVG hex notation, e.g. `#0E454A`.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const DARK_TEAL: Rgb = Rgb::new(0x0E, 0x45, 0x4A);
pub const VIBRANT_GREEN: Rgb = Rgb::new(0x1F, 0xFF, 0x5F);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const LIGHT_BLUE: Rgb = Rgb::new(0x00, 0x9B, 0xD3);
pub const DARK_BLUE: Rgb = Rgb::new(0x00, 0x36, 0x6E);

/// Colours bars are drawn from, in palette-cycle order.
pub const CHART_COLORS: [Rgb; 4] = [DARK_TEAL, VIBRANT_GREEN, LIGHT_BLUE, DARK_BLUE];

/// Figure background.
pub const BACKGROUND: Rgb = WHITE;
/// Tick labels, category labels and value annotations.
pub const INK: Rgb = DARK_TEAL;
/// Chart titles and y-axis labels.
pub const HEADING: Rgb = DARK_BLUE;
