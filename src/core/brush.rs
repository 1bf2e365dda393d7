use super::color::Color;

pub const MIN_ERASER_RADIUS: u32 = 1;
pub const MAX_ERASER_RADIUS: u32 = 10;

/// Exactly one of "painting with color" or "erasing" is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub color: Color,
    pub eraser: bool,
    pub eraser_radius: u32,
}

impl Brush {
    pub fn new() -> Self {
        Self {
            color: Color::black(),
            eraser: false,
            eraser_radius: MIN_ERASER_RADIUS,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.eraser = false;
    }

    pub fn set_eraser(&mut self, radius: u32) {
        self.eraser_radius = radius.clamp(MIN_ERASER_RADIUS, MAX_ERASER_RADIUS);
        self.eraser = true;
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}
