use crate::core::color::Color;

/// One committed cell mutation; `None` is the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEdit {
    pub x: u32,
    pub y: u32,
    pub old_color: Option<Color>,
    pub new_color: Option<Color>,
}

impl CellEdit {
    pub fn new(x: u32, y: u32, old_color: Option<Color>, new_color: Option<Color>) -> Self {
        Self { x, y, old_color, new_color }
    }
}
