use super::color::Color;
use crate::core::error::{CoreError, Result};
use crate::history::edit::CellEdit;

pub const DEFAULT_WIDTH: u32 = 8;
pub const DEFAULT_HEIGHT: u32 = 8;

#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Option<Color>>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn cell(&self, x: u32, y: u32) -> Result<Option<Color>> {
        if !self.in_bounds(x, y) {
            return Err(CoreError::OutOfBounds { x, y });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Writes a cell without producing an edit record. Undo/redo replays
    /// go through here so the replay itself never enters the history.
    pub fn set_cell_raw(&mut self, x: u32, y: u32, cell: Option<Color>) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(CoreError::OutOfBounds { x, y });
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Painting a cell its current color is not special-cased: the returned
    /// record may carry old_color == new_color.
    pub fn paint(&mut self, x: u32, y: u32, color: Color) -> Result<CellEdit> {
        if !self.in_bounds(x, y) {
            return Err(CoreError::OutOfBounds { x, y });
        }
        let idx = self.index(x, y);
        let previous = self.cells[idx];
        self.cells[idx] = Some(color);
        Ok(CellEdit::new(x, y, previous, Some(color)))
    }

    /// Clears a square neighborhood of side 2*(radius/2)+1 centered at (x, y),
    /// scanned row-major; cells outside the grid are skipped silently.
    pub fn erase_area(&mut self, x: u32, y: u32, radius: u32) -> Vec<CellEdit> {
        let half = (radius / 2) as i32;
        let mut edits = Vec::new();
        for dy in -half..=half {
            for dx in -half..=half {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as u32, ny as u32);
                if !self.in_bounds(nx, ny) {
                    continue;
                }
                let idx = self.index(nx, ny);
                let previous = self.cells[idx];
                self.cells[idx] = None;
                edits.push(CellEdit::new(nx, ny, previous, None));
            }
        }
        edits
    }

    /// Discards all cell state. The caller is responsible for invalidating
    /// any history that references the old cells.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width < 1 || height < 1 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        self.width = width;
        self.height = height;
        self.cells = vec![None; (width * height) as usize];
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridSnapshot {
    pub width: u32,
    pub height: u32,
    cells: Vec<Option<Color>>,
}

impl GridSnapshot {
    pub fn cell(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[(y * self.width + x) as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Option<Color>)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i as u32 % width, i as u32 / width), *c))
    }
}
