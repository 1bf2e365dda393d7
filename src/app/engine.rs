use std::path::Path;

use crate::core::brush::Brush;
use crate::core::color::Color;
use crate::core::error::Result as CoreResult;
use crate::core::grid::{Grid, GridSnapshot, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::palette::Palette;
use crate::format::bitmatrix::{self, Polarity, Traversal};
use crate::format::raster;
use crate::history::manager::HistoryManager;
use crate::app::error::Result;

/// Exported raster edge length the cell size is derived from, matching the
/// on-screen canvas of the original tool.
pub const RASTER_CANVAS_SIZE: u32 = 800;

/// The whole model owned as one object; the UI shell drives it by reference.
pub struct SketchEngine {
    grid: Grid,
    history: HistoryManager,
    brush: Brush,
    palette: Palette,
}

impl SketchEngine {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default grid size is valid")
    }

    pub fn with_size(width: u32, height: u32) -> CoreResult<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            history: HistoryManager::new(),
            brush: Brush::new(),
            palette: Palette::new(),
        })
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn brush(&self) -> &Brush { &self.brush }
    pub fn palette(&self) -> &Palette { &self.palette }

    /// One pointer event: paints with the brush color, or erases when the
    /// brush is in eraser mode. A drag is a sequence of these calls, one per
    /// motion event; cells skipped by a fast drag stay untouched.
    pub fn apply_brush(&mut self, x: u32, y: u32) -> CoreResult<()> {
        if self.brush.eraser {
            self.erase_area(x, y, self.brush.eraser_radius);
            Ok(())
        } else {
            self.paint(x, y, self.brush.color)
        }
    }

    pub fn paint(&mut self, x: u32, y: u32, color: Color) -> CoreResult<()> {
        let edit = self.grid.paint(x, y, color)?;
        self.history.commit(edit);
        Ok(())
    }

    /// One edit record per affected cell; undo steps back cell by cell.
    pub fn erase_area(&mut self, x: u32, y: u32, radius: u32) -> usize {
        let edits = self.grid.erase_area(x, y, radius);
        let count = edits.len();
        for edit in edits {
            self.history.commit(edit);
        }
        count
    }

    pub fn undo(&mut self) -> CoreResult<()> {
        self.history.undo(&mut self.grid).map(|_| ())
    }

    pub fn redo(&mut self) -> CoreResult<()> {
        self.history.redo(&mut self.grid).map(|_| ())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> CoreResult<()> {
        self.grid.resize(width, height)?;
        self.history.clear();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.set_color(color);
    }

    pub fn set_eraser(&mut self, radius: u32) {
        self.brush.set_eraser(radius);
    }

    pub fn save_brush(&mut self, name: &str) {
        self.palette.save(name, self.brush.color);
    }

    /// Recalling a saved color also leaves eraser mode.
    pub fn recall_brush(&mut self, name: &str) -> CoreResult<()> {
        let color = self.palette.get(name)?;
        self.brush.set_color(color);
        Ok(())
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn export_raster(&self, path: &Path) -> Result<()> {
        let cell_w = (RASTER_CANVAS_SIZE / self.grid.width()).max(1);
        let cell_h = (RASTER_CANVAS_SIZE / self.grid.height()).max(1);
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        raster::save_png(path, &self.grid.snapshot(), cell_w, cell_h)?;
        Ok(())
    }

    pub fn export_bitmatrix(&self, traversal: Traversal, polarity: Polarity) -> String {
        bitmatrix::render_listing(&self.grid.snapshot(), traversal, polarity)
    }
}

impl Default for SketchEngine {
    fn default() -> Self {
        Self::new()
    }
}
