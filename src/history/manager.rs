use crate::core::error::{CoreError, Result};
use crate::core::grid::Grid;
use super::edit::CellEdit;

#[derive(Debug, Default)]
pub struct HistoryManager {
    pub undo_stack: Vec<CellEdit>,
    pub redo_stack: Vec<CellEdit>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self { undo_stack: Vec::new(), redo_stack: Vec::new() }
    }

    /// The grid has already been mutated by the caller; this only records.
    /// Any fresh edit invalidates the redo branch.
    pub fn commit(&mut self, edit: CellEdit) {
        self.undo_stack.push(edit);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, grid: &mut Grid) -> Result<CellEdit> {
        let edit = self.undo_stack.pop().ok_or(CoreError::EmptyHistory)?;
        grid.set_cell_raw(edit.x, edit.y, edit.old_color)?;
        self.redo_stack.push(edit);
        Ok(edit)
    }

    pub fn redo(&mut self, grid: &mut Grid) -> Result<CellEdit> {
        let edit = self.redo_stack.pop().ok_or(CoreError::EmptyHistory)?;
        grid.set_cell_raw(edit.x, edit.y, edit.new_color)?;
        self.undo_stack.push(edit);
        Ok(edit)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests;
