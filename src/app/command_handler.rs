use crate::app::commands::AppCommand;
use crate::app::engine::SketchEngine;
use crate::app::error::Result;
use crate::app::io_service::IoService;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    /// Bit-matrix source text, for the shell to display.
    Listing(String),
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(engine: &mut SketchEngine, cmd: AppCommand) -> Result<CommandOutcome> {
        match cmd {
            AppCommand::Paint(x, y) => {
                engine.apply_brush(x, y)?;
            }
            AppCommand::ClearCell(x, y) => {
                engine.erase_area(x, y, 1);
            }
            AppCommand::Undo => engine.undo()?,
            AppCommand::Redo => engine.redo()?,
            AppCommand::ResizeGrid(width, height) => engine.resize(width, height)?,
            AppCommand::ResetGrid => engine.reset(),
            AppCommand::SetBrushColor(color) => engine.set_brush_color(color),
            AppCommand::SetEraser(radius) => engine.set_eraser(radius),
            AppCommand::SaveBrush(name) => engine.save_brush(&name),
            AppCommand::RecallBrush(name) => engine.recall_brush(&name)?,
            AppCommand::ExportPng(path) => engine.export_raster(&path)?,
            AppCommand::ExportBitmatrix(traversal, polarity) => {
                return Ok(CommandOutcome::Listing(engine.export_bitmatrix(traversal, polarity)));
            }
            AppCommand::CopyBitmatrix(traversal, polarity) => {
                let listing = engine.export_bitmatrix(traversal, polarity);
                IoService::copy_to_clipboard(&listing)?;
            }
        }
        Ok(CommandOutcome::Done)
    }
}
