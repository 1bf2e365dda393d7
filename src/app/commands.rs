use std::path::PathBuf;
use crate::core::color::Color;
use crate::format::bitmatrix::{Polarity, Traversal};

/// Shell actions routed onto the engine; pointer coordinates arrive already
/// translated to cell coordinates by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Paint(u32, u32),
    ClearCell(u32, u32),
    Undo,
    Redo,
    ResizeGrid(u32, u32),
    ResetGrid,
    SetBrushColor(Color),
    SetEraser(u32),
    SaveBrush(String),
    RecallBrush(String),
    ExportPng(PathBuf),
    ExportBitmatrix(Traversal, Polarity),
    CopyBitmatrix(Traversal, Polarity),
}
