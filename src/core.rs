pub mod error;
pub mod color;
pub mod grid;
pub mod palette;
pub mod brush;
