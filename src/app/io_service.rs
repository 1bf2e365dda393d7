use std::path::PathBuf;

use crate::app::error::Result;

pub const EXPORT_DIR: &str = "img";

pub struct IoService;

impl IoService {
    /// Default raster export target: img/<timestamp>.png, like 20260824153000.png.
    pub fn default_export_path() -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        PathBuf::from(EXPORT_DIR).join(format!("{stamp}.png"))
    }

    pub fn copy_to_clipboard(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
