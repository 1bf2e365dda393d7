use super::color::Color;
use crate::core::error::{CoreError, Result};

/// Named brush colors, kept in insertion order for menu display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    entries: Vec<(String, Color)>,
}

impl Palette {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Saving under an existing name overwrites silently and keeps the
    /// entry's original position.
    pub fn save(&mut self, name: &str, color: Color) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = color;
        } else {
            self.entries.push((name.to_string(), color));
        }
    }

    pub fn get(&self, name: &str) -> Result<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .ok_or_else(|| CoreError::PaletteNotFound(name.to_string()))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
