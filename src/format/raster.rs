use crate::core::color::Color;
use crate::core::grid::GridSnapshot;
use crate::format::error::Result;
use std::path::Path;

pub const BACKGROUND: Color = Color::white();
pub const BORDER: Color = Color::black();

/// Renders each cell as a filled rectangle of cell_width x cell_height pixels
/// with a one pixel border; empty cells keep the background color.
pub fn render_rgb(snapshot: &GridSnapshot, cell_width: u32, cell_height: u32) -> Vec<u8> {
    let cw = cell_width.max(1);
    let ch = cell_height.max(1);
    let img_w = snapshot.width * cw;
    let img_h = snapshot.height * ch;
    let mut pixels = vec![0u8; (img_w * img_h * 3) as usize];

    let mut put = |px: u32, py: u32, color: Color| {
        let idx = ((py * img_w + px) * 3) as usize;
        pixels[idx] = color.r;
        pixels[idx + 1] = color.g;
        pixels[idx + 2] = color.b;
    };

    for ((x, y), cell) in snapshot.iter() {
        let fill = cell.unwrap_or(BACKGROUND);
        let (x1, y1) = (x * cw, y * ch);
        let (x2, y2) = (x1 + cw - 1, y1 + ch - 1);
        for py in y1..=y2 {
            for px in x1..=x2 {
                let on_border = px == x1 || px == x2 || py == y1 || py == y2;
                put(px, py, if on_border { BORDER } else { fill });
            }
        }
    }
    pixels
}

pub fn save_png(path: &Path, snapshot: &GridSnapshot, cell_width: u32, cell_height: u32) -> Result<()> {
    let cw = cell_width.max(1);
    let ch = cell_height.max(1);
    let pixels = render_rgb(snapshot, cw, ch);
    image::save_buffer(
        path,
        &pixels,
        snapshot.width * cw,
        snapshot.height * ch,
        image::ColorType::Rgb8,
    )?;
    Ok(())
}
