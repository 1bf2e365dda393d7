use crate::core::grid::GridSnapshot;

/// Cell emission order for the bit-matrix listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    RowMajor,
    ColumnMajor,
    RowSerpentine,
    ColumnSerpentine,
}

/// 阳码: filled = 1. 阴码: filled = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Direct,
    Inverted,
}

pub fn scan_order(width: u32, height: u32, traversal: Traversal) -> Vec<(u32, u32)> {
    let mut order = Vec::with_capacity((width * height) as usize);
    match traversal {
        Traversal::RowMajor => {
            for y in 0..height {
                for x in 0..width {
                    order.push((x, y));
                }
            }
        }
        Traversal::ColumnMajor => {
            for x in 0..width {
                for y in 0..height {
                    order.push((x, y));
                }
            }
        }
        Traversal::RowSerpentine => {
            for y in 0..height {
                if y % 2 == 0 {
                    for x in 0..width {
                        order.push((x, y));
                    }
                } else {
                    for x in (0..width).rev() {
                        order.push((x, y));
                    }
                }
            }
        }
        Traversal::ColumnSerpentine => {
            for x in 0..width {
                if x % 2 == 0 {
                    for y in 0..height {
                        order.push((x, y));
                    }
                } else {
                    for y in (0..height).rev() {
                        order.push((x, y));
                    }
                }
            }
        }
    }
    order
}

pub fn encode_bits(snapshot: &GridSnapshot, traversal: Traversal, polarity: Polarity) -> Vec<u8> {
    scan_order(snapshot.width, snapshot.height, traversal)
        .into_iter()
        .map(|(x, y)| {
            let filled = snapshot.cell(x, y).is_some();
            let bit = match polarity {
                Polarity::Direct => filled,
                Polarity::Inverted => !filled,
            };
            u8::from(bit)
        })
        .collect()
}

/// C-style source listing of the grid as a packed bit array.
pub fn render_listing(snapshot: &GridSnapshot, traversal: Traversal, polarity: Polarity) -> String {
    let bits = encode_bits(snapshot, traversal, polarity);
    let joined = bits.iter().map(u8::to_string).collect::<Vec<_>>().join(", ");
    format!(
        "const uint8_t Data[] = {{\n{}\n}};\nconst Image Img = {{{}, {}, Data}};",
        joined, snapshot.width, snapshot.height
    )
}
