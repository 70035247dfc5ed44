//! Terminal rendering of hash fingerprints

use colored::Colorize;
use hashify_core::ColorGrid;

/// Shown when a digest is too short or not hex
pub const PLACEHOLDER: &str = "Generate a hash to see its visual fingerprint";

/// Cell drawn for one pixel; two columns keep the grid roughly square
const CELL: &str = "██";

/// Render the grid as truecolor blocks, one row per line
pub fn render_blocks(grid: &ColorGrid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|pixel| {
                    let (r, g, b) = pixel.to_rgb();
                    CELL.truecolor(r, g, b).to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the grid as one CSS `hsl(...)` color per line
pub fn render_css(grid: &ColorGrid) -> String {
    grid.pixels()
        .iter()
        .map(|pixel| pixel.to_css())
        .collect::<Vec<_>>()
        .join("\n")
}
