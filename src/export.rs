//! Exporters that turn a generated [WordSearch] into plain text or a
//! standalone SVG image, optionally with the answer key drawn on top.
//!
//! Both exporters return a `String`; writing it to the clipboard, a file, or
//! an HTTP response is the caller's business.

use serde::{Deserialize, Serialize};

use crate::WordSearch;

/// Styling options for [to_svg].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SvgStyle {
    /// The width and height of one grid cell, in pixels.
    pub cell_size: u32,

    /// The font family used for the letters.
    pub font: String,

    /// The background color of the image, as a CSS color.
    pub background_color: String,

    /// The color of the letters, as a CSS color.
    pub text_color: String,

    /// Whether to draw an answer line through every placed word.
    pub show_answers: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            cell_size: 30,
            font: String::from("Arial"),
            background_color: String::from("#ffffff"),
            text_color: String::from("#000000"),
            show_answers: false,
        }
    }
}

/// Renders the grid as plain text: letters separated by single spaces, one
/// line per row. Suitable for pasting into a document or a clipboard.
pub fn to_text(word_search: &WordSearch) -> String {
    word_search
        .grid()
        .rows_iter()
        .map(|row| {
            row.map(|ch| ch.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the puzzle as a standalone SVG document.
///
/// Every letter is centered in its cell as a `<text>` glyph on top of a
/// background rectangle. When `style.show_answers` is set, a red line is also
/// drawn from the center of each placement's start cell to the center of its
/// end cell, so the solution can be overlaid on the same image.
pub fn to_svg(word_search: &WordSearch, style: &SvgStyle) -> String {
    let cell = style.cell_size;
    let width = word_search.num_columns() as u32 * cell;
    let height = word_search.num_rows() as u32 * cell;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    );
    svg.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        style.background_color
    ));

    for (y, row) in word_search.grid().rows_iter().enumerate() {
        for (x, &ch) in row.enumerate() {
            let cx = x as u32 * cell + cell / 2;
            let cy = y as u32 * cell + cell / 2 + 5;

            svg.push_str(&format!(
                r#"<text x="{cx}" y="{cy}" font-family="{}" font-size="20" fill="{}" text-anchor="middle">{ch}</text>"#,
                style.font, style.text_color
            ));
        }
    }

    if style.show_answers {
        for placement in word_search.placements() {
            let (x1, y1) = placement.start;
            let (x2, y2) = placement.end;

            svg.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="red" stroke-width="2"/>"#,
                x1 as u32 * cell + cell / 2,
                y1 as u32 * cell + cell / 2,
                x2 as u32 * cell + cell / 2,
                y2 as u32 * cell + cell / 2,
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}
