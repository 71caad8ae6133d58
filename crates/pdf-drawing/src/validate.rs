//! Structural checks run before any page is rendered

use crate::font::FONT;
use crate::types::*;

/// Check every page and drawing against the model's invariants.
///
/// Numeric problems are reported as `MalformedInput`. Unknown styles and
/// alignments, and characters the font cannot set, report their own errors
/// so they surface before rendering starts.
pub fn validate_pages(pages: &[Page]) -> Result<()> {
    for (page_index, page) in pages.iter().enumerate() {
        if !is_positive(page.width) || !is_positive(page.height) {
            return Err(RenderError::MalformedInput(format!(
                "page {}: size must be positive, got {} x {}",
                page_index, page.width, page.height
            )));
        }

        for (drawing_index, drawing) in page.drawings.iter().enumerate() {
            validate_drawing(drawing).map_err(|e| e.in_drawing(page_index, drawing_index))?;
        }
    }
    Ok(())
}

fn validate_drawing(drawing: &Drawing) -> Result<()> {
    match drawing {
        Drawing::Line(line) => {
            check_coordinate("start", line.start)?;
            check_coordinate("end", line.end)?;
            if !is_positive(line.line_width) {
                return Err(malformed("lineWidth", line.line_width));
            }
            if line.line_style()? == LineStyle::Dotted && !is_positive(line.dot_distance) {
                return Err(malformed("dotDistance", line.dot_distance));
            }
        }
        Drawing::Text(text) => {
            check_coordinate("start", text.start)?;
            if !is_positive(text.font_size) {
                return Err(malformed("fontSize", text.font_size));
            }
            text.text_align()?;
            FONT.string_width(&text.text)?;
        }
        Drawing::ColorBox(color_box) => {
            check_coordinate("topLeft", color_box.top_left)?;
            if !color_box.size.width.is_finite() || !color_box.size.height.is_finite() {
                return Err(RenderError::MalformedInput(format!(
                    "size must be finite, got {} x {}",
                    color_box.size.width, color_box.size.height
                )));
            }
        }
    }
    Ok(())
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn check_coordinate(field: &str, point: Coordinate) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(RenderError::MalformedInput(format!(
            "{} must be finite, got ({}, {})",
            field, point.x, point.y
        )))
    }
}

fn malformed(field: &str, value: f32) -> RenderError {
    RenderError::MalformedInput(format!("{} must be positive, got {}", field, value))
}
