//! Encoding of individual drawing primitives

use super::canvas::PageCanvas;
use crate::constants::{DOT_LENGTH, FONT_RESOURCE};
use crate::font::FONT;
use crate::geometry::Matrix;
use crate::types::{Color, ColorBox, DottedLine, Drawing, Line, LineStyle, Result, Text};

/// Stroke dash settings for the `d` operator
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    pub array: Vec<f32>,
    pub phase: f32,
}

impl DashPattern {
    pub fn solid() -> Self {
        Self {
            array: Vec::new(),
            phase: 0.0,
        }
    }

    /// Dots approximated as 1-unit dashes spaced `dot_distance` apart
    pub fn dotted(dot_distance: f32) -> Self {
        Self {
            array: vec![DOT_LENGTH, dot_distance],
            phase: 0.0,
        }
    }

    pub fn for_line(line: &DottedLine) -> Result<Self> {
        Ok(match line.line_style()? {
            LineStyle::Solid => Self::solid(),
            LineStyle::Dotted => Self::dotted(line.dot_distance),
        })
    }
}

/// Emit the operators for one drawing onto `canvas`
pub fn render_drawing(canvas: &mut PageCanvas, drawing: &Drawing) -> Result<()> {
    log::trace!("Rendering {}", drawing.kind());
    match drawing {
        Drawing::Line(line) => render_line(canvas, line),
        Drawing::Text(text) => render_text(canvas, text),
        Drawing::ColorBox(color_box) => {
            render_color_box(canvas, color_box);
            Ok(())
        }
    }
}

fn render_line(canvas: &mut PageCanvas, line: &DottedLine) -> Result<()> {
    let dash = DashPattern::for_line(line)?;
    canvas.set_line_width(line.line_width);
    canvas.set_line_dash_pattern(&dash.array, dash.phase);
    stroke_segment(canvas, line);
    Ok(())
}

fn stroke_segment(canvas: &mut PageCanvas, line: &impl Line) {
    let (start, end) = (line.start(), line.end());
    canvas.move_to(start.x, start.y);
    canvas.line_to(end.x, end.y);
    canvas.stroke();
}

fn render_text(canvas: &mut PageCanvas, text: &Text) -> Result<()> {
    let align = text.text_align()?;
    let width = FONT.advance_width(&text.text, text.font_size)?;
    let x_offset = align.offset(width);
    let encoded = FONT.encode(&text.text)?;

    canvas.begin_text();
    canvas.set_font(FONT_RESOURCE, text.font_size);
    // Translation is not scaled to points; the page transform already is
    canvas.set_text_matrix(&Matrix::text_placement(
        text.start.x + x_offset,
        text.start.y,
    ));
    canvas.show_text(encoded);
    canvas.end_text();
    Ok(())
}

fn render_color_box(canvas: &mut PageCanvas, color_box: &ColorBox) {
    canvas.add_rect(
        color_box.top_left.x,
        color_box.top_left.y,
        color_box.size.width,
        color_box.size.height,
    );
    canvas.set_non_stroking_color(color_box.color);
    canvas.fill();
    // Text fill uses the non-stroking color too
    canvas.set_non_stroking_color(Color::BLACK);
}
