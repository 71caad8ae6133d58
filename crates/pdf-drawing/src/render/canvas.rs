//! Operator sink for one page's content stream

use crate::geometry::Matrix;
use crate::types::{Color, Result};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Append-only list of content stream operators for a single page.
///
/// Method names follow the PDF operators they emit.
#[derive(Debug, Default)]
pub struct PageCanvas {
    operations: Vec<Operation>,
}

impl PageCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas with `matrix` already concatenated onto the CTM
    pub fn with_transform(matrix: &Matrix) -> Self {
        let mut canvas = Self::new();
        canvas.transform(matrix);
        canvas
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    /// `cm`
    pub fn transform(&mut self, matrix: &Matrix) {
        self.push("cm", matrix.operands());
    }

    /// `w`
    pub fn set_line_width(&mut self, width: f32) {
        self.push("w", vec![width.into()]);
    }

    /// `d`. An empty `array` means a solid stroke.
    pub fn set_line_dash_pattern(&mut self, array: &[f32], phase: f32) {
        let array = array.iter().map(|&len| Object::from(len)).collect::<Vec<_>>();
        self.push("d", vec![Object::Array(array), phase.into()]);
    }

    /// `m`
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.push("m", vec![x.into(), y.into()]);
    }

    /// `l`
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.push("l", vec![x.into(), y.into()]);
    }

    /// `re`
    pub fn add_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push("re", vec![x.into(), y.into(), width.into(), height.into()]);
    }

    /// `S`
    pub fn stroke(&mut self) {
        self.push("S", vec![]);
    }

    /// `f`
    pub fn fill(&mut self) {
        self.push("f", vec![]);
    }

    /// `rg`
    pub fn set_non_stroking_color(&mut self, color: Color) {
        self.push("rg", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    /// `BT`
    pub fn begin_text(&mut self) {
        self.push("BT", vec![]);
    }

    /// `Tf`
    pub fn set_font(&mut self, resource: &str, size: f32) {
        self.push(
            "Tf",
            vec![Object::Name(resource.as_bytes().to_vec()), size.into()],
        );
    }

    /// `Tm`
    pub fn set_text_matrix(&mut self, matrix: &Matrix) {
        self.push("Tm", matrix.operands());
    }

    /// `Tj` with already-encoded bytes
    pub fn show_text(&mut self, encoded: Vec<u8>) {
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
    }

    /// `ET`
    pub fn end_text(&mut self) {
        self.push("ET", vec![]);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_content(self) -> Content {
        Content {
            operations: self.operations,
        }
    }

    /// Close the canvas into encoded content stream bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.into_content().encode()?)
    }
}
