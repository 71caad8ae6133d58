//! Pixel to point conversion and the per-page coordinate transforms
//!
//! Input coordinates use a top-left origin with y growing downward. PDF user
//! space has its origin bottom-left with y growing upward, so every page gets
//! a single scale + flip transform before any drawing is emitted.

use crate::constants::{PT_PER_PX, px_to_pt};
use crate::types::{Coordinate, Page};
use lopdf::Object;

/// A PDF affine transform `[a b c d e f]`.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Scale by `PT_PER_PX` and flip vertically about the scaled page height.
    ///
    /// Shapes are authored in unscaled y-down pixels and rely on this being
    /// concatenated onto the CTM once, before the first drawing.
    pub fn page_transform(page_height_pt: f32) -> Self {
        Self::new(PT_PER_PX, 0.0, 0.0, -PT_PER_PX, 0.0, page_height_pt)
    }

    /// Text matrix for a run starting at `(x, y)`.
    ///
    /// Only flips y back upright so glyphs are not drawn mirrored. There is no
    /// scale here: text coordinates are translated as-is inside the page
    /// transform.
    pub fn text_placement(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, x, y)
    }

    pub fn apply(&self, point: Coordinate) -> Coordinate {
        Coordinate {
            x: self.a * point.x + self.c * point.y + self.e,
            y: self.b * point.x + self.d * point.y + self.f,
        }
    }

    /// `self` followed by `other` (PDF concatenation order: `self × other`).
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Operands for the `cm` and `Tm` operators
    pub fn operands(&self) -> Vec<Object> {
        vec![
            self.a.into(),
            self.b.into(),
            self.c.into(),
            self.d.into(),
            self.e.into(),
            self.f.into(),
        ]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Output page size in points as `(width, height)`
pub fn page_size_pt(page: &Page) -> (f32, f32) {
    (px_to_pt(page.width), px_to_pt(page.height))
}

/// The content transform for `page`
pub fn page_transform(page: &Page) -> Matrix {
    let (_, height_pt) = page_size_pt(page);
    Matrix::page_transform(height_pt)
}

// =============================================================================
// Tests
// =============================================================================
