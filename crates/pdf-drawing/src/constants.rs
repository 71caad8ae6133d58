//! Shared constants for page rendering
//!
//! Unit ratios, font metrics scale and the names the output document uses
//! for its shared resources.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per input pixel (1 point = 4/3 pixels)
pub const PT_PER_PX: f32 = 3.0 / 4.0;

/// Convert input pixels to document points
#[inline]
pub fn px_to_pt(px: f32) -> f32 {
    px * PT_PER_PX
}

// =============================================================================
// Font
// =============================================================================

/// Glyph advance widths are expressed in 1/1000 of an em
pub const FONT_UNITS_PER_EM: f32 = 1000.0;

/// Resource name the shared font is registered under on every page
pub const FONT_RESOURCE: &str = "F1";

// =============================================================================
// Line Styles
// =============================================================================

/// Length of the "on" segment of a dotted line's dash pattern
pub const DOT_LENGTH: f32 = 1.0;

// =============================================================================
// Document
// =============================================================================

/// PDF version written when no other is configured
pub const DEFAULT_PDF_VERSION: &str = "1.7";

/// PDF versions accepted by `RenderOptions::validate`
pub const SUPPORTED_PDF_VERSIONS: &[&str] = &["1.4", "1.5", "1.6", "1.7", "2.0"];
