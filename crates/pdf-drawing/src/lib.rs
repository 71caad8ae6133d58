pub mod constants;
mod document;
pub mod font;
pub mod geometry;
mod options;
pub mod render;
mod stats;
mod types;
mod validate;

pub use document::{build_document, generate_pdf, generate_pdf_bytes, save_pdf};
#[cfg(feature = "serde")]
pub use document::{load_pages, parse_pages};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
pub use validate::validate_pages;
