//! Content stream rendering
//!
//! Turns a page's drawings into PDF operators:
//! - `PageCanvas` collects operators in paint order
//! - `render_drawing` encodes one primitive
//! - `render_page` opens a canvas under the page transform and drives every drawing

mod canvas;
mod drawing;

pub use canvas::PageCanvas;
pub use drawing::{DashPattern, render_drawing};

use crate::geometry::page_transform;
use crate::types::{Page, Result};

/// Render one page into a canvas.
///
/// `index` is only used to attach context to errors. The first drawing that
/// fails aborts the page.
pub fn render_page(index: usize, page: &Page) -> Result<PageCanvas> {
    let mut canvas = PageCanvas::with_transform(&page_transform(page));
    for (drawing_index, drawing) in page.drawings.iter().enumerate() {
        render_drawing(&mut canvas, drawing).map_err(|e| e.in_drawing(index, drawing_index))?;
    }
    Ok(canvas)
}

/// Encoded content streams for every page, in page order
pub fn render_contents(pages: &[Page], parallel: bool) -> Result<Vec<Vec<u8>>> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;

        return pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| render_page(index, page)?.finish())
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::warn!("Parallel rendering requested but the `parallel` feature is disabled");
    }

    pages
        .iter()
        .enumerate()
        .map(|(index, page)| render_page(index, page)?.finish())
        .collect()
}
