use crate::types::*;

/// Count pages and drawings by kind
pub fn calculate_statistics(pages: &[Page]) -> DrawingStatistics {
    let mut stats = DrawingStatistics {
        pages: pages.len(),
        ..Default::default()
    };

    for drawing in pages.iter().flat_map(|page| &page.drawings) {
        match drawing {
            Drawing::Line(line) => match line.line_style() {
                Ok(LineStyle::Solid) => stats.solid_lines += 1,
                Ok(LineStyle::Dotted) => stats.dotted_lines += 1,
                // Not counted; validation reports them
                Err(_) => {}
            },
            Drawing::Text(text) => {
                stats.texts += 1;
                stats.characters += text.text.chars().count();
            }
            Drawing::ColorBox(_) => stats.color_boxes += 1,
        }
    }

    stats
}
