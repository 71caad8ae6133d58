//! Document assembly
//!
//! Orchestrates the conversion of a page list into a PDF:
//! 1. Validate options and input
//! 2. Render each page's content stream under its page transform
//! 3. Add one sized page per input page, in order, sharing one font
//! 4. Finalize the catalog and serialize

mod io;

pub use io::{generate_pdf, save_pdf};
#[cfg(feature = "serde")]
pub use io::{load_pages, parse_pages};

use crate::constants::FONT_RESOURCE;
use crate::font::FONT;
use crate::geometry::page_size_pt;
use crate::options::RenderOptions;
use crate::render::render_contents;
use crate::types::*;
use crate::validate::validate_pages;
use lopdf::{Dictionary, Document, Object, StringFormat, Stream};

/// Build the complete document in memory.
///
/// Nothing is returned unless every page rendered, so a failed drawing never
/// leaves a partial document behind.
pub fn build_document(pages: &[Page], options: &RenderOptions) -> Result<Document> {
    options.validate()?;
    validate_pages(pages)?;

    let contents = render_contents(pages, options.parallel)?;

    let mut doc = Document::with_version(options.pdf_version.as_str());
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(FONT.dictionary());

    let mut kids = Vec::with_capacity(pages.len());
    for (index, (page, content)) in pages.iter().zip(contents).enumerate() {
        let (width_pt, height_pt) = page_size_pt(page);
        log::debug!(
            "Page {}: {} x {} pt, {} drawings",
            index,
            width_pt,
            height_pt,
            page.drawings.len()
        );

        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let mut fonts = Dictionary::new();
        fonts.set(FONT_RESOURCE, Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width_pt),
                Object::Real(height_pt),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        kids.push(Object::Reference(doc.add_object(page_dict)));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(kids.len() as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut info = Dictionary::new();
    info.set(
        "Producer",
        text_string(concat!("pdf-drawing ", env!("CARGO_PKG_VERSION"))),
    );
    if let Some(title) = &options.title {
        info.set("Title", text_string(title));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    if options.compress {
        doc.compress();
    }

    Ok(doc)
}

/// Convert pages to PDF bytes
pub fn generate_pdf_bytes(pages: &[Page], options: &RenderOptions) -> Result<Vec<u8>> {
    let mut doc = build_document(pages, options)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    log::info!("Finalized {} pages ({} bytes)", pages.len(), bytes.len());
    Ok(bytes)
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
