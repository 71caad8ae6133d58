//! Metrics for the single document font
//!
//! Every text drawing is set in the standard-14 Times-Roman font with
//! WinAnsi encoding. The font is never embedded, so all this module needs is
//! the AFM advance widths and the WinAnsi byte for each supported character.

use crate::constants::FONT_UNITS_PER_EM;
use crate::types::{RenderError, Result};
use lopdf::{Dictionary, Object};

/// A character's WinAnsi code and advance width in font design units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub code: u8,
    pub width: u16,
}

/// The fixed Times-Roman font. Stateless; share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimesRoman;

/// The font used for all text drawings
pub const FONT: TimesRoman = TimesRoman;

impl TimesRoman {
    pub const BASE_FONT: &'static str = "Times-Roman";

    /// Look up a character, `None` if the font has no glyph for it
    pub fn glyph(self, ch: char) -> Option<Glyph> {
        let code = u32::from(ch);
        match code {
            // WinAnsi has no nbspace or sfthyphen; 0xA0 and 0xAD are space and hyphen
            0xA0 | 0xAD => None,
            0x20..=0x7E => Some(Glyph {
                code: code as u8,
                width: ASCII_WIDTHS[(code - 0x20) as usize],
            }),
            0xA0..=0xFF => Some(Glyph {
                code: code as u8,
                width: LATIN1_WIDTHS[(code - 0xA0) as usize],
            }),
            _ => WIN_ANSI_EXTRAS
                .iter()
                .find(|(c, _, _)| *c == ch)
                .map(|&(_, code, width)| Glyph { code, width }),
        }
    }

    pub fn char_width(self, ch: char) -> Result<u16> {
        self.glyph(ch)
            .map(|glyph| glyph.width)
            .ok_or(RenderError::UnsupportedGlyph(ch))
    }

    /// Total advance width of `text` in font design units (1000 per em)
    pub fn string_width(self, text: &str) -> Result<f32> {
        text.chars()
            .try_fold(0.0, |total, ch| Ok(total + f32::from(self.char_width(ch)?)))
    }

    /// Rendered advance width of `text` at `font_size`
    pub fn advance_width(self, text: &str, font_size: f32) -> Result<f32> {
        Ok(self.string_width(text)? / FONT_UNITS_PER_EM * font_size)
    }

    /// WinAnsi bytes for a `Tj` string operand
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|ch| {
                self.glyph(ch)
                    .map(|glyph| glyph.code)
                    .ok_or(RenderError::UnsupportedGlyph(ch))
            })
            .collect()
    }

    /// Font dictionary for the document's resources
    pub fn dictionary(self) -> Dictionary {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(Self::BASE_FONT.as_bytes().to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        font_dict
    }
}

// =============================================================================
// Width Tables (Times-Roman AFM)
// =============================================================================

/// U+0020..=U+007E. WinAnsi maps 0x27 to quotesingle and 0x60 to grave.
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// U+00A0..=U+00FF, where WinAnsi and Latin-1 agree. The 0xA0 and 0xAD
/// entries are never looked up.
#[rustfmt::skip]
const LATIN1_WIDTHS: [u16; 96] = [
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

/// WinAnsi 0x80..=0x9F: (character, code, width). No Euro in the core AFM.
const WIN_ANSI_EXTRAS: [(char, u8, u16); 26] = [
    ('\u{201A}', 0x82, 333),
    ('\u{0192}', 0x83, 500),
    ('\u{201E}', 0x84, 444),
    ('\u{2026}', 0x85, 1000),
    ('\u{2020}', 0x86, 500),
    ('\u{2021}', 0x87, 500),
    ('\u{02C6}', 0x88, 333),
    ('\u{2030}', 0x89, 1000),
    ('\u{0160}', 0x8A, 556),
    ('\u{2039}', 0x8B, 333),
    ('\u{0152}', 0x8C, 889),
    ('\u{017D}', 0x8E, 611),
    ('\u{2018}', 0x91, 333),
    ('\u{2019}', 0x92, 333),
    ('\u{201C}', 0x93, 444),
    ('\u{201D}', 0x94, 444),
    ('\u{2022}', 0x95, 350),
    ('\u{2013}', 0x96, 500),
    ('\u{2014}', 0x97, 1000),
    ('\u{02DC}', 0x98, 333),
    ('\u{2122}', 0x99, 980),
    ('\u{0161}', 0x9A, 389),
    ('\u{203A}', 0x9B, 333),
    ('\u{0153}', 0x9C, 722),
    ('\u{017E}', 0x9E, 444),
    ('\u{0178}', 0x9F, 722),
];

// =============================================================================
// Tests
// =============================================================================
