use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown style: {0}")]
    UnknownLineStyle(String),
    #[error("Unknown align: {0}")]
    UnknownTextAlign(String),
    #[error("Unsupported glyph {0:?} (U+{code:04X})", code = u32::from(*.0))]
    UnsupportedGlyph(char),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Page {page}, drawing {drawing}: {source}")]
    Drawing {
        page: usize,
        drawing: usize,
        source: Box<RenderError>,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl RenderError {
    /// Attach the owning page and drawing index
    pub fn in_drawing(self, page: usize, drawing: usize) -> Self {
        RenderError::Drawing {
            page,
            drawing,
            source: Box::new(self),
        }
    }

    /// The error with any page/drawing context stripped
    pub fn root_cause(&self) -> &RenderError {
        match self {
            RenderError::Drawing { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// A point in page-pixel space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RGB color, each component nominally in `[0, 1]`.
///
/// Out-of-range components are passed through to the document unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One input page. Width and height are in pixels; `drawings` is paint order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub drawings: Vec<Drawing>,
}

impl Page {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            drawings: Vec::new(),
        }
    }

    pub fn with_drawing(mut self, drawing: impl Into<Drawing>) -> Self {
        self.drawings.push(drawing.into());
        self
    }
}

/// Drawing primitives, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Drawing {
    Line(DottedLine),
    Text(Text),
    ColorBox(ColorBox),
}

impl Drawing {
    pub fn kind(&self) -> &'static str {
        match self {
            Drawing::Line(_) => "line",
            Drawing::Text(_) => "text",
            Drawing::ColorBox(_) => "colorbox",
        }
    }
}

impl From<DottedLine> for Drawing {
    fn from(line: DottedLine) -> Self {
        Drawing::Line(line)
    }
}

impl From<Text> for Drawing {
    fn from(text: Text) -> Self {
        Drawing::Text(text)
    }
}

impl From<ColorBox> for Drawing {
    fn from(color_box: ColorBox) -> Self {
        Drawing::ColorBox(color_box)
    }
}

/// Anything stroked as a single straight segment
pub trait Line {
    fn start(&self) -> Coordinate;
    fn end(&self) -> Coordinate;
    fn line_width(&self) -> f32;
}

/// The one concrete line shape. `style` picks solid or dotted rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DottedLine {
    pub start: Coordinate,
    pub end: Coordinate,
    pub line_width: f32,
    /// Gap between dots; only meaningful for dotted lines
    #[cfg_attr(feature = "serde", serde(default))]
    pub dot_distance: f32,
    pub style: String,
}

impl DottedLine {
    pub fn solid(start: Coordinate, end: Coordinate, line_width: f32) -> Self {
        Self {
            start,
            end,
            line_width,
            dot_distance: 0.0,
            style: LineStyle::Solid.as_str().to_string(),
        }
    }

    pub fn dotted(start: Coordinate, end: Coordinate, line_width: f32, dot_distance: f32) -> Self {
        Self {
            start,
            end,
            line_width,
            dot_distance,
            style: LineStyle::Dotted.as_str().to_string(),
        }
    }

    pub fn line_style(&self) -> Result<LineStyle> {
        self.style.parse()
    }
}

impl Line for DottedLine {
    fn start(&self) -> Coordinate {
        self.start
    }

    fn end(&self) -> Coordinate {
        self.end
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dotted => "dotted",
        }
    }
}

impl FromStr for LineStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solid" => Ok(LineStyle::Solid),
            "dotted" => Ok(LineStyle::Dotted),
            other => Err(RenderError::UnknownLineStyle(other.to_string())),
        }
    }
}

/// A single-line text run in the fixed document font
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Text {
    pub start: Coordinate,
    pub font_size: f32,
    pub text: String,
    pub align: String,
}

impl Text {
    pub fn new(start: Coordinate, font_size: f32, text: impl Into<String>, align: TextAlign) -> Self {
        Self {
            start,
            font_size,
            text: text.into(),
            align: align.as_str().to_string(),
        }
    }

    pub fn text_align(&self) -> Result<TextAlign> {
        self.align.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    /// Horizontal shift applied to the start point for a run `width` wide
    pub fn offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }
}

impl FromStr for TextAlign {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            other => Err(RenderError::UnknownTextAlign(other.to_string())),
        }
    }
}

/// A filled rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorBox {
    pub top_left: Coordinate,
    pub size: Size,
    pub color: Color,
}

impl ColorBox {
    pub fn new(top_left: Coordinate, size: Size, color: Color) -> Self {
        Self {
            top_left,
            size,
            color,
        }
    }
}

/// Summary of an input description
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingStatistics {
    pub pages: usize,
    pub solid_lines: usize,
    pub dotted_lines: usize,
    pub texts: usize,
    pub color_boxes: usize,
    /// Total characters across all text drawings
    pub characters: usize,
}

impl DrawingStatistics {
    pub fn drawings(&self) -> usize {
        self.solid_lines + self.dotted_lines + self.texts + self.color_boxes
    }
}
