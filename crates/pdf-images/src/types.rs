use crate::constants::{INCH_PT, mm_to_pt};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("{} is not a valid image: {reason}", path.display())]
    InvalidImage { path: PathBuf, reason: String },
    #[error("Degenerate layout: {0}")]
    DegenerateLayout(String),
    #[error(
        "No printable area: a {margin}pt margin leaves no room on a {page_width}x{page_height}pt page"
    )]
    NoPrintableArea {
        page_width: f32,
        page_height: f32,
        margin: f32,
    },
    #[error("No images selected for conversion")]
    EmptySelection,
    #[error("No pages were produced")]
    NoPages,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Output page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    /// US Letter, 8.5 x 11 in
    Letter,
    /// ISO A4, 210 x 297 mm
    #[default]
    A4,
    /// US Legal, 8.5 x 14 in
    Legal,
    /// Tabloid, 11 x 17 in
    Tabloid,
    /// ISO A3, 297 x 420 mm
    A3,
}

impl PageSize {
    pub const ALL: [PageSize; 5] = [
        PageSize::Letter,
        PageSize::A4,
        PageSize::Legal,
        PageSize::Tabloid,
        PageSize::A3,
    ];

    /// Page dimensions in points (width, height), portrait
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (8.5 * INCH_PT, 11.0 * INCH_PT),
            PageSize::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
            PageSize::Legal => (8.5 * INCH_PT, 14.0 * INCH_PT),
            PageSize::Tabloid => (11.0 * INCH_PT, 17.0 * INCH_PT),
            PageSize::A3 => (mm_to_pt(297.0), mm_to_pt(420.0)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageSize::Letter => "Letter",
            PageSize::A4 => "A4",
            PageSize::Legal => "Legal",
            PageSize::Tabloid => "Tabloid",
            PageSize::A3 => "A3",
        }
    }

    /// Human readable description with physical size
    pub fn description(self) -> &'static str {
        match self {
            PageSize::Letter => "Letter (8.5x11 in)",
            PageSize::A4 => "A4 (210x297 mm)",
            PageSize::Legal => "Legal (8.5x14 in)",
            PageSize::Tabloid => "Tabloid (11x17 in)",
            PageSize::A3 => "A3 (297x420 mm)",
        }
    }

    /// Parse a page size name, falling back to A4 for anything unknown
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PageSize {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            "legal" => Ok(PageSize::Legal),
            "tabloid" => Ok(PageSize::Tabloid),
            "a3" => Ok(PageSize::A3),
            other => Err(ConvertError::Config(format!("Unknown page size: {other}"))),
        }
    }
}

/// Where the image is placed on its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Fit inside the margins, centered on the page
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Fill the whole page, ignoring aspect ratio and margins
    Stretch,
}

impl Placement {
    pub const ALL: [Placement; 6] = [
        Placement::Center,
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomRight,
        Placement::Stretch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Placement::Center => "Center",
            Placement::TopLeft => "Top-Left",
            Placement::TopRight => "Top-Right",
            Placement::BottomLeft => "Bottom-Left",
            Placement::BottomRight => "Bottom-Right",
            Placement::Stretch => "Stretch",
        }
    }

    pub fn preserves_aspect_ratio(self) -> bool {
        self != Placement::Stretch
    }

    /// Parse a placement name; unrecognized names resolve to `Center`
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Placement {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "center" | "centre" => Ok(Placement::Center),
            "topleft" => Ok(Placement::TopLeft),
            "topright" => Ok(Placement::TopRight),
            "bottomleft" => Ok(Placement::BottomLeft),
            "bottomright" => Ok(Placement::BottomRight),
            "stretch" => Ok(Placement::Stretch),
            _ => Err(ConvertError::Config(format!("Unknown placement: {}", s.trim()))),
        }
    }
}

/// Rectangle where an image is drawn, in points.
///
/// Page space has its origin at the bottom-left corner with y increasing upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawRect {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DrawRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Everything needed to emit one output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDescriptor {
    pub page_width: f32,
    pub page_height: f32,
    pub rect: DrawRect,
}
