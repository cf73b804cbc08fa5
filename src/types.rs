//! Shared types used across logocut.
//! Includes `SourceLayout` (the channel layout an input decoded to) and
//! `BoundingBox` (the half-open content rectangle).
use image::ColorType;

/// Channel layout of a decoded source image, before RGBA normalization.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SourceLayout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
    /// Any layout `image` adds in the future; still normalized through RGBA8.
    Other,
}

impl SourceLayout {
    pub fn channels(&self) -> Option<u8> {
        match self {
            SourceLayout::Luma => Some(1),
            SourceLayout::LumaAlpha => Some(2),
            SourceLayout::Rgb => Some(3),
            SourceLayout::Rgba => Some(4),
            SourceLayout::Other => None,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, SourceLayout::LumaAlpha | SourceLayout::Rgba)
    }
}

impl From<ColorType> for SourceLayout {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => SourceLayout::Luma,
            ColorType::La8 | ColorType::La16 => SourceLayout::LumaAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => SourceLayout::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => SourceLayout::Rgba,
            _ => SourceLayout::Other,
        }
    }
}

impl std::fmt::Display for SourceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLayout::Luma => write!(f, "Luma"),
            SourceLayout::LumaAlpha => write!(f, "LumaAlpha"),
            SourceLayout::Rgb => write!(f, "Rgb"),
            SourceLayout::Rgba => write!(f, "Rgba"),
            SourceLayout::Other => write!(f, "Other"),
        }
    }
}

/// Half-open rectangle in buffer coordinates: `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box spans an entire `width` x `height` buffer.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
