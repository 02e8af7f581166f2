use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel format of a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Three 8-bit channels.
    #[default]
    #[serde(alias = "RGB")]
    Rgb,
    /// Single 8-bit channel.
    #[serde(alias = "l", alias = "L")]
    Gray,
    /// Single 1-bit channel holding 0 or 1.
    #[serde(alias = "1")]
    Binary,
}

impl Mode {
    pub fn channels(self) -> usize {
        match self {
            Mode::Rgb => 3,
            Mode::Gray | Mode::Binary => 1,
        }
    }

    /// Exclusive upper bound of a channel value.
    pub fn max_value(self) -> u32 {
        match self {
            Mode::Binary => 2,
            Mode::Rgb | Mode::Gray => 256,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Rgb => "RGB",
            Mode::Gray => "L",
            Mode::Binary => "1",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Mode::Rgb),
            "l" | "gray" | "grey" => Ok(Mode::Gray),
            "1" | "binary" => Ok(Mode::Binary),
            other => Err(format!("Unknown mode '{other}' (expected rgb, l or 1)")),
        }
    }
}

/// Concrete color of a pixel, resolved for a particular mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PixelColor {
    Rgb([u8; 3]),
    /// Gray level, or 0/1 on binary canvases.
    Luma(u8),
}

impl PixelColor {
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            PixelColor::Rgb(c) => c,
            PixelColor::Luma(v) => [v; 3],
        }
    }

    /// Gray level using the ITU-R 601-2 luma transform for RGB input.
    pub fn to_luma(self) -> u8 {
        match self {
            PixelColor::Rgb([r, g, b]) => {
                ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
            }
            PixelColor::Luma(v) => v,
        }
    }
}

/// The five shape families that can be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Rectangle,
    Square,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Polygon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown shape kind '{s}'"))
    }
}
