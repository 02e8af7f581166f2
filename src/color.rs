//! Fill colors: explicit values, per-channel tuples, or uniform random draws.
//!
//! A [`Color`] is a request; it becomes a concrete [`PixelColor`] only once it
//! is resolved against a canvas [`Mode`]. Random colors are re-drawn on every
//! resolution, so one `Color::RandomUniform` can paint many different shapes.
use crate::error::{Error, Result};
use crate::types::{Mode, PixelColor};
use rand::Rng;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub enum Color {
    /// Native single value: packed `0xBBGGRR` in RGB mode, a gray level
    /// otherwise. Binary mode treats any non-zero level as on.
    Scalar(u32),
    /// One value per channel of the target mode.
    Channels(Vec<u8>),
    /// Independent uniform value per channel in `[0, mode.max_value())`.
    #[default]
    RandomUniform,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Channels(vec![r, g, b])
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Color::RandomUniform)
    }

    /// Resolve to a concrete pixel for `mode`, drawing from `rng` when random.
    pub fn resolve<R: Rng + ?Sized>(&self, mode: Mode, rng: &mut R) -> Result<PixelColor> {
        match self {
            Color::Scalar(value) => scalar_pixel(*value, mode),
            Color::Channels(channels) => {
                if channels.len() != mode.channels() {
                    return Err(Error::ChannelMismatch {
                        mode,
                        expected: mode.channels(),
                        got: channels.len(),
                    });
                }
                Ok(match mode {
                    Mode::Rgb => PixelColor::Rgb([channels[0], channels[1], channels[2]]),
                    Mode::Gray => PixelColor::Luma(channels[0]),
                    Mode::Binary => PixelColor::Luma(u8::from(channels[0] != 0)),
                })
            }
            Color::RandomUniform => Ok(random_pixel(mode, rng)),
        }
    }
}

/// Uniform random pixel, each channel drawn independently.
pub fn random_pixel<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> PixelColor {
    let max = mode.max_value();
    let mut draw = || rng.gen_range(0..max) as u8;
    match mode {
        Mode::Rgb => PixelColor::Rgb([draw(), draw(), draw()]),
        Mode::Gray | Mode::Binary => PixelColor::Luma(draw()),
    }
}

fn scalar_pixel(value: u32, mode: Mode) -> Result<PixelColor> {
    let limit = match mode {
        Mode::Rgb => 0xFF_FFFF,
        Mode::Gray | Mode::Binary => 0xFF,
    };
    if value > limit {
        return Err(Error::ColorOutOfRange { value, mode });
    }
    Ok(match mode {
        Mode::Rgb => PixelColor::Rgb([value as u8, (value >> 8) as u8, (value >> 16) as u8]),
        Mode::Gray => PixelColor::Luma(value as u8),
        Mode::Binary => PixelColor::Luma(u8::from(value != 0)),
    })
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::Scalar(u32::from(value))
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::Channels(value.to_vec())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `random`, `#gg`, a decimal scalar, a comma-separated channel
    /// list such as `10,20,30`, or any CSS color (`#rrggbb`, `#rgb`,
    /// `rgb(…)`, `hsl(…)`, names such as `teal`). CSS colors resolve to RGB
    /// channels; alpha is dropped.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let unknown = || Error::UnknownColor(s.to_string());
        if text.eq_ignore_ascii_case("random") {
            return Ok(Color::RandomUniform);
        }
        if let Some(gray) = text.strip_prefix('#').and_then(parse_gray_hex) {
            return Ok(Color::Scalar(u32::from(gray)));
        }
        if text.starts_with(|c: char| c.is_ascii_digit()) && text.contains(',') {
            let channels = text
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| unknown())?;
            return Ok(Color::Channels(channels));
        }
        if let Ok(value) = text.parse::<u32>() {
            return Ok(Color::Scalar(value));
        }
        let [r, g, b, _] = csscolorparser::parse(text).map_err(|_| unknown())?.to_rgba8();
        Ok(Color::rgb(r, g, b))
    }
}

fn parse_gray_hex(hex: &str) -> Option<u8> {
    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Scalar(u32),
    Channels(Vec<u8>),
    Text(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self> {
        match repr {
            ColorRepr::Scalar(v) => Ok(Color::Scalar(v)),
            ColorRepr::Channels(c) => Ok(Color::Channels(c)),
            ColorRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rgb_scalar_is_packed_bgr() {
        let mut rng = StdRng::seed_from_u64(1);
        let resolve = |v: u32, rng: &mut StdRng| Color::Scalar(v).resolve(Mode::Rgb, rng);
        assert_eq!(resolve(200, &mut rng).unwrap(), PixelColor::Rgb([200, 0, 0]));
        assert_eq!(resolve(0x0080ff, &mut rng).unwrap(), PixelColor::Rgb([255, 128, 0]));
        assert_eq!(resolve(0xFF_FFFF, &mut rng).unwrap(), PixelColor::Rgb([255; 3]));
        let err = resolve(0x100_0000, &mut rng).unwrap_err();
        assert!(matches!(err, Error::ColorOutOfRange { value: 0x100_0000, mode: Mode::Rgb }));
    }

    #[test]
    fn binary_scalar_is_on_when_non_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for (value, level) in [(0, 0), (1, 1), (2, 1), (255, 1)] {
            assert_eq!(
                Color::Scalar(value).resolve(Mode::Binary, &mut rng).unwrap(),
                PixelColor::Luma(level)
            );
        }
        assert_eq!(
            Color::Channels(vec![255]).resolve(Mode::Binary, &mut rng).unwrap(),
            PixelColor::Luma(1)
        );
        let err = Color::Scalar(256).resolve(Mode::Binary, &mut rng).unwrap_err();
        assert!(matches!(err, Error::ColorOutOfRange { value: 256, .. }));
    }

    #[test]
    fn gray_scalar_above_255_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Color::Scalar(255).resolve(Mode::Gray, &mut rng).unwrap(),
            PixelColor::Luma(255)
        );
        assert!(Color::Scalar(256).resolve(Mode::Gray, &mut rng).is_err());
    }

    #[test]
    fn channel_arity_must_match_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Color::rgb(1, 2, 3)
            .resolve(Mode::Gray, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ChannelMismatch {
                expected: 1,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn random_binary_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            match Color::RandomUniform.resolve(Mode::Binary, &mut rng).unwrap() {
                PixelColor::Luma(v) => assert!(v <= 1),
                other => panic!("unexpected pixel {other:?}"),
            }
        }
    }

    #[test]
    fn parses_textual_forms() {
        assert_eq!("random".parse::<Color>().unwrap(), Color::RandomUniform);
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert_eq!("#80".parse::<Color>().unwrap(), Color::Scalar(128));
        assert_eq!("10, 20,30".parse::<Color>().unwrap(), Color::rgb(10, 20, 30));
        assert_eq!("7".parse::<Color>().unwrap(), Color::Scalar(7));
        assert!("#12345".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn parses_css_names_and_functions() {
        assert_eq!("teal".parse::<Color>().unwrap(), Color::rgb(0, 128, 128));
        assert_eq!("Red".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#0f0".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("rgb(10, 20, 30)".parse::<Color>().unwrap(), Color::rgb(10, 20, 30));
        let named: Color = serde_json::from_str(r#""navy""#).unwrap();
        assert_eq!(named, Color::rgb(0, 0, 128));
    }

    #[test]
    fn deserializes_number_array_and_string() {
        let colors: Vec<Color> = serde_json::from_str(r#"[200, [1, 2, 3], "random"]"#).unwrap();
        assert_eq!(
            colors,
            vec![Color::Scalar(200), Color::rgb(1, 2, 3), Color::RandomUniform]
        );
    }
}
