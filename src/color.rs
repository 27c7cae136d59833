//! Color model conversion between HSL and RGB.
//!
//! This module provides the numeric half of the crate:
//! - [`Hsl`]: hue in degrees, saturation and lightness in percent
//! - [`Rgb`]: 8-bit red, green and blue channels
//! - [`Color`]: fractional RGBA, the representation editors hand around
//! - [`hsl_to_rgb`] / [`rgb_to_hsl`]: the conversions themselves
//!
//! # Examples
//!
//! ## Converting HSL to RGB
//!
//! ```
//! use hsl_swatch::color::{hsl_to_rgb, Rgb};
//!
//! assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
//!
//! // Hue wraps, saturation and lightness clamp
//! assert_eq!(hsl_to_rgb(-30.0, 100.0, 50.0), hsl_to_rgb(330.0, 100.0, 50.0));
//! assert_eq!(hsl_to_rgb(120.0, 250.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
//! ```
//!
//! ## Converting RGB to HSL
//!
//! ```
//! use hsl_swatch::color::rgb_to_hsl;
//!
//! let (h, s, l) = rgb_to_hsl(255.0, 0.0, 0.0);
//! assert_eq!((h, s, l), (0.0, 1.0, 0.5));
//! ```
//!
//! ## Parsing token text
//!
//! ```
//! use hsl_swatch::color::Hsl;
//!
//! let hsl: Hsl = "130.2 50.3% 10.4%".parse().unwrap();
//! assert_eq!(hsl.to_string(), "130 50% 10%");
//! ```

use std::fmt;
use std::str::FromStr;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new RGB value from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns the channels as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Convert to HSL with saturation and lightness in percent.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(*self)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
///
/// Values are stored as given. Normalization (hue wrapping, percent
/// clamping) happens when converting with [`Hsl::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit RGB. See [`hsl_to_rgb`].
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    /// Build an HSL value from 8-bit RGB, scaling saturation and lightness
    /// to percent.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (h, s, l) = rgb_to_hsl(
            f64::from(rgb.red),
            f64::from(rgb.green),
            f64::from(rgb.blue),
        );
        Self::new(h, s * 100.0, l * 100.0)
    }
}

/// Renders the three-component token notation, each field rounded to an
/// integer: `"<h> <s>% <l>%"`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}%",
            round_component(self.hue),
            round_component(self.saturation),
            round_component(self.lightness)
        )
    }
}

/// Rounds half away from zero and drops the sign of negative zero so that
/// formatting never yields `-0`.
fn round_component(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 { 0.0 } else { rounded }
}

impl FromStr for Hsl {
    type Err = HslParseError;

    /// Parse whitespace-separated token text such as `"130.2 50.3% 10.4%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.is_empty() {
            return Err(HslParseError::Empty);
        }
        let [hue, saturation, lightness] = fields[..] else {
            return Err(HslParseError::WrongComponentCount(fields.len()));
        };

        let parse_number = |field: &str| {
            field
                .parse::<f64>()
                .map_err(|_| HslParseError::InvalidNumber(field.to_string()))
        };
        let parse_percent = |field: &str| {
            field
                .strip_suffix('%')
                .ok_or_else(|| HslParseError::MissingPercent(field.to_string()))
                .and_then(|number| {
                    number
                        .parse::<f64>()
                        .map_err(|_| HslParseError::InvalidNumber(field.to_string()))
                })
        };

        Ok(Self::new(
            parse_number(hue)?,
            parse_percent(saturation)?,
            parse_percent(lightness)?,
        ))
    }
}

impl TryFrom<&str> for Hsl {
    type Error = HslParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// Error type for parsing HSL token text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HslParseError {
    Empty,
    WrongComponentCount(usize),
    MissingPercent(String),
    InvalidNumber(String),
}

impl fmt::Display for HslParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty HSL string"),
            Self::WrongComponentCount(n) => {
                write!(f, "Expected 3 HSL components, found {n}")
            }
            Self::MissingPercent(s) => write!(f, "Missing '%' on component: {s}"),
            Self::InvalidNumber(s) => write!(f, "Invalid number: {s}"),
        }
    }
}

impl std::error::Error for HslParseError {}

/// Fractional RGBA color, each channel in 0.0-1.0.
///
/// This is the representation editor hosts exchange colors in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Color {
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (red, green, blue) = rgb.normalized();
        Self::new(red, green, blue, 1.0)
    }

    /// Channels scaled to the 0-255 range, unrounded.
    #[must_use]
    pub fn channels_255(&self) -> (f64, f64, f64) {
        (self.red * 255.0, self.green * 255.0, self.blue * 255.0)
    }

    /// Quantize to 8-bit channels, rounding to nearest and saturating.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = self.channels_255();
        Rgb::new(channel_to_u8(red), channel_to_u8(green), channel_to_u8(blue))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_rgb(hsl.to_rgb())
    }
}

/// Round a 0-255 channel to `u8`. Out-of-range values saturate and NaN
/// becomes 0.
fn channel_to_u8(value: f64) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "float-to-int `as` casts saturate and map NaN to 0"
    )]
    let channel = value.round() as u8;
    channel
}

/// Convert HSL to 8-bit RGB.
///
/// `hue` is in degrees and may be any real number; it wraps modulo 360,
/// negative values included. `saturation` and `lightness` are percentages
/// and are clamped to 0-100 before conversion. The function never fails.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = normalize_hue(hue);
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = channel_to_u8(l * 255.0);
        return Rgb::new(gray, gray, gray);
    }

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = sextant_components(h, chroma, x);

    Rgb::new(
        channel_to_u8((r + m) * 255.0),
        channel_to_u8((g + m) * 255.0),
        channel_to_u8((b + m) * 255.0),
    )
}

/// Wrap a hue into `[0, 360)`.
fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Pick the unscaled `(r, g, b)` for the 60° sextant containing `h`.
fn sextant_components(h: f64, chroma: f64, x: f64) -> (f64, f64, f64) {
    if !(0.0..360.0).contains(&h) {
        return (0.0, 0.0, 0.0);
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "h is in [0, 360) so h / 60 floors to 0..=5"
    )]
    let sextant = (h / 60.0).floor() as u8;
    match sextant {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        5 => (chroma, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    }
}

/// Convert RGB channels in 0-255 to HSL.
///
/// Returns `(hue, saturation, lightness)` with hue in degrees `[0, 360)` and
/// saturation and lightness as fractions in 0.0-1.0. Channels are not
/// clamped. Achromatic input reports a hue of 0.
///
/// When several channels share the maximum, red wins over green and green
/// over blue.
#[must_use]
#[allow(clippy::float_cmp, reason = "max is always one of the channels")]
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let r = red / 255.0;
    let g = green / 255.0;
    let b = blue / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let lightness = f64::midpoint(max, min);

    if delta == 0.0 {
        return (0.0, 0.0, lightness);
    }

    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    (hue, saturation, lightness)
}
