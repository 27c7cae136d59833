//! Locating HSL custom properties in text and rendering colors back.
//!
//! A recognized token is a CSS custom property whose value is three
//! whitespace-separated numbers, the last two with a `%` suffix:
//!
//! ```css
//! --accent:  130.2        50.3%      10.4%
//! ```
//!
//! [`find_tokens`] returns every such occurrence with the byte range of its
//! value and the decoded components. [`render_token`] goes the other way and
//! produces replacement text for a color.
//!
//! # Example
//!
//! ```
//! use hsl_swatch::scanner::{find_tokens, render_token};
//! use hsl_swatch::color::Color;
//!
//! let css = ":root { --brand: 0 100% 50%; }";
//! let tokens = find_tokens(css);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(&css[tokens[0].range()], "0 100% 50%");
//!
//! assert_eq!(render_token(Color::new(1.0, 0.0, 0.0, 1.0)), "0 100% 50%");
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};

/// Custom-property declaration with a three-component HSL value.
///
/// Name and digit classes are ASCII so every numeric capture parses as `f64`.
/// Fields may be separated by spaces, tabs or line breaks.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(--[A-Za-z0-9_-]+):[ \t\r\n\f]+([0-9]+(?:\.[0-9]+)?)[ \t\r\n\f]+([0-9]+(?:\.[0-9]+)?)%[ \t\r\n\f]+([0-9]+(?:\.[0-9]+)?)%",
    )
    .expect("valid regex")
});

/// One HSL token found in a text blob.
///
/// Offsets are byte offsets into the scanned string. `start_offset` is the
/// first byte of the hue and `end_offset` is one past the lightness `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenMatch {
    pub start_offset: usize,
    pub end_offset: usize,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    name_offset: usize,
}

impl TokenMatch {
    /// Byte range of the token value, suitable for slicing the scanned text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Decoded components as an [`Hsl`] value.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }

    /// 8-bit RGB for this token.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    /// Opaque fractional color for this token.
    #[must_use]
    pub fn color(&self) -> Color {
        Color::from_rgb(self.rgb())
    }

    /// The custom-property name (`--accent`), given the text that was scanned.
    ///
    /// Returns `None` if `text` is not the blob this match came from.
    #[must_use]
    pub fn name<'a>(&self, text: &'a str) -> Option<&'a str> {
        let declaration = text.get(self.name_offset..self.start_offset)?;
        let (name, _) = declaration.split_once(':')?;
        Some(name)
    }
}

/// Find every HSL custom-property token in `text`, in document order.
///
/// Matches never overlap. Text without any declaration yields an empty
/// vector.
#[must_use]
pub fn find_tokens(text: &str) -> Vec<TokenMatch> {
    let tokens: Vec<TokenMatch> = TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let declaration = caps.get(0)?;
            let name = caps.get(1)?;
            let hue = caps.get(2)?;
            let saturation = caps.get(3)?;
            let lightness = caps.get(4)?;

            let token = TokenMatch {
                start_offset: hue.start(),
                end_offset: declaration.end(),
                hue: hue.as_str().parse().ok()?,
                saturation: saturation.as_str().parse().ok()?,
                lightness: lightness.as_str().parse().ok()?,
                name_offset: name.start(),
            };
            log::trace!(
                "token {} at {}..{}: {} {}% {}%",
                name.as_str(),
                token.start_offset,
                token.end_offset,
                token.hue,
                token.saturation,
                token.lightness
            );
            Some(token)
        })
        .collect();

    log::debug!(
        "scanned {} bytes, found {} hsl token(s)",
        text.len(),
        tokens.len()
    );
    tokens
}

/// Render a fractional color as token text, e.g. `"0 100% 50%"`.
///
/// The channels are scaled to 0-255 and converted without quantizing first,
/// then hue, saturation and lightness are each rounded to an integer.
#[must_use]
pub fn render_token(color: Color) -> String {
    let (red, green, blue) = color.channels_255();
    let (h, s, l) = rgb_to_hsl(red, green, blue);
    render_hsl(Hsl::new(h, s * 100.0, l * 100.0))
}

/// Render an [`Hsl`] value (percent units) as token text.
#[must_use]
pub fn render_hsl(hsl: Hsl) -> String {
    hsl.to_string()
}
