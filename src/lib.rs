//! # hsl_swatch
//!
//! Find CSS custom properties whose value is a bare HSL triple and convert
//! between that notation and RGB.
//!
//! Design systems often store colors as `--primary: 222.2 47.4% 11.2%` so the
//! value can be dropped into `hsl(var(--primary))`. Editors cannot show a
//! swatch for that on their own; this crate does the work an editor color
//! provider needs.
//!
//! ## Quick Start
//!
//! ```
//! use hsl_swatch::prelude::*;
//!
//! let css = ":root { --primary: 0 100% 50%; }";
//!
//! let tokens = find_tokens(css);
//! assert_eq!(tokens[0].rgb(), Rgb::new(255, 0, 0));
//!
//! let replacement = render_token(Color::new(0.0, 0.0, 1.0, 1.0));
//! assert_eq!(replacement, "240 100% 50%");
//! ```
//!
//! ## Core Concepts
//!
//! - **Color codec**: [`hsl_to_rgb`](color::hsl_to_rgb) and
//!   [`rgb_to_hsl`](color::rgb_to_hsl), total functions over any numeric input
//! - **Scanner**: [`find_tokens`](scanner::find_tokens) and
//!   [`render_token`](scanner::render_token), pure functions over text
//! - **Provider**: [`DocumentColorProvider`](provider::DocumentColorProvider),
//!   the seam an editor host calls into
//! - **Position**: [`LineIndex`](position::LineIndex) maps byte offsets to
//!   line/character positions for hosts that need them

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod logging;
pub mod position;
pub mod provider;
pub mod scanner;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Color, Hsl, HslParseError, Rgb, hsl_to_rgb, rgb_to_hsl};
    pub use crate::position::{LineIndex, Position};
    pub use crate::provider::{
        ColorInformation, ColorPresentation, DocumentColorProvider, DocumentSelector,
        HslVariableProvider, TextEdit,
    };
    pub use crate::scanner::{TokenMatch, find_tokens, render_hsl, render_token};
}

// Re-export key types at crate root
pub use color::{Color, Hsl, Rgb};
pub use provider::{DocumentColorProvider, HslVariableProvider};
pub use scanner::{TokenMatch, find_tokens, render_token};
