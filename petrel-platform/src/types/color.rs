//! Color representation and classification utilities.
//!
//! This module provides the [`Color`] struct, a packed 32-bit ARGB color
//! value, and [`ColorParseError`] for handling errors during color string
//! parsing.
//!
//! Calendar and contact labels in Petrel are stored as hex color strings.
//! Parsing accepts the `#RGB` and `#RRGGBB` forms only; the alpha channel is
//! always forced to fully opaque. The [`Color::is_light`] classification
//! drives the choice between dark and light label text.
//!
//! # Examples
//!
//! ```
//! use petrel_platform::types::color::{is_color_light, Color};
//!
//! let white = Color::from_hex("#fff").unwrap();
//! assert_eq!(white.argb(), 0xFFFF_FFFF);
//! assert_eq!(white, Color::from_hex("#ffffff").unwrap());
//!
//! assert!(is_color_light("#ffffff").unwrap());
//! assert!(!is_color_light("#000000").unwrap());
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for color parsing operations.
///
/// This enum defines errors that can occur when parsing hexadecimal color
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    /// Contains the input string that caused the error.
    #[error("Invalid color format: '{0}'. Expected a leading '#'.")]
    InvalidFormat(String),

    /// The string has an incorrect number of characters after the leading
    /// `#`. Expected lengths are 3 (`#RGB`) or 6 (`#RRGGBB`).
    /// Contains the input string that caused the error.
    #[error("Invalid color length: '{0}'. Expected #RGB or #RRGGBB.")]
    InvalidLength(String),

    /// A non-hexadecimal digit was encountered in the color body.
    /// Contains the problematic part of the input and the source parsing
    /// error.
    #[error("Invalid hex digit in '{input_str}': {source}")]
    InvalidDigit {
        input_str: String,
        #[source]
        source: ParseIntError,
    },
}

/// A color as a packed 32-bit ARGB integer.
///
/// The alpha channel occupies the high byte, followed by red, green, and
/// blue. Colors produced by [`Color::from_hex`] are always fully opaque
/// (alpha `0xFF`), matching how label colors are stored by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Parses a `#RGB` or `#RRGGBB` color string.
    ///
    /// The `#RGB` shorthand is expanded by duplicating each hex digit, so
    /// `#1A2` parses the same as `#11AA22`. Hex digits are case-insensitive.
    /// The alpha channel of the result is `0xFF` regardless of input.
    ///
    /// # Arguments
    ///
    /// * `hex_str`: The hexadecimal color string, including the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] if the leading `#` is missing, the body
    /// is not exactly 3 or 6 characters, or the body is not valid
    /// hexadecimal.
    pub fn from_hex(hex_str: &str) -> Result<Self, ColorParseError> {
        let body = match hex_str.strip_prefix('#') {
            Some(body) => body,
            None => return Err(ColorParseError::InvalidFormat(hex_str.to_string())),
        };

        let expanded;
        let body = match body.chars().count() {
            3 => {
                // #RGB is shorthand for #RRGGBB with every digit doubled.
                expanded = body.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            6 => body,
            _ => return Err(ColorParseError::InvalidLength(hex_str.to_string())),
        };

        let rgb = u32::from_str_radix(body, 16).map_err(|e| ColorParseError::InvalidDigit {
            input_str: body.to_string(),
            source: e,
        })?;

        // Alpha channel is always max.
        Ok(Color(rgb | 0xFF00_0000))
    }

    /// Returns the packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the alpha channel (high byte).
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the red channel.
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Returns the green channel.
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Returns the blue channel.
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Classifies the color as perceptually light or dark.
    ///
    /// Computes the perceptive luminance `1 - (0.299·R + 0.587·G + 0.114·B)
    /// / 255` and returns `true` iff it is strictly less than `0.5`. The
    /// weights reflect the human eye's differing sensitivity across the
    /// channels, green being the strongest.
    ///
    /// # Examples
    ///
    /// ```
    /// use petrel_platform::types::color::Color;
    ///
    /// assert!(Color::from_hex("#ffffff").unwrap().is_light());
    /// assert!(!Color::from_hex("#000000").unwrap().is_light());
    /// ```
    pub fn is_light(self) -> bool {
        let r = f64::from(self.red());
        let g = f64::from(self.green());
        let b = f64::from(self.blue());

        let darkness = 1.0 - (0.299 * r + 0.587 * g + 0.114 * b) / 255.0;
        darkness < 0.5
    }

    /// Converts this color to a hexadecimal string in the format `#rrggbb`.
    ///
    /// The alpha channel is not included; parsed colors are always opaque.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

/// Parses a color string and classifies it as perceptually light or dark.
///
/// Convenience wrapper combining [`Color::from_hex`] and [`Color::is_light`].
///
/// # Errors
///
/// Returns a [`ColorParseError`] if the string is not a valid `#RGB` or
/// `#RRGGBB` color.
pub fn is_color_light(color: &str) -> Result<bool, ColorParseError> {
    Ok(Color::from_hex(color)?.is_light())
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(SerdeError::custom)
    }
}
