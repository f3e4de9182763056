//! Color quantisation.
//!
//! The laser hardware only understands three primaries. Any RGB triple is
//! collapsed onto the primary of its dominant channel, with ties resolved
//! red first, then green. The mapping is lossy for arbitrary triples but
//! idempotent once a color has been collapsed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::types::Rgb;

/// One of the three device colors, carrying its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorCode {
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl ColorCode {
    /// Every device color in wire-code order.
    pub const ALL: [ColorCode; 3] = [ColorCode::Red, ColorCode::Green, ColorCode::Blue];

    /// Quantises an RGB triple to its dominant channel.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        if r >= g && r >= b {
            ColorCode::Red
        } else if g >= b {
            ColorCode::Green
        } else {
            ColorCode::Blue
        }
    }

    /// Maps a raw code to a color. 1 and 2 are red and green, anything else is blue.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ColorCode::Red,
            2 => ColorCode::Green,
            _ => ColorCode::Blue,
        }
    }

    /// The wire code (1, 2 or 3).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The pure primary for this code.
    pub fn rgb(self) -> Rgb {
        match self {
            ColorCode::Red => Rgb::RED,
            ColorCode::Green => Rgb::GREEN,
            ColorCode::Blue => Rgb::BLUE,
        }
    }

    /// Human readable name, as shown in the element table.
    pub fn label(self) -> &'static str {
        match self {
            ColorCode::Red => "Red",
            ColorCode::Green => "Green",
            ColorCode::Blue => "Blue",
        }
    }
}

impl TryFrom<i64> for ColorCode {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ColorCode::Red),
            2 => Ok(ColorCode::Green),
            3 => Ok(ColorCode::Blue),
            other => Err(CoreError::InvalidColorCode(other)),
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Rgb {
    /// Collapses the triple onto its primary.
    pub fn quantized(self) -> Rgb {
        ColorCode::from_rgb(self).rgb()
    }

    /// The device code for this triple.
    pub fn code(self) -> ColorCode {
        ColorCode::from_rgb(self)
    }
}

/// Returns the color code (1, 2 or 3) of the dominant channel.
pub fn rgb_to_code(rgb: Rgb) -> u8 {
    ColorCode::from_rgb(rgb).code()
}

/// Returns the primary for a code, defaulting to blue for unknown codes.
pub fn code_to_rgb(code: i64) -> Rgb {
    ColorCode::from_code(code).rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_survives_its_own_conversions() {
        for (i, color) in ColorCode::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(color.code()), i + 1);
            assert_eq!(ColorCode::try_from(i64::from(color.code())), Ok(color));
            assert_eq!(ColorCode::from_code(i64::from(color.code())), color);
            assert_eq!(color.rgb().code(), color);
        }
    }

    #[test]
    fn test_primaries_map_to_their_codes() {
        assert_eq!(rgb_to_code(Rgb::RED), 1);
        assert_eq!(rgb_to_code(Rgb::GREEN), 2);
        assert_eq!(rgb_to_code(Rgb::BLUE), 3);
    }

    #[test]
    fn test_ties_prefer_red_then_green() {
        assert_eq!(rgb_to_code(Rgb::new(0, 0, 0)), 1);
        assert_eq!(rgb_to_code(Rgb::new(200, 200, 10)), 1);
        assert_eq!(rgb_to_code(Rgb::new(200, 10, 200)), 1);
        assert_eq!(rgb_to_code(Rgb::new(10, 200, 200)), 2);
        assert_eq!(rgb_to_code(Rgb::new(10, 20, 30)), 3);
    }

    #[test]
    fn test_unknown_codes_fall_back_to_blue() {
        assert_eq!(code_to_rgb(0), Rgb::BLUE);
        assert_eq!(code_to_rgb(-4), Rgb::BLUE);
        assert_eq!(code_to_rgb(42), Rgb::BLUE);
    }

    #[test]
    fn test_checked_conversion() {
        assert_eq!(ColorCode::try_from(2_i64), Ok(ColorCode::Green));
        assert_eq!(
            ColorCode::try_from(9_i64),
            Err(CoreError::InvalidColorCode(9))
        );
    }
}
