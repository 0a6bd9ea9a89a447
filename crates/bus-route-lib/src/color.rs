//! Route colors and the default legend palette

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An sRGB color with alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Opaque color from red, green and blue components
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as `0xAARRGGBB`, the layout used by most map widgets
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Colors handed out to routes in the order they are first seen
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb(230, 25, 75),
    Color::from_rgb(60, 180, 75),
    Color::from_rgb(0, 130, 200),
    Color::from_rgb(245, 130, 48),
    Color::from_rgb(145, 30, 180),
    Color::from_rgb(70, 240, 240),
    Color::from_rgb(240, 50, 230),
    Color::from_rgb(128, 128, 0),
    Color::from_rgb(0, 128, 128),
    Color::from_rgb(170, 110, 40),
];
