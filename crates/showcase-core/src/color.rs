//! Closed colour enumeration and its classifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification for names outside [`Color`]
pub const UNKNOWN: &str = "unknown";

/// Primary colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl Color {
    /// All colours in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Upper-case name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name did not match any [`Color`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RED" => Ok(Color::Red),
            "GREEN" => Ok(Color::Green),
            "BLUE" => Ok(Color::Blue),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

/// Temperature of a colour
#[inline]
#[must_use]
pub const fn describe_color(color: Color) -> &'static str {
    match color {
        Color::Red => "warm",
        Color::Green => "neutral",
        Color::Blue => "cool",
    }
}

/// Classify a colour by name; anything outside the enumeration is `"unknown"`
#[must_use]
pub fn classify(name: &str) -> &'static str {
    name.parse::<Color>().map_or(UNKNOWN, describe_color)
}
