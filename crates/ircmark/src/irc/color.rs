//! The classic 16-color mIRC palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color name does not match the palette.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseColorError {
    /// The name is not one of the 16 palette colors or their aliases.
    #[error("unknown palette color: {0:?}")]
    UnknownName(String),
}

/// One of the 16 palette colors understood by IRC clients.
///
/// Parsing accepts the canonical names below plus the common aliases
/// (`brown`, `blue`, `aqua`, `grey`, ...), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Navy,
    Green,
    Red,
    Maroon,
    Purple,
    Olive,
    Yellow,
    Lime,
    Teal,
    Cyan,
    Royal,
    Pink,
    Gray,
    Silver,
}

impl Color {
    /// Every palette color, in wire-code order.
    pub const ALL: [Color; 16] = [
        Color::White,
        Color::Black,
        Color::Navy,
        Color::Green,
        Color::Red,
        Color::Maroon,
        Color::Purple,
        Color::Olive,
        Color::Yellow,
        Color::Lime,
        Color::Teal,
        Color::Cyan,
        Color::Royal,
        Color::Pink,
        Color::Gray,
        Color::Silver,
    ];

    /// The palette index sent on the wire.
    pub fn code(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
            Color::Navy => 2,
            Color::Green => 3,
            Color::Red => 4,
            Color::Maroon => 5,
            Color::Purple => 6,
            Color::Olive => 7,
            Color::Yellow => 8,
            Color::Lime => 9,
            Color::Teal => 10,
            Color::Cyan => 11,
            Color::Royal => 12,
            Color::Pink => 13,
            Color::Gray => 14,
            Color::Silver => 15,
        }
    }

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Navy => "navy",
            Color::Green => "green",
            Color::Red => "red",
            Color::Maroon => "maroon",
            Color::Purple => "purple",
            Color::Olive => "olive",
            Color::Yellow => "yellow",
            Color::Lime => "lime",
            Color::Teal => "teal",
            Color::Cyan => "cyan",
            Color::Royal => "royal",
            Color::Pink => "pink",
            Color::Gray => "gray",
            Color::Silver => "silver",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            "navy" => Ok(Color::Navy),
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "maroon" | "brown" => Ok(Color::Maroon),
            "purple" | "violet" => Ok(Color::Purple),
            "olive" => Ok(Color::Olive),
            "yellow" => Ok(Color::Yellow),
            "lime" | "lightgreen" => Ok(Color::Lime),
            "teal" | "bluecyan" => Ok(Color::Teal),
            "cyan" | "aqua" => Ok(Color::Cyan),
            "royal" | "blue" => Ok(Color::Royal),
            "pink" | "fuchsia" | "lightpurple" => Ok(Color::Pink),
            "gray" | "grey" => Ok(Color::Gray),
            "silver" | "lightgray" => Ok(Color::Silver),
            _ => Err(ParseColorError::UnknownName(s.to_string())),
        }
    }
}
