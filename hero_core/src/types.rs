//! Core types shared across heroes and abilities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of the ice a freeze ability conjures
///
/// Purely descriptive: it shows up in the combat log and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IceColor {
    White,
    Blue,
    Green,
    Yellow,
    Red,
}

impl IceColor {
    /// Get all ice colors
    pub fn all() -> &'static [IceColor] {
        &[
            IceColor::White,
            IceColor::Blue,
            IceColor::Green,
            IceColor::Yellow,
            IceColor::Red,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IceColor::White => "White",
            IceColor::Blue => "Blue",
            IceColor::Green => "Green",
            IceColor::Yellow => "Yellow",
            IceColor::Red => "Red",
        }
    }
}

impl fmt::Display for IceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
