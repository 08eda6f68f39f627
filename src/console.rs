//! Colored console output
//!
//! Small helpers for printing status lines in color on terminals that
//! support it.

use std::str::FromStr;

use crossterm::style::{Color as CrosstermColor, Stylize};

use crate::error::{CnvUtilsError, Result};

/// Colors available for console messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    fn as_crossterm(self) -> CrosstermColor {
        match self {
            Color::White => CrosstermColor::White,
            Color::Green => CrosstermColor::Green,
            Color::Red => CrosstermColor::Red,
            Color::Blue => CrosstermColor::Blue,
            Color::Yellow => CrosstermColor::Yellow,
            Color::Magenta => CrosstermColor::Magenta,
            Color::Cyan => CrosstermColor::Cyan,
        }
    }
}

impl FromStr for Color {
    type Err = CnvUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "white" => Ok(Color::White),
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            _ => Err(CnvUtilsError::invalid_argument(format!(
                "Invalid color: {}. Available colors: white, green, red, blue, yellow, magenta, cyan",
                s
            ))),
        }
    }
}

/// Print a message to stdout in the given color.
pub fn print_in_color(message: &str, color: Color) {
    println!("{}", message.with(color.as_crossterm()));
}
