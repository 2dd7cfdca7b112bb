use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::GameError;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Accepts the display tokens ("X", "O") or the color names, case-insensitive.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "X" => Ok(Color::White),
            "O" => Ok(Color::Black),
            name if name.eq_ignore_ascii_case("white") => Ok(Color::White),
            name if name.eq_ignore_ascii_case("black") => Ok(Color::Black),
            _ => Err(GameError::InvalidColor {
                token: token.to_string(),
            }),
        }
    }
}

impl Color {
    pub fn token(&self) -> &'static str {
        match self {
            Color::White => "X",
            Color::Black => "O",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }

    pub fn other(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single forward step: white moves up the rows, black down.
    pub fn direction(&self) -> i64 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// A colored token. Two pawns are equal when their colors are.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pawn {
    color: Color,
}

impl Pawn {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl From<Color> for Pawn {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl FromStr for Pawn {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        token.parse::<Color>().map(Pawn::new)
    }
}

impl Display for Pawn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
