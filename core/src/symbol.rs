//! Symbol types for Zendo grids.
//!
//! A symbol is the atomic content of a grid cell: one of three colors
//! combined with one of three shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, CoreResult};

/// Symbol color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

    /// Returns the numeric index of this color (0, 1 or 2).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the color for an index, if in range.
    pub fn from_index(index: usize) -> Option<Color> {
        Self::ALL.get(index).copied()
    }

    /// Returns the lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    /// Returns the single-character code used in grid text.
    pub fn code(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
            Color::Blue => 'b',
        }
    }

    /// Parse a color from its grid text code.
    pub fn from_code(code: char) -> CoreResult<Color> {
        match code {
            'r' => Ok(Color::Red),
            'y' => Ok(Color::Yellow),
            'b' => Ok(Color::Blue),
            other => Err(CoreError::unknown_color(other)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbol shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Triangle,
    Square,
}

impl Shape {
    /// All shapes in index order.
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Triangle, Shape::Square];

    /// Returns the numeric index of this shape (0, 1 or 2).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the shape for an index, if in range.
    pub fn from_index(index: usize) -> Option<Shape> {
        Self::ALL.get(index).copied()
    }

    /// Returns the lowercase shape name.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
        }
    }

    /// Returns the single-character code used in grid text.
    pub fn code(self) -> char {
        match self {
            Shape::Circle => 'C',
            Shape::Triangle => 'T',
            Shape::Square => 'S',
        }
    }

    /// Parse a shape from its grid text code.
    pub fn from_code(code: char) -> CoreResult<Shape> {
        match code {
            'C' => Ok(Shape::Circle),
            'T' => Ok(Shape::Triangle),
            'S' => Ok(Shape::Square),
            other => Err(CoreError::unknown_shape(other)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colored shape occupying a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub color: Color,
    pub shape: Shape,
}

impl Symbol {
    pub fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// Two-character grid text code, e.g. `rC` for a red circle.
    pub fn code(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.color.code());
        s.push(self.shape.code());
        s
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.shape)
    }
}
