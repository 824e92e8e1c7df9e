//! The 3x3 grid.
//!
//! Cells are indexed `0..9` in row-major order: index `i` is row `i / 3`,
//! column `i % 3`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::{Color, CoreError, CoreResult, Shape, Symbol};

/// Width and height of the grid.
pub const SIDE: usize = 3;

/// Number of cells in a grid.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Row of a cell index.
pub fn row_of(index: usize) -> usize {
    index / SIDE
}

/// Column of a cell index.
pub fn column_of(index: usize) -> usize {
    index % SIDE
}

/// Cell indices of a row, left to right.
pub fn row_cells(row: usize) -> [usize; SIDE] {
    let start = row * SIDE;
    [start, start + 1, start + 2]
}

/// Cell indices of a column, top to bottom.
pub fn column_cells(column: usize) -> [usize; SIDE] {
    [column, column + SIDE, column + 2 * SIDE]
}

/// A 3x3 board where every cell is empty or holds a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from its nine cells.
    pub fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.cells
    }

    /// Get the symbol at a cell. Out of range indices read as empty.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied().flatten()
    }

    /// Place a symbol in a cell.
    ///
    /// # Panics
    /// Panics if `index >= CELL_COUNT`.
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        self.cells[index] = Some(symbol);
    }

    /// Builder-style variant of [`Grid::set`].
    pub fn with(mut self, index: usize, color: Color, shape: Shape) -> Self {
        self.set(index, Symbol::new(color, shape));
        self
    }

    /// Empty a cell, returning what it held.
    pub fn clear(&mut self, index: usize) -> Option<Symbol> {
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Returns true if the cell holds a symbol.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns true if the cell is empty.
    pub fn is_blank(&self, index: usize) -> bool {
        !self.is_occupied(index)
    }

    /// Indices of occupied cells, in order.
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |&i| self.is_occupied(i))
    }

    /// Number of symbols on the grid.
    pub fn symbol_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if the cell holds a symbol of the given color.
    pub fn has_color(&self, index: usize, color: Color) -> bool {
        self.get(index).map_or(false, |s| s.color == color)
    }

    /// Returns true if the cell holds a symbol of the given shape.
    pub fn has_shape(&self, index: usize, shape: Shape) -> bool {
        self.get(index).map_or(false, |s| s.shape == shape)
    }

    /// The compact text form accepted by `FromStr`: one line per row,
    /// `.` for empty cells.
    pub fn to_compact(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT * 3);
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(symbol) => out.push_str(&symbol.code()),
                None => out.push('.'),
            }
            if i + 1 < CELL_COUNT {
                out.push(if column_of(i) == SIDE - 1 { '\n' } else { ' ' });
            }
        }
        out
    }
}

impl Index<usize> for Grid {
    type Output = Option<Symbol>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl From<[Option<Symbol>; CELL_COUNT]> for Grid {
    fn from(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

/// Debug rendering: a 3x3 block of two-character cells.
///
/// ```text
/// rC|  |bS
/// --+--+--
///   |yT|
/// --+--+--
///   |  |rS
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(symbol) => write!(f, "{}{}", symbol.color.code(), symbol.shape.code())?,
                None => f.write_str("  ")?,
            }
            if i == CELL_COUNT - 1 {
                break;
            }
            if column_of(i) == SIDE - 1 {
                f.write_str("\n--+--+--\n")?;
            } else {
                f.write_str("|")?;
            }
        }
        Ok(())
    }
}

/// Parse the compact form: nine tokens separated by whitespace, commas or
/// `|`, each a two-character symbol code (`rC`, `yT`, `bS`, ...) or one of
/// `.`, `..`, `_`, `--` for an empty cell.
impl FromStr for Grid {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '|')
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != CELL_COUNT {
            return Err(CoreError::cell_count(tokens.len()));
        }

        let mut grid = Grid::new();
        for (i, token) in tokens.iter().enumerate() {
            if let Some(symbol) = parse_cell(token)? {
                grid.set(i, symbol);
            }
        }
        Ok(grid)
    }
}

fn parse_cell(token: &str) -> CoreResult<Option<Symbol>> {
    if matches!(token, "." | ".." | "_" | "--") {
        return Ok(None);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some(s), None) => Ok(Some(Symbol::new(Color::from_code(c)?, Shape::from_code(s)?))),
        _ => Err(CoreError::malformed_cell(token)),
    }
}
