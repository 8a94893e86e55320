//! The game grid and the only code allowed to change it

use crate::error::MoveError;
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Player,
    Computer,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The side owning this cell, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Player => Some(Side::Player),
            Cell::Computer => Some(Side::Computer),
            Cell::Empty => None,
        }
    }
}

/// One of the two movers
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    /// The human, maximizing
    Player,
    /// The agent, minimizing
    Computer,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }
}

/// Coordinates of a tile placed by [`Board::apply`]
///
/// Only the board can hand these out, so holding one means the tile was
/// really played. [`Board::undo`] takes it by value: a speculative tile can
/// be taken back at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    column: usize,
}

impl Placement {
    /// Row of the tile, 0 being the top of the board
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT], // rows are stored top-to-bottom
    num_tiles: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            num_tiles: 0,
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Iterates over `(row, column, cell)` for every cell, top row first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, &cell)| (row, column, cell))
        })
    }

    /// The number of tiles currently on the board
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    pub fn is_legal(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// The legal columns in ascending order
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_legal(column))
    }

    /// Drops a tile into `column`, returning where it landed
    ///
    /// # Panics
    /// Panics if the column is out of range or full. Callers must check
    /// [`Board::is_legal`] first, or use [`Board::play_checked`].
    pub fn apply(&mut self, column: usize, side: Side) -> Placement {
        assert!(
            self.is_legal(column),
            "apply called on illegal column {}",
            column
        );
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .unwrap_or(0);
        self.cells[row][column] = side.cell();
        self.num_tiles += 1;
        Placement { row, column }
    }

    /// Validates an untrusted column before applying it
    pub fn play_checked(&mut self, column: usize, side: Side) -> Result<Placement, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange { column });
        }
        if !self.is_legal(column) {
            return Err(MoveError::ColumnFull { column });
        }
        Ok(self.apply(column, side))
    }

    /// Takes back a tile placed by [`Board::apply`]
    ///
    /// # Panics
    /// Panics if the placement is stale: its cell is empty or another tile
    /// has been stacked on top of it since.
    pub fn undo(&mut self, placement: Placement) {
        let Placement { row, column } = placement;
        assert!(
            !self.cells[row][column].is_empty(),
            "undo of empty cell ({}, {})",
            row,
            column
        );
        assert!(
            row == 0 || self.cells[row - 1][column].is_empty(),
            "undo of buried cell ({}, {})",
            row,
            column
        );
        self.cells[row][column] = Cell::Empty;
        self.num_tiles -= 1;
    }
}
