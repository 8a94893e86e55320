//! Detects finished games by looking only at the lines through the last move

use crate::board::{Board, Placement, Side};
use crate::config::DrawRule;
use crate::{CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        *self != GameState::InProgress
    }

    fn win_for(side: Side) -> Self {
        match side {
            Side::Player => GameState::PlayerWin,
            Side::Computer => GameState::ComputerWin,
        }
    }
}

/// Row/column steps of the four lines through a cell: the column, the row,
/// the down-right diagonal and the up-right diagonal
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Classifies the board right after the tile at `last_move` was placed
///
/// Only the column, row and both diagonals through `last_move` are scanned,
/// so the result is meaningful only when `last_move` is the latest tile.
/// `turn_count` is the number of tiles on the board.
///
/// # Panics
/// Panics if the cell at `last_move` is empty.
pub fn evaluate(
    board: &Board,
    turn_count: usize,
    last_move: &Placement,
    draw_rule: DrawRule,
) -> GameState {
    assert!(
        !board.cell(last_move.row(), last_move.column()).is_empty(),
        "stale anchor ({}, {})",
        last_move.row(),
        last_move.column()
    );

    for &direction in DIRECTIONS.iter() {
        if let Some(winner) = scan_line(board, last_move, direction) {
            return GameState::win_for(winner);
        }
    }

    if draw_rule.is_draw(turn_count) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}

/// Walks the whole line through `anchor` from edge to edge, returning the
/// first side to collect `CONNECT` consecutive tiles
fn scan_line(board: &Board, anchor: &Placement, (dy, dx): (isize, isize)) -> Option<Side> {
    let in_bounds =
        |y: isize, x: isize| y >= 0 && y < HEIGHT as isize && x >= 0 && x < WIDTH as isize;

    // step back to the edge of the board
    let (mut y, mut x) = (anchor.row() as isize, anchor.column() as isize);
    while in_bounds(y - dy, x - dx) {
        y -= dy;
        x -= dx;
    }

    let mut run: Option<(Side, usize)> = None;
    while in_bounds(y, x) {
        run = match (board.cell(y as usize, x as usize).side(), run) {
            (Some(side), Some((current, count))) if side == current => Some((side, count + 1)),
            (Some(side), _) => Some((side, 1)),
            (None, _) => None,
        };
        if let Some((side, CONNECT)) = run {
            return Some(side);
        }
        y += dy;
        x += dx;
    }
    None
}
