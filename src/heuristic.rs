//! Static evaluation of positions the search cannot see to the end of

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH};

/// How many lines of four pass through each cell, so central cells weigh more
pub const EVALUATION_TABLE: [[i32; WIDTH]; HEIGHT] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

const fn table_total() -> i32 {
    let mut total = 0;
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            total += EVALUATION_TABLE[row][column];
            column += 1;
        }
        row += 1;
    }
    total
}

/// Sum of every weight, an upper bound on the magnitude of [`score`]
pub const TABLE_TOTAL: i32 = table_total();

/// Scores a position from the human's side: positive favours the human,
/// negative favours the computer
pub fn score(board: &Board) -> i32 {
    board
        .cells()
        .map(|(row, column, cell)| match cell {
            Cell::Player => EVALUATION_TABLE[row][column],
            Cell::Computer => -EVALUATION_TABLE[row][column],
            Cell::Empty => 0,
        })
        .sum()
}
