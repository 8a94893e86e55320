use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Cell};
use connect4_minimax::{HEIGHT, WIDTH};

/// Draws the board top row first with the column numbers underneath
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(PrintStyledContent(style("\n")))?;
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Cell::Player => Color::Red,
                        Cell::Computer => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }

    let cols: String = (0..WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    stdout.flush()?;
    Ok(())
}
