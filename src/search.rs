//! Depth-limited minimax with alpha-beta pruning
//!
//! # Position Scoring
//! Scores are always from the human's point of view: the human maximizes and
//! the computer minimizes. A game won by the human after `t` tiles scores
//! `win_score - t`, one won by the computer scores `-win_score + t`, so a
//! quicker win (or a slower loss) is preferred. Drawn positions score 0 and
//! positions at the depth cutoff get the [`heuristic`] score.

use log::{debug, info};

use crate::board::{Board, Placement, Side};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::heuristic;
use crate::terminal::{self, GameState};
use crate::WIDTH;

/// Searches hypothetical lines of play on a borrowed board
///
/// Every speculative tile is undone before the frame that placed it returns,
/// so the board is left exactly as it was found.
pub struct Searcher<'a> {
    board: &'a mut Board,
    config: SearchConfig,
    // tile count at the root, the depth cutoff is measured from here
    base_turn: usize,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Searcher<'a> {
    pub fn new(board: &'a mut Board, config: SearchConfig) -> Self {
        let base_turn = board.num_tiles();
        Self {
            board,
            config,
            base_turn,
            node_count: 0,
        }
    }

    /// Scores the position reached by `last_move`, with `mover` to play next
    /// and `turns` tiles on the board
    pub fn search(
        &mut self,
        turns: usize,
        mover: Side,
        mut alpha: i32,
        mut beta: i32,
        last_move: &Placement,
    ) -> i32 {
        self.node_count += 1;

        match terminal::evaluate(self.board, turns, last_move, self.config.draw_rule) {
            GameState::Draw => return 0,
            GameState::PlayerWin => return self.config.win_score - turns as i32,
            GameState::ComputerWin => return -self.config.win_score + turns as i32,
            GameState::InProgress => {}
        }
        if turns >= self.base_turn + self.config.depth {
            return heuristic::score(self.board);
        }

        let mut best_score = match mover {
            Side::Player => i32::MIN,
            Side::Computer => i32::MAX,
        };
        let mut searched = false;

        // ascending column order decides ties and how fast the window closes
        for column in 0..WIDTH {
            if !self.board.is_legal(column) {
                continue;
            }
            searched = true;

            let placement = self.board.apply(column, mover);
            let score = self.search(turns + 1, mover.other(), alpha, beta, &placement);
            self.board.undo(placement);

            match mover {
                Side::Player => {
                    best_score = best_score.max(score);
                    alpha = alpha.max(best_score);
                }
                Side::Computer => {
                    best_score = best_score.min(score);
                    beta = beta.min(best_score);
                }
            }
            // the other side already has a better option elsewhere
            if alpha >= beta {
                break;
            }
        }

        // a full board the draw rule let through
        if !searched {
            return 0;
        }
        best_score
    }

    /// Scores every column as a computer move with `turns` tiles on the
    /// board, `None` for full columns
    ///
    /// Each column is searched with a full window, so the scores are exact.
    pub fn score_columns(&mut self, turns: usize) -> [Option<i32>; WIDTH] {
        self.base_turn = turns;

        let mut scores = [None; WIDTH];
        for column in 0..WIDTH {
            if !self.board.is_legal(column) {
                continue;
            }
            let placement = self.board.apply(column, Side::Computer);
            let score = self.search(turns + 1, Side::Player, i32::MIN, i32::MAX, &placement);
            self.board.undo(placement);

            debug!("column {} scores {}", column, score);
            scores[column] = Some(score);
        }
        scores
    }

    /// Picks the computer's move with `turns` tiles on the board and plays it
    ///
    /// The lowest score wins and ties go to the lowest column.
    pub fn choose_computer_move(&mut self, turns: usize) -> Result<Placement, GameError> {
        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.score_columns(turns).iter().enumerate() {
            if let Some(score) = *score {
                if best.map_or(true, |(_, best_score)| score < best_score) {
                    best = Some((column, score));
                }
            }
        }

        let (column, score) = best.ok_or(GameError::NoLegalMoves)?;
        info!(
            "computer plays column {} (score {}, {} nodes)",
            column, score, self.node_count
        );
        Ok(self.board.apply(column, Side::Computer))
    }
}
