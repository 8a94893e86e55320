//! The permanent game between the human and the computer

use anyhow::{anyhow, Result};
use log::info;

use crate::board::{Board, Placement, Side};
use crate::config::SearchConfig;
use crate::error::MoveError;
use crate::search::Searcher;
use crate::terminal::{self, GameState};

pub struct Game {
    board: Board,
    config: SearchConfig,
    to_move: Side,
    turn_count: usize,
    // last tile on the real board, kept apart from speculative search tiles
    last_move: Option<Placement>,
    state: GameState,
}

impl Game {
    pub fn new(config: SearchConfig, first: Side) -> Self {
        Self {
            board: Board::new(),
            config,
            to_move: first,
            turn_count: 0,
            last_move: None,
            state: GameState::InProgress,
        }
    }

    /// Replays a string of column digits, alternating sides starting with `first`
    pub fn from_moves<S: AsRef<str>>(config: SearchConfig, first: Side, moves: S) -> Result<Self> {
        let mut game = Self::new(config, first);

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let column = column as usize;
                    match game.to_move {
                        Side::Player => game.play_human(column)?,
                        Side::Computer => game.play(column, Side::Computer)?,
                    };
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The number of tiles played so far
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn last_move(&self) -> Option<&Placement> {
        self.last_move.as_ref()
    }

    pub fn is_legal(&self, column: usize) -> bool {
        !self.state.is_over() && self.board.is_legal(column)
    }

    /// Plays the human's chosen column
    pub fn play_human(&mut self, column: usize) -> Result<GameState, MoveError> {
        self.play(column, Side::Player)
    }

    /// Lets the computer search for and play its move, returning the column
    pub fn play_computer(&mut self) -> Result<(usize, GameState)> {
        self.check_turn(Side::Computer)?;
        let placement = Searcher::new(&mut self.board, self.config)
            .choose_computer_move(self.turn_count)?;
        let column = placement.column();
        Ok((column, self.record(placement, Side::Computer)))
    }

    fn play(&mut self, column: usize, side: Side) -> Result<GameState, MoveError> {
        self.check_turn(side)?;
        let placement = self.board.play_checked(column, side)?;
        Ok(self.record(placement, side))
    }

    fn check_turn(&self, side: Side) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != side {
            return Err(MoveError::NotYourTurn(side));
        }
        Ok(())
    }

    fn record(&mut self, placement: Placement, side: Side) -> GameState {
        self.turn_count += 1;
        self.to_move = side.other();
        self.state = terminal::evaluate(
            &self.board,
            self.turn_count,
            &placement,
            self.config.draw_rule,
        );
        // a full board the draw rule let through
        if self.state == GameState::InProgress && self.board.legal_columns().next().is_none() {
            self.state = GameState::Draw;
        }
        self.last_move = Some(placement);
        if self.state.is_over() {
            info!("game over after {} tiles: {:?}", self.turn_count, self.state);
        }
        self.state
    }
}
