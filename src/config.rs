//! Tunable constants for the search

use crate::error::ConfigError;
use crate::heuristic::TABLE_TOTAL;
use crate::CAPACITY;

/// Plies searched below the root before the heuristic takes over.
/// Lower is faster.
pub const DEFAULT_DEPTH: usize = 8;

/// Base score of a decided game. A win found `t` tiles into the game scores
/// `WIN_SCORE - t` for the human and `-WIN_SCORE + t` for the computer, so
/// quicker wins score further from zero.
pub const WIN_SCORE: i32 = 1000;

/// When a board with no line of four counts as drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawRule {
    /// Drawn as soon as every cell is filled (`turn_count >= 42`)
    AtCapacity,
    /// Drawn only once the turn count passes the capacity (`turn_count > 42`),
    /// one move after the board saturates
    PastCapacity,
}

impl DrawRule {
    pub fn is_draw(self, turn_count: usize) -> bool {
        match self {
            DrawRule::AtCapacity => turn_count >= CAPACITY,
            DrawRule::PastCapacity => turn_count > CAPACITY,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: usize,
    pub win_score: i32,
    pub draw_rule: DrawRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            win_score: WIN_SCORE,
            draw_rule: DrawRule::AtCapacity,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_draw_rule(mut self, draw_rule: DrawRule) -> Self {
        self.draw_rule = draw_rule;
        self
    }

    /// Checks that the depth fits within one game and that shaped win
    /// scores stay clear of the heuristic range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        if self.depth > CAPACITY {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {}",
                CAPACITY
            )));
        }
        let floor = CAPACITY as i32 + TABLE_TOTAL;
        if self.win_score <= floor {
            return Err(ConfigError::Validation(format!(
                "win_score must be > {}",
                floor
            )));
        }
        Ok(())
    }
}
