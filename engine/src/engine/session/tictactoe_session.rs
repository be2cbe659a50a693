use serde::{Deserialize, Serialize};

use super::session_rng::SessionRng;
use crate::config::Validate;
use crate::engine::tictactoe::{
    Board, GameStatus, InvalidMove, Mark, NoLegalMove, TicTacToeGameState, WinningLine, best_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    HumanFirst,
    EngineFirst,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub first_player: FirstPlayerMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::HumanFirst,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// One game between a human and the engine. X always opens; the first
/// player mode decides which side holds X.
#[derive(Debug, Clone)]
pub struct GameSession {
    game_state: TicTacToeGameState,
    human_mark: Mark,
    engine_mark: Mark,
}

impl GameSession {
    pub fn create(settings: &SessionSettings, rng: &mut SessionRng) -> Self {
        let human_first = match settings.first_player {
            FirstPlayerMode::HumanFirst => true,
            FirstPlayerMode::EngineFirst => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };

        let (human_mark, engine_mark) = if human_first {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };

        Self {
            game_state: TicTacToeGameState::new(),
            human_mark,
            engine_mark,
        }
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    pub fn winner(&self) -> Option<Mark> {
        self.game_state.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line()
    }

    pub fn is_engine_turn(&self) -> bool {
        self.game_state.status == GameStatus::InProgress
            && self.game_state.current_mark == self.engine_mark
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<(), InvalidMove> {
        self.game_state.place_mark(self.human_mark, index)
    }

    /// Lets the engine take its turn and returns the cell it filled.
    pub fn play_engine_turn(&mut self) -> Result<usize, NoLegalMove> {
        if !self.is_engine_turn() {
            return Err(NoLegalMove);
        }

        let index = best_move(&self.game_state.board, self.engine_mark)?;
        self.game_state
            .place_mark(self.engine_mark, index)
            .map_err(|_| NoLegalMove)?;
        Ok(index)
    }
}
