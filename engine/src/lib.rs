pub mod config;
pub mod engine;
pub mod logger;

pub use engine::session::{FirstPlayerMode, GameSession, SessionRng, SessionSettings};
pub use engine::tictactoe::{
    Board, GameStatus, InvalidMove, Mark, NoLegalMove, TicTacToeGameState, WinningLine, best_move,
};
