mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::best_move;
pub use game_state::TicTacToeGameState;
pub use types::{CELL_COUNT, GameStatus, InvalidMove, Mark, NoLegalMove, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
