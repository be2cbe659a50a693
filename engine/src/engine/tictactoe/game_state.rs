use super::board::Board;
use super::types::{GameStatus, InvalidMove, Mark, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub turns: usize,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            turns: 0,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), InvalidMove> {
        if self.status != GameStatus::InProgress {
            return Err(InvalidMove::GameOver);
        }
        if mark != self.current_mark {
            return Err(InvalidMove::NotYourTurn);
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.turns += 1;

        self.status = self.board.status();
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        let state = TicTacToeGameState::new();

        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.turns, 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();

        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(state.current_mark, Mark::O);

        state.place_mark(Mark::O, 4).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.turns, 2);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_placing_out_of_turn_fails() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 0).unwrap();

        assert_eq!(state.place_mark(Mark::X, 1), Err(InvalidMove::NotYourTurn));
        assert_eq!(state.turns, 1);
    }

    #[test]
    fn test_win_freezes_the_game() {
        let mut state = TicTacToeGameState::new();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, index).unwrap();
        }

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(
            state.winning_line().map(|line| line.cells),
            Some([0, 1, 2])
        );
        // The turn does not switch past the end of the game.
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(Mark::O, 5), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = TicTacToeGameState::new();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 1),
            (Mark::X, 2),
            (Mark::O, 4),
            (Mark::X, 3),
            (Mark::O, 5),
            (Mark::X, 7),
            (Mark::O, 6),
            (Mark::X, 8),
        ] {
            state.place_mark(mark, index).unwrap();
        }

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert_eq!(state.turns, 9);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_side_effects() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 0).unwrap();

        assert_eq!(state.place_mark(Mark::O, 0), Err(InvalidMove::Occupied(0)));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.turns, 1);
    }
}
