use super::board::Board;
use super::types::{GameStatus, Mark, NoLegalMove};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const TIE_SCORE: i32 = 0;

/// Picks the optimal cell for `bot_mark` by exhaustive minimax.
///
/// Among equally scored cells the first one in ascending index order wins,
/// and a line of play that already reaches the best possible score for the
/// side on move cuts off its remaining siblings. Both rules together make
/// the chosen cell a deterministic function of the board.
pub fn best_move(board: &Board, bot_mark: Mark) -> Result<usize, NoLegalMove> {
    let opponent_mark = bot_mark.opponent().ok_or(NoLegalMove)?;

    if board.status() != GameStatus::InProgress {
        return Err(NoLegalMove);
    }

    let mut scratch = board.clone();
    minimax(&mut scratch, bot_mark, bot_mark, opponent_mark)
        .cell
        .ok_or(NoLegalMove)
}

struct SearchOutcome {
    cell: Option<usize>,
    score: i32,
}

impl SearchOutcome {
    fn terminal(score: i32) -> Self {
        Self { cell: None, score }
    }
}

fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark, opponent_mark: Mark) -> SearchOutcome {
    if let Some(winner) = check_win(board) {
        let score = if winner == bot_mark {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
        return SearchOutcome::terminal(score);
    }

    let open_cells = board.empty_cells();
    if open_cells.is_empty() {
        return SearchOutcome::terminal(TIE_SCORE);
    }

    let next_to_move = if to_move == bot_mark {
        opponent_mark
    } else {
        bot_mark
    };
    // Best score the side on move can possibly reach at this ply.
    let cutoff_score = if to_move == bot_mark {
        WIN_SCORE
    } else {
        LOSS_SCORE
    };

    let mut scored_moves = Vec::with_capacity(open_cells.len());
    for index in open_cells {
        board.set(index, to_move);
        let score = minimax(board, next_to_move, bot_mark, opponent_mark).score;
        board.set(index, Mark::Empty);

        if score == cutoff_score {
            return SearchOutcome {
                cell: Some(index),
                score,
            };
        }
        scored_moves.push((index, score));
    }

    if to_move == bot_mark {
        let mut best = SearchOutcome {
            cell: None,
            score: i32::MIN,
        };
        for (index, score) in scored_moves {
            if score > best.score {
                best = SearchOutcome {
                    cell: Some(index),
                    score,
                };
            }
        }
        best
    } else {
        let mut best = SearchOutcome {
            cell: None,
            score: i32::MAX,
        };
        for (index, score) in scored_moves {
            if score < best.score {
                best = SearchOutcome {
                    cell: Some(index),
                    score,
                };
            }
        }
        best
    }
}
