use super::board::Board;
use super::types::{Mark, WinningLine};

// 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WIN_LINES {
        let mark = cells[line[0]];
        if mark != Mark::Empty && cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine { cells: line, mark });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_no_win_on_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_detects_each_row() {
        for row in 0..3 {
            let mut cells = [E; 9];
            for col in 0..3 {
                cells[row * 3 + col] = O;
            }
            let board = Board::from_cells(cells);

            assert_eq!(check_win(&board), Some(O), "row {}", row);
        }
    }

    #[test]
    fn test_detects_each_column() {
        for col in 0..3 {
            let mut cells = [E; 9];
            for row in 0..3 {
                cells[row * 3 + col] = X;
            }
            let board = Board::from_cells(cells);

            assert_eq!(check_win(&board), Some(X), "column {}", col);
        }
    }

    #[test]
    fn test_detects_main_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, E,
            O, X, E,
            E, E, X,
        ]);

        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine {
                cells: [0, 4, 8],
                mark: X,
            })
        );
    }

    #[test]
    fn test_detects_anti_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, O,
            E, O, E,
            O, E, X,
        ]);

        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine {
                cells: [2, 4, 6],
                mark: O,
            })
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            O, X, O,
            O, X, O,
        ]);

        assert_eq!(check_win(&board), None);
    }
}
