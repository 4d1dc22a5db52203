use serde::{Deserialize, Serialize};

use super::PlayerIndex;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const LINE_LENGTH: usize = 4;

/// Geometry and win rule of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of same-owner pieces in a line needed to win
    pub line_length: usize,
    /// Also count vertical lines as wins. The chat bot never did.
    pub vertical_lines: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
            line_length: LINE_LENGTH,
            vertical_lines: false,
        }
    }
}

impl BoardConfig {
    /// The oversized 10x11 board the chat bot has always played on, one
    /// column per keycap selector.
    pub fn classic() -> Self {
        BoardConfig {
            rows: 10,
            cols: 11,
            ..Self::default()
        }
    }

    /// Reject shapes no game can be played on
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 {
            return Err(BoardError::NoRows);
        }
        if self.cols == 0 {
            return Err(BoardError::NoColumns);
        }
        if self.line_length < 2 {
            return Err(BoardError::LineTooShort(self.line_length));
        }
        if self.line_length > self.rows && self.line_length > self.cols {
            return Err(BoardError::LineDoesNotFit {
                line_length: self.line_length,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PlayerIndex),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn piece(self) -> Option<PlayerIndex> {
        match self {
            Cell::Empty => None,
            Cell::Piece(index) => Some(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// Row-major grid. Row 0 is the top, the last row is the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Degenerate shapes give a board that takes
    /// no pieces; see `BoardConfig::validate`.
    pub fn new(config: BoardConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::Empty; config.rows * config.cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.config.cols + col]
    }

    /// Iterate over the rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.config.cols.max(1))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.config.cols || self.config.rows == 0 {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.config.rows)
            .filter(|&row| !self.get(row, col).is_empty())
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: PlayerIndex) -> Result<usize, MoveError> {
        if col >= self.config.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Fall from the top until the next cell down is occupied or the floor
        let mut row = 0;
        while row + 1 < self.config.rows && self.get(row + 1, col).is_empty() {
            row += 1;
        }
        self.cells[row * self.config.cols + col] = Cell::Piece(piece);
        Ok(row)
    }

    /// Scan the whole board for a completed line.
    ///
    /// Every cell is tried as a line start in row-major order, checking
    /// rightward, up-right and down-right (then downward when vertical
    /// lines are enabled). The first line found decides the winner, so a
    /// move completing two lines at once resolves by scan order.
    pub fn winner(&self) -> Option<PlayerIndex> {
        let BoardConfig {
            rows,
            cols,
            line_length,
            vertical_lines,
        } = self.config;
        let reach = line_length.saturating_sub(1);

        for row in 0..rows {
            for col in 0..cols {
                if col + reach < cols {
                    if let Some(winner) = self.line_from(row, col, 0, 1) {
                        return Some(winner);
                    }
                    if row >= reach {
                        if let Some(winner) = self.line_from(row, col, -1, 1) {
                            return Some(winner);
                        }
                    }
                    if row + reach < rows {
                        if let Some(winner) = self.line_from(row, col, 1, 1) {
                            return Some(winner);
                        }
                    }
                }
                if vertical_lines && row + reach < rows {
                    if let Some(winner) = self.line_from(row, col, 1, 0) {
                        return Some(winner);
                    }
                }
            }
        }
        None
    }

    /// Owner of the line starting at (row, col) along the step vector, if
    /// every cell on it holds the same piece. Callers keep the line in range.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        row_step: isize,
        col_step: isize,
    ) -> Option<PlayerIndex> {
        let owner = self.get(row, col).piece()?;
        let (mut r, mut c) = (row as isize, col as isize);
        for _ in 1..self.config.line_length {
            r += row_step;
            c += col_step;
            if self.get(r as usize, c as usize) != Cell::Piece(owner) {
                return None;
            }
        }
        Some(owner)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> PlayerIndex {
        PlayerIndex::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, p(1)).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Piece(p(1)));

        let row = board.drop_piece(3, p(2)).unwrap();
        assert_eq!(row, 4); // On top of the first piece
        assert_eq!(board.get(4, 3), Cell::Piece(p(2)));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..ROWS {
            board.drop_piece(0, p(1)).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, p(2)), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, p(1)), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board_accepts_no_more_pieces() {
        let mut board = Board::default();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, p(1)).unwrap();
            }
        }
        for col in 0..COLS {
            assert_eq!(board.drop_piece(col, p(2)), Err(MoveError::ColumnFull));
        }
    }

    #[test]
    fn test_validate_board_shapes() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
        assert_eq!(BoardConfig::classic().validate(), Ok(()));

        let shape = |rows, cols, line_length| BoardConfig {
            rows,
            cols,
            line_length,
            vertical_lines: false,
        };
        assert_eq!(shape(0, 7, 4).validate(), Err(BoardError::NoRows));
        assert_eq!(shape(6, 0, 4).validate(), Err(BoardError::NoColumns));
        assert_eq!(shape(6, 7, 1).validate(), Err(BoardError::LineTooShort(1)));
        assert_eq!(
            shape(6, 7, 8).validate(),
            Err(BoardError::LineDoesNotFit {
                line_length: 8,
                rows: 6,
                cols: 7
            })
        );
        // A line that only fits across is still playable
        assert_eq!(shape(2, 7, 4).validate(), Ok(()));
    }

    #[test]
    fn test_zero_column_board_is_inert() {
        let mut board = Board::new(BoardConfig {
            cols: 0,
            ..BoardConfig::default()
        });
        assert_eq!(board.iter_rows().count(), 0);
        assert_eq!(board.drop_piece(0, p(1)), Err(MoveError::InvalidColumn));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_zero_row_board_is_inert() {
        let mut board = Board::new(BoardConfig {
            rows: 0,
            ..BoardConfig::default()
        });
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, p(1)), Err(MoveError::ColumnFull));
        assert_eq!(board.column_height(0), 0);
        assert_eq!(board.iter_rows().count(), 0);
    }

    #[test]
    fn test_classic_board_geometry() {
        let mut board = Board::new(BoardConfig::classic());
        assert_eq!(board.rows(), 10);
        assert_eq!(board.cols(), 11);
        assert_eq!(board.drop_piece(10, p(1)), Ok(9));
        assert_eq!(board.iter_rows().count(), 10);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, p(1)).unwrap();
        }
        assert_eq!(board.winner(), Some(p(1)));
    }

    #[test]
    fn test_horizontal_win_touching_right_edge() {
        let mut board = Board::default();
        for col in 3..7 {
            board.drop_piece(col, p(2)).unwrap();
        }
        assert_eq!(board.winner(), Some(p(2)));
    }

    #[test]
    fn test_vertical_stack_does_not_win_by_default() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, p(1)).unwrap();
        }
        assert_eq!(board.column_height(3), 4);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_vertical_win_when_enabled() {
        let mut board = Board::new(BoardConfig {
            vertical_lines: true,
            ..BoardConfig::default()
        });
        for _ in 0..3 {
            board.drop_piece(3, p(1)).unwrap();
        }
        assert_eq!(board.winner(), None);
        board.drop_piece(3, p(1)).unwrap();
        assert_eq!(board.winner(), Some(p(1)));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // (3,0) (2,1) (1,2) (0,3), stacked on filler from player 2
        for (col, filler) in [(0, 2), (1, 3), (2, 4), (3, 5)] {
            for _ in 0..filler {
                board.drop_piece(col, p(2)).unwrap();
            }
            board.drop_piece(col, p(1)).unwrap();
        }
        assert_eq!(board.get(3, 0), Cell::Piece(p(1)));
        assert_eq!(board.get(0, 3), Cell::Piece(p(1)));
        assert_eq!(board.winner(), Some(p(1)));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // (2,0) (3,1) (4,2) (5,3)
        for (col, filler) in [(3, 0), (2, 1), (1, 2), (0, 3)] {
            for _ in 0..filler {
                board.drop_piece(col, p(1)).unwrap();
            }
            board.drop_piece(col, p(2)).unwrap();
        }
        assert_eq!(board.winner(), Some(p(2)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, p(1)).unwrap();
        }
        board.drop_piece(3, p(2)).unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_simultaneous_lines_resolve_by_scan_order() {
        let mut board = Board::new(BoardConfig {
            rows: 2,
            cols: 4,
            ..BoardConfig::default()
        });
        for col in 0..4 {
            board.drop_piece(col, p(2)).unwrap();
        }
        for col in 0..4 {
            board.drop_piece(col, p(1)).unwrap();
        }
        // Row 0 is reached before row 1
        assert_eq!(board.winner(), Some(p(1)));
    }

    #[test]
    fn test_custom_line_length() {
        let mut board = Board::new(BoardConfig {
            line_length: 3,
            ..BoardConfig::default()
        });
        for col in 0..3 {
            board.drop_piece(col, p(1)).unwrap();
        }
        assert_eq!(board.winner(), Some(p(1)));
    }
}
