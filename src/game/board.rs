use crate::error::MoveError;

/// Default board height (rows) for a standard game.
pub const ROWS: usize = 6;
/// Default board width (columns) for a standard game.
pub const COLS: usize = 7;

/// Length of a winning run.
const WIN_LENGTH: usize = 4;

/// Scan directions for line detection, in canonical order:
/// horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Orange,
}

/// The playing grid. Row 0 is the top, row `rows - 1` the bottom; tokens
/// fall to the lowest empty row of their column and are never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with standard 6x7 dimensions.
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create a new empty board with the given dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "cell out of range");
        self.cells[row * self.cols + col]
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// `None` if the column is full or out of range.
    pub fn available_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.available_row(col).is_none()
    }

    /// Drop a piece in a column, returning the row where it landed.
    /// The board is left untouched on error.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        debug_assert!(cell != Cell::Empty, "cannot drop an empty cell");
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.cols,
            });
        }
        let row = self.available_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.cols + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Find a four-in-a-row run owned by `owner`, if one exists.
    ///
    /// Scans rows top-to-bottom, columns left-to-right, directions in the
    /// fixed order of [`DIRECTIONS`], and returns the first qualifying run
    /// in scan order. When several winning lines exist the earliest in this
    /// canonical order is returned, which keeps results deterministic.
    pub fn find_winning_line(&self, owner: Cell) -> Option<[(usize, usize); WIN_LENGTH]> {
        if owner == Cell::Empty {
            return None;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != owner {
                    continue;
                }

                'dirs: for &(dr, dc) in &DIRECTIONS {
                    let mut line = [(row, col); WIN_LENGTH];
                    for (i, slot) in line.iter_mut().enumerate().skip(1) {
                        let r = row as i32 + dr * i as i32;
                        let c = col as i32 + dc * i as i32;
                        if r < 0 || r >= self.rows as i32 || c < 0 || c >= self.cols as i32 {
                            continue 'dirs;
                        }
                        if self.get(r as usize, c as usize) != owner {
                            continue 'dirs;
                        }
                        *slot = (r as usize, c as usize);
                    }
                    return Some(line);
                }
            }
        }

        None
    }

    /// Check whether `owner` has any four-in-a-row on the board.
    pub fn has_winning_line(&self, owner: Cell) -> bool {
        self.find_winning_line(owner).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Orange).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Orange);

        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_available_row_never_descends() {
        let mut board = Board::new();
        let mut prev = board.available_row(2).unwrap();
        for _ in 0..ROWS - 1 {
            board.drop_piece(2, Cell::Red).unwrap();
            let next = board.available_row(2).unwrap();
            assert!(next < prev, "pieces must stack upward");
            prev = next;
        }
    }

    #[test]
    fn test_column_full_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(0));

        let snapshot = board.clone();
        assert_eq!(
            board.drop_piece(0, Cell::Orange),
            Err(MoveError::ColumnFull(0))
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Cell::Red),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_gravity_invariant_after_random_fill() {
        let mut board = Board::new();
        // Uneven fill pattern
        for &col in &[3, 3, 0, 6, 6, 6, 2, 3, 1, 5, 0] {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        for col in 0..COLS {
            let mut seen_piece = false;
            for row in 0..ROWS {
                let occupied = board.get(row, col) != Cell::Empty;
                if seen_piece {
                    assert!(occupied, "floating token above ({row}, {col})");
                }
                seen_piece = seen_piece || occupied;
            }
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(
            board.find_winning_line(Cell::Red),
            Some([(5, 2), (5, 3), (5, 4), (5, 5)])
        );
    }

    #[test]
    fn test_vertical_win_canonical_order() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Red).unwrap();
        }
        // Line is reported from the topmost cell downward (scan order).
        assert_eq!(
            board.find_winning_line(Cell::Red),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        // Staircase descending to the right: Red at (2,0) (3,1) (4,2) (5,3)
        board.drop_piece(0, Cell::Orange).unwrap();
        board.drop_piece(0, Cell::Orange).unwrap();
        board.drop_piece(0, Cell::Orange).unwrap();
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Orange).unwrap();
        board.drop_piece(1, Cell::Orange).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Orange).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Red).unwrap();

        assert_eq!(
            board.find_winning_line(Cell::Red),
            Some([(2, 0), (3, 1), (4, 2), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let mut board = Board::new();
        // Staircase rising to the right: Red at (5,0) (4,1) (3,2) (2,3)
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Orange).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Orange).unwrap();
        board.drop_piece(2, Cell::Orange).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Orange).unwrap();
        board.drop_piece(3, Cell::Orange).unwrap();
        board.drop_piece(3, Cell::Orange).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert_eq!(
            board.find_winning_line(Cell::Red),
            Some([(5, 0), (4, 1), (3, 2), (2, 3)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(board.find_winning_line(Cell::Red), None);
    }

    #[test]
    fn test_winning_line_only_reports_owner() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.drop_piece(4, Cell::Orange).unwrap();

        let line = board.find_winning_line(Cell::Red).unwrap();
        for (r, c) in line {
            assert_eq!(board.get(r, c), Cell::Red);
        }
        assert_eq!(board.find_winning_line(Cell::Orange), None);
        assert_eq!(board.find_winning_line(Cell::Empty), None);
    }

    #[test]
    fn test_find_winning_line_is_pure() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(0, Cell::Orange).unwrap();
        }
        let first = board.find_winning_line(Cell::Orange);
        let second = board.find_winning_line(Cell::Orange);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::with_size(4, 5);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 5);
        for _ in 0..4 {
            board.drop_piece(1, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(1));
        assert_eq!(
            board.find_winning_line(Cell::Red),
            Some([(0, 1), (1, 1), (2, 1), (3, 1)])
        );
    }
}
