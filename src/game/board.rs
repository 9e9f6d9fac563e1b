use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of consecutive cells that wins the game.
pub const CONNECT: usize = 4;

/// Line orientations as (row step, column step): horizontal, vertical,
/// top-left to bottom-right, bottom-left to top-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Columns that can still receive a piece, in ascending order.
pub type LegalActions = Vec<usize>;

/// A contiguous run of `CONNECT` cells along one orientation.
pub type Window = [Cell; CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col] != Cell::Empty
    }

    /// Row of the lowest empty cell in `col`, or `None` when the column is full.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`. Callers validate user input before it gets
    /// here.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        assert!(col < COLS, "column {col} out of range (0..{COLS})");

        let row = self
            .lowest_open_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Remove the topmost piece of `col`, restoring that cell to empty.
    /// Returns the removed cell, or `None` if the column was empty.
    pub fn lift_piece(&mut self, col: usize) -> Option<Cell> {
        let row = (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty)?;
        let cell = self.cells[row][col];
        self.cells[row][col] = Cell::Empty;
        Some(cell)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns whose top cell is still empty, ascending.
    pub fn valid_moves(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// True if `cell` occupies four consecutive positions along any row,
    /// column or diagonal.
    pub fn has_four_in_a_row(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        self.windows()
            .any(|window| window.iter().all(|&c| c == cell))
    }

    /// Every length-4 window on the board: rows, columns, then both diagonal
    /// orientations.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_col)| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |col| self.window(row, col, d_row, d_col))
            })
        })
    }

    /// The window starting at (row, col) and stepping by (d_row, d_col), if
    /// it fits on the board.
    fn window(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Window> {
        let reach = CONNECT as isize - 1;
        let last_row = row as isize + reach * d_row;
        let last_col = col as isize + reach * d_col;
        if !(0..ROWS as isize).contains(&last_row) || !(0..COLS as isize).contains(&last_col) {
            return None;
        }

        let mut window = [Cell::Empty; CONNECT];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = row as isize + i as isize * d_row;
            let c = col as isize + i as isize * d_col;
            *slot = self.cells[r as usize][c as usize];
        }
        Some(window)
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
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Build a board from rows written top to bottom: `R`, `Y`, or `.`.
    pub(crate) fn board_from(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'R' => Cell::Red,
                    'Y' => Cell::Yellow,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.get(row, col) != Cell::Empty {
                    assert_ne!(
                        board.get(row + 1, col),
                        Cell::Empty,
                        "floating piece at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.lowest_open_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_open_row(0), None);
        let before = board;
        assert_eq!(
            board.drop_piece(0, Cell::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before, "rejected drop must not mutate the board");
        assert_eq!(board.valid_moves(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_column_panics() {
        let mut board = Board::new();
        let _ = board.drop_piece(COLS, Cell::Red);
    }

    #[test]
    fn test_lift_piece_restores_previous_board() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Yellow).unwrap();
        let before = board;

        board.drop_piece(2, Cell::Red).unwrap();
        assert_eq!(board.lift_piece(2), Some(Cell::Red));
        assert_eq!(board, before);
        assert_eq!(Board::new().lift_piece(2), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        let copy = board.clone();
        board.drop_piece(0, Cell::Red).unwrap();
        assert_eq!(copy.get(5, 0), Cell::Empty);
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
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn test_window_count() {
        // 24 horizontal + 21 vertical + 12 per diagonal orientation
        assert_eq!(Board::new().windows().count(), 69);
    }

    #[test]
    fn test_four_in_bottom_row() {
        let mut board = Board::new();
        for col in 0..4 {
            assert_eq!(board.drop_piece(col, Cell::Red).unwrap(), 5);
        }
        assert!(board.has_four_in_a_row(Cell::Red));
        assert!(!board.has_four_in_a_row(Cell::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.has_four_in_a_row(Cell::Yellow));
        assert!(!board.has_four_in_a_row(Cell::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_from([
            ".......",
            ".......",
            "...Y...",
            "...RY..",
            "...RRY.",
            "...RRRY",
        ]);
        assert!(board.has_four_in_a_row(Cell::Yellow));
        assert!(!board.has_four_in_a_row(Cell::Red));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = board_from([
            ".......",
            ".......",
            "......R",
            ".....RY",
            "....RYY",
            "...RYYR",
        ]);
        assert!(board.has_four_in_a_row(Cell::Red));
        assert!(!board.has_four_in_a_row(Cell::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.has_four_in_a_row(Cell::Red));
        assert!(!board.has_four_in_a_row(Cell::Empty));
    }

    #[test]
    fn test_full_board_without_winner() {
        let board = board_from([
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
        ]);
        assert!(board.is_full());
        assert!(!board.has_four_in_a_row(Cell::Red));
        assert!(!board.has_four_in_a_row(Cell::Yellow));
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut board = Board::new();
            let mut cell = Cell::Red;
            loop {
                let moves = board.valid_moves();
                assert_eq!(board.is_full(), moves.is_empty());
                if moves.is_empty() {
                    break;
                }
                let col = moves[rng.random_range(0..moves.len())];
                board.drop_piece(col, cell).unwrap();
                assert_gravity(&board);
                cell = if cell == Cell::Red { Cell::Yellow } else { Cell::Red };
            }
        }
    }
}
