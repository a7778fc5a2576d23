use std::fmt;

/// A square on the board, 1-indexed: row 1 is White's back rank and column 1
/// is the a-file.
///
/// Construction does not validate. Move generation steps through off-board
/// positions as intermediates; callers check [`Position::is_on_board`] before
/// storing or returning one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn is_on_board(&self) -> bool {
        self.row >= 1 && self.row <= 8 && self.column >= 1 && self.column <= 8
    }

    /// Moves a position by a row and column offset.
    ///
    /// # Arguments
    ///
    /// * `d_row` - The row offset.
    /// * `d_column` - The column offset.
    ///
    /// # Returns
    ///
    /// * `Position` - The shifted position, which may be off the board.
    #[inline]
    pub const fn offset(&self, d_row: i8, d_column: i8) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Grid indices `(row, column)` into an `[[_; 8]; 8]` array, or `None`
    /// when off the board.
    #[inline]
    pub fn grid_index(&self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.row - 1) as usize, (self.column - 1) as usize))
        } else {
            None
        }
    }

    /// Iterates every square, row 1 first, column 1 first within a row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|row| (1..=8).map(move |column| Position::new(row, column)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + (self.column - 1) as u8);
            write!(f, "{}{}", file, self.row)
        } else {
            write!(f, "({},{})", self.row, self.column)
        }
    }
}
