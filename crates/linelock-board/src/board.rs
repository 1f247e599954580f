//! N×N playing board with cyclic value stepping and per-cell locks.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::BoardError;

/// The playing board: an N×N grid of values and lock flags.
///
/// Each cell holds a value in `{0} ∪ {1..=N}` where 0 means empty, plus a lock
/// flag that freezes the cell once set. Mutations go through [`set_value`],
/// [`step_value`], and [`set_lock`]; the board rejects any write that would
/// duplicate a nonzero value within a row or column.
///
/// Coordinates are `(x, y)` where `x` is the row index and `y` is the column
/// index, both in `0..size`.
///
/// # Examples
///
/// ```
/// use linelock_board::Board;
///
/// let mut board = Board::default(); // 9x9, all cells empty and unlocked
/// assert!(board.is_empty(4, 4)?);
///
/// board.step_value(4, 4)?; // empty -> 1
/// assert_eq!(board.value(4, 4)?, 1);
/// assert!(!board.is_filled());
/// # Ok::<(), linelock_board::BoardError>(())
/// ```
///
/// [`set_value`]: Board::set_value
/// [`step_value`]: Board::step_value
/// [`set_lock`]: Board::set_lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    values: Vec<usize>,
    locks: Vec<bool>,
}

impl Board {
    /// Board dimension used by [`Board::default`].
    pub const DEFAULT_SIZE: usize = 9;

    /// Creates a board of the given dimension with every cell empty and
    /// unlocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelock_board::Board;
    ///
    /// let board = Board::new(4);
    /// assert_eq!(board.size(), 4);
    /// assert!(board.is_empty(3, 3).unwrap());
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0; size * size],
            locks: vec![false; size * size],
        }
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when every cell on the board holds a nonzero value.
    ///
    /// This is the game's sole win condition; it does not re-validate rows or
    /// columns beyond the constraint already enforced on every write.
    ///
    /// A zero-sized board is trivially filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.values.iter().all(|&value| value != 0)
    }

    /// Returns `true` when the cell at `(x, y)` is empty (holds 0).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.values[self.cell_index(x, y)?] == 0)
    }

    /// Returns `true` when the cell at `(x, y)` is locked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`.
    pub fn is_locked(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.locks[self.cell_index(x, y)?])
    }

    /// Returns the raw stored value of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`.
    pub fn value(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        Ok(self.values[self.cell_index(x, y)?])
    }

    /// Sets the cell at `(x, y)` directly, optionally locking it.
    ///
    /// Locked cells are left untouched, and values that would duplicate a
    /// nonzero value in the same row or column are dropped; both cases return
    /// `Ok(())` without modifying the board. On success the value is stored
    /// and the lock flag is set to `lock_after`.
    ///
    /// The accepted value range is `0..=size + 1`. The upper bound is one past
    /// the largest playable value; it is a legacy bound kept for
    /// compatibility (see DESIGN.md).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`, or [`BoardError::ValueOutOfRange`] if `value > size + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelock_board::Board;
    ///
    /// let mut board = Board::new(9);
    /// board.set_value(0, 0, 5, true)?;
    /// assert_eq!(board.value(0, 0)?, 5);
    /// assert!(board.is_locked(0, 0)?);
    ///
    /// // The cell is locked now, so further writes are silently ignored.
    /// board.set_value(0, 0, 7, false)?;
    /// assert_eq!(board.value(0, 0)?, 5);
    /// # Ok::<(), linelock_board::BoardError>(())
    /// ```
    pub fn set_value(
        &mut self,
        x: usize,
        y: usize,
        value: usize,
        lock_after: bool,
    ) -> Result<(), BoardError> {
        let index = self.cell_index(x, y)?;
        let max = self.size + 1;
        if value > max {
            return Err(BoardError::ValueOutOfRange { value, max });
        }
        if self.locks[index] || !self.fits(x, y, value) {
            return Ok(());
        }

        self.values[index] = value;
        self.locks[index] = lock_after;
        Ok(())
    }

    /// Advances the cell at `(x, y)` to the next value that fits.
    ///
    /// The value is incremented cyclically modulo `size + 1`, so a cell runs
    /// through `1, 2, ..., size, 0 (empty), 1, ...`. Candidates that would
    /// duplicate a nonzero value in the same row or column are skipped. Since
    /// 0 always fits, the loop terminates within `size + 1` iterations.
    ///
    /// Locked cells are left untouched (`Ok(())`, no change).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelock_board::Board;
    ///
    /// let mut board = Board::new(2);
    /// board.step_value(0, 0)?;
    /// board.step_value(0, 1)?; // 1 is taken in row 0, so this lands on 2
    /// assert_eq!(board.value(0, 1)?, 2);
    /// # Ok::<(), linelock_board::BoardError>(())
    /// ```
    pub fn step_value(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let index = self.cell_index(x, y)?;
        if self.locks[index] {
            return Ok(());
        }

        let mut value = self.values[index];
        loop {
            value = (value + 1) % (self.size + 1);
            if self.fits(x, y, value) {
                break;
            }
        }
        self.values[index] = value;
        Ok(())
    }

    /// Marks the cell at `(x, y)` as locked. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] if `x` or `y` is not in
    /// `0..size`.
    pub fn set_lock(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let index = self.cell_index(x, y)?;
        self.locks[index] = true;
        Ok(())
    }

    /// Returns whether `candidate` may be placed at `(x, y)`.
    ///
    /// 0 (empty) always fits. A nonzero candidate fits unless some *other*
    /// cell in row `x` or column `y` already holds the same value.
    fn fits(&self, x: usize, y: usize, candidate: usize) -> bool {
        if candidate == 0 {
            return true;
        }
        for j in 0..self.size {
            if j != y && self.values[x * self.size + j] == candidate {
                return false;
            }
        }
        for i in 0..self.size {
            if i != x && self.values[i * self.size + y] == candidate {
                return false;
            }
        }
        true
    }

    fn cell_index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::CoordinateOutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(x * self.size + y)
    }
}

impl Default for Board {
    /// Creates an empty board of dimension [`Board::DEFAULT_SIZE`].
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

impl Index<(usize, usize)> for Board {
    type Output = usize;

    /// Returns the raw value of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range; use [`Board::value`] for the
    /// fallible variant.
    fn index(&self, (x, y): (usize, usize)) -> &usize {
        assert!(
            x < self.size && y < self.size,
            "coordinate ({x}, {y}) is out of range for a {size}x{size} board",
            size = self.size,
        );
        &self.values[x * self.size + y]
    }
}

impl Display for Board {
    /// Renders the grid row by row, with `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size {
            for y in 0..self.size {
                if y != 0 {
                    write!(f, " ")?;
                }
                match self.values[x * self.size + y] {
                    0 => write!(f, ".")?,
                    value => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
