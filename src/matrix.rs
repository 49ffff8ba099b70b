//! Dense row-major matrices backing the DP tables.

/// Cell coordinate: `i` indexes columns (sequence `x`), `j` indexes rows (sequence `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { i: 0, j: 0 };

    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Alignment scores, one row per symbol of `y` plus the boundary row.
pub type ScoreMatrix = Matrix<i32>;

impl<T: Copy> Matrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn at(&self, pos: Position) -> T {
        self.get(pos.j, pos.i)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Position, T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &value)| (Position::new(idx % cols, idx / cols), value))
    }
}

impl<T: Copy + Ord> Matrix<T> {
    /// First cell holding the maximum value, scanning rows top to bottom and
    /// each row left to right. `None` for a matrix without cells.
    pub fn max_position(&self) -> Option<(Position, T)> {
        let mut best: Option<(Position, T)> = None;
        for (pos, value) in self.iter() {
            match best {
                Some((_, current)) if value <= current => {}
                _ => best = Some((pos, value)),
            }
        }
        best
    }
}
