use std::ops::Range;

use log::trace;

use crate::fill::{Direction, DpTables};
use crate::matrix::{Position, ScoreMatrix};
use crate::scoring::AlignmentStats;
use crate::AlignmentMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Symbol of `y` against a gap in `x`.
    Insertion,
    /// Symbol of `x` against a gap in `y`.
    Deletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_x: Vec<u8>,
    pub aligned_y: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    /// Cell where the traceback stopped.
    pub start_position: Position,
    /// Cell the traceback started from.
    pub end_position: Position,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Slice of `x` covered by the alignment.
    pub fn x_range(&self) -> Range<usize> {
        self.start_position.i..self.end_position.i
    }

    /// Slice of `y` covered by the alignment.
    pub fn y_range(&self) -> Range<usize> {
        self.start_position.j..self.end_position.j
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc
            })
    }

    /// Fraction of columns that are identical symbols; 0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.stats().matches as f64 / self.len() as f64
    }

    pub fn aligned_strings(&self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.aligned_x).into_owned(),
            String::from_utf8_lossy(&self.aligned_y).into_owned(),
        )
    }
}

/// A local alignment together with the filled score matrix it was traced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAlignment {
    pub alignment: AlignmentResult,
    pub matrix: ScoreMatrix,
}

impl LocalAlignment {
    pub fn score(&self) -> i32 {
        self.alignment.score
    }
}

pub struct Traceback<'a> {
    tables: &'a DpTables,
    x: &'a [u8],
    y: &'a [u8],
    gap_symbol: u8,
}

impl<'a> Traceback<'a> {
    pub fn new(tables: &'a DpTables, x: &'a [u8], y: &'a [u8], gap_symbol: u8) -> Self {
        Self {
            tables,
            x,
            y,
            gap_symbol,
        }
    }

    /// Bottom-right corner for global alignment; the first maximum in
    /// row-major order for local alignment.
    pub fn start_cell(&self, mode: AlignmentMode) -> Position {
        match mode {
            AlignmentMode::Global => Position::new(self.x.len(), self.y.len()),
            AlignmentMode::Local => self
                .tables
                .scores
                .max_position()
                .map(|(pos, _)| pos)
                .unwrap_or(Position::ORIGIN),
        }
    }

    /// Walks recorded directions back from `end` until the origin or a `Stop` cell.
    pub fn reconstruct_alignment(&self, end: Position) -> AlignmentResult {
        let mut aligned_x = Vec::new();
        let mut aligned_y = Vec::new();
        let mut operations = Vec::new();

        let score = self.tables.scores.at(end);
        trace!("Traceback from ({}, {}) with score {}", end.i, end.j, score);

        let mut current = end;
        while current != Position::ORIGIN {
            match self.tables.directions.at(current) {
                Direction::Diagonal => {
                    let (a, b) = (self.x[current.i - 1], self.y[current.j - 1]);
                    aligned_x.push(a);
                    aligned_y.push(b);
                    operations.push(if a == b {
                        TracebackOperation::Match
                    } else {
                        TracebackOperation::Mismatch
                    });
                    current.i -= 1;
                    current.j -= 1;
                }
                Direction::GapInX => {
                    aligned_x.push(self.gap_symbol);
                    aligned_y.push(self.y[current.j - 1]);
                    operations.push(TracebackOperation::Insertion);
                    current.j -= 1;
                }
                Direction::GapInY => {
                    aligned_x.push(self.x[current.i - 1]);
                    aligned_y.push(self.gap_symbol);
                    operations.push(TracebackOperation::Deletion);
                    current.i -= 1;
                }
                Direction::Stop => break,
            }
        }

        // Columns were collected end to start
        aligned_x.reverse();
        aligned_y.reverse();
        operations.reverse();

        AlignmentResult {
            score,
            aligned_x,
            aligned_y,
            operations,
            start_position: current,
            end_position: end,
        }
    }
}
