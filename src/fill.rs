//! DP matrix fill shared by global and local alignment.
//!
//! ```text
//! diagonal = F[j-1][i-1] + score(x[i], y[j])
//! gapInX   = F[j-1][i]   + gap            // y advances, x gets a gap
//! gapInY   = F[j][i-1]   + gap            // x advances, y gets a gap
//! F[j][i]  = max(diagonal, gapInX, gapInY)          global
//! F[j][i]  = max(diagonal, gapInX, gapInY, 0)       local
//! ```
//!
//! Ties resolve as `Diagonal`, then `GapInX`, then `GapInY`. A local cell
//! whose three candidates are all non-positive is floored to 0 and tagged
//! `Stop`.

use log::debug;

use crate::matrix::{Matrix, ScoreMatrix};
use crate::{AlignerError, AlignmentMode, ScoringModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x[i]` aligned with `y[j]`, predecessor `(j-1, i-1)`.
    Diagonal,
    /// Gap in `x` against `y[j]`, predecessor `(j-1, i)`.
    GapInX,
    /// `x[i]` against a gap in `y`, predecessor `(j, i-1)`.
    GapInY,
    /// Start of a local alignment.
    Stop,
}

/// Scores and the direction that produced each of them.
#[derive(Debug, Clone)]
pub struct DpTables {
    pub mode: AlignmentMode,
    pub scores: ScoreMatrix,
    pub directions: Matrix<Direction>,
}

pub fn fill<S: ScoringModel + ?Sized>(
    mode: AlignmentMode,
    x: &[u8],
    y: &[u8],
    scoring: &S,
) -> Result<DpTables, AlignerError> {
    let (m, n) = (x.len(), y.len());
    let gap = scoring.gap_penalty();

    let mut scores = Matrix::new(n + 1, m + 1, 0);
    let mut directions = Matrix::new(n + 1, m + 1, Direction::Stop);

    for i in 1..=m {
        let score = mode
            .boundary_score(i, gap)
            .ok_or(AlignerError::ScoreOverflow { row: 0, col: i })?;
        scores.set(0, i, score);
        directions.set(0, i, mode.top_boundary());
    }
    for j in 1..=n {
        let score = mode
            .boundary_score(j, gap)
            .ok_or(AlignerError::ScoreOverflow { row: j, col: 0 })?;
        scores.set(j, 0, score);
        directions.set(j, 0, mode.left_boundary());
    }

    for (j, &b) in y.iter().enumerate().map(|(k, b)| (k + 1, b)) {
        for (i, &a) in x.iter().enumerate().map(|(k, a)| (k + 1, a)) {
            let overflow = AlignerError::ScoreOverflow { row: j, col: i };
            let diagonal = scores
                .get(j - 1, i - 1)
                .checked_add(scoring.score(a, b)?)
                .ok_or_else(|| overflow.clone())?;
            let gap_in_x = scores
                .get(j - 1, i)
                .checked_add(gap)
                .ok_or_else(|| overflow.clone())?;
            let gap_in_y = scores.get(j, i - 1).checked_add(gap).ok_or(overflow)?;

            let (score, direction) = select(mode, diagonal, gap_in_x, gap_in_y);
            scores.set(j, i, score);
            directions.set(j, i, direction);
        }
    }

    debug!("Filled {:?} DP matrix with {} rows x {} columns", mode, n + 1, m + 1);

    Ok(DpTables {
        mode,
        scores,
        directions,
    })
}

fn select(mode: AlignmentMode, diagonal: i32, gap_in_x: i32, gap_in_y: i32) -> (i32, Direction) {
    let best = diagonal.max(gap_in_x).max(gap_in_y);
    if mode.is_local() && best <= 0 {
        return (0, Direction::Stop);
    }

    let direction = if best == diagonal {
        Direction::Diagonal
    } else if best == gap_in_x {
        Direction::GapInX
    } else {
        Direction::GapInY
    };
    (best, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimpleScoring, SubstitutionMatrix};

    #[test]
    fn tie_break_order() {
        let global = AlignmentMode::Global;
        assert_eq!(select(global, 3, 3, 3), (3, Direction::Diagonal));
        assert_eq!(select(global, 2, 3, 3), (3, Direction::GapInX));
        assert_eq!(select(global, 2, 1, 3), (3, Direction::GapInY));
        assert_eq!(select(global, -4, -2, -9), (-2, Direction::GapInX));
    }

    #[test]
    fn local_floor_is_stop() {
        let local = AlignmentMode::Local;
        assert_eq!(select(local, -1, -5, -2), (0, Direction::Stop));
        assert_eq!(select(local, 0, -5, -2), (0, Direction::Stop));
        assert_eq!(select(local, 1, -5, -2), (1, Direction::Diagonal));
    }

    #[test]
    fn global_boundaries() {
        let scoring = SubstitutionMatrix::blosum50();
        let tables = fill(AlignmentMode::Global, b"HEA", b"PA", &scoring).unwrap();
        assert_eq!(tables.scores.row(0), &[0, -8, -16, -24]);
        assert_eq!(tables.scores.get(1, 0), -8);
        assert_eq!(tables.scores.get(2, 0), -16);
        assert_eq!(tables.directions.get(0, 3), Direction::GapInY);
        assert_eq!(tables.directions.get(2, 0), Direction::GapInX);
    }

    #[test]
    fn local_boundaries_are_zero_stops() {
        let scoring = SubstitutionMatrix::blosum50();
        let tables = fill(AlignmentMode::Local, b"HEA", b"PA", &scoring).unwrap();
        assert_eq!(tables.scores.row(0), &[0, 0, 0, 0]);
        assert_eq!(tables.directions.row(0), &[Direction::Stop; 4]);
        assert_eq!(tables.directions.get(2, 0), Direction::Stop);
        assert!(tables.scores.as_slice().iter().all(|&s| s >= 0));
    }

    #[test]
    fn textbook_global_corner() {
        let scoring = SubstitutionMatrix::blosum50();
        let tables = fill(AlignmentMode::Global, b"HEAGAWGHEE", b"PAWHEAE", &scoring).unwrap();
        assert_eq!(tables.scores.rows(), 8);
        assert_eq!(tables.scores.cols(), 11);
        assert_eq!(tables.scores.get(7, 10), 1);
        assert_eq!(tables.directions.get(7, 10), Direction::Diagonal);
    }

    #[test]
    fn overflow_is_reported() {
        let scoring = SimpleScoring::new(1, -1, i32::MIN / 2);
        let err = fill(AlignmentMode::Global, b"AAA", b"", &scoring).unwrap_err();
        assert_eq!(err, AlignerError::ScoreOverflow { row: 0, col: 3 });

        let scoring = SimpleScoring::new(i32::MAX, -1, -1);
        let err = fill(AlignmentMode::Local, b"AA", b"AA", &scoring).unwrap_err();
        assert_eq!(err, AlignerError::ScoreOverflow { row: 2, col: 2 });
    }

    #[test]
    fn empty_sequences_keep_boundaries() {
        let scoring = SimpleScoring::default();
        let tables = fill(AlignmentMode::Global, b"", b"ACG", &scoring).unwrap();
        assert_eq!(tables.scores.cols(), 1);
        assert_eq!(tables.scores.as_slice(), &[0, -5, -10, -15]);
    }
}
