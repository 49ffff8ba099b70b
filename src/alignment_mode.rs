use crate::fill::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignmentMode {
    #[default]
    Global, // Needleman-Wunsch
    Local,  // Smith-Waterman
}

impl AlignmentMode {
    /// Score of the boundary cell `offset` steps away from the origin,
    /// `None` when it does not fit in an `i32`.
    pub fn boundary_score(self, offset: usize, gap_penalty: i32) -> Option<i32> {
        match self {
            AlignmentMode::Global => i32::try_from(offset).ok()?.checked_mul(gap_penalty),
            AlignmentMode::Local => Some(0),
        }
    }

    /// Direction stored in row 0, where only `x` has been consumed.
    pub(crate) fn top_boundary(self) -> Direction {
        match self {
            AlignmentMode::Global => Direction::GapInY,
            AlignmentMode::Local => Direction::Stop,
        }
    }

    /// Direction stored in column 0, where only `y` has been consumed.
    pub(crate) fn left_boundary(self) -> Direction {
        match self {
            AlignmentMode::Global => Direction::GapInX,
            AlignmentMode::Local => Direction::Stop,
        }
    }

    pub fn is_local(self) -> bool {
        self == AlignmentMode::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores() {
        assert_eq!(AlignmentMode::Global.boundary_score(3, -8), Some(-24));
        assert_eq!(AlignmentMode::Global.boundary_score(0, -8), Some(0));
        assert_eq!(AlignmentMode::Local.boundary_score(3, -8), Some(0));
    }

    #[test]
    fn boundary_score_overflow() {
        assert_eq!(AlignmentMode::Global.boundary_score(3, i32::MIN / 2), None);
        assert_eq!(AlignmentMode::Global.boundary_score(1 << 40, -1), None);
        assert_eq!(AlignmentMode::Local.boundary_score(1 << 40, i32::MIN), Some(0));
    }

    #[test]
    fn boundary_directions() {
        assert_eq!(AlignmentMode::Global.top_boundary(), Direction::GapInY);
        assert_eq!(AlignmentMode::Global.left_boundary(), Direction::GapInX);
        assert_eq!(AlignmentMode::Local.top_boundary(), Direction::Stop);
        assert_eq!(AlignmentMode::Local.left_boundary(), Direction::Stop);
    }
}
