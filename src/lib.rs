//! Needleman-Wunsch and Smith-Waterman alignment with a linear gap penalty.
//!
//! ```
//! use pairwise_aligner::{align_global, align_local, SubstitutionMatrix};
//!
//! let blosum50 = SubstitutionMatrix::blosum50();
//!
//! let global = align_global("HEAGAWGHEE", "PAWHEAE", &blosum50).unwrap();
//! assert_eq!(global.aligned_x, b"HEAGAWGHE-E");
//! assert_eq!(global.aligned_y, b"--P-AW-HEAE");
//!
//! let local = align_local("HEAGAWGHEE", "PAWHEAE", &blosum50).unwrap();
//! assert_eq!(local.alignment.aligned_x, b"AWGHE");
//! assert_eq!(local.score(), 28);
//! ```

use log::{debug, warn};
use std::fmt;
use thiserror::Error;

pub mod alignment_mode;
pub mod batch;
pub mod config;
pub mod fill;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use alignment_mode::AlignmentMode;
pub use batch::BatchAligner;
pub use config::{AlignerConfig, BatchConfig};
pub use fill::{DpTables, Direction};
pub use matrix::{Matrix, Position, ScoreMatrix};
pub use scoring::{score_alignment, AlignmentStats, ScoringModel, SimpleScoring, SubstitutionMatrix};
pub use traceback::{AlignmentResult, LocalAlignment, Traceback, TracebackOperation};

// Written into an aligned sequence where only the other one advances
pub const GAP_SYMBOL: u8 = b'-';

// Max (|x|+1) * (|y|+1) under the default configuration
pub const DEFAULT_MAX_CELLS: usize = 1 << 26;

// Linear gap penalty paired with BLOSUM50 in the textbook examples
pub const BLOSUM50_GAP_PENALTY: i32 = -8;

// DNA scoring parameters
pub const DNA_MATCH: i32 = 1;
pub const DNA_MISMATCH: i32 = -3;
pub const DNA_GAP: i32 = -5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignerError {
    #[error("No substitution score for pair ({a}, {b})")]
    UndefinedScore { a: char, b: char },
    #[error("Invalid input sequence: {0}")]
    InvalidInput(String),
    #[error("Gap penalty must not be positive, got {0}")]
    InvalidGapPenalty(i32),
    #[error("Score overflow at row {row}, column {col}")]
    ScoreOverflow { row: usize, col: usize },
    #[error("Sequences too large: {0} matrix cells")]
    SequenceTooLarge(usize),
    #[error("Invalid substitution matrix: {0}")]
    InvalidMatrix(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Worker failed: {0}")]
    WorkerFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn from_aligned(aligned: &[u8], gap_symbol: u8) -> Self {
        Self {
            data: aligned.iter().copied().filter(|&s| s != gap_symbol).collect(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for Sequence {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<&str> for Sequence {
    fn from(data: &str) -> Self {
        Self::new(data.as_bytes())
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

/// Runs global and local alignments against one scoring model.
#[derive(Debug, Clone)]
pub struct Aligner<S> {
    scoring: S,
    config: AlignerConfig,
}

impl<S: ScoringModel> Aligner<S> {
    pub fn new(scoring: S) -> Self {
        Self {
            scoring,
            config: AlignerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AlignerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn global(
        &self,
        x: impl AsRef<[u8]>,
        y: impl AsRef<[u8]>,
    ) -> Result<AlignmentResult, AlignerError> {
        let (alignment, _) = self.run(AlignmentMode::Global, x.as_ref(), y.as_ref())?;
        Ok(alignment)
    }

    // Also hands back the filled score matrix
    pub fn local(
        &self,
        x: impl AsRef<[u8]>,
        y: impl AsRef<[u8]>,
    ) -> Result<LocalAlignment, AlignerError> {
        let (alignment, matrix) = self.run(AlignmentMode::Local, x.as_ref(), y.as_ref())?;
        Ok(LocalAlignment { alignment, matrix })
    }

    pub fn align(
        &self,
        mode: AlignmentMode,
        x: impl AsRef<[u8]>,
        y: impl AsRef<[u8]>,
    ) -> Result<AlignmentResult, AlignerError> {
        let (alignment, _) = self.run(mode, x.as_ref(), y.as_ref())?;
        Ok(alignment)
    }

    fn run(
        &self,
        mode: AlignmentMode,
        x: &[u8],
        y: &[u8],
    ) -> Result<(AlignmentResult, ScoreMatrix), AlignerError> {
        self.validate(x, y)?;

        let tables = fill::fill(mode, x, y, &self.scoring)?;
        let traceback = Traceback::new(&tables, x, y, self.config.gap_symbol);
        let end = traceback.start_cell(mode);
        let alignment = traceback.reconstruct_alignment(end);

        debug!(
            "{:?} alignment of {}x{} finished: score {}, {} columns",
            mode,
            x.len(),
            y.len(),
            alignment.score,
            alignment.len()
        );

        Ok((alignment, tables.scores))
    }

    fn validate(&self, x: &[u8], y: &[u8]) -> Result<(), AlignerError> {
        let gap_penalty = self.scoring.gap_penalty();
        if gap_penalty > 0 {
            return Err(AlignerError::InvalidGapPenalty(gap_penalty));
        }

        let gap_symbol = self.config.gap_symbol;
        for (name, seq) in [("x", x), ("y", y)] {
            if let Some(pos) = seq.iter().position(|&s| s == gap_symbol) {
                warn!("Rejecting sequence {} with gap symbol at {}", name, pos);
                return Err(AlignerError::InvalidInput(format!(
                    "sequence {} contains gap symbol '{}' at position {}",
                    name,
                    char::from(gap_symbol),
                    pos
                )));
            }
        }

        let cells = (x.len() + 1).saturating_mul(y.len() + 1);
        if cells > self.config.max_cells {
            return Err(AlignerError::SequenceTooLarge(cells));
        }

        Ok(())
    }
}

pub fn align_global<S: ScoringModel + ?Sized>(
    x: impl AsRef<[u8]>,
    y: impl AsRef<[u8]>,
    scoring: &S,
) -> Result<AlignmentResult, AlignerError> {
    Aligner::new(scoring).global(x, y)
}

pub fn align_local<S: ScoringModel + ?Sized>(
    x: impl AsRef<[u8]>,
    y: impl AsRef<[u8]>,
    scoring: &S,
) -> Result<LocalAlignment, AlignerError> {
    Aligner::new(scoring).local(x, y)
}
