use std::str::FromStr;

use crate::{AlignerError, BLOSUM50_GAP_PENALTY, DNA_GAP, DNA_MATCH, DNA_MISMATCH};

/// Substitution scores plus a linear gap penalty.
pub trait ScoringModel {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignerError>;

    // Charged once per gap column, never positive
    fn gap_penalty(&self) -> i32;
}

impl<S: ScoringModel + ?Sized> ScoringModel for &S {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignerError> {
        (**self).score(a, b)
    }

    fn gap_penalty(&self) -> i32 {
        (**self).gap_penalty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleScoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_penalty: i32,
}

impl Default for SimpleScoring {
    fn default() -> Self {
        Self {
            match_score: DNA_MATCH,
            mismatch_score: DNA_MISMATCH,
            gap_penalty: DNA_GAP,
        }
    }
}

impl SimpleScoring {
    pub fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }
}

impl ScoringModel for SimpleScoring {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignerError> {
        Ok(if a == b {
            self.match_score
        } else {
            self.mismatch_score
        })
    }

    fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }
}

const MAX_SYMBOLS: usize = 256;

// Case-sensitive lookups; symbols outside the alphabet have no score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMatrix {
    alphabet: Vec<u8>,
    index: [Option<u8>; MAX_SYMBOLS],
    scores: Vec<i32>,
    gap_penalty: i32,
}

impl SubstitutionMatrix {
    pub fn from_rows(
        alphabet: &[u8],
        rows: &[Vec<i32>],
        gap_penalty: i32,
    ) -> Result<Self, AlignerError> {
        let mut index = [None; MAX_SYMBOLS];
        for (k, &symbol) in alphabet.iter().enumerate() {
            if index[symbol as usize].is_some() {
                return Err(AlignerError::InvalidMatrix(format!(
                    "duplicate symbol '{}'",
                    char::from(symbol)
                )));
            }
            index[symbol as usize] = Some(k as u8);
        }

        if rows.len() != alphabet.len() {
            return Err(AlignerError::InvalidMatrix(format!(
                "expected {} rows, got {}",
                alphabet.len(),
                rows.len()
            )));
        }
        if let Some((k, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != alphabet.len())
        {
            return Err(AlignerError::InvalidMatrix(format!(
                "row '{}' has {} columns, expected {}",
                char::from(alphabet[k]),
                row.len(),
                alphabet.len()
            )));
        }

        Ok(Self {
            alphabet: alphabet.to_vec(),
            index,
            scores: rows.concat(),
            gap_penalty,
        })
    }

    pub fn blosum50() -> Self {
        let mut index = [None; MAX_SYMBOLS];
        for (k, &symbol) in BLOSUM50_ALPHABET.iter().enumerate() {
            index[symbol as usize] = Some(k as u8);
        }
        Self {
            alphabet: BLOSUM50_ALPHABET.to_vec(),
            index,
            scores: BLOSUM50.concat(),
            gap_penalty: BLOSUM50_GAP_PENALTY,
        }
    }

    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize].is_some()
    }

    /// Scores `(a, b)` the way `self` scores `(b, a)`.
    pub fn transposed(&self) -> Self {
        let k = self.alphabet.len();
        let mut scores = vec![0; k * k];
        for r in 0..k {
            for c in 0..k {
                scores[c * k + r] = self.scores[r * k + c];
            }
        }
        Self {
            scores,
            ..self.clone()
        }
    }
}

impl ScoringModel for SubstitutionMatrix {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignerError> {
        match (self.index[a as usize], self.index[b as usize]) {
            (Some(r), Some(c)) => Ok(self.scores[r as usize * self.alphabet.len() + c as usize]),
            _ => Err(AlignerError::UndefinedScore {
                a: char::from(a),
                b: char::from(b),
            }),
        }
    }

    fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = AlignerError;

    // NCBI layout: header of column symbols, then one labelled row per symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| AlignerError::InvalidMatrix("missing header row".to_string()))?;
        let alphabet = header
            .split_whitespace()
            .map(parse_symbol)
            .collect::<Result<Vec<u8>, _>>()?;

        let mut rows: Vec<Option<Vec<i32>>> = vec![None; alphabet.len()];
        for line in lines {
            let mut fields = line.split_whitespace();
            let symbol = fields.next().map(parse_symbol).transpose()?.unwrap_or_default();
            let k = alphabet
                .iter()
                .position(|&s| s == symbol)
                .ok_or_else(|| {
                    AlignerError::InvalidMatrix(format!(
                        "row symbol '{}' not in header",
                        char::from(symbol)
                    ))
                })?;
            if rows[k].is_some() {
                return Err(AlignerError::InvalidMatrix(format!(
                    "duplicate row '{}'",
                    char::from(symbol)
                )));
            }
            let values = fields
                .map(|field| {
                    field.parse::<i32>().map_err(|e| {
                        AlignerError::InvalidMatrix(format!("bad score '{}': {}", field, e))
                    })
                })
                .collect::<Result<Vec<i32>, _>>()?;
            rows[k] = Some(values);
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(k, row)| {
                row.ok_or_else(|| {
                    AlignerError::InvalidMatrix(format!(
                        "missing row '{}'",
                        char::from(alphabet[k])
                    ))
                })
            })
            .collect::<Result<Vec<Vec<i32>>, _>>()?;

        Self::from_rows(&alphabet, &rows, BLOSUM50_GAP_PENALTY)
    }
}

fn parse_symbol(token: &str) -> Result<u8, AlignerError> {
    match token.as_bytes() {
        [symbol] => Ok(*symbol),
        _ => Err(AlignerError::InvalidMatrix(format!(
            "expected a single-symbol label, got '{}'",
            token
        ))),
    }
}

/// Re-scores a gapped pair column by column under `scoring`.
pub fn score_alignment<S: ScoringModel + ?Sized>(
    aligned_x: &[u8],
    aligned_y: &[u8],
    scoring: &S,
    gap_symbol: u8,
) -> Result<i32, AlignerError> {
    if aligned_x.len() != aligned_y.len() {
        return Err(AlignerError::InvalidInput(format!(
            "aligned rows differ in length: {} vs {}",
            aligned_x.len(),
            aligned_y.len()
        )));
    }

    aligned_x
        .iter()
        .zip(aligned_y)
        .enumerate()
        .try_fold(0, |total, (col, (&a, &b))| {
            let column = match (a == gap_symbol, b == gap_symbol) {
                (false, false) => scoring.score(a, b)?,
                (true, true) => {
                    return Err(AlignerError::InvalidInput(format!(
                        "column {} holds two gaps",
                        col
                    )))
                }
                _ => scoring.gap_penalty(),
            };
            Ok(total + column)
        })
}

const BLOSUM50_ALPHABET: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM50: [[i32; 24]; 24] = [
    //A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
    [ 5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -2, -1, -1, -3, -1,  1,  0, -3, -2,  0, -2, -1, -1, -5], // A
    [-2,  7, -1, -2, -4,  1,  0, -3,  0, -4, -3,  3, -2, -3, -3, -1, -1, -3, -1, -3, -1,  0, -1, -5], // R
    [-1, -1,  7,  2, -2,  0,  0,  0,  1, -3, -4,  0, -2, -4, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5], // N
    [-2, -2,  2,  8, -4,  0,  2, -1, -1, -4, -4, -1, -4, -5, -1,  0, -1, -5, -3, -4,  5,  1, -1, -5], // D
    [-1, -4, -2, -4, 13, -3, -3, -3, -3, -2, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -3, -3, -2, -5], // C
    [-1,  1,  0,  0, -3,  7,  2, -2,  1, -3, -2,  2,  0, -4, -1,  0, -1, -1, -1, -3,  0,  4, -1, -5], // Q
    [-1,  0,  0,  2, -3,  2,  6, -3,  0, -4, -3,  1, -2, -3, -1, -1, -1, -3, -2, -3,  1,  5, -1, -5], // E
    [ 0, -3,  0, -1, -3, -2, -3,  8, -2, -4, -4, -2, -3, -4, -2,  0, -2, -3, -3, -4, -1, -2, -2, -5], // G
    [-2,  0,  1, -1, -3,  1,  0, -2, 10, -4, -3,  0, -1, -1, -2, -1, -2, -3,  2, -4,  0,  0, -1, -5], // H
    [-1, -4, -3, -4, -2, -3, -4, -4, -4,  5,  2, -3,  2,  0, -3, -3, -1, -3, -1,  4, -4, -3, -1, -5], // I
    [-2, -3, -4, -4, -2, -2, -3, -4, -3,  2,  5, -3,  3,  1, -4, -3, -1, -2, -1,  1, -4, -3, -1, -5], // L
    [-1,  3,  0, -1, -3,  2,  1, -2,  0, -3, -3,  6, -2, -4, -1,  0, -1, -3, -2, -3,  0,  1, -1, -5], // K
    [-1, -2, -2, -4, -2,  0, -2, -3, -1,  2,  3, -2,  7,  0, -3, -2, -1, -1,  0,  1, -3, -1, -1, -5], // M
    [-3, -3, -4, -5, -2, -4, -3, -4, -1,  0,  1, -4,  0,  8, -4, -3, -2,  1,  4, -1, -4, -4, -2, -5], // F
    [-1, -3, -2, -1, -4, -1, -1, -2, -2, -3, -4, -1, -3, -4, 10, -1, -1, -4, -3, -3, -2, -1, -2, -5], // P
    [ 1, -1,  1,  0, -1,  0, -1,  0, -1, -3, -3,  0, -2, -3, -1,  5,  2, -4, -2, -2,  0,  0, -1, -5], // S
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  2,  5, -3, -2,  0,  0, -1,  0, -5], // T
    [-3, -3, -4, -5, -5, -1, -3, -3, -3, -3, -2, -3, -1,  1, -4, -4, -3, 15,  2, -3, -5, -2, -3, -5], // W
    [-2, -1, -2, -3, -3, -1, -2, -3,  2, -1, -1, -2,  0,  4, -3, -2, -2,  2,  8, -1, -3, -2, -1, -5], // Y
    [ 0, -3, -3, -4, -1, -3, -3, -4, -4,  4,  1, -3,  1, -1, -3, -2,  0, -3, -1,  5, -4, -3, -1, -5], // V
    [-2, -1,  4,  5, -3,  0,  1, -1,  0, -4, -4,  0, -3, -4, -2,  0,  0, -5, -3, -4,  5,  2, -1, -5], // B
    [-1,  0,  0,  1, -3,  4,  5, -2,  0, -3, -3,  1, -1, -4, -1,  0, -1, -2, -2, -3,  2,  5, -1, -5], // Z
    [-1, -1, -1, -1, -2, -1, -1, -2, -1, -1, -1, -1, -1, -2, -2, -1,  0, -3, -1, -1, -1, -1, -1, -5], // X
    [-5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1], // *
];
