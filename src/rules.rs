//! Circular winner determination over an odd move set

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::moves::{Move, MoveSet};

/// Result of comparing two moves, from the first-named side's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        };
        write!(f, "{label}")
    }
}

/// Determine the outcome of `a` against `b`
///
/// The moves sit on a circle in set order; each move loses to the next
/// `(N-1)/2` moves after it and beats the `(N-1)/2` before it. For N = 3
/// this is classic rock-paper-scissors.
///
/// Both moves must be members of `moves`; a miss means caller-side
/// validation was bypassed and is reported as [`GameError::InvalidMove`].
pub fn determine_outcome(moves: &MoveSet, a: &Move, b: &Move) -> GameResult<Outcome> {
    let i = moves
        .index_of(a)
        .ok_or_else(|| GameError::InvalidMove(a.to_string()))?;
    let j = moves
        .index_of(b)
        .ok_or_else(|| GameError::InvalidMove(b.to_string()))?;
    let n = moves.len();

    let offset = (j + n - i) % n;
    if offset == 0 {
        Ok(Outcome::Draw)
    } else if offset <= (n - 1) / 2 {
        Ok(Outcome::Lose)
    } else {
        Ok(Outcome::Win)
    }
}

/// Full pairwise outcome table
///
/// `matrix[r][c]` is the outcome of the row move against the column move,
/// both in set order. Rendering the table is the caller's job.
pub fn outcome_matrix(moves: &MoveSet) -> GameResult<Vec<Vec<Outcome>>> {
    let mut matrix = Vec::with_capacity(moves.len());
    for row in moves {
        let mut outcomes = Vec::with_capacity(moves.len());
        for col in moves {
            outcomes.push(determine_outcome(moves, row, col)?);
        }
        matrix.push(outcomes);
    }
    Ok(matrix)
}
