//! Move labels and the validated move set

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// A single playable move label
///
/// Labels are opaque: identity is exact value equality and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(String);

impl Move {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, deduplicated collection of moves valid for one session
///
/// The sequence order defines circular adjacency for rule evaluation, so it
/// is preserved exactly as supplied. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Minimum number of moves for a playable game
    pub const MIN_MOVES: usize = 3;

    /// Validate raw labels and build a move set
    ///
    /// Rejects fewer than three labels, an even count, and duplicates.
    pub fn new<I, S>(labels: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<Move> = labels.into_iter().map(|l| Move(l.into())).collect();

        if moves.len() < Self::MIN_MOVES {
            return Err(GameError::Configuration {
                message: format!(
                    "At least {} moves are required, got {}",
                    Self::MIN_MOVES,
                    moves.len()
                ),
                field: "moves.length".to_string(),
            });
        }

        if moves.len() % 2 == 0 {
            return Err(GameError::Configuration {
                message: format!("Move count must be odd, got {}", moves.len()),
                field: "moves.parity".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for mv in &moves {
            if !seen.insert(mv.as_str()) {
                return Err(GameError::Configuration {
                    message: format!("Duplicate move label: {mv}"),
                    field: "moves.unique".to_string(),
                });
            }
        }

        Ok(Self { moves })
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at a 0-based position
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// 0-based position of a move, if it is a member
    pub fn index_of(&self, mv: &Move) -> Option<usize> {
        self.moves.iter().position(|m| m == mv)
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.index_of(mv).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_move_set_accepted() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.get(0).unwrap().as_str(), "rock");
        assert_eq!(moves.get(2).unwrap().as_str(), "scissors");
    }

    #[test]
    fn test_order_is_preserved() {
        let moves = MoveSet::new(["c", "a", "b", "e", "d"]).unwrap();
        let labels: Vec<&str> = moves.iter().map(Move::as_str).collect();
        assert_eq!(labels, ["c", "a", "b", "e", "d"]);
    }

    #[test]
    fn test_too_few_moves_rejected() {
        let err = MoveSet::new(["rock"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::Configuration { ref field, .. } if field == "moves.length"
        ));
    }

    #[test]
    fn test_even_count_rejected() {
        let err = MoveSet::new(["rock", "paper", "scissors", "lizard"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::Configuration { ref field, .. } if field == "moves.parity"
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = MoveSet::new(["rock", "paper", "rock"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::Configuration { ref field, .. } if field == "moves.unique"
        ));
    }

    #[test]
    fn test_index_of_membership() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let paper = moves.get(1).unwrap().clone();
        assert_eq!(moves.index_of(&paper), Some(1));
        assert!(moves.contains(&paper));

        let stranger = MoveSet::new(["a", "b", "c"]).unwrap().get(0).unwrap().clone();
        assert_eq!(moves.index_of(&stranger), None);
    }
}
