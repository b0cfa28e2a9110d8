//! One round of play: commit, choose, resolve, reveal

use rand::{CryptoRng, RngCore};
use serde::Serialize;
use tracing::debug;

use crate::commitment::MoveCommitment;
use crate::error::{GameError, GameResult};
use crate::moves::{Move, MoveSet};
use crate::rules::{self, Outcome};

/// A single in-flight round
///
/// Holds the opponent's commitment between the pre-input display and the
/// human's choice. Resolving consumes the round, so no per-round state can
/// leak into the next one.
#[derive(Debug)]
pub struct Round {
    commitment: MoveCommitment,
}

impl Round {
    /// Open a round by committing the opponent to a move
    pub fn start<R>(moves: &MoveSet, rng: &mut R) -> GameResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let commitment = MoveCommitment::commit(moves, rng)?;
        debug!(digest = commitment.digest(), "opponent committed");
        Ok(Self { commitment })
    }

    /// Digest published before the human chooses
    ///
    /// This is the only part of the commitment exposed pre-choice; the key
    /// and the move stay withheld until [`Round::resolve`].
    pub fn digest(&self) -> &str {
        self.commitment.digest()
    }

    /// Resolve the round with the human's 1-based selection
    ///
    /// Selections outside `[1, N]` are rejected with the recoverable
    /// [`GameError::InvalidInput`]; the round is only consumed on success.
    pub fn resolve(self, moves: &MoveSet, selection: usize) -> GameResult<RoundResult> {
        if selection < 1 || selection > moves.len() {
            return Err(GameError::InvalidInput {
                input: selection.to_string(),
            });
        }

        let human_move = moves
            .get(selection - 1)
            .cloned()
            .ok_or_else(|| GameError::InvalidMove(format!("index {selection}")))?;

        let opponent_move = self.commitment.committed_move().clone();
        let outcome = rules::determine_outcome(moves, &human_move, &opponent_move)?;

        debug!(
            human = %human_move,
            opponent = %opponent_move,
            ?outcome,
            "round resolved"
        );

        Ok(RoundResult {
            human_move,
            opponent_move,
            outcome,
            revealed_key: self.commitment.secret_key().to_string(),
        })
    }
}

/// Everything disclosed once a round concludes
///
/// `revealed_key` is the previously withheld HMAC key; together with the
/// digest shown at round start it lets the human audit the opponent.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub human_move: Move,
    pub opponent_move: Move,
    /// Outcome from the human's perspective
    pub outcome: Outcome,
    pub revealed_key: String,
}
