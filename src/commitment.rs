//! Commit-reveal fairness for the opponent's move
//!
//! Before the human chooses, the opponent draws a move and publishes
//! `HMAC-SHA256(secret_key, move_label)`. After the round it reveals the
//! key, so the human can recompute the digest and confirm the move was
//! fixed in advance. Randomness is injected by the caller, which keeps
//! commitments deterministic under a seeded RNG in tests.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, Rng, RngCore};
use sha2::Sha256;

use crate::error::{GameError, GameResult};
use crate::moves::{Move, MoveSet};

type HmacSha256 = Hmac<Sha256>;

/// Secret key length in raw bytes (256 bits, 64 hex characters encoded)
pub const SECRET_KEY_BYTES: usize = 32;

/// A binding, initially hidden declaration of the opponent's chosen move
///
/// Created fresh each round and discarded after the reveal; keys are never
/// reused across rounds.
#[derive(Debug, Clone)]
pub struct MoveCommitment {
    secret_key: String,
    committed_move: Move,
    digest: String,
}

impl MoveCommitment {
    /// Draw a move uniformly from the set and commit to it under a fresh
    /// 256-bit key
    ///
    /// The index draw is unbiased over `[0, N)`; the key comes from the
    /// injected cryptographically secure source. A failing entropy source
    /// is fatal: there is no weak-randomness fallback.
    pub fn commit<R>(moves: &MoveSet, rng: &mut R) -> GameResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let index = rng.gen_range(0..moves.len());
        let committed_move = moves
            .get(index)
            .cloned()
            .ok_or_else(|| GameError::InvalidMove(format!("index {index}")))?;

        let mut key_bytes = [0u8; SECRET_KEY_BYTES];
        rng.try_fill_bytes(&mut key_bytes)?;
        let secret_key = hex::encode(key_bytes);

        let digest = keyed_digest(&secret_key, &committed_move);

        Ok(Self {
            secret_key,
            committed_move,
            digest,
        })
    }

    /// Hex digest published before the human chooses
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// The committed move; withheld from display until the reveal
    pub fn committed_move(&self) -> &Move {
        &self.committed_move
    }

    /// The hex key; disclose only after the human's move is locked in
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Recompute the digest under `revealed_key` and compare
    ///
    /// This is the auditor's check, not something the session itself runs:
    /// anyone holding the published digest, the revealed key, and the
    /// revealed move can reproduce it independently.
    pub fn verify(&self, revealed_key: &str) -> bool {
        keyed_digest(revealed_key, &self.committed_move) == self.digest
    }
}

/// HMAC-SHA256 over the move label, keyed with the hex key string
fn keyed_digest(key: &str, mv: &Move) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("hmac accepts any key length");
    mac.update(mv.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
