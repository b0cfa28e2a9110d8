//! Interactive session state machine
//!
//! Sequences rounds against the committed opponent: interprets one input
//! line at a time as a help signal, a quit signal, or a 1-based move
//! selection, and regenerates a fresh commitment after every resolved
//! round. Formatting of the emitted data is the caller's job.

use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::moves::MoveSet;
use crate::round::{Round, RoundResult};
use crate::rules::{self, Outcome};

/// Lifecycle states of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    ShowingHelp,
    Resolving,
    ShowingResult,
    Exited,
}

/// Display data produced by one interpreted input line
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Outcome table requested; the pending commitment is untouched
    Help { matrix: Vec<Vec<Outcome>> },
    /// A round resolved with its full reveal
    Resolved(RoundResult),
    /// Malformed or out-of-range selection; re-prompt
    InvalidInput { input: String },
    /// Quit signal received, session over
    Exited,
}

/// Pre-input display data: the published digest and the move menu
#[derive(Debug, Clone)]
pub struct Prompt<'a> {
    pub digest: &'a str,
    pub moves: &'a MoveSet,
}

/// One interactive game session
///
/// Owns the move set, the configuration, the injected random source, and
/// the current in-flight round. The loop itself lives in the caller;
/// `Session` only interprets lines and moves between states.
#[derive(Debug)]
pub struct Session<R> {
    moves: MoveSet,
    config: GameConfig,
    rng: R,
    round: Option<Round>,
    state: SessionState,
    rounds_resolved: u64,
}

impl<R> Session<R>
where
    R: RngCore + CryptoRng,
{
    /// Start a session and commit the opponent for the first round
    pub fn new(moves: MoveSet, config: GameConfig, mut rng: R) -> GameResult<Self> {
        config.validate()?;
        let round = Round::start(&moves, &mut rng)?;
        info!(moves = moves.len(), "session started");

        Ok(Self {
            moves,
            config,
            rng,
            round: Some(round),
            state: SessionState::AwaitingInput,
            rounds_resolved: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    pub fn rounds_resolved(&self) -> u64 {
        self.rounds_resolved
    }

    pub fn is_exited(&self) -> bool {
        self.state == SessionState::Exited
    }

    /// Data to display before the next input line
    ///
    /// `None` once the session has exited and no round is pending.
    pub fn prompt(&self) -> Option<Prompt<'_>> {
        self.round.as_ref().map(|round| Prompt {
            digest: round.digest(),
            moves: &self.moves,
        })
    }

    /// Interpret one line of input
    ///
    /// Signals are checked before any round arithmetic: quit ends the
    /// session, help emits the outcome table without regenerating the
    /// commitment, and only a valid selection resolves the round and
    /// rotates in a fresh commitment. Anything else re-prompts.
    pub fn handle_line(&mut self, line: &str) -> GameResult<SessionEvent> {
        if self.state == SessionState::Exited {
            return Ok(SessionEvent::Exited);
        }

        let input = line.trim();

        if input == self.config.quit_token {
            self.state = SessionState::Exited;
            self.round = None;
            info!(rounds = self.rounds_resolved, "session ended");
            return Ok(SessionEvent::Exited);
        }

        if input == self.config.help_token {
            self.state = SessionState::ShowingHelp;
            let matrix = rules::outcome_matrix(&self.moves)?;
            self.state = SessionState::AwaitingInput;
            return Ok(SessionEvent::Help { matrix });
        }

        match input.parse::<usize>() {
            Ok(selection) if (1..=self.moves.len()).contains(&selection) => {
                self.state = SessionState::Resolving;
                let round = self
                    .round
                    .take()
                    .ok_or_else(|| GameError::InvalidMove("no round in flight".to_string()))?;
                let result = round.resolve(&self.moves, selection)?;

                self.state = SessionState::ShowingResult;
                self.rounds_resolved += 1;

                // Next round gets its own key and move.
                self.round = Some(Round::start(&self.moves, &mut self.rng)?);
                self.state = SessionState::AwaitingInput;
                Ok(SessionEvent::Resolved(result))
            }
            _ => {
                debug!(input, "rejected input line");
                Ok(SessionEvent::InvalidInput {
                    input: input.to_string(),
                })
            }
        }
    }
}
