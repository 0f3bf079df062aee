//! The game session state machine.
//!
//! ```text
//! Setup --start_game--> InProgress --submit_score (last turn)--> Finished
//!                        |      ^
//!                        +------+ submit_score
//! ```
//!
//! Each operation validates everything it needs before touching any state,
//! so a rejected call leaves the session exactly as it was.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::snapshot::PlayerSnapshot;
use crate::core::{
    GameError, Operation, Phase, Player, PlayerId, SessionConfig, TurnDescriptor, TurnRecord,
    ValidationError,
};
use crate::rules::Outcome;

/// What happens after an accepted score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// The game continues with this turn.
    Next(TurnDescriptor),
    /// That was the last turn.
    Finished(Outcome),
}

/// One game from registration to result.
///
/// ## Example
///
/// ```
/// use lowball::session::{GameSession, Progress};
///
/// let mut session = GameSession::new();
/// session.add_player("Alice").unwrap();
/// session.add_player("Bob").unwrap();
/// session.start_game(1).unwrap();
///
/// session.submit_score(5).unwrap();
/// let Progress::Finished(outcome) = session.submit_score(3).unwrap() else {
///     panic!("one set of two turns ends the game");
/// };
/// assert!(outcome.is_winner("Bob"));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,

    // === Players ===
    /// Registration order is rotation order.
    players: Vec<Player>,
    names: FxHashSet<String>,

    // === Progression ===
    phase: Phase,
    current_player: PlayerId,
    /// Starts at 1; reaches `max_sets + 1` when the game finishes.
    current_set: u32,
    /// Zero until the game starts.
    max_sets: u32,

    history: Vector<TurnRecord>,
    outcome: Option<Outcome>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}

impl GameSession {
    /// Create an empty session in `Setup` with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with custom player-count bounds.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            names: FxHashSet::default(),
            phase: Phase::Setup,
            current_player: PlayerId::new(0),
            current_set: 1,
            max_sets: 0,
            history: Vector::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // === Operations ===

    /// Register a player.
    ///
    /// The name is trimmed first; the trimmed name must be non-empty and not
    /// already registered (comparison is case-sensitive).
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        self.check(Operation::AddPlayer)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject(Operation::AddPlayer, ValidationError::EmptyName));
        }
        if self.names.contains(name) {
            return Err(self.reject(
                Operation::AddPlayer,
                ValidationError::DuplicateName(name.to_string()),
            ));
        }
        if self.players.len() >= self.config.max_players {
            return Err(self.reject(
                Operation::AddPlayer,
                ValidationError::TooManyPlayers {
                    max: self.config.max_players,
                },
            ));
        }

        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name));
        self.names.insert(name.to_string());
        debug!(player = name, id = id.0, "player registered");

        Ok(id)
    }

    /// Start the game with `requested_sets` sets.
    ///
    /// Fixes the set count and hands the first turn to the first registered
    /// player. Returns that turn.
    pub fn start_game(&mut self, requested_sets: i64) -> Result<TurnDescriptor, GameError> {
        self.check_start()?;

        // `u32::MAX` is excluded so the set counter can always step past the last set.
        let Some(max_sets) = u32::try_from(requested_sets)
            .ok()
            .filter(|sets| (1..u32::MAX).contains(sets))
        else {
            return Err(self.reject(Operation::StartGame, ValidationError::InvalidSetCount));
        };

        self.max_sets = max_sets;
        self.current_player = PlayerId::new(0);
        self.current_set = 1;
        self.phase = Phase::InProgress;
        info!(players = self.players.len(), max_sets, "game started");

        Ok(self.turn_descriptor())
    }

    /// Record the current player's points and pass the turn on.
    ///
    /// After the last player of a set, the next set begins. After the last
    /// set, the game finishes and the outcome is fixed.
    pub fn submit_score(&mut self, points: i64) -> Result<Progress, GameError> {
        self.check(Operation::SubmitScore)?;

        let Ok(points) = u32::try_from(points) else {
            return Err(self.reject(Operation::SubmitScore, ValidationError::InvalidPoints));
        };

        let player = self.current_player;
        self.players[player.index()].record(points);
        self.history.push_back(TurnRecord::new(
            player,
            self.current_set,
            points,
            self.history.len() as u64,
        ));
        debug!(
            player = self.players[player.index()].name(),
            set = self.current_set,
            points,
            total = self.players[player.index()].total(),
            "turn recorded"
        );

        self.current_player = player.next(self.players.len());
        if self.current_player.index() == 0 {
            self.current_set += 1;
        }

        if self.current_set > self.max_sets {
            self.phase = Phase::Finished;
            self.outcome = Outcome::from_players(&self.players);
            if let Some(outcome) = &self.outcome {
                info!(
                    winners = ?outcome.winners(),
                    total = outcome.min_total(),
                    "game finished"
                );
            }
        }

        Ok(self.progress())
    }

    // === Queries ===

    /// The turn that is up next. Only available while the game is in progress.
    pub fn current_turn(&self) -> Result<TurnDescriptor, GameError> {
        self.check(Operation::CurrentTurn)?;
        Ok(self.turn_descriptor())
    }

    /// Every player's name, scores, and total in registration order.
    #[must_use]
    pub fn players_snapshot(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(PlayerSnapshot::from).collect()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by exact name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    /// Set count, once the game has started.
    #[must_use]
    pub fn max_sets(&self) -> Option<u32> {
        match self.phase {
            Phase::Setup => None,
            Phase::InProgress | Phase::Finished => Some(self.max_sets),
        }
    }

    /// The result, once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Every accepted turn in order.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn turns_taken(&self) -> u64 {
        self.history.len() as u64
    }

    /// Turns left before the game finishes, once it has started.
    #[must_use]
    pub fn turns_remaining(&self) -> Option<u64> {
        let max_sets = self.max_sets()?;
        let total = u64::from(max_sets) * self.players.len() as u64;
        Some(total.saturating_sub(self.turns_taken()))
    }

    // === Preconditions ===

    /// Whether `operation` is allowed in the current phase.
    pub fn check(&self, operation: Operation) -> Result<(), GameError> {
        if self.phase.permits(operation) {
            return Ok(());
        }
        let err = GameError::InvalidState {
            operation,
            phase: self.phase,
        };
        debug!(%operation, phase = %self.phase, "operation rejected in current phase");
        Err(err)
    }

    /// Whether the game could start now, set count aside.
    ///
    /// Front ends call this before parsing the set count so that a missing
    /// player is reported ahead of unreadable input.
    pub fn check_start(&self) -> Result<(), GameError> {
        self.check(Operation::StartGame)?;
        if self.players.len() < self.config.min_players {
            return Err(self.reject(
                Operation::StartGame,
                ValidationError::NotEnoughPlayers {
                    required: self.config.min_players,
                    registered: self.players.len(),
                },
            ));
        }
        Ok(())
    }

    // === Internals ===

    fn reject(&self, operation: Operation, err: ValidationError) -> GameError {
        debug!(%operation, error = %err, "input rejected");
        GameError::Validation(err)
    }

    fn turn_descriptor(&self) -> TurnDescriptor {
        let player = &self.players[self.current_player.index()];
        TurnDescriptor {
            set: self.current_set,
            max_sets: self.max_sets,
            player: player.id(),
            name: player.name().to_string(),
        }
    }

    fn progress(&self) -> Progress {
        match &self.outcome {
            Some(outcome) => Progress::Finished(outcome.clone()),
            None => Progress::Next(self.turn_descriptor()),
        }
    }
}
