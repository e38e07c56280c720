use crate::player::PlayerId;
use schema::Position;
use thiserror::Error;

/// Main error type for the baseball simulation engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Error related to loading or validating calibration constants
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A required batter or fielder could not be located mid-game
    #[error("Lineup error: {0}")]
    Lineup(#[from] LineupError),
    /// The randomness source could not produce a decision
    #[error("Random source error: {0}")]
    Rng(#[from] RngError),
}

/// Errors related to `SimConfig` loading and validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Could not read {path}: {details}")]
    Io { path: String, details: String },
    /// The RON text is malformed
    #[error("Malformed config: {0}")]
    Parse(String),
    /// A probability lies outside [0, 1]
    #[error("Probability '{name}' must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: String, value: f64 },
    /// A weight is negative or a weight list sums to zero
    #[error("Weights for '{0}' must be non-negative with a positive sum")]
    InvalidWeights(String),
    /// A per-position table does not cover every position
    #[error("Table '{table}' has no entry for {position}")]
    MissingTableEntry { table: String, position: Position },
    /// Games must be scheduled for at least one inning
    #[error("A game needs at least one scheduled inning")]
    NoInnings,
    /// Every pitch is put in play and every ball put in play is foul
    #[error("No pitch can end a plate appearance: only contact is thrown and every contact is foul")]
    EndlessPlateAppearance,
}

/// Errors raised when the engine cannot find a required player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupError {
    /// The batting order has no entries
    #[error("Team {team} has an empty batting order")]
    EmptyBattingOrder { team: usize },
    /// No player is assigned to a defensive position
    #[error("Team {team} has nobody playing {position}")]
    MissingFielder { team: usize, position: Position },
    /// A lineup or defensive slot references a player not on the roster
    #[error("Team {team} has no player with id {player}")]
    UnknownPlayer { team: usize, player: PlayerId },
}

/// Errors produced by `GameRng`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// A scripted source ran out of values
    #[error("GameRng exhausted! Tried to get a value for: '{reason}'")]
    Exhausted { reason: String },
    /// `choose` was asked to pick from nothing
    #[error("Nothing to choose from for: '{reason}'")]
    EmptyChoice { reason: String },
    /// Every weight was zero
    #[error("Degenerate weights for: '{reason}'")]
    DegenerateWeights { reason: String },
}

/// Type alias for Results using SimError
pub type SimResult<T> = Result<T, SimError>;
