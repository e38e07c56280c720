//! Baseball Game Simulation Engine
//!
//! Plays a game between two teams one pitch at a time. Every random decision
//! comes from an injectable source, so a seed (or a scripted list of draws)
//! replays a game exactly. Stats are routed to players and teams as plays
//! happen, and the event log can rebuild the score and a play-by-play.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod game;
pub mod player;
pub mod prefab_teams;
pub mod report;
pub mod team;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    CompositeRating, Direction, Distance, FoulKind, Position, Speed, StatKind, StatRouting,
};

// --- From this crate's modules (`src/`) ---

// Engine entry points and results.
pub use game::batch::{simulate_batch, BatchSummary, GameSummary};
pub use game::engine::{simulate_game, GameResult, GameSim, PlayerBox, SimOptions, TeamBox};
pub use game::events::{EventLog, GameEvent, PlayerNames, ScoringPlay};
pub use game::rng::GameRng;

// Inputs.
pub use config::SimConfig;
pub use player::{CompositeRatings, PlayerDescriptor, PlayerId, StatLine};
pub use prefab_teams::{demo_matchup, demo_team, Matchup};
pub use team::{TeamDescriptor, AWAY, HOME};

// Crate-specific error and result types.
pub use errors::{ConfigError, LineupError, RngError, SimError, SimResult};
