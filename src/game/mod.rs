pub mod baserunning;
pub mod batch;
pub mod batted_ball;
pub mod engine;
pub mod events;
pub mod fielding;
pub mod pitch;
pub mod play;
pub mod rng;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;

pub use engine::{simulate_game, GameResult, GameSim, SimOptions};
pub use events::{EventLog, GameEvent, PlayerNames, ScoringPlay};
pub use play::{BallInPlay, BattedBall, PlayOutcome, RunnerMovement};
pub use rng::GameRng;
pub use state::{Base, Bases, Count, GameState, HalfInning};
