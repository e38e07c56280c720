use crate::config::SimConfig;
use crate::errors::SimResult;
use crate::game::engine::{GameSim, SimOptions};
use crate::game::rng::GameRng;
use crate::team::{TeamDescriptor, AWAY, HOME};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Final line of one batch game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: u64,
    /// Runs for [home, visitors].
    pub score: [u32; 2],
    pub overtimes: u32,
}

/// Aggregate results of many independent games between the same two teams.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub games: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    /// Mean runs per game for [home, visitors].
    pub mean_runs: [f64; 2],
    pub extra_inning_games: usize,
    pub max_overtimes: u32,
    pub elapsed_ms: u128,
}

/// Play one game per seed in `seed_start..seed_start + num_games`, in parallel.
///
/// Logging is off for every game; each worker owns its state and RNG.
pub fn simulate_batch_summaries(
    home: &TeamDescriptor,
    away: &TeamDescriptor,
    config: &SimConfig,
    num_games: usize,
    seed_start: u64,
) -> SimResult<Vec<GameSummary>> {
    let options = SimOptions {
        log_events: false,
        ..SimOptions::default()
    };

    (0..num_games)
        .into_par_iter()
        .map(|i| {
            let seed = seed_start.wrapping_add(i as u64);
            let sim = GameSim::new(
                home.clone(),
                away.clone(),
                config,
                GameRng::seeded(seed),
                options,
            )?;
            let result = sim.run()?;
            Ok(GameSummary {
                seed,
                score: result.score(),
                overtimes: result.overtimes,
            })
        })
        .collect()
}

pub fn simulate_batch(
    home: &TeamDescriptor,
    away: &TeamDescriptor,
    config: &SimConfig,
    num_games: usize,
    seed_start: u64,
) -> SimResult<BatchSummary> {
    let start = Instant::now();
    let games = simulate_batch_summaries(home, away, config, num_games, seed_start)?;
    let summary = summarize(&games, start.elapsed().as_millis());

    tracing::info!(
        games = summary.games,
        home_wins = summary.home_wins,
        away_wins = summary.away_wins,
        elapsed_ms = summary.elapsed_ms as u64,
        "batch complete"
    );
    Ok(summary)
}

pub fn summarize(games: &[GameSummary], elapsed_ms: u128) -> BatchSummary {
    let count = games.len();
    let home_wins = games.iter().filter(|g| g.score[HOME] > g.score[AWAY]).count();
    let away_wins = games.iter().filter(|g| g.score[AWAY] > g.score[HOME]).count();
    let total = |team: usize| games.iter().map(|g| g.score[team] as f64).sum::<f64>();
    let mean = |team: usize| {
        if count == 0 {
            0.0
        } else {
            total(team) / count as f64
        }
    };

    BatchSummary {
        games: count,
        home_wins,
        away_wins,
        mean_runs: [mean(HOME), mean(AWAY)],
        extra_inning_games: games.iter().filter(|g| g.overtimes > 0).count(),
        max_overtimes: games.iter().map(|g| g.overtimes).max().unwrap_or(0),
        elapsed_ms,
    }
}
