use crate::config::SimConfig;
use crate::errors::SimResult;
use crate::game::engine::{GameSim, SimOptions};
use crate::game::rng::GameRng;
use crate::game::state::{Bases, Count, HalfInning};
use crate::player::PlayerId;
use crate::prefab_teams::demo_team;
use schema::StatKind;

// === Scripted draws ===
// Values that land a decision on a known branch under the default config.

pub const BALL: f64 = 0.1;
pub const STRIKE: f64 = 0.5;
pub const CONTACT: f64 = 0.9;

pub const FOUL: f64 = 0.0;
pub const FAIR: f64 = 0.9;

pub const GROUND: f64 = 0.0;
pub const LINE: f64 = 0.5;
pub const FLY: f64 = 0.9;

pub const FAR_LEFT: f64 = 0.0;
pub const LEFT: f64 = 0.3;
pub const MIDDLE: f64 = 0.5;

pub const SHALLOW: f64 = 0.3;
pub const DEEP: f64 = 0.9;

pub const NORMAL_SPEED: f64 = 0.5;
pub const HARD: f64 = 0.9;

/// Passes any `chance` with positive probability.
pub const YES: f64 = 0.0;
/// Fails any `chance` below 0.99.
pub const NO: f64 = 0.99;

/// First entry of a two-candidate zone (or the only one).
pub const FIRST_CANDIDATE: f64 = 0.0;
/// Second entry of a two-candidate zone.
pub const SECOND_CANDIDATE: f64 = 0.9;

// === Rosters ===
// Home players are 101-109 and visitors 201-209, in batting order
// CF, SS, 1B, LF, 3B, RF, 2B, C, P.

pub const HOME_PITCHER: PlayerId = PlayerId(109);
pub const HOME_THIRD_BASE: PlayerId = PlayerId(105);
pub const AWAY_LEADOFF: PlayerId = PlayerId(201);

/// Runners borrowed from the bottom of the visitors' order.
pub const RUNNER_ON_FIRST: PlayerId = PlayerId(207);
pub const RUNNER_ON_SECOND: PlayerId = PlayerId(208);
pub const RUNNER_ON_THIRD: PlayerId = PlayerId(209);

/// A builder for a game paused at an arbitrary point of the top of the first,
/// with the visitors' leadoff man at the plate.
///
/// # Example
/// ```
/// let mut sim = TestGameBuilder::new()
///     .with_runners(true, false, true)
///     .with_outs(1)
///     .with_draws(vec![CONTACT, FAIR, GROUND, LEFT])
///     .build(&config);
/// ```
pub struct TestGameBuilder {
    runners: [bool; 3],
    outs: u8,
    count: Count,
    draws: Vec<f64>,
    options: SimOptions,
}

impl TestGameBuilder {
    pub fn new() -> Self {
        Self {
            runners: [false; 3],
            outs: 0,
            count: Count::default(),
            draws: Vec::new(),
            options: SimOptions::default(),
        }
    }

    pub fn with_runners(mut self, first: bool, second: bool, third: bool) -> Self {
        self.runners = [first, second, third];
        self
    }

    pub fn with_outs(mut self, outs: u8) -> Self {
        self.outs = outs;
        self
    }

    pub fn with_count(mut self, balls: u8, strikes: u8) -> Self {
        self.count = Count { balls, strikes };
        self
    }

    pub fn with_draws(mut self, draws: Vec<f64>) -> Self {
        self.draws = draws;
        self
    }

    pub fn without_log(mut self) -> Self {
        self.options.log_events = false;
        self
    }

    pub fn build(self, config: &SimConfig) -> GameSim<'_> {
        let sim = GameSim::new(
            demo_team(1, "Hawks", 100),
            demo_team(2, "Miners", 200),
            config,
            GameRng::new_for_test(self.draws),
            self.options,
        );
        let mut sim = match sim {
            Ok(sim) => sim,
            Err(err) => panic!("Failed to build test game: {}", err),
        };

        let [first, second, third] = self.runners;
        let state = sim.state_mut();
        assert_eq!(state.half, HalfInning::Top);
        state.bases = Bases([
            first.then_some(RUNNER_ON_FIRST),
            second.then_some(RUNNER_ON_SECOND),
            third.then_some(RUNNER_ON_THIRD),
        ]);
        state.outs = self.outs;
        state.count = self.count;
        sim
    }
}

/// A counter on one player of either team.
pub fn player_stat(sim: &GameSim, player: PlayerId, stat: StatKind) -> u32 {
    sim.state()
        .teams
        .iter()
        .find_map(|team| team.player(player).ok())
        .map(|p| p.stats.get(stat))
        .unwrap_or_else(|| panic!("No player {} in this game", player))
}

pub fn team_stat(sim: &GameSim, team: usize, stat: StatKind) -> u32 {
    sim.state().teams[team].stats.get(stat)
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: SimResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Asserts every scripted draw was used, so the script matches the rules exactly.
pub fn assert_draws_consumed(sim: &GameSim) {
    assert_eq!(sim.rng().remaining(), Some(0), "unused scripted draws");
}
