use crate::config::SimConfig;
use crate::errors::SimResult;
use crate::game::baserunning::{self, Advancement, PlayContext};
use crate::game::batted_ball;
use crate::game::events::{EventLog, GameEvent, PlayerNames, ScoringPlay};
use crate::game::fielding;
use crate::game::pitch::{self, PitchResult};
use crate::game::play::{BallInPlay, BattedBall, PlayOutcome};
use crate::game::rng::GameRng;
use crate::game::state::{GameState, HalfInning};
use crate::player::{PlayerId, StatLine};
use crate::team::{TeamDescriptor, TeamInGame, AWAY, HOME};
use schema::{Position, StatKind};
use serde::{Deserialize, Serialize};

const BALLS_FOR_WALK: u8 = 4;
const STRIKES_FOR_STRIKEOUT: u8 = 3;
const OUTS_PER_SIDE: u8 = 3;

/// Knobs that are per game rather than per league.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimOptions {
    /// Venue-specific multiplier on the league home advantage (1.0 = neutral).
    pub home_field_factor: f64,
    /// Keep the play-by-play log. Stats are recorded either way.
    pub log_events: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            home_field_factor: 1.0,
            log_events: true,
        }
    }
}

/// Rating multiplier for the home team; the visitors get its inverse.
pub fn home_field_modifier(factor: f64, home_advantage_pct: f64) -> f64 {
    factor * (1.0 + home_advantage_pct / 100.0).max(0.01)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerBox {
    pub id: PlayerId,
    pub name: String,
    pub lineup_slot: Option<usize>,
    pub position: Option<Position>,
    pub stats: StatLine,
    /// Rating multiplier left after this game's pitch count (1.0 for non-pitchers).
    pub fatigue: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamBox {
    pub id: u32,
    pub name: String,
    pub stats: StatLine,
    pub runs_by_inning: Vec<u32>,
    pub players: Vec<PlayerBox>,
}

impl From<TeamInGame> for TeamBox {
    fn from(team: TeamInGame) -> Self {
        Self {
            id: team.id,
            name: team.name,
            stats: team.stats,
            runs_by_inning: team.runs_by_inning,
            players: team
                .players
                .into_iter()
                .map(|p| PlayerBox {
                    fatigue: p.fatigue(),
                    id: p.id,
                    name: p.name,
                    lineup_slot: p.lineup_slot,
                    position: p.position,
                    stats: p.stats,
                })
                .collect(),
        }
    }
}

/// Everything a finished game leaves behind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameResult {
    pub overtimes: u32,
    /// Index 0 is the home team.
    pub teams: [TeamBox; 2],
    pub events: Vec<GameEvent>,
    pub scoring_summary: Vec<ScoringPlay>,
}

impl GameResult {
    /// Final runs for [home, visitors].
    pub fn score(&self) -> [u32; 2] {
        [
            self.teams[HOME].stats.get(StatKind::Points),
            self.teams[AWAY].stats.get(StatKind::Points),
        ]
    }

    /// Index of the winning team. Completed games never end tied.
    pub fn winner(&self) -> Option<usize> {
        let [home, away] = self.score();
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(HOME),
            std::cmp::Ordering::Less => Some(AWAY),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn names(&self) -> PlayerNames {
        let mut names = PlayerNames::new();
        for (index, team) in self.teams.iter().enumerate() {
            names.set_team(index, &team.name);
            for player in &team.players {
                names.insert(player.id, &player.name);
            }
        }
        names
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerBox> {
        self.teams
            .iter()
            .flat_map(|team| team.players.iter())
            .find(|p| p.id == id)
    }
}

/// One game in progress: state, calibration, randomness and the log.
pub struct GameSim<'a> {
    state: GameState,
    config: &'a SimConfig,
    rng: GameRng,
    log: EventLog,
}

impl<'a> GameSim<'a> {
    pub fn new(
        home: TeamDescriptor,
        away: TeamDescriptor,
        config: &'a SimConfig,
        rng: GameRng,
        options: SimOptions,
    ) -> SimResult<Self> {
        config.validate()?;

        let mut home = TeamInGame::new(HOME, home);
        let mut away = TeamInGame::new(AWAY, away);
        let modifier = home_field_modifier(options.home_field_factor, config.home_advantage_pct);
        home.scale_ratings(modifier);
        away.scale_ratings(1.0 / modifier);

        let log = if options.log_events {
            EventLog::new()
        } else {
            EventLog::disabled()
        };

        let mut sim = Self {
            state: GameState::new(home, away, config.num_innings),
            config,
            rng,
            log,
        };
        sim.record_starters()?;
        Ok(sim)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Appearance counters for everyone who starts.
    fn record_starters(&mut self) -> SimResult<()> {
        for team in [HOME, AWAY] {
            let lineup = self.state.teams[team].batting_order.clone();
            for &player in &lineup {
                self.state
                    .record_player_stat(&mut self.log, team, player, StatKind::GamesPlayed)?;
                self.state
                    .record_player_stat(&mut self.log, team, player, StatKind::GamesStarted)?;
            }

            let pitcher = self.state.teams[team].pitcher()?;
            if !self.state.teams[team].dh_matches_lineup()? {
                tracing::warn!(
                    team,
                    dh = self.state.teams[team].dh,
                    "designated-hitter flag disagrees with the batting order"
                );
            }
            if !lineup.contains(&pitcher) {
                self.state
                    .record_player_stat(&mut self.log, team, pitcher, StatKind::GamesPlayed)?;
            }
            self.state
                .record_player_stat(&mut self.log, team, pitcher, StatKind::GamesPitched)?;
            self.state.record_player_stat(
                &mut self.log,
                team,
                pitcher,
                StatKind::GamesStartedPitching,
            )?;
        }
        Ok(())
    }

    /// Play the game to completion.
    pub fn run(mut self) -> SimResult<GameResult> {
        loop {
            self.sim_plate_appearance()?;
            if self.state.outs >= OUTS_PER_SIDE && self.end_half_inning()? {
                break;
            }
        }

        self.log.push(GameEvent::GameOver);
        let [home, away] = self.state.score();
        tracing::info!(
            home,
            away,
            innings = self.state.inning,
            overtimes = self.state.overtimes,
            "game over"
        );

        Ok(self.into_result())
    }

    fn into_result(self) -> GameResult {
        let scoring_summary = self.log.scoring_summary();
        let [home, away] = self.state.teams;
        GameResult {
            overtimes: self.state.overtimes,
            teams: [home.into(), away.into()],
            events: self.log.into_events(),
            scoring_summary,
        }
    }

    /// Close out a half-inning at three outs. Returns true when the game is over.
    pub fn end_half_inning(&mut self) -> SimResult<bool> {
        let inning = self.state.inning;
        let [home, away] = self.state.score();
        let regulation_done = inning >= self.state.num_innings;

        match self.state.half {
            HalfInning::Top => {
                self.log.push(GameEvent::SideOver { inning });
                // The home team does not bat when it is already ahead.
                if regulation_done && home > away {
                    return Ok(true);
                }
            }
            HalfInning::Bottom => {
                self.log.push(GameEvent::InningOver { inning });
                if regulation_done && home != away {
                    return Ok(true);
                }
                self.state.inning += 1;
                if self.state.inning > self.state.num_innings {
                    self.state.overtimes += 1;
                }
            }
        }

        self.state.possession_change();
        self.state.reset_new_inning();
        tracing::debug!(
            inning = self.state.inning,
            half = %self.state.half,
            home,
            away,
            "half-inning begins"
        );
        Ok(false)
    }

    /// One batter's turn, from stepping in until walk, strikeout or ball in play.
    pub fn sim_plate_appearance(&mut self) -> SimResult<()> {
        let offense = self.state.offense();
        let batter = self.state.teams[offense].current_batter()?;

        self.log.push(GameEvent::PlateAppearance {
            team: offense,
            batter,
        });
        self.state
            .record_player_stat(&mut self.log, offense, batter, StatKind::PlateAppearances)?;
        self.state.reset_new_batter();

        while !self.sim_pitch()? {}

        self.state.teams[offense].advance_to_next_batter();
        Ok(())
    }

    /// Throw one pitch. Returns true when the plate appearance is over.
    pub fn sim_pitch(&mut self) -> SimResult<bool> {
        let offense = self.state.offense();
        let defense = self.state.defense();
        let batter = self.state.teams[offense].current_batter()?;
        let pitcher = self.state.teams[defense].pitcher()?;

        self.state
            .record_player_stat(&mut self.log, defense, pitcher, StatKind::PitchCount)?;

        match pitch::draw_pitch(&self.config.pitch, &mut self.rng)? {
            PitchResult::Ball => {
                self.state.count.balls += 1;
                if self.state.count.balls >= BALLS_FOR_WALK {
                    self.do_walk(batter, pitcher)?;
                    return Ok(true);
                }
                self.log.push(GameEvent::Ball {
                    count: self.state.count,
                });
                Ok(false)
            }
            PitchResult::Strike => {
                let swinging = pitch::draw_swinging(&self.config.pitch, &mut self.rng)?;
                self.state.count.strikes += 1;
                if self.state.count.strikes >= STRIKES_FOR_STRIKEOUT {
                    self.do_strikeout(batter, pitcher, swinging)?;
                    return Ok(true);
                }
                self.log.push(GameEvent::Strike {
                    swinging,
                    count: self.state.count,
                });
                Ok(false)
            }
            PitchResult::Contact => {
                match batted_ball::classify(&self.config.batted_ball, &mut self.rng)? {
                    BattedBall::Foul(kind) => {
                        self.log.push(GameEvent::Foul {
                            kind,
                            count: self.state.count,
                        });
                        Ok(false)
                    }
                    BattedBall::InPlay(ball) => {
                        self.do_ball_in_play(batter, pitcher, ball)?;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn do_walk(&mut self, batter: PlayerId, pitcher: PlayerId) -> SimResult<()> {
        let offense = self.state.offense();
        let defense = self.state.defense();
        let advancement = baserunning::advance_on_walk(&self.state.bases, batter);

        self.state
            .record_player_stat(&mut self.log, offense, batter, StatKind::Walks)?;
        self.state
            .record_player_stat(&mut self.log, defense, pitcher, StatKind::WalksAllowed)?;
        self.score_runs(&advancement, Some(batter), pitcher)?;
        self.state.bases = advancement.bases;

        tracing::debug!(%batter, runs = advancement.runs.len(), "walk");
        self.log.push(GameEvent::Walk {
            team: offense,
            batter,
            runners: advancement.movements,
        });
        Ok(())
    }

    fn do_strikeout(
        &mut self,
        batter: PlayerId,
        pitcher: PlayerId,
        swinging: bool,
    ) -> SimResult<()> {
        let offense = self.state.offense();
        let defense = self.state.defense();

        self.state
            .record_player_stat(&mut self.log, offense, batter, StatKind::AtBats)?;
        self.state
            .record_player_stat(&mut self.log, offense, batter, StatKind::Strikeouts)?;
        self.state
            .record_player_stat(&mut self.log, defense, pitcher, StatKind::StrikeoutsPitched)?;
        self.state
            .record_player_stat(&mut self.log, defense, pitcher, StatKind::OutsRecorded)?;
        self.state.outs += 1;

        self.log.push(GameEvent::StrikeOut {
            team: offense,
            batter,
            swinging,
        });
        Ok(())
    }

    fn do_ball_in_play(
        &mut self,
        batter: PlayerId,
        pitcher: PlayerId,
        ball: BallInPlay,
    ) -> SimResult<()> {
        let offense = self.state.offense();
        let defense = self.state.defense();

        self.log.push(match ball {
            BallInPlay::Ground { direction, speed } => GameEvent::Ground {
                team: offense,
                batter,
                direction,
                speed,
            },
            BallInPlay::Line { direction, speed } => GameEvent::Line {
                team: offense,
                batter,
                direction,
                speed,
            },
            BallInPlay::Fly {
                direction,
                distance,
            } => GameEvent::Fly {
                team: offense,
                batter,
                direction,
                distance,
            },
        });

        let play = fielding::resolve(
            &ball,
            &self.state.bases,
            &self.config.fielding,
            &mut self.rng,
        )?;
        let outs_before = self.state.outs;
        let ctx = PlayContext {
            ball: &ball,
            fielder: play.fielder,
            outcome: play.outcome,
            outs_before,
            config: &self.config.baserunning,
        };
        let advancement =
            baserunning::advance_on_play(&self.state.bases, batter, &ctx, &mut self.rng)?;

        self.state
            .record_player_stat(&mut self.log, offense, batter, StatKind::AtBats)?;
        let mut error_fielder = None;
        match play.outcome {
            PlayOutcome::Hit { bases } => {
                self.state
                    .record_player_stat(&mut self.log, offense, batter, StatKind::Hits)?;
                if let Some(extra) = StatKind::for_extra_base_hit(bases) {
                    self.state
                        .record_player_stat(&mut self.log, offense, batter, extra)?;
                }
                self.state
                    .record_player_stat(&mut self.log, defense, pitcher, StatKind::HitsAllowed)?;
                if bases >= 4 {
                    self.state.record_player_stat(
                        &mut self.log,
                        defense,
                        pitcher,
                        StatKind::HomeRunsAllowed,
                    )?;
                }
            }
            PlayOutcome::Error { fielder, .. } => {
                let culprit = self.state.teams[defense].fielder(fielder)?;
                self.state
                    .record_player_stat(&mut self.log, defense, culprit, StatKind::Errors)?;
                error_fielder = Some(culprit);
            }
            PlayOutcome::FlyOut
            | PlayOutcome::ThrowOut
            | PlayOutcome::FieldersChoice { .. }
            | PlayOutcome::DoublePlay { .. }
            | PlayOutcome::Walk
            | PlayOutcome::Strikeout => {}
        }

        let outs = play
            .outcome
            .outs_recorded()
            .min(OUTS_PER_SIDE.saturating_sub(outs_before));
        if outs > 0 {
            self.state.record_stat(
                &mut self.log,
                defense,
                Some(pitcher),
                StatKind::OutsRecorded,
                u32::from(outs),
            )?;
        }
        self.state.outs += outs;

        let rbi = if play.outcome.is_error() {
            None
        } else {
            Some(batter)
        };
        self.score_runs(&advancement, rbi, pitcher)?;
        self.state.bases = advancement.bases;

        tracing::debug!(
            %batter,
            ?ball,
            outcome = ?play.outcome,
            runs = advancement.runs.len(),
            outs = self.state.outs,
            "ball in play"
        );
        self.log.push(GameEvent::HitResult {
            team: offense,
            batter,
            outcome: play.outcome,
            error_fielder,
            fielders: play.touched,
            runners: advancement.movements,
            total_bases: play.outcome.total_bases(),
            outs: self.state.outs,
        });
        Ok(())
    }

    /// Credit every run on a play: the scorer, the batter's RBI (if any) and the pitcher.
    fn score_runs(
        &mut self,
        advancement: &Advancement,
        rbi: Option<PlayerId>,
        pitcher: PlayerId,
    ) -> SimResult<()> {
        let offense = self.state.offense();
        let defense = self.state.defense();

        for &runner in &advancement.runs {
            self.state
                .record_player_stat(&mut self.log, offense, runner, StatKind::Runs)?;
            if let Some(batter) = rbi {
                self.state
                    .record_player_stat(&mut self.log, offense, batter, StatKind::RunsBattedIn)?;
            }
            self.state
                .record_player_stat(&mut self.log, defense, pitcher, StatKind::RunsAllowed)?;
        }
        Ok(())
    }
}

/// Play one seeded game with default options.
pub fn simulate_game(
    home: TeamDescriptor,
    away: TeamDescriptor,
    config: &SimConfig,
    seed: u64,
) -> SimResult<GameResult> {
    GameSim::new(home, away, config, GameRng::seeded(seed), SimOptions::default())?.run()
}
