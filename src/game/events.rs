use crate::game::play::{PlayOutcome, RunnerMovement};
use crate::game::state::{Count, HalfInning, HOME_PLATE};
use crate::player::PlayerId;
use schema::{Direction, Distance, FoulKind, Position, Speed, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the play-by-play log.
///
/// The log is enough to rebuild the running score and the narrative without
/// looking at `GameState`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    PlateAppearance {
        team: usize,
        batter: PlayerId,
    },
    Ball {
        count: Count,
    },
    Strike {
        swinging: bool,
        count: Count,
    },
    Foul {
        kind: FoulKind,
        count: Count,
    },
    Ground {
        team: usize,
        batter: PlayerId,
        direction: Direction,
        speed: Speed,
    },
    Line {
        team: usize,
        batter: PlayerId,
        direction: Direction,
        speed: Speed,
    },
    Fly {
        team: usize,
        batter: PlayerId,
        direction: Direction,
        distance: Distance,
    },
    HitResult {
        team: usize,
        batter: PlayerId,
        outcome: PlayOutcome,
        error_fielder: Option<PlayerId>,
        /// Credited fielder first, then anyone else who handled the ball.
        fielders: Vec<Position>,
        runners: Vec<RunnerMovement>,
        total_bases: u8,
        /// Outs in the half-inning after the play.
        outs: u8,
    },
    Walk {
        team: usize,
        batter: PlayerId,
        runners: Vec<RunnerMovement>,
    },
    StrikeOut {
        team: usize,
        batter: PlayerId,
        swinging: bool,
    },
    /// Top half finished.
    SideOver {
        inning: u32,
    },
    /// Bottom half finished.
    InningOver {
        inning: u32,
    },
    GameOver,
    Stat {
        team: usize,
        player: Option<PlayerId>,
        stat: StatKind,
        amount: u32,
    },
}

/// Player and team names for turning events into text.
#[derive(Debug, Clone, Default)]
pub struct PlayerNames {
    players: BTreeMap<PlayerId, String>,
    teams: [String; 2],
}

impl PlayerNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_team(&mut self, team: usize, name: &str) {
        if let Some(slot) = self.teams.get_mut(team) {
            *slot = name.to_string();
        }
    }

    pub fn insert(&mut self, id: PlayerId, name: &str) {
        self.players.insert(id, name.to_string());
    }

    pub fn player(&self, id: PlayerId) -> String {
        self.players
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", id))
    }

    pub fn team(&self, team: usize) -> &str {
        self.teams.get(team).map(String::as_str).unwrap_or("")
    }
}

fn base_name(base: u8) -> &'static str {
    match base {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "home",
    }
}

pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn describe_runners(runners: &[RunnerMovement], names: &PlayerNames) -> String {
    let mut text = String::new();
    for movement in runners {
        let name = names.player(movement.runner);
        let clause = if movement.out {
            format!("{} out at {}", name, base_name(movement.to))
        } else if movement.to == HOME_PLATE {
            format!("{} scores", name)
        } else {
            format!("{} to {}", name, base_name(movement.to))
        };
        text.push_str(". ");
        text.push_str(&clause);
    }
    text
}

impl GameEvent {
    /// Narrative text for the event, or `None` for bookkeeping entries.
    pub fn format(&self, names: &PlayerNames) -> Option<String> {
        match self {
            GameEvent::PlateAppearance { team, batter } => Some(format!(
                "{} batting for the {}",
                names.player(*batter),
                names.team(*team)
            )),
            GameEvent::Ball { count } => Some(format!("Ball ({})", count)),
            GameEvent::Strike { swinging, count } => {
                if *swinging {
                    Some(format!("Swinging strike ({})", count))
                } else {
                    Some(format!("Called strike ({})", count))
                }
            }
            GameEvent::Foul { kind, count } => match kind {
                FoulKind::OutOfPlay => Some(format!("Fouled out of play ({})", count)),
                FoulKind::FarLeftFoul => Some(format!("Foul down the left side ({})", count)),
                FoulKind::FarRightFoul => Some(format!("Foul down the right side ({})", count)),
            },
            GameEvent::Ground {
                batter,
                direction,
                speed,
                ..
            } => Some(format!(
                "{} hits a {} ground ball {}",
                names.player(*batter),
                speed,
                direction
            )),
            GameEvent::Line {
                batter,
                direction,
                speed,
                ..
            } => Some(format!(
                "{} lines a {} drive {}",
                names.player(*batter),
                speed,
                direction
            )),
            GameEvent::Fly {
                batter,
                direction,
                distance,
                ..
            } => Some(format!(
                "{} lifts a {} fly ball {}",
                names.player(*batter),
                distance,
                direction
            )),
            GameEvent::HitResult {
                batter,
                outcome,
                error_fielder,
                fielders,
                runners,
                ..
            } => {
                let batter = names.player(*batter);
                let credited = fielders
                    .first()
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                let headline = match outcome {
                    PlayOutcome::Hit { bases: 1 } => format!("{} singles to {}", batter, credited),
                    PlayOutcome::Hit { bases: 2 } => format!("{} doubles to {}", batter, credited),
                    PlayOutcome::Hit { bases: 3 } => format!("{} triples to {}", batter, credited),
                    PlayOutcome::Hit { .. } => format!("{} homers to {}", batter, credited),
                    PlayOutcome::FlyOut => format!("{} flies out to {}", batter, credited),
                    PlayOutcome::ThrowOut => format!("{} is thrown out by {}", batter, credited),
                    PlayOutcome::FieldersChoice { .. } => {
                        format!("{} reaches on a fielder's choice by {}", batter, credited)
                    }
                    PlayOutcome::DoublePlay { .. } => {
                        format!("{} grounds into a double play started by {}", batter, credited)
                    }
                    PlayOutcome::Error { fielder, .. } => {
                        let culprit = error_fielder
                            .map(|id| names.player(id))
                            .unwrap_or_else(|| fielder.to_string());
                        format!("{} reaches on an error by {}", batter, culprit)
                    }
                    PlayOutcome::Walk => format!("{} walks", batter),
                    PlayOutcome::Strikeout => format!("{} strikes out", batter),
                };
                Some(headline + &describe_runners(runners, names))
            }
            GameEvent::Walk { batter, runners, .. } => Some(format!(
                "{} walks{}",
                names.player(*batter),
                describe_runners(runners, names)
            )),
            GameEvent::StrikeOut {
                batter, swinging, ..
            } => {
                let how = if *swinging { "swinging" } else { "looking" };
                Some(format!("{} strikes out {}", names.player(*batter), how))
            }
            GameEvent::SideOver { inning } => {
                Some(format!("Side retired. Middle of the {}", ordinal(*inning)))
            }
            GameEvent::InningOver { inning } => {
                Some(format!("End of the {} inning", ordinal(*inning)))
            }
            GameEvent::GameOver => Some("Game over".to_string()),
            GameEvent::Stat { .. } => None,
        }
    }
}

/// A play on which at least one run scored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoringPlay {
    pub inning: u32,
    pub half: HalfInning,
    pub runs: u32,
    /// Score for [home, visitors] after the play.
    pub score: [u32; 2],
    pub event: GameEvent,
}

/// Append-only record of everything that happened in a game.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Vec<GameEvent>,
    enabled: bool,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            enabled: true,
        }
    }

    /// A log that drops everything pushed to it.
    pub fn disabled() -> Self {
        Self {
            events: Vec::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn push(&mut self, event: GameEvent) {
        if self.enabled {
            self.events.push(event);
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn scoring_summary(&self) -> Vec<ScoringPlay> {
        scoring_summary(&self.events)
    }
}

/// Replay `events` and keep every walk or ball in play that drove in runs.
///
/// Half-innings are tracked from the side-over and inning-over markers and the
/// score from team `pts` stat entries, which are logged before the play they
/// belong to.
pub fn scoring_summary(events: &[GameEvent]) -> Vec<ScoringPlay> {
    let mut plays = Vec::new();
    let mut inning = 1;
    let mut half = HalfInning::Top;
    let mut score = [0u32; 2];
    let mut pending = 0;

    for event in events {
        match event {
            GameEvent::Stat {
                team,
                player: None,
                stat: StatKind::Points,
                amount,
            } => {
                if let Some(slot) = score.get_mut(*team) {
                    *slot += amount;
                }
                pending += amount;
            }
            GameEvent::PlateAppearance { .. } => pending = 0,
            GameEvent::HitResult { .. } | GameEvent::Walk { .. } => {
                if pending > 0 {
                    plays.push(ScoringPlay {
                        inning,
                        half,
                        runs: pending,
                        score,
                        event: event.clone(),
                    });
                }
                pending = 0;
            }
            GameEvent::SideOver { .. } => half = HalfInning::Bottom,
            GameEvent::InningOver { .. } => {
                inning += 1;
                half = HalfInning::Top;
            }
            _ => {}
        }
    }

    plays
}
