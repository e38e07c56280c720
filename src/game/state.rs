use crate::player::PlayerId;
use crate::team::{TeamInGame, AWAY, HOME};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HalfInning {
    /// Visitors bat.
    Top,
    /// Home team bats.
    Bottom,
}

impl HalfInning {
    /// Team index on offense.
    pub fn offense(self) -> usize {
        match self {
            HalfInning::Top => AWAY,
            HalfInning::Bottom => HOME,
        }
    }

    /// Team index in the field.
    pub fn defense(self) -> usize {
        match self {
            HalfInning::Top => HOME,
            HalfInning::Bottom => AWAY,
        }
    }

    pub fn other(self) -> HalfInning {
        match self {
            HalfInning::Top => HalfInning::Bottom,
            HalfInning::Bottom => HalfInning::Top,
        }
    }
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfInning::Top => write!(f, "Top"),
            HalfInning::Bottom => write!(f, "Bottom"),
        }
    }
}

/// An occupied base, for naming the runner retired on a force.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// Slot in `Bases` (0 = first).
    pub fn index(self) -> usize {
        match self {
            Base::First => 0,
            Base::Second => 1,
            Base::Third => 2,
        }
    }

    /// Base number as used in runner movement records (1 = first).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Destination number meaning the runner crossed the plate.
pub const HOME_PLATE: u8 = 4;

/// Who is standing on first, second and third.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bases(pub [Option<PlayerId>; 3]);

impl Bases {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn occupant(&self, base: Base) -> Option<PlayerId> {
        self.0[base.index()]
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.occupant(base).is_some()
    }

    pub fn set(&mut self, base: Base, runner: Option<PlayerId>) {
        self.0[base.index()] = runner;
    }

    pub fn clear(&mut self) {
        self.0 = [None; 3];
    }
}

/// Balls and strikes on the current batter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

/// Mutable state of one game in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameState {
    /// Index 0 is the home team, index 1 the visitors.
    pub teams: [TeamInGame; 2],
    pub num_innings: u32,
    pub inning: u32,
    pub half: HalfInning,
    pub outs: u8,
    pub count: Count,
    pub bases: Bases,
    /// Extra innings started so far.
    pub overtimes: u32,
}

impl GameState {
    pub fn new(home: TeamInGame, away: TeamInGame, num_innings: u32) -> Self {
        let mut state = Self {
            teams: [home, away],
            num_innings,
            inning: 1,
            half: HalfInning::Top,
            outs: 0,
            count: Count::default(),
            bases: Bases::empty(),
            overtimes: 0,
        };
        state.reset_new_inning();
        state
    }

    pub fn offense(&self) -> usize {
        self.half.offense()
    }

    pub fn defense(&self) -> usize {
        self.half.defense()
    }

    /// Runs for [home, visitors].
    pub fn score(&self) -> [u32; 2] {
        [self.teams[HOME].score(), self.teams[AWAY].score()]
    }

    /// Start a half-inning: open the offense's run tally, clear the bases.
    pub fn reset_new_inning(&mut self) {
        let offense = self.offense();
        self.teams[offense].runs_by_inning.push(0);
        self.bases.clear();
        self.outs = 0;
        self.reset_new_batter();
    }

    pub fn reset_new_batter(&mut self) {
        self.count = Count::default();
    }

    /// Swap offense and defense.
    pub fn possession_change(&mut self) {
        self.half = self.half.other();
    }
}
