use schema::{CompositeRating, Position, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a player, unique across both teams of a game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Counter mapping for one player or one team.
///
/// Counters are created on first increment and never reset mid-game.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct StatLine {
    counters: BTreeMap<StatKind, u32>,
}

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter (0 if never touched)
    pub fn get(&self, stat: StatKind) -> u32 {
        self.counters.get(&stat).copied().unwrap_or(0)
    }

    pub fn add(&mut self, stat: StatKind, amount: u32) {
        *self.counters.entry(stat).or_insert(0) += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        self.counters.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

/// Externally computed ratings for one player.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct CompositeRatings(pub BTreeMap<CompositeRating, f64>);

impl CompositeRatings {
    /// Every rating set to the same value.
    pub fn flat(value: f64) -> Self {
        use strum::IntoEnumIterator;
        Self(CompositeRating::iter().map(|r| (r, value)).collect())
    }

    pub fn get(&self, rating: CompositeRating) -> f64 {
        self.0.get(&rating).copied().unwrap_or(0.0)
    }

    /// Scale every venue-sensitive rating by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for (rating, value) in self.0.iter_mut() {
            if rating.affected_by_home_field() {
                *value *= factor;
            }
        }
    }
}

/// Roster entry handed to the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerDescriptor {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub ratings: CompositeRatings,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerInGame {
    pub id: PlayerId,
    pub name: String,
    pub ratings: CompositeRatings,
    pub stats: StatLine,
    /// Index into the batting order, if the player bats.
    pub lineup_slot: Option<usize>,
    /// Defensive assignment, if the player is in the field.
    pub position: Option<Position>,
}

impl PlayerInGame {
    pub fn new(descriptor: PlayerDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: descriptor.name,
            ratings: descriptor.ratings,
            stats: StatLine::new(),
            lineup_slot: None,
            position: None,
        }
    }

    /// Fatigue multiplier for a pitcher after this game's pitches so far.
    pub fn fatigue(&self) -> f64 {
        fatigue_factor(
            self.stats.get(StatKind::PitchCount),
            self.ratings.get(CompositeRating::Endurance),
        )
    }
}

/// Rating multiplier after `pitches` thrown.
///
/// The first 30 pitches are free; after that the multiplier drops by 10% every
/// `10 + 50 * endurance` pitches, never below 0.
pub fn fatigue_factor(pitches: u32, endurance: f64) -> f64 {
    let adjusted = pitches.saturating_sub(30) as f64;
    let pitches_to_drop_ten_percent = 10.0 + 50.0 * endurance;
    let ratio = adjusted / pitches_to_drop_ten_percent;

    (1.0 - 0.1 * ratio).max(0.0)
}
