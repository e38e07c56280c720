use crate::errors::{LineupError, SimResult};
use crate::player::{PlayerDescriptor, PlayerId, PlayerInGame, StatLine};
use schema::{Position, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team index of the home team. The visitors are index 1 and bat first.
pub const HOME: usize = 0;
pub const AWAY: usize = 1;

/// Everything the engine needs to know about one side before first pitch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamDescriptor {
    pub id: u32,
    pub name: String,
    pub players: Vec<PlayerDescriptor>,
    pub batting_order: Vec<PlayerId>,
    pub defense: BTreeMap<Position, PlayerId>,
    /// Designated hitter in use: the pitcher is not expected in the batting order.
    /// A mismatch is reported when the game starts; play continues either way.
    #[serde(default)]
    pub dh: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamInGame {
    /// 0 = home, 1 = visitors.
    pub index: usize,
    pub id: u32,
    pub name: String,
    pub players: Vec<PlayerInGame>,
    pub batting_order: Vec<PlayerId>,
    pub defense: BTreeMap<Position, PlayerId>,
    pub batter_index: usize,
    pub dh: bool,
    pub stats: StatLine,
    /// Runs per half-inning on offense, one entry per half started.
    pub runs_by_inning: Vec<u32>,
}

impl TeamInGame {
    pub fn new(index: usize, descriptor: TeamDescriptor) -> Self {
        let mut players: Vec<PlayerInGame> = descriptor
            .players
            .into_iter()
            .map(PlayerInGame::new)
            .collect();

        for player in players.iter_mut() {
            player.lineup_slot = descriptor
                .batting_order
                .iter()
                .position(|id| *id == player.id);
            player.position = descriptor
                .defense
                .iter()
                .find(|(_, id)| **id == player.id)
                .map(|(position, _)| *position);
        }

        Self {
            index,
            id: descriptor.id,
            name: descriptor.name,
            players,
            batting_order: descriptor.batting_order,
            defense: descriptor.defense,
            batter_index: 0,
            dh: descriptor.dh,
            stats: StatLine::new(),
            runs_by_inning: Vec::new(),
        }
    }

    /// Runs scored so far.
    pub fn score(&self) -> u32 {
        self.stats.get(StatKind::Points)
    }

    /// The player due up.
    pub fn current_batter(&self) -> SimResult<PlayerId> {
        let batter = self
            .batting_order
            .get(self.batter_index)
            .copied()
            .ok_or(LineupError::EmptyBattingOrder { team: self.index })?;
        self.player(batter)?;
        Ok(batter)
    }

    pub fn advance_to_next_batter(&mut self) {
        if !self.batting_order.is_empty() {
            self.batter_index = (self.batter_index + 1) % self.batting_order.len();
        }
    }

    /// The player assigned to `position`.
    pub fn fielder(&self, position: Position) -> SimResult<PlayerId> {
        let fielder = self
            .defense
            .get(&position)
            .copied()
            .ok_or(LineupError::MissingFielder {
                team: self.index,
                position,
            })?;
        self.player(fielder)?;
        Ok(fielder)
    }

    pub fn pitcher(&self) -> SimResult<PlayerId> {
        self.fielder(Position::Pitcher)
    }

    /// True when the DH flag agrees with the batting order: with a DH the
    /// pitcher does not bat, without one the pitcher does.
    pub fn dh_matches_lineup(&self) -> SimResult<bool> {
        let pitcher_bats = self.batting_order.contains(&self.pitcher()?);
        Ok(self.dh != pitcher_bats)
    }

    pub fn player(&self, id: PlayerId) -> SimResult<&PlayerInGame> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| {
                LineupError::UnknownPlayer {
                    team: self.index,
                    player: id,
                }
                .into()
            })
    }

    pub fn player_mut(&mut self, id: PlayerId) -> SimResult<&mut PlayerInGame> {
        let team = self.index;
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| LineupError::UnknownPlayer { team, player: id }.into())
    }

    /// Apply a rating multiplier to every player on the roster.
    pub fn scale_ratings(&mut self, factor: f64) {
        for player in self.players.iter_mut() {
            player.ratings.scale(factor);
        }
    }
}
