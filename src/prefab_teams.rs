use crate::errors::{ConfigError, SimResult};
use crate::player::{CompositeRatings, PlayerDescriptor, PlayerId};
use crate::team::TeamDescriptor;
use schema::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A home/away pairing, as read from a matchup RON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Matchup {
    pub home: TeamDescriptor,
    pub away: TeamDescriptor,
}

impl Matchup {
    pub fn from_ron_str(text: &str) -> SimResult<Self> {
        Ok(ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&text)
    }
}

/// Default batting order by defensive position, pitcher hitting ninth.
const BATTING_ORDER: [Position; 9] = [
    Position::CenterField,
    Position::Shortstop,
    Position::FirstBase,
    Position::LeftField,
    Position::ThirdBase,
    Position::RightField,
    Position::SecondBase,
    Position::Catcher,
    Position::Pitcher,
];

/// A nine-man team with flat ratings, one player per position.
///
/// Player ids are `id_base + 1` through `id_base + 9`, in batting order.
pub fn demo_team(team_id: u32, name: &str, id_base: u32) -> TeamDescriptor {
    let mut players = Vec::with_capacity(BATTING_ORDER.len());
    let mut batting_order = Vec::with_capacity(BATTING_ORDER.len());
    let mut defense = BTreeMap::new();

    for (slot, position) in BATTING_ORDER.iter().enumerate() {
        let id = PlayerId(id_base + slot as u32 + 1);
        players.push(PlayerDescriptor {
            id,
            name: format!("{} {}", name, position),
            ratings: CompositeRatings::flat(0.5),
        });
        batting_order.push(id);
        defense.insert(*position, id);
    }

    TeamDescriptor {
        id: team_id,
        name: name.to_string(),
        players,
        batting_order,
        defense,
        dh: false,
    }
}

/// Two demo teams with disjoint player ids.
pub fn demo_matchup() -> Matchup {
    Matchup {
        home: demo_team(1, "Harbor Hawks", 100),
        away: demo_team(2, "Valley Miners", 200),
    }
}
