use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every counter the engine keeps for players and teams.
///
/// The serialized names are the short box-score keys (`"2b"`, `"gpPit"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub enum StatKind {
    // Appearances
    #[serde(rename = "gp")]
    #[strum(serialize = "gp")]
    GamesPlayed,
    #[serde(rename = "gs")]
    #[strum(serialize = "gs")]
    GamesStarted,
    #[serde(rename = "gpPit")]
    #[strum(serialize = "gpPit")]
    GamesPitched,
    #[serde(rename = "gsPit")]
    #[strum(serialize = "gsPit")]
    GamesStartedPitching,

    // Batting
    #[serde(rename = "pa")]
    #[strum(serialize = "pa")]
    PlateAppearances,
    #[serde(rename = "ab")]
    #[strum(serialize = "ab")]
    AtBats,
    #[serde(rename = "h")]
    #[strum(serialize = "h")]
    Hits,
    #[serde(rename = "2b")]
    #[strum(serialize = "2b")]
    Doubles,
    #[serde(rename = "3b")]
    #[strum(serialize = "3b")]
    Triples,
    #[serde(rename = "hr")]
    #[strum(serialize = "hr")]
    HomeRuns,
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    Runs,
    #[serde(rename = "rbi")]
    #[strum(serialize = "rbi")]
    RunsBattedIn,
    #[serde(rename = "bb")]
    #[strum(serialize = "bb")]
    Walks,
    #[serde(rename = "so")]
    #[strum(serialize = "so")]
    Strikeouts,

    // Fielding
    #[serde(rename = "e")]
    #[strum(serialize = "e")]
    Errors,

    // Pitching
    #[serde(rename = "pc")]
    #[strum(serialize = "pc")]
    PitchCount,
    #[serde(rename = "hPit")]
    #[strum(serialize = "hPit")]
    HitsAllowed,
    #[serde(rename = "hrPit")]
    #[strum(serialize = "hrPit")]
    HomeRunsAllowed,
    #[serde(rename = "rPit")]
    #[strum(serialize = "rPit")]
    RunsAllowed,
    #[serde(rename = "bbPit")]
    #[strum(serialize = "bbPit")]
    WalksAllowed,
    #[serde(rename = "soPit")]
    #[strum(serialize = "soPit")]
    StrikeoutsPitched,
    #[serde(rename = "outs")]
    #[strum(serialize = "outs")]
    OutsRecorded,

    // Team
    #[serde(rename = "pts")]
    #[strum(serialize = "pts")]
    Points,
}

/// Where an increment of a given stat lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRouting {
    /// Player counter and the matching team aggregate.
    PlayerAndTeam,
    /// Player counter only; never summed into team totals.
    PlayerOnly,
    /// A run: player `r`, team `pts` and the current inning's tally.
    Run,
    /// Team aggregate only.
    TeamOnly,
}

impl StatKind {
    pub fn routing(self) -> StatRouting {
        match self {
            StatKind::Runs => StatRouting::Run,
            StatKind::Points => StatRouting::TeamOnly,
            StatKind::GamesStarted | StatKind::GamesStartedPitching | StatKind::PitchCount => {
                StatRouting::PlayerOnly
            }
            StatKind::GamesPlayed
            | StatKind::GamesPitched
            | StatKind::PlateAppearances
            | StatKind::AtBats
            | StatKind::Hits
            | StatKind::Doubles
            | StatKind::Triples
            | StatKind::HomeRuns
            | StatKind::RunsBattedIn
            | StatKind::Walks
            | StatKind::Strikeouts
            | StatKind::Errors
            | StatKind::HitsAllowed
            | StatKind::HomeRunsAllowed
            | StatKind::RunsAllowed
            | StatKind::WalksAllowed
            | StatKind::StrikeoutsPitched
            | StatKind::OutsRecorded => StatRouting::PlayerAndTeam,
        }
    }

    /// Extra-base hit counter for a hit worth `bases` total bases.
    pub fn for_extra_base_hit(bases: u8) -> Option<StatKind> {
        match bases {
            2 => Some(StatKind::Doubles),
            3 => Some(StatKind::Triples),
            4 => Some(StatKind::HomeRuns),
            _ => None,
        }
    }
}
