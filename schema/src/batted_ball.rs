use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BattedBallType {
    Ground,
    Line,
    Fly,
}

/// Horizontal direction of a ball in play, from the third-base line to the
/// first-base line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Direction {
    FarLeft,
    Left,
    Middle,
    Right,
    FarRight,
}

/// How far a fly ball carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Distance {
    Infield,
    Shallow,
    Normal,
    Deep,
}

/// How hard a ground ball or line drive is struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Speed {
    Soft,
    Normal,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FoulKind {
    FarLeftFoul,
    FarRightFoul,
    OutOfPlay,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Direction::FarLeft => "down the left field line",
            Direction::Left => "to left",
            Direction::Middle => "up the middle",
            Direction::Right => "to right",
            Direction::FarRight => "down the right field line",
        };
        write!(f, "{}", display_name)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Distance::Infield => "infield",
            Distance::Shallow => "shallow",
            Distance::Normal => "routine",
            Distance::Deep => "deep",
        };
        write!(f, "{}", display_name)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Speed::Soft => "soft",
            Speed::Normal => "sharp",
            Speed::Hard => "hard",
        };
        write!(f, "{}", display_name)
    }
}

impl fmt::Display for BattedBallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            BattedBallType::Ground => "ground ball",
            BattedBallType::Line => "line drive",
            BattedBallType::Fly => "fly ball",
        };
        write!(f, "{}", display_name)
    }
}
