use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Composite ratings supplied by the rating model, already resolved to numbers.
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
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CompositeRating {
    ContactHitting,
    PowerHitting,
    Eye,
    Speed,
    Fielding,
    Arm,
    Control,
    Velocity,
    Endurance,
}

impl CompositeRating {
    /// Endurance is a stamina budget, not a skill, so venue effects skip it.
    pub fn affected_by_home_field(self) -> bool {
        !matches!(self, CompositeRating::Endurance)
    }
}
