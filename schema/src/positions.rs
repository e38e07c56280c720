use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defensive positions, in scorebook order.
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
pub enum Position {
    #[strum(serialize = "P")]
    Pitcher,
    #[strum(serialize = "C")]
    Catcher,
    #[strum(serialize = "1B")]
    FirstBase,
    #[strum(serialize = "2B")]
    SecondBase,
    #[strum(serialize = "3B")]
    ThirdBase,
    #[strum(serialize = "SS")]
    Shortstop,
    #[strum(serialize = "LF")]
    LeftField,
    #[strum(serialize = "CF")]
    CenterField,
    #[strum(serialize = "RF")]
    RightField,
}

impl Position {
    /// The scorebook number (1 = pitcher ... 9 = right field).
    pub fn number(self) -> u8 {
        match self {
            Position::Pitcher => 1,
            Position::Catcher => 2,
            Position::FirstBase => 3,
            Position::SecondBase => 4,
            Position::ThirdBase => 5,
            Position::Shortstop => 6,
            Position::LeftField => 7,
            Position::CenterField => 8,
            Position::RightField => 9,
        }
    }

    /// Pitcher, catcher and the four infielders.
    pub fn is_infield(self) -> bool {
        self.number() <= 6
    }

    pub fn is_outfield(self) -> bool {
        !self.is_infield()
    }
}
