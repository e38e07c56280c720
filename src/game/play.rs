use crate::game::state::Base;
use crate::player::PlayerId;
use schema::{Direction, Distance, FoulKind, Position, Speed};
use serde::{Deserialize, Serialize};

/// Result of contact, before anybody fields it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattedBall {
    Foul(FoulKind),
    InPlay(BallInPlay),
}

/// Classification of a fair ball.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BallInPlay {
    Ground { direction: Direction, speed: Speed },
    Line { direction: Direction, speed: Speed },
    Fly { direction: Direction, distance: Distance },
}

/// How a plate appearance (or the ball put in play) turned out.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum PlayOutcome {
    Hit { bases: u8 },
    FlyOut,
    ThrowOut,
    /// Batter reaches; the runner from `retired` is forced out at the next base.
    FieldersChoice { retired: Base },
    /// Batter and the runner from `retired` are both out.
    DoublePlay { retired: Base },
    Walk,
    Strikeout,
    /// Batter reaches `bases` on a misplay by `fielder`.
    Error { bases: u8, fielder: Position },
}

impl PlayOutcome {
    pub fn batter_out(&self) -> bool {
        match self {
            PlayOutcome::FlyOut
            | PlayOutcome::ThrowOut
            | PlayOutcome::DoublePlay { .. }
            | PlayOutcome::Strikeout => true,
            PlayOutcome::Hit { .. }
            | PlayOutcome::FieldersChoice { .. }
            | PlayOutcome::Walk
            | PlayOutcome::Error { .. } => false,
        }
    }

    /// Bases the batter is awarded; 0 when the batter is out.
    pub fn total_bases(&self) -> u8 {
        match self {
            PlayOutcome::Hit { bases } | PlayOutcome::Error { bases, .. } => *bases,
            PlayOutcome::FieldersChoice { .. } | PlayOutcome::Walk => 1,
            PlayOutcome::FlyOut
            | PlayOutcome::ThrowOut
            | PlayOutcome::DoublePlay { .. }
            | PlayOutcome::Strikeout => 0,
        }
    }

    /// The runner put out on a force, if any.
    pub fn retired_runner(&self) -> Option<Base> {
        match self {
            PlayOutcome::FieldersChoice { retired } | PlayOutcome::DoublePlay { retired } => {
                Some(*retired)
            }
            PlayOutcome::Hit { .. }
            | PlayOutcome::FlyOut
            | PlayOutcome::ThrowOut
            | PlayOutcome::Walk
            | PlayOutcome::Strikeout
            | PlayOutcome::Error { .. } => None,
        }
    }

    /// Outs the outcome itself records (runners thrown out elsewhere are not included).
    pub fn outs_recorded(&self) -> u8 {
        u8::from(self.batter_out()) + u8::from(self.retired_runner().is_some())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PlayOutcome::Error { .. })
    }
}

/// One runner's trip on a play.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerMovement {
    pub runner: PlayerId,
    /// Base the runner started on (1-3).
    pub from: u8,
    /// Base the runner ended on or was retired at (1-4, 4 = scored).
    pub to: u8,
    pub out: bool,
}
