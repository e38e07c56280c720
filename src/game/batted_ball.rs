use crate::config::BattedBallConfig;
use crate::errors::SimResult;
use crate::game::play::{BallInPlay, BattedBall};
use crate::game::rng::GameRng;
use schema::{BattedBallType, Direction, Distance, FoulKind, Speed};

const FOUL_KINDS: [FoulKind; 3] = [
    FoulKind::FarLeftFoul,
    FoulKind::FarRightFoul,
    FoulKind::OutOfPlay,
];
const BALL_TYPES: [BattedBallType; 3] = [
    BattedBallType::Ground,
    BattedBallType::Line,
    BattedBallType::Fly,
];
const DIRECTIONS: [Direction; 5] = [
    Direction::FarLeft,
    Direction::Left,
    Direction::Middle,
    Direction::Right,
    Direction::FarRight,
];
const DISTANCES: [Distance; 4] = [
    Distance::Infield,
    Distance::Shallow,
    Distance::Normal,
    Distance::Deep,
];
const SPEEDS: [Speed; 3] = [Speed::Soft, Speed::Normal, Speed::Hard];

/// Classify a ball the batter made contact with.
///
/// Draws: foul check, then either the foul kind or type, direction and
/// magnitude (distance for flies, speed otherwise).
pub fn classify(config: &BattedBallConfig, rng: &mut GameRng) -> SimResult<BattedBall> {
    if rng.chance(config.foul_prob, "foul ball")? {
        let kind = rng.choose(&FOUL_KINDS, "foul kind")?;
        return Ok(BattedBall::Foul(kind));
    }

    let ball_type = rng.choose(&BALL_TYPES, "batted ball type")?;
    let direction = rng.choose(&DIRECTIONS, "batted ball direction")?;
    let ball = match ball_type {
        BattedBallType::Fly => BallInPlay::Fly {
            direction,
            distance: rng.choose(&DISTANCES, "fly distance")?,
        },
        BattedBallType::Line => BallInPlay::Line {
            direction,
            speed: rng.choose(&SPEEDS, "line drive speed")?,
        },
        BattedBallType::Ground => BallInPlay::Ground {
            direction,
            speed: rng.choose(&SPEEDS, "ground ball speed")?,
        },
    };

    Ok(BattedBall::InPlay(ball))
}
