use crate::config::{FieldingConfig, TotalBasesTable};
use crate::errors::SimResult;
use crate::game::play::{BallInPlay, PlayOutcome};
use crate::game::rng::GameRng;
use crate::game::state::{Base, Bases};
use schema::{Direction, Distance, Position, Speed};

use Position::*;

// === Routing tables ===

/// Pop-ups that stay in or just beyond the infield.
pub fn infield_fly_candidates(direction: Direction) -> &'static [Position] {
    match direction {
        Direction::FarLeft => &[ThirdBase],
        Direction::Left => &[LeftField, CenterField],
        Direction::Middle => &[CenterField],
        Direction::Right => &[RightField, CenterField],
        Direction::FarRight => &[FirstBase],
    }
}

pub fn outfield_candidates(direction: Direction) -> &'static [Position] {
    match direction {
        Direction::FarLeft => &[LeftField],
        Direction::Left => &[LeftField, CenterField],
        Direction::Middle => &[CenterField],
        Direction::Right => &[RightField, CenterField],
        Direction::FarRight => &[RightField],
    }
}

pub fn infield_candidates(direction: Direction) -> &'static [Position] {
    match direction {
        Direction::FarLeft => &[ThirdBase],
        Direction::Left => &[ThirdBase, Shortstop],
        Direction::Middle => &[SecondBase, Shortstop],
        Direction::Right => &[SecondBase, FirstBase],
        Direction::FarRight => &[FirstBase],
    }
}

/// Pick the fielder credited with handling `ball`.
///
/// Grounders and liners first roll to see whether they reach the outfield.
pub fn route(ball: &BallInPlay, config: &FieldingConfig, rng: &mut GameRng) -> SimResult<Position> {
    let candidates = match *ball {
        BallInPlay::Fly {
            direction,
            distance: Distance::Infield,
        } => infield_fly_candidates(direction),
        BallInPlay::Fly { direction, .. } => outfield_candidates(direction),
        BallInPlay::Ground { direction, speed } => {
            let p = config.ground_outfield_prob.get(speed);
            if rng.chance(p, "ground ball reaches outfield")? {
                outfield_candidates(direction)
            } else {
                infield_candidates(direction)
            }
        }
        BallInPlay::Line { direction, speed } => {
            let p = config.line_outfield_prob.get(speed);
            if rng.chance(p, "line drive reaches outfield")? {
                outfield_candidates(direction)
            } else {
                infield_candidates(direction)
            }
        }
    };

    rng.choose(candidates, "fielder")
}

impl TotalBasesTable {
    /// Weights for 1-4 total bases on a hit or error.
    pub fn weights(&self, ball: &BallInPlay) -> &[f64; 4] {
        match *ball {
            BallInPlay::Fly { distance, .. } => match distance {
                Distance::Infield => &self.fly_infield,
                Distance::Shallow => &self.fly_shallow,
                Distance::Normal => &self.fly_normal,
                Distance::Deep => &self.fly_deep,
            },
            BallInPlay::Line { speed, .. } => match speed {
                Speed::Soft => &self.line_soft,
                Speed::Normal => &self.line_normal,
                Speed::Hard => &self.line_hard,
            },
            BallInPlay::Ground { speed, .. } => match speed {
                Speed::Soft => &self.ground_soft,
                Speed::Normal => &self.ground_normal,
                Speed::Hard => &self.ground_hard,
            },
        }
    }
}

/// Fielders who handled the ball: the credited fielder, plus first base
/// taking the throw when another infielder fields a grounder.
pub fn touched_by(ball: &BallInPlay, fielder: Position) -> Vec<Position> {
    let mut touched = vec![fielder];
    if matches!(ball, BallInPlay::Ground { .. }) && fielder.is_infield() && fielder != FirstBase {
        touched.push(FirstBase);
    }
    touched
}

/// Chance that a ground ball with a runner on first becomes a double play.
pub fn double_play_prob(config: &FieldingConfig, fielder: Position, bases: &Bases) -> f64 {
    let dp = &config.double_play;
    let prob = dp.base_prob(fielder);

    if bases.is_occupied(Base::Second) && bases.is_occupied(Base::Third) {
        prob / dp.bases_loaded_divisor
    } else if bases.is_occupied(Base::Second) {
        prob / dp.runner_on_second_divisor
    } else {
        prob
    }
}

/// The fielding half of a ball in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldingPlay {
    pub fielder: Position,
    pub touched: Vec<Position>,
    pub outcome: PlayOutcome,
}

/// Resolve who fields `ball` and what happens to the batter.
pub fn resolve(
    ball: &BallInPlay,
    bases: &Bases,
    config: &FieldingConfig,
    rng: &mut GameRng,
) -> SimResult<FieldingPlay> {
    let fielder = route(ball, config, rng)?;
    let touched = touched_by(ball, fielder);

    let hit = rng.chance(config.hit_prob, "hit")?;
    let error = !hit && rng.chance(config.error_prob, "error")?;

    let outcome = if hit || error {
        let weights = config.total_bases.weights(ball);
        let bases = rng.weighted_index(weights, "total bases")? as u8 + 1;
        if error {
            let fielder = rng.choose(&touched, "error fielder")?;
            PlayOutcome::Error { bases, fielder }
        } else {
            PlayOutcome::Hit { bases }
        }
    } else {
        match ball {
            BallInPlay::Fly { .. } | BallInPlay::Line { .. } => PlayOutcome::FlyOut,
            BallInPlay::Ground { .. } if bases.is_occupied(Base::First) => {
                let p = double_play_prob(config, fielder, bases);
                let roll = rng.next_outcome("double play")?;
                if roll < p {
                    PlayOutcome::DoublePlay {
                        retired: Base::First,
                    }
                } else if roll < p + (1.0 - p) / 2.0 {
                    PlayOutcome::FieldersChoice {
                        retired: Base::First,
                    }
                } else {
                    PlayOutcome::ThrowOut
                }
            }
            BallInPlay::Ground { .. } => PlayOutcome::ThrowOut,
        }
    };

    tracing::debug!(?ball, ?fielder, ?outcome, "ball fielded");

    Ok(FieldingPlay {
        fielder,
        touched,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn runner_on_first() -> Bases {
        Bases([Some(PlayerId(1)), None, None])
    }

    #[rstest]
    #[case(Direction::FarLeft, &[ThirdBase])]
    #[case(Direction::Left, &[LeftField, CenterField])]
    #[case(Direction::Middle, &[CenterField])]
    #[case(Direction::Right, &[RightField, CenterField])]
    #[case(Direction::FarRight, &[FirstBase])]
    fn test_infield_fly_table(#[case] direction: Direction, #[case] expected: &[Position]) {
        assert_eq!(infield_fly_candidates(direction), expected);
    }

    #[rstest]
    #[case(Direction::FarLeft, &[ThirdBase])]
    #[case(Direction::Left, &[ThirdBase, Shortstop])]
    #[case(Direction::Middle, &[SecondBase, Shortstop])]
    #[case(Direction::Right, &[SecondBase, FirstBase])]
    #[case(Direction::FarRight, &[FirstBase])]
    fn test_infield_table(#[case] direction: Direction, #[case] expected: &[Position]) {
        assert_eq!(infield_candidates(direction), expected);
    }

    #[test]
    fn test_soft_grounder_never_reaches_outfield() {
        let ball = BallInPlay::Ground {
            direction: Direction::Middle,
            speed: Speed::Soft,
        };
        // bleed-through roll 0.0 still fails against probability 0, then second base
        let mut rng = GameRng::new_for_test(vec![0.0, 0.0]);

        assert_eq!(route(&ball, &FieldingConfig::default(), &mut rng), Ok(SecondBase));
    }

    #[test]
    fn test_hard_liner_to_outfield() {
        let ball = BallInPlay::Line {
            direction: Direction::Right,
            speed: Speed::Hard,
        };
        let mut rng = GameRng::new_for_test(vec![0.5, 0.0]);

        assert_eq!(route(&ball, &FieldingConfig::default(), &mut rng), Ok(RightField));
    }

    #[rstest]
    #[case(Shortstop, [Some(1), None, None], 0.7)]
    #[case(SecondBase, [Some(1), None, None], 0.5)]
    #[case(ThirdBase, [Some(1), Some(2), None], 0.15)]
    #[case(FirstBase, [Some(1), Some(2), Some(3)], 0.2 / 3.0)]
    #[case(Shortstop, [Some(1), None, Some(3)], 0.7)]
    fn test_double_play_prob(
        #[case] fielder: Position,
        #[case] occupants: [Option<u32>; 3],
        #[case] expected: f64,
    ) {
        let bases = Bases(occupants.map(|o| o.map(PlayerId)));
        let p = double_play_prob(&FieldingConfig::default(), fielder, &bases);
        assert!((p - expected).abs() < 1e-9, "{p} != {expected}");
    }

    #[test]
    fn test_error_on_grounder_credits_thrower_or_receiver() {
        assert_eq!(
            touched_by(
                &BallInPlay::Ground {
                    direction: Direction::Left,
                    speed: Speed::Normal
                },
                Shortstop
            ),
            vec![Shortstop, FirstBase]
        );
        assert_eq!(
            touched_by(
                &BallInPlay::Fly {
                    direction: Direction::Left,
                    distance: Distance::Normal
                },
                LeftField
            ),
            vec![LeftField]
        );
    }

    #[test]
    fn test_grounder_to_short_turns_double_play() {
        let ball = BallInPlay::Ground {
            direction: Direction::Left,
            speed: Speed::Normal,
        };
        // stays infield, shortstop, no hit, no error, double play roll
        let mut rng = GameRng::new_for_test(vec![0.9, 0.9, 0.9, 0.9, 0.1]);

        let play = resolve(&ball, &runner_on_first(), &FieldingConfig::default(), &mut rng)
            .expect("play resolves");

        assert_eq!(play.fielder, Shortstop);
        assert_eq!(play.outcome, PlayOutcome::DoublePlay { retired: Base::First });
        assert_eq!(rng.remaining(), Some(0));
    }

    #[rstest]
    #[case(0.75, PlayOutcome::FieldersChoice { retired: Base::First })]
    #[case(0.9, PlayOutcome::ThrowOut)]
    fn test_non_double_play_split(#[case] roll: f64, #[case] expected: PlayOutcome) {
        let ball = BallInPlay::Ground {
            direction: Direction::Left,
            speed: Speed::Normal,
        };
        let mut rng = GameRng::new_for_test(vec![0.9, 0.9, 0.9, 0.9, roll]);

        let play = resolve(&ball, &runner_on_first(), &FieldingConfig::default(), &mut rng)
            .expect("play resolves");

        assert_eq!(play.outcome, expected);
    }

    #[test]
    fn test_deep_fly_hit_uses_distance_weights() {
        let ball = BallInPlay::Fly {
            direction: Direction::Middle,
            distance: Distance::Deep,
        };
        // center field, hit, total-bases roll lands in the home-run weight
        let mut rng = GameRng::new_for_test(vec![0.0, 0.1, 0.5]);

        let play = resolve(&ball, &Bases::empty(), &FieldingConfig::default(), &mut rng)
            .expect("play resolves");

        assert_eq!(play.fielder, CenterField);
        assert_eq!(play.outcome, PlayOutcome::Hit { bases: 4 });
    }

    #[test]
    fn test_error_is_attributed_to_a_toucher() {
        let ball = BallInPlay::Ground {
            direction: Direction::FarLeft,
            speed: Speed::Hard,
        };
        // infield, third base, no hit, error, one base, receiver at first
        let mut rng = GameRng::new_for_test(vec![0.9, 0.0, 0.9, 0.01, 0.0, 0.9]);

        let play = resolve(&ball, &Bases::empty(), &FieldingConfig::default(), &mut rng)
            .expect("play resolves");

        assert_eq!(play.touched, vec![ThirdBase, FirstBase]);
        assert_eq!(
            play.outcome,
            PlayOutcome::Error {
                bases: 1,
                fielder: FirstBase
            }
        );
    }

    #[test]
    fn test_caught_liner_is_a_fly_out() {
        let ball = BallInPlay::Line {
            direction: Direction::Middle,
            speed: Speed::Soft,
        };
        let mut rng = GameRng::new_for_test(vec![0.9, 0.0, 0.9, 0.9]);

        let play = resolve(&ball, &runner_on_first(), &FieldingConfig::default(), &mut rng)
            .expect("play resolves");

        assert_eq!(play.fielder, SecondBase);
        assert_eq!(play.outcome, PlayOutcome::FlyOut);
        assert_eq!(rng.remaining(), Some(0));
    }
}
