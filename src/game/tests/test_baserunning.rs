#[cfg(test)]
mod tests {
    use crate::config::BaserunningConfig;
    use crate::game::baserunning::{advance_on_play, Advancement, PlayContext};
    use crate::game::play::{BallInPlay, PlayOutcome, RunnerMovement};
    use crate::game::rng::GameRng;
    use crate::game::state::Bases;
    use crate::game::tests::common::*;
    use crate::player::PlayerId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Direction, Distance, Position, Speed};

    const BATTER: PlayerId = AWAY_LEADOFF;

    fn bases(first: bool, second: bool, third: bool) -> Bases {
        Bases([
            first.then_some(RUNNER_ON_FIRST),
            second.then_some(RUNNER_ON_SECOND),
            third.then_some(RUNNER_ON_THIRD),
        ])
    }

    fn ground(direction: Direction, speed: Speed) -> BallInPlay {
        BallInPlay::Ground { direction, speed }
    }

    fn fly(distance: Distance) -> BallInPlay {
        BallInPlay::Fly {
            direction: Direction::Right,
            distance,
        }
    }

    /// Run the advancer and check the script was used up exactly.
    fn advance(
        start: Bases,
        ball: BallInPlay,
        fielder: Position,
        outcome: PlayOutcome,
        outs_before: u8,
        draws: Vec<f64>,
    ) -> Advancement {
        let config = BaserunningConfig::default();
        let ctx = PlayContext {
            ball: &ball,
            fielder,
            outcome,
            outs_before,
            config: &config,
        };
        let mut rng = GameRng::new_for_test(draws);
        let result = assert_ok(advance_on_play(&start, BATTER, &ctx, &mut rng));
        assert_eq!(rng.remaining(), Some(0), "unused scripted draws");
        result
    }

    fn moved(runner: PlayerId, from: u8, to: u8) -> RunnerMovement {
        RunnerMovement {
            runner,
            from,
            to,
            out: false,
        }
    }

    // === Hits ===

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn test_extra_base_hit_clears_second_and_third(#[case] total: u8) {
        let result = advance(
            bases(false, true, true),
            fly(Distance::Deep),
            Position::RightField,
            PlayOutcome::Hit { bases: total },
            0,
            vec![],
        );

        assert_eq!(result.runs[..2], [RUNNER_ON_THIRD, RUNNER_ON_SECOND]);
        assert_eq!(result.runs.len(), if total == 4 { 3 } else { 2 });
    }

    #[test]
    fn test_outfield_single_scores_runner_from_second() {
        let result = advance(
            bases(false, true, false),
            fly(Distance::Shallow),
            Position::RightField,
            PlayOutcome::Hit { bases: 1 },
            0,
            vec![NO],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_SECOND]);
        assert_eq!(result.bases, Bases([Some(BATTER), None, None]));
    }

    #[test]
    fn test_outfield_single_can_stop_runner_at_third() {
        let result = advance(
            bases(false, true, false),
            fly(Distance::Shallow),
            Position::RightField,
            PlayOutcome::Hit { bases: 1 },
            0,
            vec![0.1],
        );

        assert!(result.runs.is_empty());
        assert_eq!(result.bases, Bases([Some(BATTER), None, Some(RUNNER_ON_SECOND)]));
    }

    #[test]
    fn test_soft_infield_single_can_hold_runner_on_third() {
        // Third holds, so second is blocked and stays put without a roll.
        let result = advance(
            bases(false, true, true),
            ground(Direction::Left, Speed::Soft),
            Position::Shortstop,
            PlayOutcome::Hit { bases: 1 },
            0,
            vec![YES],
        );

        assert!(result.runs.is_empty());
        assert!(result.movements.is_empty());
        assert_eq!(
            result.bases,
            Bases([Some(BATTER), Some(RUNNER_ON_SECOND), Some(RUNNER_ON_THIRD)])
        );
    }

    #[test]
    fn test_forced_runners_never_hold_on_infield_single() {
        let result = advance(
            bases(true, true, true),
            ground(Direction::Left, Speed::Soft),
            Position::Shortstop,
            PlayOutcome::Hit { bases: 1 },
            1,
            vec![],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_THIRD]);
        assert_eq!(
            result.bases,
            Bases([Some(BATTER), Some(RUNNER_ON_FIRST), Some(RUNNER_ON_SECOND)])
        );
        assert_eq!(
            result.movements,
            vec![
                moved(RUNNER_ON_THIRD, 3, 4),
                moved(RUNNER_ON_SECOND, 2, 3),
                moved(RUNNER_ON_FIRST, 1, 2),
            ]
        );
    }

    #[test]
    fn test_hard_grounder_single_always_scores_third() {
        let result = advance(
            bases(false, false, true),
            ground(Direction::Middle, Speed::Hard),
            Position::SecondBase,
            PlayOutcome::Hit { bases: 1 },
            0,
            vec![],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_THIRD]);
    }

    #[rstest]
    #[case(1, 0.5, 2)]
    #[case(1, 0.05, 3)]
    #[case(2, 0.5, 3)]
    #[case(2, 0.05, 4)]
    fn test_runner_from_first_moves_with_batter(
        #[case] total: u8,
        #[case] draw: f64,
        #[case] expected: u8,
    ) {
        let result = advance(
            bases(true, false, false),
            fly(Distance::Normal),
            Position::CenterField,
            PlayOutcome::Hit { bases: total },
            0,
            vec![draw],
        );

        assert_eq!(result.movements, vec![moved(RUNNER_ON_FIRST, 1, expected)]);
    }

    #[test]
    fn test_runner_from_first_scores_on_triple_without_roll() {
        let result = advance(
            bases(true, false, false),
            fly(Distance::Deep),
            Position::CenterField,
            PlayOutcome::Hit { bases: 3 },
            0,
            vec![],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_FIRST]);
        assert_eq!(result.bases, Bases([None, None, Some(BATTER)]));
    }

    #[test]
    fn test_home_run_brings_everyone_home() {
        let result = advance(
            bases(true, true, true),
            fly(Distance::Deep),
            Position::RightField,
            PlayOutcome::Hit { bases: 4 },
            2,
            vec![],
        );

        assert_eq!(
            result.runs,
            vec![RUNNER_ON_THIRD, RUNNER_ON_SECOND, RUNNER_ON_FIRST, BATTER]
        );
        assert_eq!(result.bases, Bases::empty());
    }

    // === Outs ===

    #[rstest]
    #[case(Distance::Shallow, 0.2, true)]
    #[case(Distance::Shallow, 0.3, false)]
    #[case(Distance::Normal, 0.7, true)]
    #[case(Distance::Deep, 0.99, true)]
    #[case(Distance::Infield, 0.0, false)]
    fn test_tag_up_from_third_by_distance(
        #[case] distance: Distance,
        #[case] draw: f64,
        #[case] scores: bool,
    ) {
        let result = advance(
            bases(false, false, true),
            fly(distance),
            Position::RightField,
            PlayOutcome::FlyOut,
            0,
            vec![draw],
        );

        assert_eq!(result.runs.len(), usize::from(scores));
    }

    #[test]
    fn test_deep_fly_to_right_moves_runner_from_second() {
        // 0.5 x 1.5 tendency in right field
        let result = advance(
            bases(false, true, true),
            fly(Distance::Deep),
            Position::RightField,
            PlayOutcome::FlyOut,
            1,
            vec![YES, 0.7],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_THIRD]);
        assert_eq!(result.bases, Bases([None, None, Some(RUNNER_ON_SECOND)]));
    }

    #[test]
    fn test_shallow_fly_holds_runner_on_second_without_roll() {
        let result = advance(
            bases(false, true, false),
            fly(Distance::Shallow),
            Position::RightField,
            PlayOutcome::FlyOut,
            0,
            vec![],
        );

        assert_eq!(result.bases, bases(false, true, false));
        assert!(result.movements.is_empty());
    }

    #[test]
    fn test_runner_held_at_third_blocks_runner_from_second() {
        let result = advance(
            bases(false, true, true),
            ground(Direction::Middle, Speed::Normal),
            Position::SecondBase,
            PlayOutcome::ThrowOut,
            0,
            vec![NO],
        );

        assert!(result.runs.is_empty());
        assert_eq!(result.bases, bases(false, true, true));
    }

    #[test]
    fn test_line_drive_to_infielder_freezes_runner_on_third() {
        let result = advance(
            bases(false, false, true),
            BallInPlay::Line {
                direction: Direction::Left,
                speed: Speed::Hard,
            },
            Position::ThirdBase,
            PlayOutcome::FlyOut,
            0,
            vec![],
        );

        assert!(result.runs.is_empty());
    }

    #[test]
    fn test_line_drive_to_left_fielder_can_score_runner() {
        let result = advance(
            bases(false, false, true),
            BallInPlay::Line {
                direction: Direction::Left,
                speed: Speed::Hard,
            },
            Position::LeftField,
            PlayOutcome::FlyOut,
            0,
            vec![0.4],
        );

        assert_eq!(result.runs, vec![RUNNER_ON_THIRD]);
    }

    #[test]
    fn test_ground_ball_to_first_side_advances_runner_from_second() {
        // 0.4 x 1.5 tendency for the first baseman
        let result = advance(
            bases(false, true, false),
            ground(Direction::FarRight, Speed::Normal),
            Position::FirstBase,
            PlayOutcome::ThrowOut,
            0,
            vec![0.55],
        );

        assert_eq!(result.movements, vec![moved(RUNNER_ON_SECOND, 2, 3)]);
    }

    #[test]
    fn test_runner_on_first_only_tags_on_deep_fly() {
        let held = advance(
            bases(true, false, false),
            fly(Distance::Normal),
            Position::CenterField,
            PlayOutcome::FlyOut,
            0,
            vec![],
        );
        assert!(held.movements.is_empty());

        let tagged = advance(
            bases(true, false, false),
            fly(Distance::Deep),
            Position::CenterField,
            PlayOutcome::FlyOut,
            0,
            vec![0.01],
        );
        assert_eq!(tagged.movements, vec![moved(RUNNER_ON_FIRST, 1, 2)]);
    }

    #[test]
    fn test_third_out_on_fly_scores_nobody() {
        let result = advance(
            bases(false, false, true),
            fly(Distance::Deep),
            Position::CenterField,
            PlayOutcome::FlyOut,
            2,
            vec![],
        );

        assert!(result.runs.is_empty());
        assert!(result.movements.is_empty());
    }

    #[test]
    fn test_fielders_choice_puts_batter_on_first() {
        let result = advance(
            bases(true, false, false),
            ground(Direction::Left, Speed::Normal),
            Position::Shortstop,
            PlayOutcome::FieldersChoice {
                retired: crate::game::state::Base::First,
            },
            0,
            vec![],
        );

        assert_eq!(result.bases, Bases([Some(BATTER), None, None]));
        assert_eq!(result.outs_on_bases, 1);
        assert_eq!(
            result.movements,
            vec![RunnerMovement {
                runner: RUNNER_ON_FIRST,
                from: 1,
                to: 2,
                out: true,
            }]
        );
    }
}
