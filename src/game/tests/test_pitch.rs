#[cfg(test)]
mod tests {
    use crate::config::SimConfig;
    use crate::game::events::GameEvent;
    use crate::game::state::Count;
    use crate::game::tests::common::*;
    use crate::team::{AWAY, HOME};
    use pretty_assertions::assert_eq;
    use schema::{FoulKind, StatKind};

    #[test]
    fn test_ball_advances_count() {
        let config = SimConfig::default();
        let mut sim = TestGameBuilder::new().with_draws(vec![BALL]).build(&config);

        let done = assert_ok(sim.sim_pitch());

        assert!(!done);
        assert_eq!(sim.state().count, Count { balls: 1, strikes: 0 });
        assert_eq!(
            sim.log().events().last(),
            Some(&GameEvent::Ball {
                count: Count { balls: 1, strikes: 0 }
            })
        );
        assert_draws_consumed(&sim);
    }

    #[test]
    fn test_called_strike_is_logged_with_flag() {
        let config = SimConfig::default();
        let mut sim = TestGameBuilder::new()
            .with_draws(vec![STRIKE, NO])
            .build(&config);

        assert!(!assert_ok(sim.sim_pitch()));

        assert_eq!(
            sim.log().events().last(),
            Some(&GameEvent::Strike {
                swinging: false,
                count: Count { balls: 0, strikes: 1 }
            })
        );
    }

    #[test]
    fn test_third_strike_retires_batter() {
        let config = SimConfig::default();
        let mut sim = TestGameBuilder::new()
            .with_count(1, 2)
            .with_draws(vec![STRIKE, YES])
            .build(&config);

        assert!(assert_ok(sim.sim_pitch()));

        assert_eq!(sim.state().outs, 1);
        assert_eq!(player_stat(&sim, AWAY_LEADOFF, StatKind::Strikeouts), 1);
        assert_eq!(player_stat(&sim, AWAY_LEADOFF, StatKind::AtBats), 1);
        assert_eq!(player_stat(&sim, HOME_PITCHER, StatKind::StrikeoutsPitched), 1);
        assert_eq!(player_stat(&sim, HOME_PITCHER, StatKind::OutsRecorded), 1);
        assert_eq!(team_stat(&sim, AWAY, StatKind::Strikeouts), 1);
        assert_eq!(
            sim.log().events().last(),
            Some(&GameEvent::StrikeOut {
                team: AWAY,
                batter: AWAY_LEADOFF,
                swinging: true,
            })
        );
    }

    #[test]
    fn test_foul_with_two_strikes_keeps_count() {
        let config = SimConfig::default();
        // contact, foul, out of play
        let mut sim = TestGameBuilder::new()
            .with_count(0, 2)
            .with_draws(vec![CONTACT, FOUL, 0.9])
            .build(&config);

        assert!(!assert_ok(sim.sim_pitch()));

        assert_eq!(sim.state().count, Count { balls: 0, strikes: 2 });
        assert_eq!(
            sim.log().events().last(),
            Some(&GameEvent::Foul {
                kind: FoulKind::OutOfPlay,
                count: Count { balls: 0, strikes: 2 }
            })
        );
        assert_draws_consumed(&sim);
    }

    #[test]
    fn test_every_pitch_is_counted_for_the_pitcher_only() {
        let config = SimConfig::default();
        let mut sim = TestGameBuilder::new()
            .with_draws(vec![BALL, STRIKE, YES, CONTACT, FOUL, 0.0])
            .build(&config);

        for _ in 0..3 {
            assert!(!assert_ok(sim.sim_pitch()));
        }

        assert_eq!(player_stat(&sim, HOME_PITCHER, StatKind::PitchCount), 3);
        assert_eq!(team_stat(&sim, HOME, StatKind::PitchCount), 0);
        assert_eq!(sim.state().count, Count { balls: 1, strikes: 1 });
    }

    #[test]
    fn test_plate_appearance_runs_until_resolved() {
        let config = SimConfig::default();
        // three straight strikes
        let mut sim = TestGameBuilder::new()
            .with_draws(vec![STRIKE, NO, STRIKE, YES, STRIKE, NO])
            .build(&config);

        assert_ok(sim.sim_plate_appearance());

        let state = sim.state();
        assert_eq!(state.outs, 1);
        assert_eq!(state.teams[AWAY].batter_index, 1);
        assert_eq!(player_stat(&sim, AWAY_LEADOFF, StatKind::PlateAppearances), 1);
        assert_eq!(
            sim.log().events().last(),
            Some(&GameEvent::StrikeOut {
                team: AWAY,
                batter: AWAY_LEADOFF,
                swinging: false,
            })
        );
        assert_draws_consumed(&sim);
    }
}
