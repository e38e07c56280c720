//! Calibrated gameplay constants.
//!
//! Every probability the engine rolls against lives here so that balance
//! changes are data edits. `SimConfig::default()` carries the calibrated
//! values; a RON file can override any subset of them.

use crate::errors::{ConfigError, SimResult};
use schema::{Distance, Position, Speed};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use strum::IntoEnumIterator;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Minimum scheduled innings before the game may end.
    pub num_innings: u32,
    /// League-wide home advantage, in percent of composite ratings.
    pub home_advantage_pct: f64,
    pub pitch: PitchConfig,
    pub batted_ball: BattedBallConfig,
    pub fielding: FieldingConfig,
    pub baserunning: BaserunningConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PitchConfig {
    pub ball_weight: f64,
    pub strike_weight: f64,
    pub contact_weight: f64,
    /// Share of strikes (and strikeouts) that are swinging rather than called.
    pub swinging_prob: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BattedBallConfig {
    pub foul_prob: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldingConfig {
    pub hit_prob: f64,
    /// Rolled only when the ball was not a hit.
    pub error_prob: f64,
    /// Chance a ground ball gets through the infield, by speed.
    pub ground_outfield_prob: SpeedTable,
    /// Chance a line drive carries to an outfielder, by speed.
    pub line_outfield_prob: SpeedTable,
    pub total_bases: TotalBasesTable,
    pub double_play: DoublePlayConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeedTable {
    pub soft: f64,
    pub normal: f64,
    pub hard: f64,
}

impl SpeedTable {
    pub fn get(&self, speed: Speed) -> f64 {
        match speed {
            Speed::Soft => self.soft,
            Speed::Normal => self.normal,
            Speed::Hard => self.hard,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DistanceTable {
    pub infield: f64,
    pub shallow: f64,
    pub normal: f64,
    pub deep: f64,
}

impl DistanceTable {
    pub fn get(&self, distance: Distance) -> f64 {
        match distance {
            Distance::Infield => self.infield,
            Distance::Shallow => self.shallow,
            Distance::Normal => self.normal,
            Distance::Deep => self.deep,
        }
    }
}

/// Weights for 1, 2, 3 and 4 total bases on a hit or error, per batted-ball class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TotalBasesTable {
    pub fly_infield: [f64; 4],
    pub fly_shallow: [f64; 4],
    pub fly_normal: [f64; 4],
    pub fly_deep: [f64; 4],
    pub line_soft: [f64; 4],
    pub line_normal: [f64; 4],
    pub line_hard: [f64; 4],
    pub ground_soft: [f64; 4],
    pub ground_normal: [f64; 4],
    pub ground_hard: [f64; 4],
}

impl TotalBasesTable {
    fn rows(&self) -> [(&'static str, &[f64; 4]); 10] {
        [
            ("fly_infield", &self.fly_infield),
            ("fly_shallow", &self.fly_shallow),
            ("fly_normal", &self.fly_normal),
            ("fly_deep", &self.fly_deep),
            ("line_soft", &self.line_soft),
            ("line_normal", &self.line_normal),
            ("line_hard", &self.line_hard),
            ("ground_soft", &self.ground_soft),
            ("ground_normal", &self.ground_normal),
            ("ground_hard", &self.ground_hard),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DoublePlayConfig {
    pub shortstop: f64,
    pub second_base: f64,
    pub third_base: f64,
    /// Any other fielder.
    pub other: f64,
    /// Applied when second base is also occupied.
    pub runner_on_second_divisor: f64,
    /// Applied when second and third are both occupied.
    pub bases_loaded_divisor: f64,
}

impl DoublePlayConfig {
    pub fn base_prob(&self, fielder: Position) -> f64 {
        match fielder {
            Position::Shortstop => self.shortstop,
            Position::SecondBase => self.second_base,
            Position::ThirdBase => self.third_base,
            Position::Pitcher
            | Position::Catcher
            | Position::FirstBase
            | Position::LeftField
            | Position::CenterField
            | Position::RightField => self.other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BaserunningConfig {
    /// Runner on third holding on a soft infield single when not forced.
    pub third_holds_on_infield_single: f64,
    /// Runner on second holding on an infield single when not forced.
    pub second_holds_on_infield_single: f64,
    /// Runner on second stopping at third on an outfield single.
    pub second_stops_at_third_on_outfield_single: f64,
    /// Runner from first taking one base beyond the batter's total bases.
    pub first_extra_base_prob: f64,
    /// Runner on third tagging up on a caught fly, by distance.
    pub third_tag_up: DistanceTable,
    /// Runner on third tagging up on a line drive caught by an outfielder.
    pub third_tag_up_on_line_drive: f64,
    /// Runner on third breaking for home on a ground-ball out.
    pub third_scores_on_ground_out: f64,
    pub second_advance_on_normal_fly: f64,
    pub second_advance_on_deep_fly: f64,
    pub second_advance_on_line_drive: f64,
    pub second_advance_on_ground_ball: f64,
    /// Multiplier on second-base advances for fly balls and line drives.
    pub air_ball_tendency: BTreeMap<Position, f64>,
    /// Multiplier on second-base advances for ground balls.
    pub ground_ball_tendency: BTreeMap<Position, f64>,
    pub first_tag_up_on_deep_fly: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_innings: 9,
            home_advantage_pct: 1.0,
            pitch: PitchConfig::default(),
            batted_ball: BattedBallConfig::default(),
            fielding: FieldingConfig::default(),
            baserunning: BaserunningConfig::default(),
        }
    }
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            ball_weight: 1.0,
            strike_weight: 1.0,
            contact_weight: 1.0,
            swinging_prob: 0.5,
        }
    }
}

impl Default for BattedBallConfig {
    fn default() -> Self {
        Self { foul_prob: 0.25 }
    }
}

impl Default for FieldingConfig {
    fn default() -> Self {
        Self {
            hit_prob: 0.3,
            error_prob: 0.05,
            ground_outfield_prob: SpeedTable {
                soft: 0.0,
                normal: 0.2,
                hard: 0.4,
            },
            line_outfield_prob: SpeedTable {
                soft: 0.5,
                normal: 0.8,
                hard: 0.9,
            },
            total_bases: TotalBasesTable {
                fly_infield: [1.0, 0.0, 0.0, 0.0],
                fly_shallow: [1.0, 0.1, 0.01, 0.0],
                fly_normal: [0.2, 1.0, 0.1, 0.1],
                fly_deep: [0.0, 0.1, 0.1, 1.0],
                line_soft: [1.0, 0.1, 0.0, 0.0],
                line_normal: [0.2, 1.0, 0.01, 0.0],
                line_hard: [0.1, 1.0, 0.1, 0.01],
                ground_soft: [1.0, 0.01, 0.0, 0.0],
                ground_normal: [1.0, 0.02, 0.0, 0.0],
                ground_hard: [1.0, 0.03, 0.0, 0.0],
            },
            double_play: DoublePlayConfig {
                shortstop: 0.7,
                second_base: 0.5,
                third_base: 0.3,
                other: 0.2,
                runner_on_second_divisor: 2.0,
                bases_loaded_divisor: 3.0,
            },
        }
    }
}

impl Default for BaserunningConfig {
    fn default() -> Self {
        let air_ball_tendency = BTreeMap::from([
            (Position::Pitcher, 0.0),
            (Position::Catcher, 0.0),
            (Position::FirstBase, 0.0),
            (Position::SecondBase, 0.0),
            (Position::ThirdBase, 0.0),
            (Position::Shortstop, 0.0),
            (Position::LeftField, 0.5),
            (Position::CenterField, 1.0),
            (Position::RightField, 1.5),
        ]);
        let ground_ball_tendency = BTreeMap::from([
            (Position::Pitcher, 0.0),
            (Position::Catcher, 0.0),
            (Position::FirstBase, 1.5),
            (Position::SecondBase, 1.0),
            (Position::ThirdBase, 0.5),
            (Position::Shortstop, 0.5),
            (Position::LeftField, 0.5),
            (Position::CenterField, 1.0),
            (Position::RightField, 1.5),
        ]);

        Self {
            third_holds_on_infield_single: 0.5,
            second_holds_on_infield_single: 0.5,
            second_stops_at_third_on_outfield_single: 0.2,
            first_extra_base_prob: 0.1,
            third_tag_up: DistanceTable {
                infield: 0.0,
                shallow: 0.25,
                normal: 0.75,
                deep: 1.0,
            },
            third_tag_up_on_line_drive: 0.5,
            third_scores_on_ground_out: 0.5,
            second_advance_on_normal_fly: 0.25,
            second_advance_on_deep_fly: 0.5,
            second_advance_on_line_drive: 0.25,
            second_advance_on_ground_ball: 0.4,
            air_ball_tendency,
            ground_ball_tendency,
            first_tag_up_on_deep_fly: 0.05,
        }
    }
}

impl BaserunningConfig {
    pub fn air_tendency(&self, fielder: Position) -> f64 {
        self.air_ball_tendency.get(&fielder).copied().unwrap_or(0.0)
    }

    pub fn ground_tendency(&self, fielder: Position) -> f64 {
        self.ground_ball_tendency.get(&fielder).copied().unwrap_or(0.0)
    }
}

impl SimConfig {
    /// Parse a RON document and validate it.
    pub fn from_ron_str(text: &str) -> SimResult<Self> {
        let config: SimConfig =
            ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a RON config file from disk.
    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&text)
    }

    /// Check every probability and table. Lookups at play time assume this passed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_innings == 0 {
            return Err(ConfigError::NoInnings);
        }

        check_weights(
            "pitch",
            &[
                self.pitch.ball_weight,
                self.pitch.strike_weight,
                self.pitch.contact_weight,
            ],
        )?;
        for (name, row) in self.fielding.total_bases.rows() {
            check_weights(name, row)?;
        }

        let fielding = &self.fielding;
        let running = &self.baserunning;
        let probabilities = [
            ("pitch.swinging_prob", self.pitch.swinging_prob),
            ("batted_ball.foul_prob", self.batted_ball.foul_prob),
            ("fielding.hit_prob", fielding.hit_prob),
            ("fielding.error_prob", fielding.error_prob),
            ("fielding.ground_outfield_prob.soft", fielding.ground_outfield_prob.soft),
            ("fielding.ground_outfield_prob.normal", fielding.ground_outfield_prob.normal),
            ("fielding.ground_outfield_prob.hard", fielding.ground_outfield_prob.hard),
            ("fielding.line_outfield_prob.soft", fielding.line_outfield_prob.soft),
            ("fielding.line_outfield_prob.normal", fielding.line_outfield_prob.normal),
            ("fielding.line_outfield_prob.hard", fielding.line_outfield_prob.hard),
            ("fielding.double_play.shortstop", fielding.double_play.shortstop),
            ("fielding.double_play.second_base", fielding.double_play.second_base),
            ("fielding.double_play.third_base", fielding.double_play.third_base),
            ("fielding.double_play.other", fielding.double_play.other),
            ("baserunning.third_holds_on_infield_single", running.third_holds_on_infield_single),
            ("baserunning.second_holds_on_infield_single", running.second_holds_on_infield_single),
            (
                "baserunning.second_stops_at_third_on_outfield_single",
                running.second_stops_at_third_on_outfield_single,
            ),
            ("baserunning.first_extra_base_prob", running.first_extra_base_prob),
            ("baserunning.third_tag_up.infield", running.third_tag_up.infield),
            ("baserunning.third_tag_up.shallow", running.third_tag_up.shallow),
            ("baserunning.third_tag_up.normal", running.third_tag_up.normal),
            ("baserunning.third_tag_up.deep", running.third_tag_up.deep),
            ("baserunning.third_tag_up_on_line_drive", running.third_tag_up_on_line_drive),
            ("baserunning.third_scores_on_ground_out", running.third_scores_on_ground_out),
            ("baserunning.first_tag_up_on_deep_fly", running.first_tag_up_on_deep_fly),
        ];
        for (name, value) in probabilities {
            check_probability(name, value)?;
        }

        // A foul never ends the plate appearance.
        if self.pitch.ball_weight == 0.0
            && self.pitch.strike_weight == 0.0
            && self.batted_ball.foul_prob >= 1.0
        {
            return Err(ConfigError::EndlessPlateAppearance);
        }

        check_divisor(
            "fielding.double_play.runner_on_second_divisor",
            fielding.double_play.runner_on_second_divisor,
        )?;
        check_divisor(
            "fielding.double_play.bases_loaded_divisor",
            fielding.double_play.bases_loaded_divisor,
        )?;

        // Second-base advances multiply a base chance by a tendency, so the
        // product has to stay a probability for every fielder.
        let air_bases = [
            running.second_advance_on_normal_fly,
            running.second_advance_on_deep_fly,
            running.second_advance_on_line_drive,
        ];
        check_tendency_table(
            "baserunning.air_ball_tendency",
            &running.air_ball_tendency,
            &air_bases,
        )?;
        check_tendency_table(
            "baserunning.ground_ball_tendency",
            &running.ground_ball_tendency,
            &[running.second_advance_on_ground_ball],
        )?;

        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange {
            name: name.to_string(),
            value,
        })
    }
}

fn check_divisor(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < 1.0 {
        Err(ConfigError::InvalidWeights(name.to_string()))
    } else {
        Ok(())
    }
}

fn check_weights(name: &str, weights: &[f64]) -> Result<(), ConfigError> {
    let valid = weights.iter().all(|w| *w >= 0.0) && weights.iter().sum::<f64>() > 0.0;
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeights(name.to_string()))
    }
}

fn check_tendency_table(
    name: &str,
    table: &BTreeMap<Position, f64>,
    base_probs: &[f64],
) -> Result<(), ConfigError> {
    for position in Position::iter() {
        let tendency = table
            .get(&position)
            .copied()
            .ok_or_else(|| ConfigError::MissingTableEntry {
                table: name.to_string(),
                position,
            })?;
        for base in base_probs {
            check_probability(&format!("{name}[{position}]"), base * tendency)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_ron_overrides_keep_defaults() {
        let config = SimConfig::from_ron_str("(num_innings: 7, batted_ball: (foul_prob: 0.1))")
            .expect("partial config parses");

        assert_eq!(config.num_innings, 7);
        assert_eq!(config.batted_ball.foul_prob, 0.1);
        assert_eq!(config.fielding, FieldingConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let mut config = SimConfig::default();
        config.fielding.hit_prob = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_incomplete_tendency_table() {
        let mut config = SimConfig::default();
        config
            .baserunning
            .ground_ball_tendency
            .remove(&Position::Shortstop);

        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingTableEntry {
                table: "baserunning.ground_ball_tendency".to_string(),
                position: Position::Shortstop,
            })
        );
    }

    #[test]
    fn test_rejects_zero_innings_and_bad_weights() {
        let mut config = SimConfig::default();
        config.num_innings = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoInnings));

        let mut config = SimConfig::default();
        config.fielding.total_bases.fly_deep = [0.0; 4];
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeights("fly_deep".to_string()))
        );
    }

    #[test]
    fn test_rejects_contact_only_pitching_with_certain_fouls() {
        let mut config = SimConfig::default();
        config.pitch.ball_weight = 0.0;
        config.pitch.strike_weight = 0.0;
        config.batted_ball.foul_prob = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::EndlessPlateAppearance));

        // Any fair contact ends it again.
        config.batted_ball.foul_prob = 0.99;
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest::rstest]
    #[case(f64::NAN)]
    #[case(0.5)]
    fn test_rejects_bad_double_play_divisor(#[case] divisor: f64) {
        let mut config = SimConfig::default();
        config.fielding.double_play.bases_loaded_divisor = divisor;

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeights(
                "fielding.double_play.bases_loaded_divisor".to_string()
            ))
        );
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let result = SimConfig::from_ron_str("(num_innings: \"nine\")");
        assert!(matches!(
            result,
            Err(crate::errors::SimError::Config(ConfigError::Parse(_)))
        ));
    }
}
