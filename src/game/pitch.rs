use crate::config::PitchConfig;
use crate::errors::SimResult;
use crate::game::rng::GameRng;

/// What a single pitch turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchResult {
    Ball,
    Strike,
    Contact,
}

const PITCH_RESULTS: [PitchResult; 3] =
    [PitchResult::Ball, PitchResult::Strike, PitchResult::Contact];

pub fn draw_pitch(config: &PitchConfig, rng: &mut GameRng) -> SimResult<PitchResult> {
    let weights = [
        config.ball_weight,
        config.strike_weight,
        config.contact_weight,
    ];
    let index = rng.weighted_index(&weights, "pitch result")?;
    Ok(PITCH_RESULTS[index])
}

/// Swinging (true) or called (false), for strikes and strikeouts alike.
pub fn draw_swinging(config: &PitchConfig, rng: &mut GameRng) -> SimResult<bool> {
    rng.chance(config.swinging_prob, "swinging strike")
}
