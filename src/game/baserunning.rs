use crate::config::BaserunningConfig;
use crate::errors::SimResult;
use crate::game::play::{BallInPlay, PlayOutcome, RunnerMovement};
use crate::game::rng::GameRng;
use crate::game::state::{Base, Bases, HOME_PLATE};
use crate::player::PlayerId;
use schema::{Distance, Position, Speed};

const OUTS_PER_SIDE: u8 = 3;

/// Where everybody ended up after a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    pub bases: Bases,
    /// Runners whose base changed, lead runner first.
    pub movements: Vec<RunnerMovement>,
    /// Runners who crossed the plate, then the batter if he did.
    pub runs: Vec<PlayerId>,
    /// Runners retired on the bases (the batter's own out is not included).
    pub outs_on_bases: u8,
}

/// Base a runner on slot `index` moves to when he goes up one.
fn next_base(index: usize) -> u8 {
    index as u8 + 2
}

/// Base number to slot, for bases 1-3.
fn slot(base: u8) -> Option<Base> {
    match base {
        1 => Some(Base::First),
        2 => Some(Base::Second),
        3 => Some(Base::Third),
        _ => None,
    }
}

/// Tracks bases taken by runners already processed on this play.
struct Destinations {
    bases: Bases,
    movements: Vec<RunnerMovement>,
    runs: Vec<PlayerId>,
}

impl Destinations {
    fn new() -> Self {
        Self {
            bases: Bases::empty(),
            movements: Vec::new(),
            runs: Vec::new(),
        }
    }

    fn is_blocked(&self, base: u8) -> bool {
        slot(base).is_some_and(|b| self.bases.is_occupied(b))
    }

    fn place(&mut self, runner: PlayerId, from: u8, to: u8, out: bool) {
        if from != to {
            self.movements.push(RunnerMovement {
                runner,
                from,
                to,
                out,
            });
        }
        if out {
            return;
        }
        match slot(to) {
            Some(base) => self.bases.set(base, Some(runner)),
            None => self.runs.push(runner),
        }
    }

    fn place_batter(&mut self, batter: PlayerId, to: u8) {
        match slot(to) {
            Some(base) => self.bases.set(base, Some(batter)),
            None => self.runs.push(batter),
        }
    }

    fn finish(self, outs_on_bases: u8) -> Advancement {
        Advancement {
            bases: self.bases,
            movements: self.movements,
            runs: self.runs,
            outs_on_bases,
        }
    }
}

/// Ball four: the batter takes first and only forced runners move up.
pub fn advance_on_walk(bases: &Bases, batter: PlayerId) -> Advancement {
    let mut dest = Destinations::new();

    let first = bases.occupant(Base::First);
    let second = bases.occupant(Base::Second);
    let third = bases.occupant(Base::Third);
    let forced_from_second = first.is_some() && second.is_some();
    let forced_from_third = forced_from_second && third.is_some();

    if let Some(runner) = third {
        let to = if forced_from_third { HOME_PLATE } else { 3 };
        dest.place(runner, 3, to, false);
    }
    if let Some(runner) = second {
        let to = if forced_from_second { 3 } else { 2 };
        dest.place(runner, 2, to, false);
    }
    if let Some(runner) = first {
        dest.place(runner, 1, 2, false);
    }
    dest.place_batter(batter, 1);
    dest.finish(0)
}

/// Context shared by every runner decision on one ball in play.
pub struct PlayContext<'a> {
    pub ball: &'a BallInPlay,
    pub fielder: Position,
    pub outcome: PlayOutcome,
    pub outs_before: u8,
    pub config: &'a BaserunningConfig,
}

/// Move runners and place the batter after a ball in play.
///
/// Runners are handled from third to first so that a runner who stays put
/// blocks everyone behind him.
pub fn advance_on_play(
    bases: &Bases,
    batter: PlayerId,
    ctx: &PlayContext,
    rng: &mut GameRng,
) -> SimResult<Advancement> {
    let retired = ctx.outcome.retired_runner();
    let outs_on_bases = u8::from(retired.is_some());

    // The side is retired: the forced runner is out and nobody else moves.
    if ctx.outs_before + ctx.outcome.outs_recorded() >= OUTS_PER_SIDE {
        let mut dest = Destinations::new();
        for base in [Base::Third, Base::Second, Base::First] {
            if let Some(runner) = bases.occupant(base) {
                let out = retired == Some(base);
                let to = if out { base.number() + 1 } else { base.number() };
                dest.place(runner, base.number(), to, out);
            }
        }
        return Ok(dest.finish(outs_on_bases));
    }

    let mut dest = Destinations::new();
    for base in [Base::Third, Base::Second, Base::First] {
        let Some(runner) = bases.occupant(base) else {
            continue;
        };
        let from = base.number();

        if retired == Some(base) {
            dest.place(runner, from, from + 1, true);
            continue;
        }

        let to = match ctx.outcome {
            PlayOutcome::Hit { bases: total } | PlayOutcome::Error { bases: total, .. } => {
                on_hit(base, total, bases, &dest, ctx, rng)?
            }
            PlayOutcome::FlyOut
            | PlayOutcome::ThrowOut
            | PlayOutcome::FieldersChoice { .. }
            | PlayOutcome::DoublePlay { .. } => on_out(base, &dest, ctx, rng)?,
            PlayOutcome::Walk | PlayOutcome::Strikeout => from,
        };
        dest.place(runner, from, to, false);
    }

    match ctx.outcome {
        PlayOutcome::Hit { bases: total } | PlayOutcome::Error { bases: total, .. } => {
            dest.place_batter(batter, total.min(HOME_PLATE));
        }
        PlayOutcome::FieldersChoice { .. } => dest.place_batter(batter, 1),
        _ => {}
    }

    Ok(dest.finish(outs_on_bases))
}

/// A runner is forced when every base behind him is occupied.
fn is_forced(base: Base, bases: &Bases) -> bool {
    match base {
        Base::First => true,
        Base::Second => bases.is_occupied(Base::First),
        Base::Third => bases.is_occupied(Base::First) && bases.is_occupied(Base::Second),
    }
}

fn on_hit(
    base: Base,
    total: u8,
    bases: &Bases,
    dest: &Destinations,
    ctx: &PlayContext,
    rng: &mut GameRng,
) -> SimResult<u8> {
    let config = ctx.config;
    let forced = is_forced(base, bases);
    let infield = ctx.fielder.is_infield();

    let to = match base {
        Base::Third if total >= 2 => HOME_PLATE,
        Base::Third => {
            let soft_grounder = matches!(
                ctx.ball,
                BallInPlay::Ground {
                    speed: Speed::Soft,
                    ..
                }
            );
            if soft_grounder
                && infield
                && !forced
                && rng.chance(config.third_holds_on_infield_single, "runner on third holds")?
            {
                3
            } else {
                HOME_PLATE
            }
        }
        Base::Second if total >= 2 => HOME_PLATE,
        Base::Second if dest.is_blocked(3) => 2,
        Base::Second if infield => {
            if !forced
                && rng.chance(config.second_holds_on_infield_single, "runner on second holds")?
            {
                2
            } else {
                3
            }
        }
        Base::Second => {
            if rng.chance(
                config.second_stops_at_third_on_outfield_single,
                "runner on second stops at third",
            )? {
                3
            } else {
                HOME_PLATE
            }
        }
        Base::First => {
            let to = (1 + total).min(HOME_PLATE);
            if to < HOME_PLATE
                && !dest.is_blocked(to + 1)
                && rng.chance(config.first_extra_base_prob, "runner from first takes extra base")?
            {
                to + 1
            } else {
                to
            }
        }
    };

    Ok(to)
}

fn on_out(base: Base, dest: &Destinations, ctx: &PlayContext, rng: &mut GameRng) -> SimResult<u8> {
    let from = base.number();
    let next = next_base(base.index());
    if dest.is_blocked(next) {
        return Ok(from);
    }

    let config = ctx.config;
    let fielder = ctx.fielder;
    let advance = match (base, *ctx.ball) {
        (Base::Third, BallInPlay::Fly { distance, .. }) => {
            rng.chance(config.third_tag_up.get(distance), "runner on third tags up")?
        }
        (Base::Third, BallInPlay::Line { .. }) => {
            fielder.is_outfield()
                && rng.chance(config.third_tag_up_on_line_drive, "runner on third tags up")?
        }
        (Base::Third, BallInPlay::Ground { .. }) => {
            rng.chance(config.third_scores_on_ground_out, "runner on third breaks for home")?
        }
        (Base::Second, BallInPlay::Fly { distance, .. }) => {
            let base_prob = match distance {
                Distance::Normal => Some(config.second_advance_on_normal_fly),
                Distance::Deep => Some(config.second_advance_on_deep_fly),
                Distance::Infield | Distance::Shallow => None,
            };
            match base_prob {
                Some(p) => rng.chance(
                    p * config.air_tendency(fielder),
                    "runner on second advances on fly",
                )?,
                None => false,
            }
        }
        (Base::Second, BallInPlay::Line { .. }) => rng.chance(
            config.second_advance_on_line_drive * config.air_tendency(fielder),
            "runner on second advances on line drive",
        )?,
        (Base::Second, BallInPlay::Ground { .. }) => rng.chance(
            config.second_advance_on_ground_ball * config.ground_tendency(fielder),
            "runner on second advances on ground ball",
        )?,
        (
            Base::First,
            BallInPlay::Fly {
                distance: Distance::Deep,
                ..
            },
        ) => rng.chance(config.first_tag_up_on_deep_fly, "runner on first tags up")?,
        (Base::First, _) => false,
    };

    Ok(if advance { next } else { from })
}
