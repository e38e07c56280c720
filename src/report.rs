//! Plain-text rendering of finished games for the command line.

use crate::game::events::{ordinal, GameEvent, PlayerNames};
use crate::game::engine::{GameResult, PlayerBox, TeamBox};
use crate::game::state::HalfInning;
use crate::team::{AWAY, HOME};
use schema::StatKind;
use std::fmt::Write;

/// Team order on a printed scoreboard: visitors on top.
const SCOREBOARD_ORDER: [usize; 2] = [AWAY, HOME];

const NAME_WIDTH: usize = 24;

fn pad_name(name: &str) -> String {
    let mut shown: String = name.chars().take(NAME_WIDTH).collect();
    while shown.chars().count() < NAME_WIDTH {
        shown.push(' ');
    }
    shown
}

/// Runs by inning with R/H/E totals.
///
/// A half-inning the home team never batted is shown as `x`.
pub fn line_score(result: &GameResult) -> String {
    let innings = result
        .teams
        .iter()
        .map(|team| team.runs_by_inning.len())
        .max()
        .unwrap_or(0);

    let mut output = pad_name("");
    for inning in 1..=innings {
        let _ = write!(output, "{:>3}", inning);
    }
    output.push_str("  |  R  H  E\n");

    for index in SCOREBOARD_ORDER {
        let team = &result.teams[index];
        output.push_str(&pad_name(&team.name));
        for inning in 0..innings {
            match team.runs_by_inning.get(inning) {
                Some(runs) => {
                    let _ = write!(output, "{:>3}", runs);
                }
                None => output.push_str("  x"),
            }
        }
        let _ = writeln!(
            output,
            "  |{:>3}{:>3}{:>3}",
            team.stats.get(StatKind::Points),
            team.stats.get(StatKind::Hits),
            team.stats.get(StatKind::Errors),
        );
    }
    output
}

fn batters(team: &TeamBox) -> Vec<&PlayerBox> {
    let mut batters: Vec<&PlayerBox> = team
        .players
        .iter()
        .filter(|p| p.lineup_slot.is_some())
        .collect();
    batters.sort_by_key(|p| p.lineup_slot);
    batters
}

/// Batting counters for everyone in the batting order, in order.
pub fn batting_lines(team: &TeamBox) -> String {
    const COLUMNS: [StatKind; 8] = [
        StatKind::AtBats,
        StatKind::Runs,
        StatKind::Hits,
        StatKind::Doubles,
        StatKind::Triples,
        StatKind::HomeRuns,
        StatKind::RunsBattedIn,
        StatKind::Walks,
    ];

    let mut output = pad_name(&team.name);
    for stat in COLUMNS {
        let _ = write!(output, "{:>5}", stat.to_string());
    }
    let _ = writeln!(output, "{:>5}", StatKind::Strikeouts.to_string());

    for player in batters(team) {
        let label = match player.position {
            Some(position) => format!("{} {}", player.name, position),
            None => player.name.clone(),
        };
        output.push_str(&pad_name(&label));
        for stat in COLUMNS {
            let _ = write!(output, "{:>5}", player.stats.get(stat));
        }
        let _ = writeln!(output, "{:>5}", player.stats.get(StatKind::Strikeouts));
    }
    output
}

/// Innings pitched in the usual `6.2` notation (thirds of an inning after the dot).
pub fn innings_pitched(outs: u32) -> String {
    format!("{}.{}", outs / 3, outs % 3)
}

/// IP H R BB SO HR PC and end-of-game fatigue for everyone who pitched.
pub fn pitching_lines(team: &TeamBox) -> String {
    let mut output = pad_name(&team.name);
    output.push_str("   IP    H    R   BB   SO   HR   PC  FAT\n");

    for player in team
        .players
        .iter()
        .filter(|p| p.stats.get(StatKind::GamesPitched) > 0)
    {
        let s = &player.stats;
        let _ = writeln!(
            output,
            "{}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5.2}",
            pad_name(&player.name),
            innings_pitched(s.get(StatKind::OutsRecorded)),
            s.get(StatKind::HitsAllowed),
            s.get(StatKind::RunsAllowed),
            s.get(StatKind::WalksAllowed),
            s.get(StatKind::StrikeoutsPitched),
            s.get(StatKind::HomeRunsAllowed),
            s.get(StatKind::PitchCount),
            player.fatigue,
        );
    }
    output
}

fn half_header(half: HalfInning, inning: u32, names: &PlayerNames) -> String {
    format!(
        "--- {} of the {} ({} batting) ---",
        half,
        ordinal(inning),
        names.team(half.offense())
    )
}

/// The play-by-play, with a header at the start of every half-inning.
pub fn narrative(result: &GameResult) -> Vec<String> {
    let names = result.names();
    let mut lines = Vec::new();
    let mut inning = 1;
    let mut half = HalfInning::Top;
    let mut needs_header = true;

    for event in &result.events {
        if needs_header && matches!(event, GameEvent::PlateAppearance { .. }) {
            lines.push(half_header(half, inning, &names));
            needs_header = false;
        }
        if let Some(text) = event.format(&names) {
            lines.push(text);
        }
        match event {
            GameEvent::SideOver { .. } => {
                half = HalfInning::Bottom;
                needs_header = true;
            }
            GameEvent::InningOver { .. } => {
                inning += 1;
                half = HalfInning::Top;
                needs_header = true;
            }
            _ => {}
        }
    }
    lines
}

/// One line per run-scoring play with the score after it.
pub fn scoring_summary(result: &GameResult) -> String {
    let names = result.names();
    let mut output = String::new();

    for play in &result.scoring_summary {
        let description = play.event.format(&names).unwrap_or_default();
        let _ = writeln!(
            output,
            "{} {}: {} ({} {}, {} {})",
            play.half,
            ordinal(play.inning),
            description,
            names.team(AWAY),
            play.score[AWAY],
            names.team(HOME),
            play.score[HOME],
        );
    }
    output
}

/// Line score, scoring plays and both teams' batting and pitching lines.
pub fn box_score(result: &GameResult) -> String {
    let mut output = line_score(result);

    if !result.scoring_summary.is_empty() {
        output.push_str("\nScoring\n");
        output.push_str(&scoring_summary(result));
    }
    for index in SCOREBOARD_ORDER {
        output.push('\n');
        output.push_str(&batting_lines(&result.teams[index]));
    }
    for index in SCOREBOARD_ORDER {
        output.push('\n');
        output.push_str(&pitching_lines(&result.teams[index]));
    }
    if result.overtimes > 0 {
        let _ = writeln!(output, "\nExtra innings: {}", result.overtimes);
    }
    output
}
