use baseball_sim::config::SimConfig;
use baseball_sim::game::{GameRng, GameSim, SimOptions};
use baseball_sim::prefab_teams::{demo_matchup, Matchup};
use baseball_sim::{report, simulate_batch};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "baseball-sim", version)]
#[command(about = "Pitch-by-pitch baseball game simulation")]
struct Cli {
    /// More output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Calibration constants (RON). Defaults are used when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Home and away teams (RON `Matchup`). Two demo teams when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    teams: Option<PathBuf>,

    /// Override the scheduled number of innings
    #[arg(long, global = true)]
    innings: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one game and print the box score
    Play {
        /// Random seed; the same seed replays the same game
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Multiplier on the league home-field advantage
        #[arg(long, default_value_t = 1.0)]
        home_field: f64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip the play-by-play
        #[arg(short, long)]
        quiet: bool,
    },

    /// Simulate many games in parallel and print aggregate results
    Batch {
        /// Number of games
        #[arg(short, long, default_value_t = 1000)]
        games: usize,

        /// Seed of the first game; game i uses seed-start + i
        #[arg(long, default_value_t = 0)]
        seed_start: u64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>, innings: Option<u32>) -> Result<SimConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(innings) = innings {
        config.num_innings = innings;
        config.validate()?;
    }
    Ok(config)
}

fn load_matchup(path: Option<&Path>) -> Result<Matchup, Box<dyn Error>> {
    Ok(match path {
        Some(path) => Matchup::load(path)?,
        None => demo_matchup(),
    })
}

fn play(
    config: &SimConfig,
    matchup: Matchup,
    seed: u64,
    home_field: f64,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), Box<dyn Error>> {
    let options = SimOptions {
        home_field_factor: home_field,
        log_events: format == OutputFormat::Json || !quiet,
    };
    let sim = GameSim::new(
        matchup.home,
        matchup.away,
        config,
        GameRng::seeded(seed),
        options,
    )?;
    let result = sim.run()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if !quiet {
                for line in report::narrative(&result) {
                    println!("{}", line);
                }
                println!();
            }
            print!("{}", report::box_score(&result));
        }
    }
    Ok(())
}

fn batch(
    config: &SimConfig,
    matchup: &Matchup,
    games: usize,
    seed_start: u64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let summary = simulate_batch(&matchup.home, &matchup.away, config, games, seed_start)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!("Games played:      {}", summary.games);
            println!("{} wins: {}", matchup.home.name, summary.home_wins);
            println!("{} wins: {}", matchup.away.name, summary.away_wins);
            println!(
                "Runs per game:     {:.2} - {:.2}",
                summary.mean_runs[0], summary.mean_runs[1]
            );
            println!("Extra-inning games: {}", summary.extra_inning_games);
            println!("Longest game:      {} extra innings", summary.max_overtimes);
            println!("Elapsed:           {} ms", summary.elapsed_ms);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref(), cli.innings)?;
    let matchup = load_matchup(cli.teams.as_deref())?;

    match cli.command {
        Commands::Play {
            seed,
            home_field,
            format,
            quiet,
        } => play(&config, matchup, seed, home_field, format, quiet),
        Commands::Batch {
            games,
            seed_start,
            format,
        } => batch(&config, &matchup, games, seed_start, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
