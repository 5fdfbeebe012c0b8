//! Rift CLI
//!
//! 시리즈 / 단일 세트 시뮬레이션과 밸런스 리포트

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rift_cli::{balance, load_inputs, render_balance, render_series, render_set};
use rift_core::models::Side;
use rift_core::{Difficulty, MatchOrchestrator, RosterProvider, SeriesFormat, SimOptions};

#[derive(Parser)]
#[command(name = "rift")]
#[command(about = "Simulate 5v5 esports drafts, sets and series", long_about = None)]
struct Cli {
    /// Champion catalog JSON (defaults to the embedded catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Team rosters JSON (defaults to the embedded sample rosters)
    #[arg(long, global = true)]
    rosters: Option<PathBuf>,

    /// Engine config override (.json / .yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of the rendered log
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Bo3,
    Bo5,
}

impl From<FormatArg> for SeriesFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Bo3 => SeriesFormat::Bo3,
            FormatArg::Bo5 => SeriesFormat::Bo5,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Normal,
    Hard,
    Insane,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Insane => Difficulty::Insane,
        }
    }
}

#[derive(clap::Args)]
struct MatchArgs {
    /// RNG seed
    #[arg(long, default_value = "0")]
    seed: u64,

    #[arg(long, value_enum, default_value = "normal")]
    difficulty: DifficultyArg,

    /// Team the difficulty applies to
    #[arg(long)]
    player_team: Option<String>,

    /// Champions locked before the first set (repeatable)
    #[arg(long = "lock")]
    locked: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full BO3 / BO5 series
    Series {
        team_a: String,
        team_b: String,

        #[arg(long, value_enum, default_value = "bo3")]
        format: FormatArg,

        #[command(flatten)]
        args: MatchArgs,
    },

    /// Play a single set (first team on blue side)
    Set {
        blue: String,
        red: String,

        #[command(flatten)]
        args: MatchArgs,
    },

    /// Run many series and report win rates
    Balance {
        team_a: String,
        team_b: String,

        #[arg(long, default_value = "200")]
        runs: usize,

        #[arg(long, value_enum, default_value = "bo3")]
        format: FormatArg,

        #[command(flatten)]
        args: MatchArgs,
    },
}

fn options(args: &MatchArgs, format: FormatArg) -> SimOptions {
    SimOptions {
        difficulty: args.difficulty.into(),
        player_team: args.player_team.clone(),
        series_format: format.into(),
        fearless_bans: args.locked.clone(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let inputs = load_inputs(cli.catalog.as_deref(), cli.rosters.as_deref(), cli.config.as_deref())?;
    let orchestrator = MatchOrchestrator::new(&inputs.catalog, &inputs.rosters, &inputs.config);

    match cli.command {
        Commands::Series { team_a, team_b, format, args } => {
            if team_a == team_b {
                bail!("a team cannot play itself: {team_a}");
            }
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let result = orchestrator.play_series(&mut rng, &team_a, &team_b, &options(&args, format));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result).context("serializing series")?);
            } else {
                print!("{}", render_series(&result));
            }
        }

        Commands::Set { blue, red, args } => {
            if blue == red {
                bail!("a team cannot play itself: {blue}");
            }
            let options = options(&args, FormatArg::Bo3);
            let blue = inputs.rosters.roster(&blue);
            let red = inputs.rosters.roster(&red);
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let result =
                orchestrator.play_set(&mut rng, 1, &blue, &red, Side::Blue, &options, &options.fearless_bans);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result).context("serializing set")?);
            } else {
                print!("{}", render_set(&result));
            }
        }

        Commands::Balance { team_a, team_b, runs, format, args } => {
            if team_a == team_b {
                bail!("a team cannot play itself: {team_a}");
            }
            let report = balance(&inputs, &team_a, &team_b, runs, &options(&args, format), args.seed)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).context("serializing report")?);
            } else {
                print!("{}", render_balance(&report));
            }
        }
    }

    Ok(())
}
