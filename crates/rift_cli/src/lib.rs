//! Input loading and text rendering for the `rift` command line runner.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use rift_core::data;
use rift_core::models::{format_clock, SeriesResult, SetResult};
use rift_core::{simulate_round, ChampionCatalog, EngineConfig, InMemoryRosters, SimOptions};

/// Everything a simulation needs besides the seed and options.
pub struct Inputs {
    pub catalog: ChampionCatalog,
    pub rosters: InMemoryRosters,
    pub config: EngineConfig,
}

/// Load files when given, otherwise fall back to the embedded sample data.
pub fn load_inputs(catalog: Option<&Path>, rosters: Option<&Path>, config: Option<&Path>) -> Result<Inputs> {
    let catalog = match catalog {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChampionCatalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => data::champion_catalog().context("loading embedded champion catalog")?.clone(),
    };

    let rosters = match rosters {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            InMemoryRosters::from_json(&json).with_context(|| format!("parsing rosters {}", path.display()))?
        }
        None => data::sample_rosters().context("loading embedded rosters")?.clone(),
    };

    let config = match config {
        Some(path) => {
            let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            EngineConfig::from_str_with_path(&content, path)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    config.validate().context("invalid engine config")?;

    tracing::debug!("loaded {} champions", catalog.len());
    Ok(Inputs { catalog, rosters, config })
}

pub fn render_set(set: &SetResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Set {}: {} (blue) vs {} (red) ===\n", set.set_number, set.blue_team, set.red_team));
    for line in &set.draft_log {
        out.push_str(line);
        out.push('\n');
    }
    if !set.is_played() {
        out.push_str(&set.summary);
        out.push('\n');
        return out;
    }
    out.push('\n');
    for line in &set.event_log {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{}\nKills {}-{}  Gold {}-{}  Duration {}\n",
        set.summary,
        set.kills.a,
        set.kills.b,
        set.gold.a,
        set.gold.b,
        format_clock(set.duration_seconds)
    ));
    for line in set.player_lines.a.iter().chain(&set.player_lines.b) {
        out.push_str(&format!(
            "  {:<16} {:<4} {:<14} {:>9}  lv{:<2} {:>6}g\n",
            line.name,
            line.role.code(),
            line.champion,
            line.kda_string(),
            line.level,
            line.gold
        ));
    }
    if let Some(pog) = &set.pog_player {
        out.push_str(&format!("POG: {} ({}) {:.1}\n", pog.player, pog.team, pog.score));
    }
    out
}

pub fn render_series(series: &SeriesResult) -> String {
    let mut out = String::new();
    for set in &series.sets {
        out.push_str(&render_set(set));
        out.push('\n');
    }
    match &series.winner {
        Some(winner) => out.push_str(&format!(
            "{} vs {}: {} wins {}\n",
            series.team_a, series.team_b, winner, series.score_string
        )),
        None => out.push_str(&format!(
            "{} vs {}: no winner ({})\n",
            series.team_a,
            series.team_b,
            series.aborted.as_deref().unwrap_or("unfinished")
        )),
    }
    if let Some(mvp) = &series.series_mvp {
        out.push_str(&format!("Player of the Series: {} ({}, {})\n", mvp.player, mvp.team, mvp.role));
    }
    if !series.fearless_bans.is_empty() {
        out.push_str(&format!("Fearless: {}\n", series.fearless_bans.join(", ")));
    }
    out
}

/// Aggregate of many series between the same two teams.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub team_a: String,
    pub team_b: String,
    pub runs: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub aborted: usize,
    pub a_win_rate: f32,
    pub avg_sets: f32,
    pub avg_set_minutes: f32,
}

/// Play `runs` series in parallel and summarize the results.
pub fn balance(inputs: &Inputs, team_a: &str, team_b: &str, runs: usize, options: &SimOptions, seed: u64) -> Result<BalanceReport> {
    if runs == 0 {
        bail!("runs must be positive");
    }
    let fixtures = vec![(team_a.to_string(), team_b.to_string()); runs];
    let results = simulate_round(&inputs.catalog, &inputs.rosters, &inputs.config, &fixtures, options, seed);

    let a_wins = results.iter().filter(|r| r.winner.as_deref() == Some(team_a)).count();
    let b_wins = results.iter().filter(|r| r.winner.as_deref() == Some(team_b)).count();
    let aborted = results.iter().filter(|r| r.aborted.is_some()).count();
    let played: Vec<&SetResult> = results.iter().flat_map(|r| r.sets.iter()).filter(|s| s.is_played()).collect();
    let decided = (a_wins + b_wins).max(1);

    Ok(BalanceReport {
        team_a: team_a.to_string(),
        team_b: team_b.to_string(),
        runs,
        a_wins,
        b_wins,
        aborted,
        a_win_rate: a_wins as f32 / decided as f32,
        avg_sets: played.len() as f32 / runs as f32,
        avg_set_minutes: played.iter().map(|s| s.duration_seconds as f32 / 60.0).sum::<f32>() / played.len().max(1) as f32,
    })
}

pub fn render_balance(report: &BalanceReport) -> String {
    format!(
        "{} vs {} over {} series\n  {} wins: {} ({:.1}%)\n  {} wins: {}\n  aborted: {}\n  avg sets: {:.2}  avg set length: {:.1} min\n",
        report.team_a,
        report.team_b,
        report.runs,
        report.team_a,
        report.a_wins,
        report.a_win_rate * 100.0,
        report.team_b,
        report.b_wins,
        report.aborted,
        report.avg_sets,
        report.avg_set_minutes
    )
}
