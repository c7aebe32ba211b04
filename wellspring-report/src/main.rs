//! wellspring-report - Wellness dashboard CLI
//!
//! Loads a records snapshot and renders the dashboard report a web
//! handler would serve, either human-readable or as the JSON envelope.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;
use wellspring_core::analytics::{
    dashboard_report_scoped, envelope, mood_trends_report, DashboardReport, MoodTrendsReport,
};
use wellspring_core::types::RecordSet;
use wellspring_core::Config;

#[derive(Parser, Debug)]
#[command(name = "wellspring-report")]
#[command(about = "Wellness dashboard report")]
#[command(version)]
struct Args {
    /// Records snapshot to read (default: configured records path)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Lookback window in days (default: configured, 30)
    #[arg(long)]
    days: Option<u32>,

    /// Reference day, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    date: Option<String>,

    /// Show the mood-trends report instead of the full dashboard
    #[arg(long)]
    trends: bool,

    /// Export format (json = the {status, data} API envelope)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = wellspring_core::logging::init(&config.logging).ok();

    let input = args.input.unwrap_or_else(Config::records_path);
    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read records snapshot {}", input.display()))?;
    let records: RecordSet =
        serde_json::from_str(&content).context("failed to parse records snapshot")?;

    let today = match &args.date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("invalid --date, expected YYYY-MM-DD")?,
        None => Utc::now().date_naive(),
    };
    let days = args.days.unwrap_or(config.analytics.lookback_days);

    if args.trends {
        let report = mood_trends_report(&records.moods, today);
        match args.export.as_deref() {
            Some("json") => print_json(&report)?,
            Some(other) => anyhow::bail!("Unknown export format: {}. Use 'json'", other),
            None => print_trends(&report),
        }
        return Ok(());
    }

    let report = dashboard_report_scoped(&records, today, days);
    match args.export.as_deref() {
        Some("json") => print_json(&report)?,
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'json'", other),
        None => print_dashboard(&report, today, days),
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(&envelope(report))?;
    println!("{}", json);
    Ok(())
}

fn print_dashboard(report: &DashboardReport, today: NaiveDate, days: u32) {
    let title = format!("Wellness Dashboard: {} (last {} days)", today, days);

    println!();
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();

    let s = &report.summary;
    println!("SUMMARY");
    println!(
        "   Moods: {:<6} Journals: {:<6} Goals: {:<6} Habits: {}",
        s.total_moods, s.total_journals, s.total_goals, s.total_habits
    );
    println!(
        "   Average mood: {:<6} Words written: {:<8} Goals done: {}",
        s.average_mood, s.total_words, s.completed_goals
    );
    println!();

    println!("WEEKLY MOOD");
    for point in &report.weekly_mood {
        if point.mood > 0.0 {
            println!(
                "   {:<8} mood {:<4} intensity {:<4} energy {:<4} stress {}",
                point.label, point.mood, point.intensity, point.energy, point.stress
            );
        } else {
            println!("   {:<8} no entries", point.label);
        }
    }
    println!();

    println!("MOOD DISTRIBUTION");
    for bucket in &report.mood_distribution {
        println!(
            "   {:<10} {:>3}  ({:>3}%)",
            bucket.category, bucket.count, bucket.percentage
        );
    }
    println!();

    if !report.habit_stats.is_empty() {
        println!("HABITS");
        for habit in &report.habit_stats {
            println!(
                "   {:<20} streak {:<4} best {:<4} 30-day rate {}%",
                habit.name, habit.current_streak, habit.longest_streak,
                habit.recent_completion_rate
            );
        }
        println!();
    }

    if !report.insights.is_empty() {
        println!("INSIGHTS");
        for insight in &report.insights {
            println!("   [{}] {}", insight.importance.as_str(), insight.title);
            println!("       {}", insight.description);
        }
        println!();
    }
}

fn print_trends(report: &MoodTrendsReport) {
    println!();
    println!("Mood Trends ({} entries)", report.total_entries);
    println!();

    println!(
        "   Trend: {} (change {:+.2})",
        report.trend.trend.as_str(),
        report.trend.change
    );
    println!();

    println!("WEEKLY");
    for point in &report.weekly {
        println!("   {:<8} mood {}", point.label, point.mood);
    }
    println!();

    println!("DISTRIBUTION");
    for bucket in &report.distribution {
        println!(
            "   {:<10} {:>3}  ({:>3}%)",
            bucket.category, bucket.count, bucket.percentage
        );
    }
    println!();
}
