//! Time-bucketed mood views
//!
//! The weekly series buckets moods by exact calendar day over the 7
//! days ending at the reference day. The distribution counts entries
//! per mood category. The trend compares the mean of the 7 most
//! recent entries against the 7 before them.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{round1, round2};
use crate::types::{MoodEntry, MoodKind};

/// Number of daily points in the weekly series.
pub const WEEKLY_SERIES_DAYS: usize = 7;

/// Trend classification threshold on the ordinal mood scale.
///
/// A change of exactly +/-0.3 classifies as stable; the comparison is
/// strict.
pub const TREND_THRESHOLD: f64 = 0.3;

/// Minimum entry count before a trend can be computed.
const TREND_MIN_ENTRIES: usize = 14;

/// One day of the weekly mood series.
///
/// All four values are 0 when no entries were logged that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMoodPoint {
    /// Short month/day label, e.g. "Jan 5"
    pub label: String,
    /// Mean ordinal mood, 1 decimal
    pub mood: f64,
    /// Mean intensity, 1 decimal
    pub intensity: f64,
    /// Mean energy, 1 decimal
    pub energy: f64,
    /// Mean stress, 1 decimal
    pub stress: f64,
}

/// Build the 7-day mood series ending at `today`, oldest point first.
pub fn weekly_mood_series(moods: &[MoodEntry], today: NaiveDate) -> Vec<WeeklyMoodPoint> {
    (0..WEEKLY_SERIES_DAYS as i64)
        .rev()
        .map(|offset| {
            let target = today - Duration::days(offset);
            let day_moods: Vec<&MoodEntry> = moods.iter().filter(|m| m.date == target).collect();
            let label = target.format("%b %-d").to_string();

            if day_moods.is_empty() {
                return WeeklyMoodPoint {
                    label,
                    mood: 0.0,
                    intensity: 0.0,
                    energy: 0.0,
                    stress: 0.0,
                };
            }

            let count = day_moods.len() as f64;
            let sum_of = |f: &dyn Fn(&MoodEntry) -> u8| -> f64 {
                day_moods.iter().map(|m| f64::from(f(m))).sum()
            };

            WeeklyMoodPoint {
                label,
                mood: round1(sum_of(&|m| m.kind.ordinal()) / count),
                intensity: round1(sum_of(&|m| m.intensity) / count),
                energy: round1(sum_of(&|m| m.energy_or_default()) / count),
                stress: round1(sum_of(&|m| m.stress_or_default()) / count),
            }
        })
        .collect()
}

/// One bucket of the mood distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodBucket {
    /// Capitalized category label
    pub category: &'static str,
    /// Number of entries in this category
    pub count: usize,
    /// Rounded share of the full input, 0-100
    pub percentage: u8,
}

/// Count entries per mood category, in fixed display order.
///
/// Percentages are rounded independently per bucket and are not
/// forced to sum to 100. Zero-count buckets are included.
pub fn mood_distribution(moods: &[MoodEntry]) -> Vec<MoodBucket> {
    let total = moods.len();

    MoodKind::ALL
        .into_iter()
        .map(|kind| {
            let count = moods.iter().filter(|m| m.kind == kind).count();
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u8
            };

            MoodBucket {
                category: kind.display_label(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Direction of the recent mood trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    InsufficientData,
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::InsufficientData => "insufficient_data",
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

/// Week-over-week mood trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodTrend {
    pub trend: Trend,
    /// Recent-week mean minus previous-week mean, 2 decimals
    pub change: f64,
}

fn mean_ordinal(moods: &[MoodEntry]) -> f64 {
    let total: u32 = moods.iter().map(|m| u32::from(m.kind.ordinal())).sum();
    f64::from(total) / moods.len() as f64
}

/// Classify the week-over-week trend of a mood collection.
///
/// `moods` must be ordered oldest-first; the last 7 entries form the
/// recent week and the 7 before them the previous week.
pub fn mood_trend(moods: &[MoodEntry]) -> MoodTrend {
    if moods.len() < TREND_MIN_ENTRIES {
        return MoodTrend {
            trend: Trend::InsufficientData,
            change: 0.0,
        };
    }

    let recent = &moods[moods.len() - 7..];
    let previous = &moods[moods.len() - 14..moods.len() - 7];

    let change = round2(mean_ordinal(recent) - mean_ordinal(previous));

    let trend = if change > TREND_THRESHOLD {
        Trend::Improving
    } else if change < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };

    MoodTrend { trend, change }
}
